//! Griewank test function

use ndarray::Array1;

/// Griewank function - multimodal, challenging for large dimensions
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    1.0 + sum_squares / 4000.0 - product_cos
}

/// Analytic gradient of [`griewank`]
///
/// Each component carries the product of the cosines of all other coordinates.
pub fn griewank_gradient(x: &Array1<f64>) -> Array1<f64> {
    let scales: Vec<f64> = (1..=x.len()).map(|i| (i as f64).sqrt()).collect();
    Array1::from_shape_fn(x.len(), |i| {
        let others: f64 = x
            .iter()
            .zip(&scales)
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, (&xj, &sj))| (xj / sj).cos())
            .product();
        x[i] / 2000.0 + (x[i] / scales[i]).sin() / scales[i] * others
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_gradient_matches, get_function_metadata};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_griewank_known_properties() {
        let metadata = get_function_metadata();
        let meta = metadata
            .get("griewank")
            .expect("Function griewank should have metadata");

        for (minimum_coords, expected_value) in &meta.global_minima {
            let x = Array1::from_vec(minimum_coords.clone());
            assert_abs_diff_eq!(griewank(&x), *expected_value, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_griewank_gradient() {
        for x in [array![1.2, -3.4], array![-4.0, 4.5], array![0.7, 2.2, -1.9]] {
            assert_gradient_matches(griewank, griewank_gradient, &x);
        }
    }

    #[test]
    fn test_griewank_gradient_vanishes_at_origin() {
        let g = griewank_gradient(&array![0.0, 0.0]);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(g[1], 0.0, epsilon = 1e-15);
    }
}
