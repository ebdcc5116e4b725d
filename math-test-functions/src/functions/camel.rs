//! Six-hump camel test function

use ndarray::{Array1, array};

/// Six-hump camel function - 2D multimodal, two symmetric global minima
/// Global minimum: f(x) = -1.0316 at x = (0.0898, -0.7126) and (-0.0898, 0.7126)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
pub fn camel(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    4.0 * x1.powi(2) - 2.1 * x1.powi(4) + x1.powi(6) / 3.0 + x1 * x2 - 4.0 * x2.powi(2)
        + 4.0 * x2.powi(4)
}

/// Analytic gradient of [`camel`]
pub fn camel_gradient(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    array![
        8.0 * x1 - 8.4 * x1.powi(3) + 2.0 * x1.powi(5) + x2,
        x1 - 8.0 * x2 + 16.0 * x2.powi(3)
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_gradient_matches, get_function_metadata};

    #[test]
    fn test_camel_known_properties() {
        let metadata = get_function_metadata();
        let meta = metadata
            .get("camel")
            .expect("Function camel should have metadata");

        for (minimum_coords, expected_value) in &meta.global_minima {
            let x = Array1::from_vec(minimum_coords.clone());
            let actual_value = camel(&x);
            // Published coordinates are rounded to 4 digits
            let tolerance = 1e-4 * expected_value.abs();
            assert!(
                (actual_value - expected_value).abs() <= tolerance,
                "camel at {:?} should be {}, got {}",
                minimum_coords,
                expected_value,
                actual_value
            );
        }
    }

    #[test]
    fn test_camel_gradient() {
        for x in [array![0.5, -0.3], array![-1.7, 0.8], array![2.0, 1.5]] {
            assert_gradient_matches(camel, camel_gradient, &x);
        }
    }

    #[test]
    fn test_camel_is_stationary_at_origin() {
        let g = camel_gradient(&array![0.0, 0.0]);
        assert_eq!(g, array![0.0, 0.0]);
        assert_eq!(camel(&array![0.0, 0.0]), 0.0);
    }
}
