//! Branin test function

use ndarray::{Array1, array};
use std::f64::consts::PI;

const B: f64 = 5.1 / (4.0 * PI * PI);
const C: f64 = 5.0 / PI;
const R: f64 = 6.0;
const S: f64 = 10.0;
const T: f64 = 1.0 / (8.0 * PI);

/// Branin function - multimodal, 2D only
/// Global minimum: f(x) = 0.397887 at x = (-π, 12.275), (π, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub fn branin(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (x2 - B * x1.powi(2) + C * x1 - R).powi(2) + S * (1.0 - T) * x1.cos() + S
}

/// Analytic gradient of [`branin`]
pub fn branin_gradient(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    let inner = x2 - B * x1.powi(2) + C * x1 - R;
    array![
        2.0 * inner * (C - 2.0 * B * x1) - S * (1.0 - T) * x1.sin(),
        2.0 * inner
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_gradient_matches, get_function_metadata};

    #[test]
    fn test_branin_known_properties() {
        let metadata = get_function_metadata();
        let meta = metadata
            .get("branin")
            .expect("Function branin should have metadata");

        for (minimum_coords, expected_value) in &meta.global_minima {
            let x = Array1::from_vec(minimum_coords.clone());
            let actual_value = branin(&x);
            assert!(
                (actual_value - expected_value).abs() <= 1e-5,
                "branin at {:?} should be {}, got {}",
                minimum_coords,
                expected_value,
                actual_value
            );
        }
    }

    #[test]
    fn test_branin_gradient() {
        for x in [array![-2.0, 7.5], array![3.3, 1.0], array![0.4, -4.2]] {
            assert_gradient_matches(branin, branin_gradient, &x);
        }
    }

    #[test]
    fn test_branin_gradient_small_at_minimum() {
        let g = branin_gradient(&array![PI, 2.275]);
        assert!(g.iter().all(|gi| gi.abs() < 1e-2), "gradient {:?}", g);
    }
}
