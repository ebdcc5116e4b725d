//! Rastrigin test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Rastrigin function - highly multimodal, regular lattice of local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Analytic gradient of [`rastrigin`]
pub fn rastrigin_gradient(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|xi| 2.0 * xi + 20.0 * PI * (2.0 * PI * xi).sin())
}
