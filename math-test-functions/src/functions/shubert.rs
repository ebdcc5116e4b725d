//! Shubert test function (separable sine-product variant)

use ndarray::{Array1, array};

/// Shubert function - 2D, many local minima arranged on a periodic grid
///
/// f(x) = -sum_{i=1..5} i * sin(i*x1 + i) * sin(i*x2 + i)
///
/// The function is symmetric under swapping x1 and x2.
/// Bounds: x_i in [-5, 5]
pub fn shubert(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    -(1..=5)
        .map(|i| {
            let i = i as f64;
            i * (i * x1 + i).sin() * (i * x2 + i).sin()
        })
        .sum::<f64>()
}

/// Analytic gradient of [`shubert`]
pub fn shubert_gradient(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    let (mut g1, mut g2) = (0.0, 0.0);
    for i in 1..=5 {
        let i = i as f64;
        let (s1, c1) = (i * x1 + i).sin_cos();
        let (s2, c2) = (i * x2 + i).sin_cos();
        g1 -= i * i * c1 * s2;
        g2 -= i * i * s1 * c2;
    }
    array![g1, g2]
}
