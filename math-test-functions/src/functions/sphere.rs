//! Sphere test function

use ndarray::Array1;

/// Sphere function - convex bowl, any dimension
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Analytic gradient of [`sphere`]
pub fn sphere_gradient(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|xi| 2.0 * xi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_gradient_matches;
    use ndarray::array;

    #[test]
    fn test_sphere_values() {
        assert_eq!(sphere(&array![0.0, 0.0]), 0.0);
        assert_eq!(sphere(&array![3.0]), 9.0);
        assert_eq!(sphere(&array![1.0, 2.0, 2.0]), 9.0);
    }

    #[test]
    fn test_sphere_gradient() {
        assert_eq!(sphere_gradient(&array![3.0]), array![6.0]);
        assert_gradient_matches(sphere, sphere_gradient, &array![0.4, -1.5, 2.0]);
    }
}
