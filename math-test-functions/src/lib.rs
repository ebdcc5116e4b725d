#![doc = include_str!("../README.md")]

use ndarray::Array1;
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Objective function pointer type
pub type ValueFn = fn(&Array1<f64>) -> f64;
/// Analytic gradient function pointer type
pub type GradientFn = fn(&Array1<f64>) -> Array1<f64>;

/// Metadata for a test function: dimension, usual bounds and known minima
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Number of coordinates the formula expects
    pub dimension: usize,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values (empty when not tabulated)
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "branin".to_string(),
        FunctionMetadata {
            name: "branin".to_string(),
            dimension: 2,
            bounds: vec![(-5.0, 10.0), (0.0, 15.0)],
            global_minima: vec![
                (vec![-std::f64::consts::PI, 12.275], 0.397887),
                (vec![std::f64::consts::PI, 2.275], 0.397887),
                (vec![9.42478, 2.475], 0.397887),
            ],
            description: "Branin function".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "camel".to_string(),
        FunctionMetadata {
            name: "camel".to_string(),
            dimension: 2,
            bounds: vec![(-3.0, 3.0), (-2.0, 2.0)],
            global_minima: vec![
                (vec![0.0898, -0.7126], -1.0316),
                (vec![-0.0898, 0.7126], -1.0316),
            ],
            description: "Six-hump Camel function".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "griewank".to_string(),
        FunctionMetadata {
            name: "griewank".to_string(),
            dimension: 2,
            bounds: vec![(-600.0, 600.0); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Griewank function".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "rastrigin".to_string(),
        FunctionMetadata {
            name: "rastrigin".to_string(),
            dimension: 2,
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Highly multimodal Rastrigin function".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "shubert".to_string(),
        FunctionMetadata {
            name: "shubert".to_string(),
            dimension: 2,
            bounds: vec![(-5.0, 5.0); 2],
            global_minima: vec![],
            description: "Shubert function, separable sine-product variant".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "sphere".to_string(),
        FunctionMetadata {
            name: "sphere".to_string(),
            dimension: 2,
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "Convex sphere (bowl) function".to_string(),
            multimodal: false,
        },
    );

    metadata
}

/// Central finite difference of `f` at `x` with step `h`
#[cfg(test)]
pub(crate) fn central_difference(f: ValueFn, x: &Array1<f64>, h: f64) -> Array1<f64> {
    Array1::from_shape_fn(x.len(), |i| {
        let mut forward = x.clone();
        let mut backward = x.clone();
        forward[i] += h;
        backward[i] -= h;
        (f(&forward) - f(&backward)) / (2.0 * h)
    })
}

/// Assert that an analytic gradient agrees with finite differences at `x`
#[cfg(test)]
pub(crate) fn assert_gradient_matches(f: ValueFn, grad: GradientFn, x: &Array1<f64>) {
    let analytic = grad(x);
    let numeric = central_difference(f, x, 1e-6);
    assert_eq!(analytic.len(), x.len());
    for (i, (&a, &n)) in analytic.iter().zip(numeric.iter()).enumerate() {
        let tolerance = 1e-4 * a.abs().max(1.0);
        assert!(
            (a - n).abs() <= tolerance,
            "gradient component {} at {:?}: analytic {} vs numeric {}",
            i,
            x,
            a,
            n
        );
    }
}
