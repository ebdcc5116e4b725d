use crate::{MinFinderError, Result};
use ndarray::Array1;

/// A scalar objective together with its analytic gradient.
///
/// Both methods must be pure: the novelty and degeneracy checks evaluate the
/// same point more than once and rely on getting the same answer.
pub trait Objective {
    /// Number of coordinates every point must have.
    fn dimension(&self) -> usize;

    /// Objective value at `x`.
    fn value(&self, x: &Array1<f64>) -> f64;

    /// Gradient at `x`, with the same length as `x`.
    fn gradient(&self, x: &Array1<f64>) -> Array1<f64>;
}

impl<T: Objective + ?Sized> Objective for &T {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        (**self).value(x)
    }

    fn gradient(&self, x: &Array1<f64>) -> Array1<f64> {
        (**self).gradient(x)
    }
}

/// An [`Objective`] built from a plain value function and a plain gradient
/// function plus the arity they expect.
#[derive(Clone)]
pub struct FnObjective<F, G> {
    dimension: usize,
    value: F,
    gradient: G,
}

impl<F, G> FnObjective<F, G>
where
    F: Fn(&Array1<f64>) -> f64,
    G: Fn(&Array1<f64>) -> Array1<f64>,
{
    /// Pairs `value` and `gradient` over points of length `dimension`.
    pub fn new(dimension: usize, value: F, gradient: G) -> Self {
        Self {
            dimension,
            value,
            gradient,
        }
    }
}

impl<F, G> Objective for FnObjective<F, G>
where
    F: Fn(&Array1<f64>) -> f64,
    G: Fn(&Array1<f64>) -> Array1<f64>,
{
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn value(&self, x: &Array1<f64>) -> f64 {
        (self.value)(x)
    }

    fn gradient(&self, x: &Array1<f64>) -> Array1<f64> {
        (self.gradient)(x)
    }
}

impl<F, G> std::fmt::Debug for FnObjective<F, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnObjective")
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

/// Fails fast when `x` does not have the objective's arity.
///
/// # Errors
///
/// Returns `MinFinderError::DimensionMismatch`.
pub fn check_dimension<O: Objective + ?Sized>(objective: &O, x: &Array1<f64>) -> Result<()> {
    let expected = objective.dimension();
    if x.len() != expected {
        return Err(MinFinderError::DimensionMismatch {
            expected,
            got: x.len(),
        });
    }
    Ok(())
}
