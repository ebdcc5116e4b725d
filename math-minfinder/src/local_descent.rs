//! Fixed-step gradient descent
//!
//! Drives a starting point toward a stationary point by repeatedly stepping
//! against the gradient. There is no line search, momentum or step
//! adaptation: a badly scaled objective may oscillate or diverge, and only
//! the iteration cap bounds the work.

use crate::numeric::euclidean_norm;
use crate::objective::{Objective, check_dimension};
use crate::{MinFinderError, Result};
use ndarray::Array1;

/// Descent configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DescentConfig {
    /// Fixed step applied to the gradient
    pub learning_rate: f64,
    /// Stop once the gradient norm falls below this
    pub tolerance: f64,
    /// Maximum number of gradient evaluations
    pub max_iterations: usize,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            tolerance: 1e-6,
            max_iterations: 1000,
        }
    }
}

/// Descent result
#[derive(Debug, Clone)]
pub struct DescentOutcome {
    /// Final iterate
    pub x: Array1<f64>,
    /// Objective value at `x`
    pub value: f64,
    /// Number of steps taken
    pub iterations: usize,
    /// Norm of the last gradient evaluated
    pub gradient_norm: f64,
    /// Whether the tolerance was met before the cap
    pub converged: bool,
}

/// Run fixed-step gradient descent from `start`.
///
/// Reaching the cap is not an error: the last iterate is returned with
/// `converged == false`. The input point is never modified.
///
/// # Errors
///
/// Returns `MinFinderError::DimensionMismatch` if `start` does not have the
/// objective's arity, or if the gradient comes back with the wrong length.
pub fn local_descent<O: Objective + ?Sized>(
    objective: &O,
    start: &Array1<f64>,
    config: &DescentConfig,
) -> Result<DescentOutcome> {
    check_dimension(objective, start)?;

    let mut x = start.clone();
    let mut gradient_norm = f64::INFINITY;

    for iter in 0..config.max_iterations {
        let grad = objective.gradient(&x);
        if grad.len() != x.len() {
            return Err(MinFinderError::DimensionMismatch {
                expected: x.len(),
                got: grad.len(),
            });
        }

        gradient_norm = euclidean_norm(&grad);
        if gradient_norm < config.tolerance {
            log::trace!(
                "descent converged after {} steps: |g| = {:.3e}",
                iter,
                gradient_norm
            );
            let value = objective.value(&x);
            return Ok(DescentOutcome {
                x,
                value,
                iterations: iter,
                gradient_norm,
                converged: true,
            });
        }

        // x = x - lr * g
        x.scaled_add(-config.learning_rate, &grad);
    }

    log::debug!(
        "descent stopped at the {} step cap: |g| = {:.3e}",
        config.max_iterations,
        gradient_norm
    );
    let value = objective.value(&x);
    Ok(DescentOutcome {
        x,
        value,
        iterations: config.max_iterations,
        gradient_norm,
        converged: false,
    })
}
