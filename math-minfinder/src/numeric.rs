use crate::{MinFinderError, Result};
use ndarray::Array1;

/// Euclidean norm of `v`.
#[inline]
pub fn euclidean_norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

/// Euclidean distance between two points of equal length.
///
/// # Errors
///
/// Returns `MinFinderError::DimensionMismatch` when the lengths differ.
pub fn euclidean_distance(a: &Array1<f64>, b: &Array1<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(MinFinderError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| (ai - bi).powi(2))
        .sum::<f64>()
        .sqrt())
}

/// A value is degenerate iff it is NaN.
#[inline]
pub fn is_degenerate(value: f64) -> bool {
    value.is_nan()
}

/// Value of a descent candidate `x` with objective value `value`, or `None`
/// when the candidate is degenerate.
///
/// A candidate is degenerate when its objective value is NaN, or when descent
/// drove one of its coordinates to NaN (a NaN gradient poisons the iterate).
pub fn candidate_value(x: &Array1<f64>, value: f64) -> Option<f64> {
    if is_degenerate(value) || x.iter().any(|xi| xi.is_nan()) {
        return None;
    }
    Some(value)
}
