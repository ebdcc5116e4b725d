//! Proximity test and novelty filter
//!
//! Two points are the same minimum when their Euclidean distance is strictly
//! below the tolerance. The relation is symmetric but not transitive: a chain
//! of points each slightly more than the tolerance apart is kept in full, since
//! a candidate is only ever compared against the minima already accepted.

use crate::Result;
use crate::numeric::euclidean_distance;
use ndarray::Array1;

/// Whether `a` and `b` are the same minimum within `tolerance`.
///
/// # Errors
///
/// Returns `MinFinderError::DimensionMismatch` when the points differ in length.
pub fn are_close(a: &Array1<f64>, b: &Array1<f64>, tolerance: f64) -> Result<bool> {
    Ok(euclidean_distance(a, b)? < tolerance)
}

/// Whether `candidate` is farther than `tolerance` from every accepted point.
///
/// Stops at the first match, O(n) in the number of accepted points.
///
/// # Errors
///
/// Returns `MinFinderError::DimensionMismatch` when an accepted point has a
/// different length than the candidate.
pub fn is_novel<'a, I>(candidate: &Array1<f64>, accepted: I, tolerance: f64) -> Result<bool>
where
    I: IntoIterator<Item = &'a Array1<f64>>,
{
    for found in accepted {
        if are_close(candidate, found, tolerance)? {
            return Ok(false);
        }
    }
    Ok(true)
}
