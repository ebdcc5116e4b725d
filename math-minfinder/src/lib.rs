//! Multi-start local-minima search.
//!
//! This crate catalogues the distinct local minima a fixed-step gradient
//! descent converges to when started from many random points. It makes no
//! claim about the global minimum: the goal is to sample a handful of basins
//! of attraction and report each stationary point once.
//!
//! # Features
//!
//! - Fixed-step gradient descent with a hard iteration cap
//! - NaN filtering of degenerate candidates
//! - Pairwise proximity filter against already accepted minima
//! - Seeded, reproducible sampling
//! - Text, CSV and JSON reporting
//! - Corana-style simulated annealing with descent refinement
//!
//! # Example
//!
//! ```rust
//! use math_minfinder::{FnObjective, RunParametersBuilder, find_minima};
//! use ndarray::Array1;
//!
//! // f(x) = x^2 has a single minimum at the origin
//! let bowl = FnObjective::new(
//!     1,
//!     |x: &Array1<f64>| x[0] * x[0],
//!     |x: &Array1<f64>| x.mapv(|xi| 2.0 * xi),
//! );
//! let params = RunParametersBuilder::new()
//!     .learning_rate(0.1)
//!     .proximity_tolerance(1e-3)
//!     .seed(42)
//!     .build()
//!     .expect("valid parameters");
//!
//! let report = find_minima(&bowl, params).expect("dimension matches");
//! assert_eq!(report.minima.len(), 1);
//! assert!(report.minima[0].x[0].abs() < 1e-3);
//! ```
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod error;
pub use error::{MinFinderError, Result};

use serde::{Deserialize, Serialize};

/// Simulated annealing with descent refinement of each trial move.
pub mod annealing;
/// Named objective/gradient pairs used by the runner.
pub mod function_registry;
/// Uniform sampling of starting points.
pub mod init_random;
/// Fixed-step gradient descent to a stationary point.
pub mod local_descent;
/// The multi-start driver and its records.
pub mod multistart;
/// Norms, distances and the degeneracy check.
pub mod numeric;
/// The objective/gradient seam.
pub mod objective;
/// Proximity test and novelty filter.
pub mod proximity;
/// Text, CSV and JSON output of discovered minima.
pub mod report;

pub use annealing::{AnnealingConfig, AnnealingReport, simulated_annealing};
pub use function_registry::{FunctionRegistry, RegisteredFunction};
pub use local_descent::{DescentConfig, DescentOutcome, local_descent};
pub use multistart::{DiscoveryEvent, MinimumRecord, MultiStart, MultiStartReport, find_minima};
pub use objective::{FnObjective, Objective, check_dimension};
pub use proximity::{are_close, is_novel};

/// Action returned by a discovery callback to control the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Keep sampling.
    Continue,
    /// End the run after this discovery.
    Stop,
}

/// Configuration of one multi-start run.
///
/// The defaults match the classic minfinder run: 4 outer iterations of 5
/// samples each, a step of 0.001, tolerance 1e-6, starting points drawn from
/// [-5, 5] per coordinate and at most 1000 descent steps per start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// Number of outer iterations.
    pub max_iterations: usize,
    /// Random starting points drawn per outer iteration.
    pub sample_size: usize,
    /// Fixed descent step (learning rate).
    pub learning_rate: f64,
    /// Gradient norm below which descent stops.
    pub tolerance: f64,
    /// Distance below which two minima are the same; `None` uses `tolerance`.
    pub proximity_tolerance: Option<f64>,
    /// Sampling interval `(lower, upper)` applied to every coordinate.
    pub bounds: (f64, f64),
    /// Hard cap on descent steps per starting point.
    pub max_descent_iterations: usize,
    /// Seed for the run's generator; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            max_iterations: 4,
            sample_size: 5,
            learning_rate: 0.001,
            tolerance: 1e-6,
            proximity_tolerance: None,
            bounds: (-5.0, 5.0),
            max_descent_iterations: 1000,
            seed: None,
        }
    }
}

impl RunParameters {
    /// Distance threshold used by the novelty filter.
    pub fn effective_proximity_tolerance(&self) -> f64 {
        self.proximity_tolerance.unwrap_or(self.tolerance)
    }

    /// Descent settings derived from these parameters.
    pub fn descent(&self) -> DescentConfig {
        DescentConfig {
            learning_rate: self.learning_rate,
            tolerance: self.tolerance,
            max_iterations: self.max_descent_iterations,
        }
    }

    /// Number of descents a full run performs.
    pub fn total_attempts(&self) -> usize {
        self.max_iterations * self.sample_size
    }

    /// Check every numeric field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLearningRate`, `InvalidTolerance` or `InvalidBounds`.
    /// Zero iteration or sample counts are accepted and give an empty run.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MinFinderError::InvalidLearningRate {
                rate: self.learning_rate,
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MinFinderError::InvalidTolerance {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        if let Some(p) = self
            .proximity_tolerance
            .filter(|p| !(p.is_finite() && *p > 0.0))
        {
            return Err(MinFinderError::InvalidTolerance {
                name: "proximity tolerance",
                value: p,
            });
        }
        let (lower, upper) = self.bounds;
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(MinFinderError::InvalidBounds { lower, upper });
        }
        Ok(())
    }
}

/// Fluent builder for [`RunParameters`].
///
/// # Example
///
/// ```rust
/// use math_minfinder::RunParametersBuilder;
///
/// let params = RunParametersBuilder::new()
///     .max_iterations(10)
///     .sample_size(8)
///     .learning_rate(0.01)
///     .bounds(-3.0, 3.0)
///     .seed(7)
///     .build()
///     .expect("valid parameters");
/// assert_eq!(params.total_attempts(), 80);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunParametersBuilder {
    params: RunParameters,
}

impl RunParametersBuilder {
    /// Creates a new builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the number of outer iterations.
    pub fn max_iterations(mut self, v: usize) -> Self {
        self.params.max_iterations = v;
        self
    }
    /// Sets the number of samples per outer iteration.
    pub fn sample_size(mut self, v: usize) -> Self {
        self.params.sample_size = v;
        self
    }
    /// Sets the descent step.
    pub fn learning_rate(mut self, v: f64) -> Self {
        self.params.learning_rate = v;
        self
    }
    /// Sets the convergence tolerance on the gradient norm.
    pub fn tolerance(mut self, v: f64) -> Self {
        self.params.tolerance = v;
        self
    }
    /// Overrides the proximity tolerance of the novelty filter.
    pub fn proximity_tolerance(mut self, v: f64) -> Self {
        self.params.proximity_tolerance = Some(v);
        self
    }
    /// Sets the per-coordinate sampling interval.
    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.params.bounds = (lower, upper);
        self
    }
    /// Sets the symmetric sampling interval `[-half_width, half_width]`.
    pub fn symmetric_bounds(self, half_width: f64) -> Self {
        self.bounds(-half_width, half_width)
    }
    /// Sets the hard cap on descent steps.
    pub fn max_descent_iterations(mut self, v: usize) -> Self {
        self.params.max_descent_iterations = v;
        self
    }
    /// Sets the random seed for reproducibility.
    pub fn seed(mut self, v: u64) -> Self {
        self.params.seed = Some(v);
        self
    }
    /// Builds and returns the parameters.
    ///
    /// # Errors
    ///
    /// See [`RunParameters::validate`].
    pub fn build(self) -> Result<RunParameters> {
        self.params.validate()?;
        Ok(self.params)
    }
}
