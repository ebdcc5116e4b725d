//! Simulated annealing with descent refinement
//!
//! A Corana-style annealer: each trial move perturbs one coordinate within its
//! current step, the trial is polished by a short gradient descent, and the
//! Metropolis rule decides whether to move. Per-coordinate steps grow or shrink
//! with their acceptance ratio, and the temperature decays geometrically.

use crate::numeric::{euclidean_distance, is_degenerate};
use crate::objective::{Objective, check_dimension};
use crate::{MinFinderError, Result};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Acceptance ratio above which a coordinate's step grows.
const HIGH_ACCEPTANCE: f64 = 0.6;
/// Acceptance ratio below which a coordinate's step shrinks.
const LOW_ACCEPTANCE: f64 = 0.4;

/// Settings of the descent that polishes each trial point.
///
/// Unlike [`local_descent`](crate::local_descent::local_descent), this stops on a small change of the
/// objective value rather than on the gradient norm.
#[derive(Debug, Clone, PartialEq)]
pub struct RefineConfig {
    /// Fixed descent step
    pub learning_rate: f64,
    /// Maximum descent steps per trial
    pub max_iterations: usize,
    /// Stop when |f_new - f_prev| falls below this
    pub tolerance: f64,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Annealing schedule and move settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingConfig {
    /// Starting temperature
    pub temp_init: f64,
    /// Geometric cooling factor in (0, 1)
    pub alpha: f64,
    /// Maximum number of temperature steps
    pub max_iterations: usize,
    /// Temperature steps between step-size adjustments (Ns)
    pub step_adjust_interval: usize,
    /// Consecutive stable temperature steps that end the run (Nt)
    pub stability_limit: usize,
    /// Initial per-coordinate step
    pub initial_step: f64,
    /// The current point counts as stable within this distance of the best
    pub stability_radius: f64,
    /// Descent used on every trial
    pub refine: RefineConfig,
    /// Optional random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            temp_init: 1000.0,
            alpha: 0.85,
            max_iterations: 1000,
            step_adjust_interval: 20,
            stability_limit: 100,
            initial_step: 0.5,
            stability_radius: 1e-5,
            refine: RefineConfig::default(),
            seed: None,
        }
    }
}

impl AnnealingConfig {
    /// Check the schedule.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule`, `InvalidLearningRate` or `InvalidTolerance`.
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.temp_init) {
            return Err(MinFinderError::InvalidSchedule {
                name: "temp_init",
                value: self.temp_init,
            });
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(MinFinderError::InvalidSchedule {
                name: "alpha",
                value: self.alpha,
            });
        }
        if self.step_adjust_interval == 0 {
            return Err(MinFinderError::InvalidSchedule {
                name: "step_adjust_interval",
                value: 0.0,
            });
        }
        if !positive(self.initial_step) {
            return Err(MinFinderError::InvalidSchedule {
                name: "initial_step",
                value: self.initial_step,
            });
        }
        if !positive(self.stability_radius) {
            return Err(MinFinderError::InvalidTolerance {
                name: "stability radius",
                value: self.stability_radius,
            });
        }
        if !positive(self.refine.learning_rate) {
            return Err(MinFinderError::InvalidLearningRate {
                rate: self.refine.learning_rate,
            });
        }
        if !positive(self.refine.tolerance) {
            return Err(MinFinderError::InvalidTolerance {
                name: "refine tolerance",
                value: self.refine.tolerance,
            });
        }
        Ok(())
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone, Serialize)]
pub struct AnnealingReport {
    /// Best point visited
    pub x: Vec<f64>,
    /// Objective value at `x`
    pub fun: f64,
    /// Temperature steps performed
    pub iterations: usize,
    /// Trial moves accepted
    pub accepted: usize,
    /// Temperature when the run ended
    pub final_temperature: f64,
    /// Seed the run's generator was created from
    pub seed: u64,
}

/// Polish `x` with fixed-step descent until the objective stops changing.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the gradient length differs from `x`.
pub fn refine_descent<O: Objective + ?Sized>(
    objective: &O,
    mut x: Array1<f64>,
    config: &RefineConfig,
) -> Result<Array1<f64>> {
    let mut prev_f = objective.value(&x);
    for _ in 0..config.max_iterations {
        let grad = objective.gradient(&x);
        if grad.len() != x.len() {
            return Err(MinFinderError::DimensionMismatch {
                expected: x.len(),
                got: grad.len(),
            });
        }
        x.scaled_add(-config.learning_rate, &grad);
        let new_f = objective.value(&x);
        if (new_f - prev_f).abs() < config.tolerance {
            break;
        }
        prev_f = new_f;
    }
    Ok(x)
}

/// Minimize `objective` from `x0` by simulated annealing.
///
/// Trials whose value is NaN are never accepted.
///
/// # Errors
///
/// Returns a configuration error for an invalid schedule, or
/// `DimensionMismatch` if `x0` does not match the objective.
pub fn simulated_annealing<O: Objective + ?Sized>(
    objective: &O,
    x0: &Array1<f64>,
    config: &AnnealingConfig,
) -> Result<AnnealingReport> {
    config.validate()?;
    check_dimension(objective, x0)?;

    let seed = match config.seed {
        Some(s) => s,
        None => rand::rng().random::<u64>(),
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let n = x0.len();
    let mut x_current = x0.clone();
    let mut f_current = objective.value(&x_current);
    let mut best_x = x_current.clone();
    let mut best_f = f_current;
    let mut temp = config.temp_init;
    let mut steps = vec![config.initial_step; n];
    let mut accepted_per_coord = vec![0usize; n];
    let mut accepted = 0usize;
    let mut stable_count = 0usize;
    let mut iterations = 0usize;

    for iter in 0..config.max_iterations {
        iterations = iter + 1;

        for i in 0..n {
            let mut trial = x_current.clone();
            trial[i] += rng.random_range(-steps[i]..steps[i]);
            let trial = refine_descent(objective, trial, &config.refine)?;
            let f_new = objective.value(&trial);
            if is_degenerate(f_new) {
                continue;
            }

            // Metropolis criterion; a NaN current value accepts anything finite
            let take = f_new < f_current
                || is_degenerate(f_current)
                || rng.random::<f64>() < ((f_current - f_new) / temp).exp();
            if take {
                x_current = trial;
                f_current = f_new;
                accepted += 1;
                accepted_per_coord[i] += 1;
                if f_new < best_f || is_degenerate(best_f) {
                    best_f = f_new;
                    best_x = x_current.clone();
                }
            }
        }

        if iterations % config.step_adjust_interval == 0 {
            for (step, count) in steps.iter_mut().zip(accepted_per_coord.iter_mut()) {
                let ratio = *count as f64 / config.step_adjust_interval as f64;
                if ratio > HIGH_ACCEPTANCE {
                    *step *= 1.0 + 0.1 * (ratio - HIGH_ACCEPTANCE);
                } else if ratio < LOW_ACCEPTANCE {
                    *step /= 1.0 + 0.1 * (LOW_ACCEPTANCE - ratio);
                }
                *count = 0;
            }
        }

        temp *= config.alpha;

        if euclidean_distance(&x_current, &best_x)? < config.stability_radius {
            stable_count += 1;
        } else {
            stable_count = 0;
        }
        if stable_count > config.stability_limit {
            log::debug!("annealing stable after {} temperature steps", iterations);
            break;
        }
    }

    log::info!(
        "annealing best: {:?} f(x) = {} ({} moves accepted)",
        best_x.to_vec(),
        best_f,
        accepted
    );

    Ok(AnnealingReport {
        x: best_x.to_vec(),
        fun: best_f,
        iterations,
        accepted,
        final_temperature: temp,
        seed,
    })
}
