//! Multi-start driver
//!
//! Draws random starting points, descends from each, drops degenerate
//! candidates and keeps a candidate only if it is not within the proximity
//! tolerance of a minimum already accepted in this run. No attempt is fatal:
//! the run always completes after the configured number of descents unless a
//! callback asks to stop.

use crate::init_random::sample_point;
use crate::local_descent::local_descent;
use crate::numeric::candidate_value;
use crate::objective::Objective;
use crate::proximity::is_novel;
use crate::{CallbackAction, Result, RunParameters};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// An accepted stationary point and its objective value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumRecord {
    /// Coordinates of the minimum
    #[serde(with = "point_serde")]
    pub x: Array1<f64>,
    /// Objective value at `x`
    pub value: f64,
}

/// Emitted once per accepted minimum, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryEvent {
    /// Position of the minimum in the run's accepted set
    pub index: usize,
    /// Outer iteration that produced it
    pub iteration: usize,
    /// Sample within that iteration
    pub sample: usize,
    /// Coordinates of the minimum
    #[serde(with = "point_serde")]
    pub x: Array1<f64>,
    /// Objective value at `x`
    pub value: f64,
}

/// Outcome of one multi-start run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiStartReport {
    /// Distinct minima in discovery order
    pub minima: Vec<MinimumRecord>,
    /// One event per accepted minimum
    pub events: Vec<DiscoveryEvent>,
    /// Seed the run's generator was created from
    pub seed: u64,
    /// Descents performed
    pub attempts: usize,
    /// Descents that met the gradient tolerance before the cap
    pub converged: usize,
    /// Candidates discarded for a NaN value
    pub degenerate: usize,
    /// Candidates discarded as already known
    pub duplicates: usize,
    /// Whether a callback ended the run early
    pub stopped_early: bool,
}

impl MultiStartReport {
    /// The accepted minimum with the lowest objective value.
    pub fn best(&self) -> Option<&MinimumRecord> {
        self.minima
            .iter()
            .min_by(|a, b| a.value.total_cmp(&b.value))
    }
}

/// Multi-start local minimizer.
///
/// Use [`MultiStart::new`] to create an instance, then call
/// [`run`](Self::run) or [`run_with_callback`](Self::run_with_callback).
pub struct MultiStart<'a, O>
where
    O: Objective + ?Sized,
{
    objective: &'a O,
    params: RunParameters,
}

impl<'a, O> MultiStart<'a, O>
where
    O: Objective + ?Sized,
{
    /// Creates a driver for `objective` with `params`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `params` fail validation.
    pub fn new(objective: &'a O, params: RunParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { objective, params })
    }

    /// Parameters of this driver.
    pub fn params(&self) -> &RunParameters {
        &self.params
    }

    /// Run to completion.
    ///
    /// # Errors
    ///
    /// Returns `MinFinderError::DimensionMismatch` if the objective's gradient
    /// does not match its declared arity.
    pub fn run(&self) -> Result<MultiStartReport> {
        self.run_with_callback(|_| CallbackAction::Continue)
    }

    /// Run, handing every discovery to `callback` as it happens.
    ///
    /// Returning [`CallbackAction::Stop`] ends the run after the current
    /// discovery; the report then has `stopped_early` set.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_with_callback<C>(&self, mut callback: C) -> Result<MultiStartReport>
    where
        C: FnMut(&DiscoveryEvent) -> CallbackAction,
    {
        let seed = match self.params.seed {
            Some(s) => s,
            None => rand::rng().random::<u64>(),
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let descent = self.params.descent();
        let tolerance = self.params.effective_proximity_tolerance();
        let dimension = self.objective.dimension();

        log::debug!(
            "multi-start: dim={} iterations={} samples={} seed={}",
            dimension,
            self.params.max_iterations,
            self.params.sample_size,
            seed
        );

        let mut report = MultiStartReport {
            seed,
            ..MultiStartReport::default()
        };

        'outer: for iteration in 0..self.params.max_iterations {
            for sample in 0..self.params.sample_size {
                let start = sample_point(dimension, self.params.bounds, &mut rng);
                let outcome = local_descent(self.objective, &start, &descent)?;
                report.attempts += 1;
                if outcome.converged {
                    report.converged += 1;
                }

                let Some(value) = candidate_value(&outcome.x, outcome.value) else {
                    log::debug!("discarding degenerate candidate {:?}", outcome.x.to_vec());
                    report.degenerate += 1;
                    continue;
                };

                if !is_novel(
                    &outcome.x,
                    report.minima.iter().map(|m| &m.x),
                    tolerance,
                )? {
                    log::debug!(
                        "discarding duplicate candidate {:?} f(x) = {}",
                        outcome.x.to_vec(),
                        value
                    );
                    report.duplicates += 1;
                    continue;
                }

                let event = DiscoveryEvent {
                    index: report.minima.len(),
                    iteration,
                    sample,
                    x: outcome.x.clone(),
                    value,
                };
                log::info!(
                    "new local minimum #{}: {:?} f(x) = {}",
                    event.index,
                    event.x.to_vec(),
                    value
                );
                report.minima.push(MinimumRecord {
                    x: outcome.x,
                    value,
                });
                let action = callback(&event);
                report.events.push(event);
                if action == CallbackAction::Stop {
                    report.stopped_early = true;
                    break 'outer;
                }
            }
        }

        Ok(report)
    }
}

/// Runs the multi-start search for `objective` with `params`.
///
/// # Errors
///
/// Returns a configuration error for invalid `params`, or a dimension error
/// if the objective's gradient does not match its declared arity.
pub fn find_minima<O>(objective: &O, params: RunParameters) -> Result<MultiStartReport>
where
    O: Objective + ?Sized,
{
    MultiStart::new(objective, params)?.run()
}

/// Serializes points as plain number sequences.
mod point_serde {
    use ndarray::Array1;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(x: &Array1<f64>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(x.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Array1<f64>, D::Error> {
        Vec::<f64>::deserialize(d).map(Array1::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RunParametersBuilder;
    use crate::objective::FnObjective;
    use math_minfinder_test_functions::{sphere, sphere_gradient};
    use ndarray::array;

    #[test]
    fn test_report_best() {
        let report = MultiStartReport {
            minima: vec![
                MinimumRecord {
                    x: array![1.0],
                    value: 3.0,
                },
                MinimumRecord {
                    x: array![2.0],
                    value: -1.0,
                },
            ],
            ..MultiStartReport::default()
        };
        assert_eq!(report.best().unwrap().value, -1.0);
        assert!(MultiStartReport::default().best().is_none());
    }

    #[test]
    fn test_records_serialize_as_sequences() {
        let record = MinimumRecord {
            x: array![0.5, -1.0],
            value: 2.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"x":[0.5,-1.0],"value":2.0}"#);
        let back: MinimumRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_invalid_params_rejected_by_driver() {
        let bowl = FnObjective::new(2, sphere, sphere_gradient);
        let params = RunParameters {
            learning_rate: -1.0,
            ..RunParameters::default()
        };
        assert!(MultiStart::new(&bowl, params).is_err());
    }

    #[test]
    fn test_unseeded_run_records_its_seed() {
        let bowl = FnObjective::new(2, sphere, sphere_gradient);
        let params = RunParametersBuilder::new()
            .learning_rate(0.1)
            .proximity_tolerance(1e-3)
            .build()
            .unwrap();
        let first = find_minima(&bowl, params.clone()).unwrap();
        let replay = RunParameters {
            seed: Some(first.seed),
            ..params
        };
        let second = find_minima(&bowl, replay).unwrap();
        assert_eq!(first.events, second.events);
    }
}
