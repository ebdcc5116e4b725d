//! Error types for the local-minima finder.
//!
//! Library errors use `thiserror`, with helper methods to tell configuration
//! problems apart from input-shape problems.

use thiserror::Error;

/// Errors that can occur while configuring or running a minima search.
#[derive(Debug, Error)]
pub enum MinFinderError {
    /// A point does not have the arity the objective expects.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension declared by the objective (or the first point)
        expected: usize,
        /// Dimension actually supplied
        got: usize,
    },

    /// Sampling bounds are not a proper finite interval.
    #[error("invalid sampling bounds: lower ({lower}) must be finite and < upper ({upper})")]
    InvalidBounds {
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Step size (learning rate) must be finite and positive.
    #[error("invalid learning rate: {rate} (must be finite and > 0)")]
    InvalidLearningRate {
        /// The invalid learning rate
        rate: f64,
    },

    /// A tolerance must be finite and positive.
    #[error("invalid {name}: {value} (must be finite and > 0)")]
    InvalidTolerance {
        /// Which tolerance was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Annealing schedule parameter out of range.
    #[error("invalid annealing parameter {name}: {value}")]
    InvalidSchedule {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// No objective registered under this name.
    #[error("unknown function: {name}")]
    UnknownFunction {
        /// The requested name
        name: String,
    },

    /// Writing a report failed.
    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a report failed.
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A specialized `Result` type for minima search operations.
pub type Result<T> = std::result::Result<T, MinFinderError>;

impl MinFinderError {
    /// Returns `true` if this error comes from rejected run parameters.
    ///
    /// This includes `InvalidBounds`, `InvalidLearningRate`, `InvalidTolerance`
    /// and `InvalidSchedule`.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MinFinderError::InvalidBounds { .. }
                | MinFinderError::InvalidLearningRate { .. }
                | MinFinderError::InvalidTolerance { .. }
                | MinFinderError::InvalidSchedule { .. }
        )
    }

    /// Returns `true` if this is a dimension mismatch error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, MinFinderError::DimensionMismatch { .. })
    }

    /// Returns `true` if this error was raised by the reporting layer.
    pub fn is_report_error(&self) -> bool {
        matches!(
            self,
            MinFinderError::Io(_) | MinFinderError::Serialize(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MinFinderError::DimensionMismatch {
            expected: 2,
            got: 3,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 2, got 3");

        let err = MinFinderError::UnknownFunction {
            name: "rosen".to_string(),
        };
        assert_eq!(err.to_string(), "unknown function: rosen");
    }

    #[test]
    fn test_is_config_error() {
        let config_err = MinFinderError::InvalidLearningRate { rate: -0.1 };
        let dim_err = MinFinderError::DimensionMismatch {
            expected: 2,
            got: 1,
        };

        assert!(config_err.is_config_error());
        assert!(!dim_err.is_config_error());
        assert!(
            MinFinderError::InvalidTolerance {
                name: "tolerance",
                value: 0.0
            }
            .is_config_error()
        );
    }

    #[test]
    fn test_is_dimension_error() {
        let dim_err = MinFinderError::DimensionMismatch {
            expected: 2,
            got: 5,
        };
        let bounds_err = MinFinderError::InvalidBounds {
            lower: 5.0,
            upper: -5.0,
        };

        assert!(dim_err.is_dimension_error());
        assert!(!bounds_err.is_dimension_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MinFinderError = io.into();
        assert!(err.is_report_error());
        assert!(!err.is_config_error());
    }
}
