//! Errors raised while resolving and combining series

use thiserror::Error;

/// Result type for helper operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors surfaced by the series helpers and the evaluators they call
#[derive(Debug, Error, Clone)]
pub enum EvalError {
    /// Argument cannot resolve to series (it is neither a name nor a call)
    #[error("missing time series argument")]
    MissingTimeseries,

    /// A resolvable argument produced no series
    #[error("no timeseries with that name")]
    SeriesDoesNotExist,

    /// No function implementation matches a call
    #[error("unknown function in evalExpr: {name:?}")]
    UnknownFunction { name: String },

    /// Aggregation was handed zero series
    #[error("{operation}: no series to aggregate")]
    EmptyInput { operation: String },

    /// Series with a zero or negative step
    #[error("invalid step {step} for series {name:?}")]
    InvalidStep { name: String, step: i64 },

    /// Any other failure reported by an evaluator
    #[error("{message}")]
    Evaluation { message: String },
}

impl EvalError {
    /// Create an unknown function error
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>) -> Self {
        Self::EmptyInput {
            operation: operation.into(),
        }
    }

    /// Create an invalid step error
    pub fn invalid_step(name: impl Into<String>, step: i64) -> Self {
        Self::InvalidStep {
            name: name.into(),
            step,
        }
    }

    /// Create a generic evaluation error
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation {
            message: message.into(),
        }
    }

    /// Whether this is the error tolerated per argument during resolution
    pub fn is_series_does_not_exist(&self) -> bool {
        matches!(self, Self::SeriesDoesNotExist)
    }
}
