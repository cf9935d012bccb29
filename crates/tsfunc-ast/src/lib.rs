//! Expression nodes for the tsfunc series helpers
//!
//! This crate defines the small slice of the query-language AST that the
//! series helpers consume: name references, function calls with their raw
//! argument text, and literals. It also carries the character classification
//! used when scanning metric names out of raw text.

mod charset;
mod expression;

pub use charset::*;
pub use expression::*;

/// Key of the resolved-values map handed down the evaluation tree
///
/// Identifies one fetch: the metric pattern and the time window it was
/// requested for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricRequest {
    /// Metric name or glob pattern
    pub metric: String,
    /// Window start (unix seconds)
    pub from: i64,
    /// Window end (unix seconds)
    pub until: i64,
}

impl MetricRequest {
    /// Create a new request descriptor
    pub fn new(metric: impl Into<String>, from: i64, until: i64) -> Self {
        Self {
            metric: metric.into(),
            from,
            until,
        }
    }
}
