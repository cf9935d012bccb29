//! Evaluator capability and the context carrying it

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tsfunc_ast::{Expr, MetricRequest, UnicodeRanges};
use tsfunc_types::Series;

use crate::config::HelperConfig;
use crate::error::EvalResult;

/// Samples already fetched for a request, keyed by request descriptor
pub type ValuesMap = HashMap<MetricRequest, Vec<Series>>;

/// Recursive expression evaluator the helpers resolve arguments through
///
/// Implementations hand out owned series. A series cached in the values map
/// and needed by several branches must be cloned per branch, since alignment
/// reshapes the series it is given.
pub trait Evaluator: Send + Sync {
    /// Evaluate `expr` over `[from, until)` and return its series
    fn eval(&self, expr: &Expr, from: i64, until: i64, values: &ValuesMap) -> EvalResult<Vec<Series>>;
}

impl<F> Evaluator for F
where
    F: Fn(&Expr, i64, i64, &ValuesMap) -> EvalResult<Vec<Series>> + Send + Sync,
{
    fn eval(&self, expr: &Expr, from: i64, until: i64, values: &ValuesMap) -> EvalResult<Vec<Series>> {
        self(expr, from, until, values)
    }
}

/// Immutable bundle of evaluator and configuration used by function
/// implementations
///
/// Cheap to clone; clones share the evaluator.
#[derive(Clone)]
pub struct HelperContext {
    evaluator: Arc<dyn Evaluator>,
    config: HelperConfig,
}

impl fmt::Debug for HelperContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HelperContext {
    /// Context with default configuration
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            evaluator,
            config: HelperConfig::default(),
        }
    }

    /// Start building a context
    pub fn builder(evaluator: Arc<dyn Evaluator>) -> HelperContextBuilder {
        HelperContextBuilder::new(evaluator)
    }

    /// The injected evaluator
    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }

    /// Active configuration
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// See [`resolve_arg`](crate::resolve_arg)
    pub fn resolve_arg(&self, expr: &Expr, from: i64, until: i64, values: &ValuesMap) -> EvalResult<Vec<Series>> {
        crate::resolve::resolve_arg(self.evaluator(), expr, from, until, values)
    }

    /// See [`resolve_args`](crate::resolve_args)
    pub fn resolve_args(&self, exprs: &[Expr], from: i64, until: i64, values: &ValuesMap) -> EvalResult<Vec<Series>> {
        crate::resolve::resolve_args(self.evaluator(), exprs, from, until, values)
    }

    /// See [`resolve_args_and_prune`](crate::resolve_args_and_prune)
    pub fn resolve_args_and_prune(
        &self,
        expr: &mut Expr,
        from: i64,
        until: i64,
        values: &ValuesMap,
    ) -> EvalResult<Vec<Series>> {
        crate::resolve::resolve_args_and_prune(self.evaluator(), expr, from, until, values)
    }

    /// See [`align_series`](crate::align_series)
    pub fn align_series(&self, series: &mut [Series]) -> EvalResult<()> {
        crate::align::align_series(series, &self.config.align_options())
    }

    /// See [`aggregate_series`](crate::aggregate_series)
    pub fn aggregate_series<F>(&self, expr: &Expr, series: Vec<Series>, f: F) -> EvalResult<Vec<Series>>
    where
        F: Fn(&[f64]) -> f64,
    {
        crate::aggregate::aggregate_series(expr, series, f, &self.config.align_options())
    }

    /// See [`for_each_series`](crate::for_each_series)
    pub fn for_each_series<F>(
        &self,
        expr: &Expr,
        from: i64,
        until: i64,
        values: &ValuesMap,
        f: F,
    ) -> EvalResult<Vec<Series>>
    where
        F: FnMut(&Series, Series) -> Series,
    {
        crate::transform::for_each_series(self.evaluator(), expr, from, until, values, f)
    }

    /// See [`extract_metric_name`](crate::extract_metric_name)
    pub fn extract_metric_name<'a>(&self, text: &'a str) -> &'a str {
        crate::extract::extract_metric_name(text, &self.config.unicode_ranges)
    }
}

/// Builder for [`HelperContext`]
pub struct HelperContextBuilder {
    evaluator: Arc<dyn Evaluator>,
    config: HelperConfig,
}

impl HelperContextBuilder {
    /// Create a builder with default configuration
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self {
            evaluator,
            config: HelperConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: HelperConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable resampling during alignment
    pub fn extrapolate_points(mut self, enabled: bool) -> Self {
        self.config.extrapolate_points = enabled;
        self
    }

    /// Set the extended metric-name characters
    pub fn unicode_ranges(mut self, ranges: UnicodeRanges) -> Self {
        self.config.unicode_ranges = ranges;
        self
    }

    /// Finish building
    pub fn build(self) -> HelperContext {
        HelperContext {
            evaluator: self.evaluator,
            config: self.config,
        }
    }
}
