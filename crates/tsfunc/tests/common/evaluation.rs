//! Evaluation test helpers
//!
//! A tiny recursive evaluator that implements a handful of query functions on
//! top of the helpers, plus assertion helpers for `NaN`-aware comparisons.

use std::sync::Arc;
use tsfunc::{EvalError, EvalResult, Evaluator, Expr, HelperContext, Series, ValuesMap};

use crate::common::mocks::MockEvaluator;

/// Evaluator that dispatches `sumSeries`, `averageSeries`, `scale` and
/// `absolute`, and resolves names through a [`MockEvaluator`]
#[derive(Clone)]
pub struct FunctionEvaluator {
    pub store: MockEvaluator,
    pub extrapolate: bool,
}

impl FunctionEvaluator {
    pub fn new(store: MockEvaluator) -> Self {
        Self {
            store,
            extrapolate: false,
        }
    }

    fn context(&self) -> HelperContext {
        HelperContext::builder(Arc::new(self.clone()))
            .extrapolate_points(self.extrapolate)
            .build()
    }
}

impl Evaluator for FunctionEvaluator {
    fn eval(&self, expr: &Expr, from: i64, until: i64, values: &ValuesMap) -> EvalResult<Vec<Series>> {
        if expr.is_name() {
            return self.store.eval(expr, from, until, values);
        }

        let ctx = self.context();
        match expr.target() {
            "sumSeries" | "averageSeries" => {
                let mut call = expr.clone();
                let inputs = ctx.resolve_args_and_prune(&mut call, from, until, values)?;
                if call.target() == "sumSeries" {
                    ctx.aggregate_series(&call, inputs, sum_skipping_nan)
                } else {
                    ctx.aggregate_series(&call, inputs, avg_skipping_nan)
                }
            }
            "scale" => {
                let factor = match expr.args().get(1) {
                    Some(Expr::Const(factor)) => *factor,
                    _ => return Err(EvalError::evaluation("scale: missing factor")),
                };
                ctx.for_each_series(expr, from, until, values, |input, mut out| {
                    for (o, v) in out.values.iter_mut().zip(&input.values) {
                        *o = v * factor;
                    }
                    out
                })
            }
            "absolute" => ctx.for_each_series(expr, from, until, values, |input, mut out| {
                for (o, v) in out.values.iter_mut().zip(&input.values) {
                    *o = v.abs();
                }
                out
            }),
            other => Err(EvalError::unknown_function(other)),
        }
    }
}

/// Sum of the present values; `NaN` when none is present
pub fn sum_skipping_nan(values: &[f64]) -> f64 {
    let mut present = values.iter().filter(|v| !v.is_nan()).peekable();
    if present.peek().is_none() {
        return f64::NAN;
    }
    present.sum()
}

/// Mean of the present values; `NaN` when none is present
pub fn avg_skipping_nan(values: &[f64]) -> f64 {
    let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if present.is_empty() {
        return f64::NAN;
    }
    present.iter().sum::<f64>() / present.len() as f64
}

/// Assert two sample buffers are equal, treating `NaN` as equal to `NaN`
pub fn assert_samples_eq(actual: &[f64], expected: &[f64]) {
    let same = actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, e)| (a.is_nan() && e.is_nan()) || a == e);
    assert!(same, "samples differ:\n  actual:   {actual:?}\n  expected: {expected:?}");
}

/// Series with `values` starting at `start` with `step`
pub fn series(name: &str, values: &[f64], start: i64, step: i64) -> Series {
    Series::new(name, values.to_vec(), start, step)
}
