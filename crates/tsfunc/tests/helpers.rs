//! End-to-end tests of the series helpers
//!
//! Each test wires a [`FunctionEvaluator`] over a [`MockEvaluator`] and drives
//! the helpers the way a query function would.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;
use tsfunc::eval::{contains, join_series_names};
use tsfunc::{EvalError, Evaluator, Expr, HelperContext, MetricRequest, ValuesMap};

fn store() -> MockEvaluator {
    let store = MockEvaluator::new();
    store.add_series("a", vec![series("a", &[1.0, 2.0, 3.0], 0, 60)]);
    store.add_series("b", vec![series("b", &[10.0, f64::NAN, 30.0], 0, 60)]);
    store.add_series("late", vec![series("late", &[5.0, 6.0], 60, 60)]);
    store.add_series("empty", Vec::new());
    store.add_series(
        "servers.*",
        vec![
            series("servers.web01", &[-1.0, 2.0], 0, 60),
            series("servers.web02", &[3.0, -4.0], 0, 60),
        ],
    );
    store
}

fn context(store: &MockEvaluator) -> HelperContext {
    HelperContext::new(Arc::new(FunctionEvaluator::new(store.clone())))
}

fn names(series: &[tsfunc::Series]) -> Vec<&str> {
    series.iter().map(|s| s.name.as_str()).collect()
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn empty_middle_argument_is_tolerated() {
    let store = store();
    let ctx = context(&store);
    let args = [Expr::name("a"), Expr::name("empty"), Expr::name("b")];

    let series = ctx.resolve_args(&args, 0, 180, &ValuesMap::new()).unwrap();
    assert_eq!(names(&series), ["a", "b"]);
    assert_eq!(store.calls(), ["a", "empty", "b"]);
}

#[test]
fn unknown_function_aborts_resolution() {
    let store = store();
    let ctx = context(&store);
    let args = [Expr::name("a"), Expr::func("nope", vec![Expr::name("b")])];

    let err = ctx.resolve_args(&args, 0, 180, &ValuesMap::new()).unwrap_err();
    assert!(matches!(err, EvalError::UnknownFunction { ref name } if name == "nope"));
}

#[test]
fn evaluator_errors_propagate_verbatim() {
    let store = store();
    store.fail_with("a", EvalError::evaluation("fetch timed out"));
    let ctx = context(&store);

    let err = ctx
        .resolve_arg(&Expr::name("a"), 0, 180, &ValuesMap::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "fetch timed out");
}

#[test]
fn prefetched_values_are_used() {
    let store = store();
    let ctx = context(&store);
    let mut values = ValuesMap::new();
    values.insert(
        MetricRequest::new("a", 0, 180),
        vec![series("a", &[7.0, 7.0, 7.0], 0, 60)],
    );

    let series = ctx.resolve_arg(&Expr::name("a"), 0, 180, &values).unwrap();
    assert_eq!(series[0].values, vec![7.0, 7.0, 7.0]);
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn sum_skips_gaps() {
    let store = store();
    let ctx = context(&store);
    let expr = Expr::func("sumSeries", vec![Expr::name("a"), Expr::name("b")]);

    let out = ctx.evaluator().eval(&expr, 0, 180, &ValuesMap::new()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "sumSeries(a,b)");
    // index 1 is a gap in `b`: the sum is `a`'s value, not NaN
    assert_eq!(out[0].values, vec![11.0, 2.0, 33.0]);
}

#[test]
fn missing_series_are_dropped_from_the_name() {
    let store = store();
    let ctx = context(&store);
    let expr = Expr::func(
        "sumSeries",
        vec![Expr::name("a"), Expr::name("nonexistent"), Expr::name("late")],
    );

    let out = ctx.evaluator().eval(&expr, 0, 180, &ValuesMap::new()).unwrap();
    assert_eq!(out[0].name, "sumSeries(a,late)");
    assert_eq!(out[0].values, vec![1.0, 7.0, 9.0]);
}

#[test]
fn all_missing_is_an_error() {
    let store = store();
    let ctx = context(&store);
    let expr = Expr::func("sumSeries", vec![Expr::name("x"), Expr::name("y")]);

    let err = ctx.evaluator().eval(&expr, 0, 180, &ValuesMap::new()).unwrap_err();
    assert!(err.is_series_does_not_exist());
}

#[test]
fn aggregate_output_has_input_length() {
    let store = store();
    let ctx = context(&store);
    let expr = Expr::func(
        "averageSeries",
        vec![Expr::name("a"), Expr::name("b"), Expr::name("servers.*")],
    );

    let out = ctx.evaluator().eval(&expr, 0, 180, &ValuesMap::new()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].len(), 3);
    assert_eq!(out[0].name, "averageSeries(a,b,servers.*)");
    assert_samples_eq(&out[0].values, &[13.0 / 4.0, 0.0, 33.0 / 2.0]);
}

// ============================================================================
// Per-series transforms
// ============================================================================

#[test]
fn transform_preserves_order_and_names() {
    let store = store();
    let ctx = context(&store);
    let expr = Expr::func("absolute", vec![Expr::name("servers.*")]);

    let out = ctx.evaluator().eval(&expr, 0, 120, &ValuesMap::new()).unwrap();
    assert_eq!(names(&out), ["absolute(servers.web01)", "absolute(servers.web02)"]);
    assert_eq!(out[0].values, vec![1.0, 2.0]);
    assert_eq!(out[1].values, vec![3.0, 4.0]);
}

#[test]
fn nested_calls_build_nested_names() {
    let store = store();
    let ctx = context(&store);
    let expr = Expr::func(
        "scale",
        vec![
            Expr::func("absolute", vec![Expr::name("servers.*")]),
            Expr::constant(10.0),
        ],
    );

    let out = ctx.evaluator().eval(&expr, 0, 120, &ValuesMap::new()).unwrap();
    assert_eq!(
        names(&out),
        ["scale(absolute(servers.web01))", "scale(absolute(servers.web02))"]
    );
    assert_eq!(out[1].values, vec![30.0, 40.0]);
}

#[test]
fn transform_of_literal_is_missing_timeseries() {
    let store = store();
    let ctx = context(&store);
    let expr = Expr::func("absolute", vec![Expr::constant(1.0)]);

    let err = ctx.evaluator().eval(&expr, 0, 120, &ValuesMap::new()).unwrap_err();
    assert!(matches!(err, EvalError::MissingTimeseries));
}

// ============================================================================
// Alignment through the context configuration
// ============================================================================

#[test]
fn extrapolating_context_resamples_before_summing() {
    let store = MockEvaluator::new();
    store.add_series("fine", vec![series("fine", &[1.0, 1.0, 1.0, 1.0], 0, 30)]);
    store.add_series("coarse", vec![series("coarse", &[0.0, 2.0], 0, 60)]);
    let evaluator = FunctionEvaluator {
        store,
        extrapolate: true,
    };
    let expr = Expr::func("sumSeries", vec![Expr::name("fine"), Expr::name("coarse")]);

    let out = evaluator.eval(&expr, 0, 120, &ValuesMap::new()).unwrap();
    assert_eq!(out[0].step_time, 30);
    assert_eq!(out[0].values, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn padding_context_keeps_coarse_step() {
    let store = MockEvaluator::new();
    store.add_series("fine", vec![series("fine", &[1.0, 1.0, 1.0, 1.0], 0, 30)]);
    store.add_series("coarse", vec![series("coarse", &[0.0, 2.0], 0, 60)]);
    let ctx = context(&store);

    let mut inputs = ctx
        .resolve_args(&[Expr::name("fine"), Expr::name("coarse")], 0, 120, &ValuesMap::new())
        .unwrap();
    ctx.align_series(&mut inputs).unwrap();
    assert_eq!(inputs[1].step_time, 60);
    assert_eq!(inputs[1].len(), 2);
}

// ============================================================================
// Name extraction and small utilities
// ============================================================================

#[rstest]
#[case("host.cpu.load)", "host.cpu.load")]
#[case("host.cpu;dc=east)", "host.cpu")]
#[case("host.{a,b}.load,rest", "host.{a,b}.load")]
#[case("sumSeries(host.*.cpu, other)", "host.*.cpu")]
fn extracts_metric_names(#[case] text: &str, #[case] expected: &str) {
    let ctx = context(&store());
    assert_eq!(ctx.extract_metric_name(text), expected);
}

#[test]
fn joins_names_and_checks_membership() {
    let series = [series("a", &[], 0, 1), series("b.c", &[], 0, 1)];
    assert_eq!(join_series_names(&series), "a,b.c");
    assert_eq!(join_series_names(&[]), "");
    assert!(contains(&[4, 8, 15], 15));
    assert!(!contains(&[4, 8, 15], 16));
}
