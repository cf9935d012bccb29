//! Turning argument nodes into series

use log::debug;
use tsfunc_ast::Expr;
use tsfunc_types::Series;

use crate::context::{Evaluator, ValuesMap};
use crate::error::{EvalError, EvalResult};

/// Resolve a single argument through the evaluator
///
/// Only name references and function calls can produce series; anything else
/// fails with [`EvalError::MissingTimeseries`]. Evaluator errors are returned
/// unchanged.
pub fn resolve_arg(
    evaluator: &dyn Evaluator,
    expr: &Expr,
    from: i64,
    until: i64,
    values: &ValuesMap,
) -> EvalResult<Vec<Series>> {
    if !expr.is_name() && !expr.is_func() {
        return Err(EvalError::MissingTimeseries);
    }

    evaluator.eval(expr, from, until, values)
}

/// Resolve every argument and concatenate the results in argument order
///
/// An argument that does not exist contributes nothing. Any other error
/// aborts. Fails with [`EvalError::SeriesDoesNotExist`] when nothing at all
/// resolved.
pub fn resolve_args(
    evaluator: &dyn Evaluator,
    exprs: &[Expr],
    from: i64,
    until: i64,
    values: &ValuesMap,
) -> EvalResult<Vec<Series>> {
    let mut resolved = Vec::new();

    for expr in exprs {
        match resolve_arg(evaluator, expr, from, until, values) {
            Ok(series) => resolved.extend(series),
            Err(err) if err.is_series_does_not_exist() => {
                debug!("skipping argument {expr}: no series");
            }
            Err(err) => return Err(err),
        }
    }

    if resolved.is_empty() {
        return Err(EvalError::SeriesDoesNotExist);
    }

    Ok(resolved)
}

/// Resolve the arguments of a call, dropping missing ones from its display name
///
/// When fewer series come back than there were argument nodes, the call's raw
/// argument text is replaced by the names of the series that did resolve, so
/// `sumSeries(a,missing,b)` is rendered as `sumSeries(a,b)`.
pub fn resolve_args_and_prune(
    evaluator: &dyn Evaluator,
    expr: &mut Expr,
    from: i64,
    until: i64,
    values: &ValuesMap,
) -> EvalResult<Vec<Series>> {
    let resolved = resolve_args(evaluator, expr.args(), from, until, values)?;

    if resolved.len() < expr.args().len() {
        let raw_args = join_series_names(&resolved);
        debug!("rewriting arguments of {} to {raw_args:?}", expr.target());
        expr.set_raw_args(raw_args);
    }

    Ok(resolved)
}

/// Comma-joined display names
pub fn join_series_names(series: &[Series]) -> String {
    series
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
