//! Per-series transforms

use log::debug;
use tsfunc_ast::Expr;
use tsfunc_types::Series;

use crate::context::{Evaluator, ValuesMap};
use crate::error::{EvalError, EvalResult};
use crate::resolve::resolve_arg;

/// Apply `f` to every series of the call's first argument
///
/// For each input, `f` receives the input and an output template named
/// `"<function>(<input name>)"` that carries the input's metadata and a
/// `NaN`-filled value buffer of the same length. Outputs keep input order.
/// Any failure to resolve the first argument is reported as
/// [`EvalError::MissingTimeseries`].
pub fn for_each_series<F>(
    evaluator: &dyn Evaluator,
    expr: &Expr,
    from: i64,
    until: i64,
    values: &ValuesMap,
    mut f: F,
) -> EvalResult<Vec<Series>>
where
    F: FnMut(&Series, Series) -> Series,
{
    let arg = expr.args().first().ok_or(EvalError::MissingTimeseries)?;
    let inputs = resolve_arg(evaluator, arg, from, until, values).map_err(|err| {
        debug!("{}: first argument did not resolve: {err}", expr.target());
        EvalError::MissingTimeseries
    })?;

    let results = inputs
        .iter()
        .map(|input| {
            let name = format!("{}({})", expr.target(), input.name);
            let template = input.derive(name, vec![f64::NAN; input.len()]);
            f(input, template)
        })
        .collect();

    Ok(results)
}
