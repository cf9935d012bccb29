//! Elementwise combination of series

use smallvec::SmallVec;
use tsfunc_ast::Expr;
use tsfunc_types::Series;

use crate::align::align_series;
use crate::config::AlignOptions;
use crate::error::{EvalError, EvalResult};

/// Combine `series` point by point into a single series named
/// `"<function>(<raw args>)"`
///
/// The inputs are aligned first. For every index of the first input, the
/// values of all inputs at that index (`NaN` included, and `NaN` for inputs
/// shorter than the first) are handed to `f`; its result becomes the output
/// sample. The output inherits the first input's bounds, step and tags.
pub fn aggregate_series<F>(
    expr: &Expr,
    mut series: Vec<Series>,
    f: F,
    options: &AlignOptions,
) -> EvalResult<Vec<Series>>
where
    F: Fn(&[f64]) -> f64,
{
    if series.is_empty() {
        return Err(EvalError::empty_input(expr.target()));
    }

    align_series(&mut series, options)?;

    let first = &series[0];
    let mut column: SmallVec<[f64; 8]> = SmallVec::with_capacity(series.len());
    let values = (0..first.len())
        .map(|i| {
            column.clear();
            column.extend(
                series
                    .iter()
                    .map(|s| s.values.get(i).copied().unwrap_or(f64::NAN)),
            );
            if column.is_empty() { f64::NAN } else { f(&column) }
        })
        .collect();

    let name = format!("{}({})", expr.target(), expr.raw_args());
    Ok(vec![first.derive(name, values)])
}
