//! Series helper core for metric function evaluators
//!
//! Re-exports the pieces a query-function implementation needs:
//! - [`ast`]: expression nodes and name-character classification
//! - [`types`]: the [`Series`] data type
//! - [`eval`]: resolution, alignment, aggregation, per-series transforms and
//!   metric-name extraction
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tsfunc::{EvalResult, Expr, HelperContext, Series, ValuesMap};
//!
//! fn fetch(expr: &Expr, from: i64, _until: i64, _values: &ValuesMap) -> EvalResult<Vec<Series>> {
//!     Ok(vec![Series::new(expr.target(), vec![1.0, 4.0], from, 60)])
//! }
//!
//! let ctx = HelperContext::builder(Arc::new(fetch)).build();
//! let call = Expr::func("scale", vec![Expr::name("a.b"), Expr::constant(2.0)]);
//!
//! let scaled = ctx
//!     .for_each_series(&call, 0, 120, &ValuesMap::new(), |input, mut out| {
//!         for (o, v) in out.values.iter_mut().zip(&input.values) {
//!             *o = v * 2.0;
//!         }
//!         out
//!     })
//!     .unwrap();
//! assert_eq!(scaled[0].name, "scale(a.b)");
//! assert_eq!(scaled[0].values, vec![2.0, 8.0]);
//! ```

pub use tsfunc_ast as ast;
pub use tsfunc_eval as eval;
pub use tsfunc_types as types;

// Convenience re-exports
pub use tsfunc_ast::{Expr, MetricRequest, UnicodeRanges};
pub use tsfunc_eval::{
    AlignOptions, EvalError, EvalResult, Evaluator, HelperConfig, HelperContext, ValuesMap,
};
pub use tsfunc_types::Series;
