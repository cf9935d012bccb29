//! Series helpers for metric function evaluators
//!
//! Every concrete query function (`sumSeries`, `scale`, `averageSeries`, ...)
//! is built from the same few primitives provided here:
//!
//! - **Resolution**: turn argument nodes into series through an injected
//!   [`Evaluator`], tolerating arguments that match nothing
//! - **Alignment**: pad series onto common bounds and, optionally, resample
//!   coarser series onto the finest step
//! - **Aggregation**: combine aligned series point by point into one series
//! - **Per-series transforms**: derive one output series per input
//! - **Name extraction**: recover the bare metric name from raw argument text
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tsfunc_ast::Expr;
//! use tsfunc_eval::{EvalResult, HelperContext, ValuesMap};
//! use tsfunc_types::Series;
//!
//! fn fetch(expr: &Expr, from: i64, _until: i64, _values: &ValuesMap) -> EvalResult<Vec<Series>> {
//!     Ok(vec![Series::new(expr.target(), vec![1.0, 2.0], from, 60)])
//! }
//!
//! let ctx = HelperContext::new(Arc::new(fetch));
//! let mut call = Expr::func("sumSeries", vec![Expr::name("a"), Expr::name("b")]);
//!
//! let inputs = ctx.resolve_args_and_prune(&mut call, 0, 120, &ValuesMap::new()).unwrap();
//! let summed = ctx.aggregate_series(&call, inputs, |v| v.iter().sum()).unwrap();
//! assert_eq!(summed[0].name, "sumSeries(a,b)");
//! assert_eq!(summed[0].values, vec![2.0, 4.0]);
//! ```
//!
//! # Ownership
//!
//! Alignment reshapes the series it is given. It takes `&mut [Series]` (and
//! aggregation takes the series by value), so a series can only be reshaped
//! by the branch that owns it. Evaluators return owned series and clone
//! anything they share between branches.

pub mod aggregate;
pub mod align;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod resolve;
pub mod transform;
pub mod util;

pub use aggregate::aggregate_series;
pub use align::{MAX_ALIGN_PASSES, align_series};
pub use config::{AlignOptions, HelperConfig};
pub use context::{Evaluator, HelperContext, HelperContextBuilder, ValuesMap};
pub use error::{EvalError, EvalResult};
pub use extract::{ScanState, ScanStep, extract_metric_name, scan_step};
pub use resolve::{join_series_names, resolve_arg, resolve_args, resolve_args_and_prune};
pub use transform::for_each_series;
pub use util::{BACKREF, contains, rewrite_backrefs};
