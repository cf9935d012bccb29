//! Series data types
//!
//! A [`Series`] is the unit of data flowing through the function evaluator:
//! a named, uniformly stepped run of `f64` samples where `NaN` marks an
//! absent sample.

mod series;

pub use series::*;
