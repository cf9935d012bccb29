//! Common test utilities
//!
//! This module provides shared testing infrastructure including:
//! - A mock evaluator serving registered series
//! - A small function evaluator built on the helpers
//! - `NaN`-aware assertion helpers

#![allow(dead_code)]

pub mod evaluation;

pub use evaluation::*;
pub use mocks::*;
