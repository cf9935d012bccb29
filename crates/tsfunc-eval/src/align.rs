//! Reconciling series onto one time grid
//!
//! Alignment always pads series with `NaN` so they share the widest
//! `[start, stop)` bounds. With [`AlignOptions::extrapolate_points`] set,
//! series with a coarser step are first resampled onto the finest step by
//! linear interpolation, extending the last segment's slope past the final
//! known sample.
//!
//! Series are reshaped in place: values, step and bounds all change.

use std::iter;

use log::{trace, warn};
use tsfunc_types::Series;

use crate::config::AlignOptions;
use crate::error::{EvalError, EvalResult};

/// Upper bound on reconciliation passes
///
/// A pass only resamples series coarser than the finest step and only pads
/// series narrower than the widest bounds, so two passes reach the fixed
/// point; the cap guards against a regression looping forever.
pub const MAX_ALIGN_PASSES: usize = 8;

/// Align `series` onto common bounds (and, optionally, a common step)
///
/// Runs reconciliation passes until one changes nothing. Fails with
/// [`EvalError::InvalidStep`] before touching any data if a series has a zero
/// or negative step.
pub fn align_series(series: &mut [Series], options: &AlignOptions) -> EvalResult<()> {
    if let Some(bad) = series.iter().find(|s| s.step_time <= 0) {
        return Err(EvalError::invalid_step(&bad.name, bad.step_time));
    }

    for pass in 1..=MAX_ALIGN_PASSES {
        if !reconcile(series, options) {
            trace!("alignment of {} series settled after {pass} passes", series.len());
            return Ok(());
        }
    }

    warn!(
        "alignment of {} series did not settle after {MAX_ALIGN_PASSES} passes",
        series.len()
    );
    Ok(())
}

/// One resample-then-pad pass; returns whether anything changed
fn reconcile(series: &mut [Series], options: &AlignOptions) -> bool {
    let mut changed = false;

    if options.extrapolate_points {
        if let Some(min_step) = series.iter().map(|s| s.step_time).min() {
            for s in series.iter_mut().filter(|s| s.step_time > min_step) {
                trace!("resampling {} from step {} to {min_step}", s.name, s.step_time);
                resample(s, min_step);
                changed = true;
            }
        }
    }

    let (Some(min_start), Some(max_stop)) = (
        series.iter().map(|s| s.start_time).min(),
        series.iter().map(|s| s.stop_time).max(),
    ) else {
        return changed;
    };

    for s in series.iter_mut() {
        if s.start_time > min_start {
            let pad = padding(s.start_time - min_start, s.step_time);
            trace!("prepending {pad} points to {}", s.name);
            s.values.splice(0..0, iter::repeat_n(f64::NAN, pad));
            s.start_time = min_start;
            changed = true;
        }

        if s.stop_time < max_stop {
            let pad = padding(max_stop - s.stop_time, s.step_time);
            trace!("appending {pad} points to {}", s.name);
            s.values.extend(iter::repeat_n(f64::NAN, pad));
            s.stop_time = max_stop;
            changed = true;
        }
    }

    changed
}

/// Whole steps that fit in `span`
fn padding(span: i64, step: i64) -> usize {
    usize::try_from(span / step).unwrap_or(0)
}

/// Resample `series` onto the finer `step`
fn resample(series: &mut Series, step: i64) {
    let span = (series.stop_time - series.start_time).max(0);
    let count = usize::try_from((span + step - 1) / step).unwrap_or(0);
    let source_step = series.step_time as f64;

    let values = (0..count)
        .map(|i| {
            let position = (i as i64 * step) as f64 / source_step;
            interpolate(&series.values, position)
        })
        .collect();

    series.values = values;
    series.step_time = step;
}

/// Value at fractional sample `position`
///
/// Positions past the last sample extend the last segment. With fewer than
/// two samples there is no slope, so anything but an exact hit is `NaN`.
fn interpolate(values: &[f64], position: f64) -> f64 {
    let Some(last) = values.len().checked_sub(1) else {
        return f64::NAN;
    };

    let index = position.floor() as usize;
    if position.fract() == 0.0 && index <= last {
        return values[index];
    }
    if last == 0 {
        return f64::NAN;
    }

    let segment = index.min(last - 1);
    let (a, b) = (values[segment], values[segment + 1]);
    a + (b - a) * (position - segment as f64)
}
