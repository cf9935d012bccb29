//! Helper configuration

use serde::{Deserialize, Serialize};
use tsfunc_ast::UnicodeRanges;

/// Settings shared by every helper call made through a context
///
/// Deserializes from a partial document; missing fields take their defaults.
///
/// ```
/// use tsfunc_eval::HelperConfig;
///
/// let config: HelperConfig =
///     serde_json::from_str(r#"{"extrapolate_points": true}"#).unwrap();
/// assert!(config.extrapolate_points);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Resample coarser series onto the finest step when aligning,
    /// instead of only padding their bounds
    pub extrapolate_points: bool,
    /// Non-ASCII characters accepted inside metric names
    pub unicode_ranges: UnicodeRanges,
}

impl HelperConfig {
    /// Alignment subset of this configuration
    pub fn align_options(&self) -> AlignOptions {
        AlignOptions {
            extrapolate_points: self.extrapolate_points,
        }
    }
}

/// Options controlling [`align_series`](crate::align_series)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignOptions {
    /// Linearly resample series whose step exceeds the smallest step
    pub extrapolate_points: bool,
}

impl AlignOptions {
    /// Padding only
    pub const PAD_ONLY: Self = Self {
        extrapolate_points: false,
    };

    /// Padding plus resampling onto the finest step
    pub const EXTRAPOLATE: Self = Self {
        extrapolate_points: true,
    };
}
