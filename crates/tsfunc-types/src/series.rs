//! Series representation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named run of samples on a uniform time grid
///
/// `values[i]` is the sample at `start_time + i * step_time`. Absent samples
/// are `NaN`. Nominally `values.len() == (stop_time - start_time) / step_time`,
/// although alignment may briefly break that while it reshapes a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Display name, also used for nested names like `f(g(name))`
    pub name: String,
    /// Sample values; `NaN` marks an absent sample
    #[serde(with = "nan_as_null")]
    pub values: Vec<f64>,
    /// First timestamp covered (unix seconds)
    pub start_time: i64,
    /// End of the covered range (unix seconds, exclusive)
    pub stop_time: i64,
    /// Sampling interval in seconds
    pub step_time: i64,
    /// Tags carried along through derivations
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tags: IndexMap<String, String>,
}

impl Series {
    /// Create a series starting at `start_time` whose stop time follows from
    /// the number of values
    pub fn new(name: impl Into<String>, values: Vec<f64>, start_time: i64, step_time: i64) -> Self {
        let stop_time = start_time + values.len() as i64 * step_time;
        Self {
            name: name.into(),
            values,
            start_time,
            stop_time,
            step_time,
            tags: IndexMap::new(),
        }
    }

    /// Attach a tag
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Build a new series that keeps this one's time bounds, step and tags
    /// but carries a different name and values
    pub fn derive(&self, name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            start_time: self.start_time,
            stop_time: self.stop_time,
            step_time: self.step_time,
            tags: self.tags.clone(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of samples the time bounds call for, or `None` for a
    /// non-positive step
    pub fn expected_len(&self) -> Option<usize> {
        if self.step_time <= 0 {
            return None;
        }
        usize::try_from((self.stop_time - self.start_time) / self.step_time).ok()
    }

    /// Timestamp of the sample at `index`
    pub fn timestamp_at(&self, index: usize) -> i64 {
        self.start_time + index as i64 * self.step_time
    }

    /// Iterate `(timestamp, value)` pairs
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.timestamp_at(i), v))
    }

    /// Number of absent samples
    pub fn nan_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }
}

/// JSON has no NaN; absent samples travel as `null`
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        values
            .iter()
            .map(|v| if v.is_nan() { None } else { Some(*v) })
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }
}
