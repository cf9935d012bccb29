//! Character classes for metric names
//!
//! Metric names are built from ASCII letters, digits and the structural
//! punctuation of the query language. Deployments can additionally allow
//! non-ASCII letters by configuring Unicode scripts, general categories or
//! explicit code point ranges.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether `b` can appear in a metric name as-is
pub fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'.' | b'_'
                | b'-'
                | b'*'
                | b'?'
                | b':'
                | b'['
                | b']'
                | b'^'
                | b'$'
                | b'<'
                | b'>'
                | b'&'
                | b'#'
                | b'/'
                | b'%'
                | b'@'
        )
}

/// Error raised for an unparsable range table entry
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RangeTableError {
    /// Entry is neither a known table name nor an explicit range
    #[error("unknown unicode range table: {0}")]
    UnknownTable(String),

    /// Explicit range with bad bounds
    #[error("invalid unicode range: {0}")]
    InvalidRange(String),
}

static LATIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Latin}$").expect("Latin script class is valid"));

#[derive(Debug, Clone)]
enum RangeTable {
    /// Unicode script or general category (`Greek`, `Han`, `Lu`, `L`, ...)
    Class(Regex),
    /// Explicit inclusive code point range
    Range(u32, u32),
}

impl RangeTable {
    fn parse(entry: &str) -> Result<Self, RangeTableError> {
        if entry.trim_start().starts_with(['U', 'u']) && entry.contains('+') {
            let (lo, hi) = parse_explicit_range(entry)?;
            return Ok(Self::Range(lo, hi));
        }

        let unknown = || RangeTableError::UnknownTable(entry.to_string());
        if entry.is_empty() || !entry.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(unknown());
        }

        Regex::new(&format!(r"^\p{{{entry}}}$"))
            .map(Self::Class)
            .map_err(|_| unknown())
    }

    fn contains(&self, c: char) -> bool {
        match self {
            Self::Class(class) => class.is_match(c.encode_utf8(&mut [0; 4])),
            Self::Range(lo, hi) => (*lo..=*hi).contains(&(c as u32)),
        }
    }
}

/// Parse `U+0400-U+04FF` (or a single `U+00E9`)
fn parse_explicit_range(entry: &str) -> Result<(u32, u32), RangeTableError> {
    let parse_point = |s: &str| -> Option<u32> {
        let hex = s.trim().strip_prefix("U+").or_else(|| s.trim().strip_prefix("u+"))?;
        u32::from_str_radix(hex, 16).ok()
    };

    let (lo, hi) = match entry.split_once('-') {
        Some((lo, hi)) => (parse_point(lo), parse_point(hi)),
        None => (parse_point(entry), parse_point(entry)),
    };

    match (lo, hi) {
        (Some(lo), Some(hi)) if lo <= hi && char::from_u32(hi).is_some() => Ok((lo, hi)),
        _ => Err(RangeTableError::InvalidRange(entry.to_string())),
    }
}

/// Set of Unicode ranges accepted as extended metric-name characters
///
/// Table names are Unicode script names (`Latin`, `Greek`, `Arabic`, ...) or
/// general categories (`L`, `Lu`, `Nd`, ...), matched against the exact
/// Unicode property tables.
///
/// Serialized as the list of table names it was built from, e.g.
/// `["Latin", "Cyrillic", "U+0600-U+06FF"]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct UnicodeRanges {
    names: Vec<String>,
    tables: Vec<RangeTable>,
}

impl UnicodeRanges {
    /// Build from table names or explicit `U+XXXX-U+YYYY` ranges
    pub fn from_names<I, S>(names: I) -> Result<Self, RangeTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let tables = names
            .iter()
            .map(|name| RangeTable::parse(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { names, tables })
    }

    /// A set that accepts no extended characters
    pub fn none() -> Self {
        Self {
            names: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Whether `c` falls inside any configured range
    pub fn contains(&self, c: char) -> bool {
        self.tables.iter().any(|table| table.contains(c))
    }

    /// Table names this set was built from
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for UnicodeRanges {
    fn default() -> Self {
        Self {
            names: vec!["Latin".to_string()],
            tables: vec![RangeTable::Class(LATIN.clone())],
        }
    }
}

impl PartialEq for UnicodeRanges {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for UnicodeRanges {}

impl TryFrom<Vec<String>> for UnicodeRanges {
    type Error = RangeTableError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<UnicodeRanges> for Vec<String> {
    fn from(ranges: UnicodeRanges) -> Self {
        ranges.names
    }
}
