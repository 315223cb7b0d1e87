use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bytes::limit_bytes_with_end;
use crate::error::{LimitError, Result};
use crate::runes::limit_runes_with_end;

/// What a [`Limit`] counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitUnit {
    /// UTF-8 encoded bytes.
    #[default]
    Bytes,
    /// Unicode scalar values.
    Runes,
}

impl LimitUnit {
    /// Size of `s` measured in this unit.
    pub fn measure(self, s: &str) -> usize {
        match self {
            LimitUnit::Bytes => s.len(),
            LimitUnit::Runes => s.chars().count(),
        }
    }
}

impl fmt::Display for LimitUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitUnit::Bytes => f.write_str("bytes"),
            LimitUnit::Runes => f.write_str("runes"),
        }
    }
}

/// A size bound for text, e.g. the width of a storage column.
///
/// Deserializes from `{ "unit": "runes", "max": 80, "end": "…" }`; `unit`
/// defaults to bytes and `end` to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    #[serde(default)]
    pub unit: LimitUnit,
    pub max: usize,
    #[serde(default)]
    pub end: String,
}

impl Limit {
    pub fn bytes(max: usize) -> Self {
        Self {
            unit: LimitUnit::Bytes,
            max,
            end: String::new(),
        }
    }

    pub fn runes(max: usize) -> Self {
        Self {
            unit: LimitUnit::Runes,
            max,
            end: String::new(),
        }
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    /// Whether [`Limit::apply`] would return `s` unchanged.
    pub fn fits(&self, s: &str) -> bool {
        match self.unit {
            LimitUnit::Bytes => s.len() <= self.max.saturating_sub(self.end.len()),
            LimitUnit::Runes => s.chars().count() <= self.max,
        }
    }

    /// Truncate `s` to this limit. Never fails; an end marker larger than
    /// `max` is returned as-is when truncation happens.
    pub fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self.unit {
            LimitUnit::Bytes => limit_bytes_with_end(s, self.max, &self.end),
            LimitUnit::Runes => limit_runes_with_end(s, self.max, &self.end),
        }
    }

    /// Check that the end marker itself fits within `max`.
    pub fn validate(&self) -> Result<()> {
        let end_len = self.unit.measure(&self.end);
        if end_len > self.max {
            return Err(LimitError::EndExceedsLimit {
                unit: self.unit,
                end_len,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Like [`Limit::apply`], but the result is guaranteed to respect `max`.
    pub fn try_apply<'a>(&self, s: &'a str) -> Result<Cow<'a, str>> {
        if let Err(err) = self.validate() {
            warn!(error = %err, "rejecting text limit");
            return Err(err);
        }
        Ok(self.apply(s))
    }
}
