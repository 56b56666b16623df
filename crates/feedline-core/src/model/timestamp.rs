//! Raw wire timestamps with instant-based comparison.
//!
//! The activity service serializes timestamps as RFC 3339 strings. The
//! pipeline compares them as instants, never as strings, and must tolerate
//! malformed values: an unparseable timestamp never falls inside any merge
//! window and never aborts a sort. Policy for ordering: unparseable
//! timestamps compare before parseable ones and equal among themselves, so a
//! stable sort keeps their input order.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A timestamp as received on the wire.
///
/// Keeps the raw string so that records round-trip byte-for-byte; parsing is
/// done on demand via [`Timestamp::instant`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Wrap a raw wire timestamp.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw wire string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as an RFC 3339 instant. `None` for malformed values.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.0).ok()
    }

    /// Compare two timestamps by instant.
    ///
    /// Unparseable timestamps order before parseable ones and equal among
    /// themselves, so a stable sort preserves their relative input order.
    #[must_use]
    pub fn cmp_instant(&self, other: &Self) -> Ordering {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Absolute whole-minute distance between two timestamps.
    ///
    /// `None` when either side is unparseable; callers treat that as
    /// "outside any window".
    #[must_use]
    pub fn minutes_between(&self, other: &Self) -> Option<i64> {
        let a = self.instant()?;
        let b = other.instant()?;
        Some((b - a).num_minutes().abs())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
