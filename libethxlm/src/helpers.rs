use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A UTC Unix timestamp in whole seconds.
///
/// Signed, so that a schedule computed from inconsistent offsets can still be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Returns the current UTC time as a Timestamp.
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Offsets the timestamp by `secs` (which may be negative). Saturates instead of overflowing.
    pub fn add_secs(self, secs: i64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Converts this Timestamp to a chrono DateTime<Utc>.
    /// Out-of-range values return None.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.0, 0).single()
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Milliseconds since the Unix epoch, used as the coarse part of generated identifiers.
pub fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}
