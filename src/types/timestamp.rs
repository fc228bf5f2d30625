use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A creation time as held by the store.
///
/// Values written by this crate are fixed-width RFC 3339 (microseconds, `Z`),
/// so ordering the raw text orders by time. Rows written by other tools may
/// hold anything; those still list and display, just not as a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp(String);

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the raw value, accepting RFC 3339 and SQLite's `datetime('now')` form.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.0)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(&self.0, "%Y-%m-%d %H:%M:%S%.f").map(|ndt| ndt.and_utc())
            })
            .ok()
    }

    /// `YYYY-MM-DD HH:MM`, or the raw text when it is not a date.
    #[must_use]
    pub fn display(&self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
