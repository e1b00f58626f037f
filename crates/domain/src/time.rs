//! Time and timestamp helpers.

use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Zone-less layouts accepted for history timestamps.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Epoch values above this magnitude are milliseconds, below it seconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// When a history row was recorded, as written by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedAt {
    /// An absolute instant (RFC 3339 with offset, or a Unix epoch).
    Instant(DateTime<Utc>),
    /// A wall-clock date and time without zone information.
    Wall(NaiveDateTime),
}

impl RecordedAt {
    /// Parse a raw timestamp field. Returns `None` for anything unrecognised.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Instant(ts.with_timezone(&Utc)));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Self::Wall(naive));
            }
        }
        let epoch: i64 = raw.parse().ok()?;
        let ts = if epoch.abs() > EPOCH_MILLIS_THRESHOLD {
            DateTime::from_timestamp_millis(epoch)
        } else {
            DateTime::from_timestamp(epoch, 0)
        }?;
        Some(Self::Instant(ts))
    }

    /// Format as `HH:MM`, converting absolute instants into `tz`.
    ///
    /// Wall-clock values are shown as written.
    #[must_use]
    pub fn hour_minute<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            Self::Instant(ts) => ts.with_timezone(tz).format("%H:%M").to_string(),
            Self::Wall(naive) => naive.format("%H:%M").to_string(),
        }
    }
}

/// Chart label for a raw history timestamp.
///
/// Falls back to the trimmed raw text when the timestamp cannot be parsed.
#[must_use]
pub fn time_label<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    RecordedAt::parse(raw).map_or_else(|| raw.trim().to_string(), |at| at.hour_minute(tz))
}
