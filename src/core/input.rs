//! Conversion of date-like values into a `DateValue`
//!
//! Accepted text forms, in the order they are tried:
//! - RFC 3339 with an offset or `Z` (an absolute instant)
//! - ISO date-time without offset, `T` or space separated (wall clock)
//! - `YYYY/MM/DD` with optional time (wall clock)
//! - ISO date only: `YYYY-MM-DD`, `YYYY-MM`, `YYYY` (UTC midnight)
//! - RFC 2822 (an absolute instant)
//!
//! Wall-clock forms are pinned to the formatter's timezone; everything else
//! is an instant whose fields are read in that timezone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::fmt;

use crate::core::types::DateValue;
use crate::error::FormatError;
use crate::utils::Timezone;

/// Largest distance from the epoch, in milliseconds, accepted for timestamps
pub const MAX_TIMESTAMP_MS: i64 = 8_640_000_000_000_000;

const WALL_CLOCK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Anything that can name a point in time
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// An absolute instant
    Instant(DateTime<FixedOffset>),
    /// A wall-clock time in the formatter's timezone
    WallClock(NaiveDateTime),
    /// Milliseconds since the Unix epoch
    Millis(i64),
    /// Milliseconds since the Unix epoch, fractional part discarded
    Number(f64),
    Text(String),
}

impl DateInput {
    /// Resolve to calendar fields as seen in `timezone`
    pub fn resolve(&self, timezone: Timezone) -> Result<DateValue, FormatError> {
        let instant = self
            .to_instant(timezone)
            .ok_or_else(|| FormatError::invalid(self))?;
        let local = timezone.to_fixed_offset(instant.with_timezone(&Utc));
        Ok(DateValue::from_datetime(&local))
    }

    fn to_instant(&self, timezone: Timezone) -> Option<DateTime<FixedOffset>> {
        match self {
            DateInput::Instant(dt) => Some(*dt),
            DateInput::WallClock(naive) => timezone.resolve_naive(*naive),
            DateInput::Millis(ms) => from_millis(*ms),
            DateInput::Number(n) => {
                if !n.is_finite() || n.trunc().abs() > MAX_TIMESTAMP_MS as f64 {
                    return None;
                }
                from_millis(n.trunc() as i64)
            }
            DateInput::Text(text) => parse_text(text, timezone),
        }
    }
}

fn from_millis(ms: i64) -> Option<DateTime<FixedOffset>> {
    if ms.unsigned_abs() > MAX_TIMESTAMP_MS as u64 {
        return None;
    }
    DateTime::from_timestamp_millis(ms).map(|dt| dt.fixed_offset())
}

fn parse_text(raw: &str, timezone: Timezone) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    for fmt in WALL_CLOCK_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return timezone.resolve_naive(naive);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return timezone.resolve_naive(date.and_time(NaiveTime::MIN));
    }

    if let Some(date) = parse_iso_date(s) {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).fixed_offset());
    }

    DateTime::parse_from_rfc2822(s).ok()
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    match bytes.len() {
        4 if bytes.iter().all(u8::is_ascii_digit) => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
        7 if bytes[4] == b'-' => NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
            DateInput::WallClock(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S")),
            DateInput::Millis(ms) => write!(f, "{ms}"),
            DateInput::Number(n) => write!(f, "{n}"),
            DateInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<&String> for DateInput {
    fn from(value: &String) -> Self {
        DateInput::Text(value.clone())
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Millis(value)
    }
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        DateInput::Number(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Instant(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::WallClock(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::WallClock(value.and_time(NaiveTime::MIN))
    }
}
