use chrono::offset::Offset;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone whose wall clock supplies the rendered date fields
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub fn name(self) -> String {
        match self {
            Timezone::Local => "local".to_string(),
            Timezone::Named(tz) => tz.name().to_string(),
        }
    }

    pub fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Pin a wall-clock time to an instant in this zone.
    ///
    /// Ambiguous times (DST fall-back) take the earlier instant. Times that
    /// fall in a DST gap are pushed forward by an hour; `None` only when that
    /// still does not exist.
    pub fn resolve_naive(self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Timezone::Local => pin_wall_clock(&Local, naive),
            Timezone::Named(tz) => pin_wall_clock(&tz, naive),
        }
    }
}

fn pin_wall_clock<Z: TimeZone>(zone: &Z, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    if let Some(dt) = zone.from_local_datetime(&naive).earliest() {
        return Some(dt.fixed_offset());
    }
    let shifted = naive.checked_add_signed(Duration::hours(1))?;
    zone.from_local_datetime(&shifted)
        .earliest()
        .map(|dt| dt.fixed_offset())
}
