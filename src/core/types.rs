//! Calendar value every template token renders from
//!
//! A `DateValue` is the set of wall-clock fields of one instant as seen in
//! one timezone. It is built fresh for every formatting call.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike, Weekday};
use serde::Serialize;

/// Abbreviated weekday names, indexed by days from Sunday
pub const WEEKDAY_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Abbreviated month names, indexed by zero-based month
pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Broken-down date and time fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateValue {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    /// 0-23
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateValue {
    /// Read the wall-clock fields of a zoned datetime
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from_naive(&dt.naive_local())
    }

    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        DateValue {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            weekday: dt.weekday(),
            hour: dt.hour(),
            minute: dt.minute(),
            // Leap seconds are folded into :59 by chrono already
            second: dt.second(),
        }
    }

    pub fn weekday_abbr(&self) -> &'static str {
        WEEKDAY_ABBR[self.weekday.num_days_from_sunday() as usize]
    }

    pub fn month_abbr(&self) -> &'static str {
        MONTH_ABBR[self.month0()]
    }

    fn month0(&self) -> usize {
        (self.month as usize).saturating_sub(1).min(11)
    }
}

fn serialize_weekday<S: serde::Serializer>(weekday: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(WEEKDAY_ABBR[weekday.num_days_from_sunday() as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn naive(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn from_naive_copies_all_fields() {
        let v = DateValue::from_naive(&naive(2023, 1, 5, 7, 8, 9));
        assert_eq!(v.year, 2023);
        assert_eq!(v.month, 1);
        assert_eq!(v.day, 5);
        assert_eq!(v.weekday, Weekday::Thu);
        assert_eq!(v.hour, 7);
        assert_eq!(v.minute, 8);
        assert_eq!(v.second, 9);
    }

    #[test]
    fn from_datetime_uses_local_wall_clock() {
        let utc = Utc.with_ymd_and_hms(2023, 1, 5, 23, 30, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let v = DateValue::from_datetime(&utc.with_timezone(&tokyo));
        assert_eq!(v.day, 6);
        assert_eq!(v.hour, 8);
        assert_eq!(v.weekday, Weekday::Fri);
    }

    #[test]
    fn abbreviations_cover_every_weekday_and_month() {
        let mut seen = Vec::new();
        for day in 1..=7 {
            let v = DateValue::from_naive(&naive(2023, 1, day, 0, 0, 0));
            seen.push(v.weekday_abbr());
        }
        // 2023-01-01 was a Sunday
        assert_eq!(seen, WEEKDAY_ABBR);

        for month in 1..=12 {
            let v = DateValue::from_naive(&naive(2023, month, 1, 0, 0, 0));
            assert_eq!(v.month_abbr(), MONTH_ABBR[month as usize - 1]);
        }
    }

    #[test]
    fn serializes_weekday_as_abbreviation() {
        let v = DateValue::from_naive(&naive(2023, 1, 5, 7, 8, 9));
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["weekday"], "Thu");
        assert_eq!(json["year"], 2023);
    }
}
