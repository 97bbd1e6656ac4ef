//! Fixed token table
//!
//! Each entry maps a lowercase token to the function that renders it from a
//! `DateValue`. Lookup is exact and case-sensitive; callers lowercase first.

use std::fmt;

use crate::core::types::DateValue;

pub struct TokenRule {
    pub token: &'static str,
    pub description: &'static str,
    render_fn: fn(&DateValue) -> String,
}

impl TokenRule {
    pub fn render(&self, value: &DateValue) -> String {
        (self.render_fn)(value)
    }
}

impl fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRule")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl PartialEq for TokenRule {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for TokenRule {}

pub static TOKEN_TABLE: [TokenRule; 9] = [
    TokenRule {
        token: "yyyy",
        description: "full year",
        render_fn: full_year,
    },
    TokenRule {
        token: "yy",
        description: "two-digit year",
        render_fn: two_digit_year,
    },
    TokenRule {
        token: "mm",
        description: "month number (01-12)",
        render_fn: month,
    },
    TokenRule {
        token: "dd",
        description: "day of month (01-31)",
        render_fn: day,
    },
    TokenRule {
        token: "ddd",
        description: "abbreviated weekday name",
        render_fn: weekday_name,
    },
    TokenRule {
        token: "mmm",
        description: "abbreviated month name",
        render_fn: month_name,
    },
    TokenRule {
        token: "hh",
        description: "hour, 24-hour clock (00-23)",
        render_fn: hour,
    },
    TokenRule {
        token: "mi",
        description: "minute (00-59)",
        render_fn: minute,
    },
    TokenRule {
        token: "ss",
        description: "second (00-59)",
        render_fn: second,
    },
];

pub fn lookup(token: &str) -> Option<&'static TokenRule> {
    TOKEN_TABLE.iter().find(|rule| rule.token == token)
}

fn full_year(value: &DateValue) -> String {
    value.year.to_string()
}

/// Last two characters of the decimal year, so year 5 stays "5"
fn two_digit_year(value: &DateValue) -> String {
    let year = value.year.to_string();
    let start = year.len().saturating_sub(2);
    year[start..].to_string()
}

fn month(value: &DateValue) -> String {
    pad2(value.month)
}

fn day(value: &DateValue) -> String {
    pad2(value.day)
}

fn weekday_name(value: &DateValue) -> String {
    value.weekday_abbr().to_string()
}

fn month_name(value: &DateValue) -> String {
    value.month_abbr().to_string()
}

fn hour(value: &DateValue) -> String {
    pad2(value.hour)
}

fn minute(value: &DateValue) -> String {
    pad2(value.minute)
}

fn second(value: &DateValue) -> String {
    pad2(value.second)
}

fn pad2(n: u32) -> String {
    format!("{n:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn value(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> DateValue {
        let naive: NaiveDateTime = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap();
        DateValue::from_naive(&naive)
    }

    fn render(token: &str, v: &DateValue) -> String {
        lookup(token).unwrap().render(v)
    }

    #[test]
    fn table_has_nine_distinct_lowercase_tokens() {
        let mut names: Vec<_> = TOKEN_TABLE.iter().map(|r| r.token).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
        assert!(names.iter().all(|n| *n == n.to_lowercase()));
        assert!(names.iter().all(|n| !n.contains('-')));
    }

    #[test]
    fn lookup_unknown_and_uppercase_miss() {
        assert!(lookup("t").is_none());
        assert!(lookup("YYYY").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("yyy").is_none());
    }

    #[test]
    fn renders_reference_date() {
        let v = value(2023, 1, 5, 7, 8, 9);
        assert_eq!(render("yyyy", &v), "2023");
        assert_eq!(render("yy", &v), "23");
        assert_eq!(render("mm", &v), "01");
        assert_eq!(render("dd", &v), "05");
        assert_eq!(render("ddd", &v), "Thu");
        assert_eq!(render("mmm", &v), "Jan");
        assert_eq!(render("hh", &v), "07");
        assert_eq!(render("mi", &v), "08");
        assert_eq!(render("ss", &v), "09");
    }

    #[test]
    fn two_digit_fields_never_exceed_two_chars() {
        let v = value(2024, 12, 31, 23, 59, 59);
        for token in ["mm", "dd", "hh", "mi", "ss"] {
            assert_eq!(render(token, &v).len(), 2, "token {token}");
        }
        assert_eq!(render("hh", &value(2024, 1, 1, 0, 0, 0)), "00");
    }

    // --- Year edge cases ---

    #[test]
    fn two_digit_year_keeps_last_two_characters() {
        assert_eq!(render("yy", &value(2005, 1, 1, 0, 0, 0)), "05");
        assert_eq!(render("yy", &value(95, 1, 1, 0, 0, 0)), "95");
        assert_eq!(render("yy", &value(5, 1, 1, 0, 0, 0)), "5");
        assert_eq!(render("yy", &value(0, 1, 1, 0, 0, 0)), "0");
        assert_eq!(render("yy", &value(-5, 1, 1, 0, 0, 0)), "-5");
        assert_eq!(render("yy", &value(-2023, 1, 1, 0, 0, 0)), "23");
        assert_eq!(render("yy", &value(12345, 1, 1, 0, 0, 0)), "45");
    }

    #[test]
    fn full_year_is_unpadded() {
        assert_eq!(render("yyyy", &value(5, 1, 1, 0, 0, 0)), "5");
        assert_eq!(render("yyyy", &value(0, 1, 1, 0, 0, 0)), "0");
        assert_eq!(render("yyyy", &value(-44, 3, 15, 0, 0, 0)), "-44");
        assert_eq!(render("yyyy", &value(12345, 1, 1, 0, 0, 0)), "12345");
    }
}
