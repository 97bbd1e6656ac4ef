//! Core module - date values, the token table and the formatter

mod formatter;
mod input;
mod template;
mod tokens;
mod types;

pub use formatter::{
    DEFAULT_SEPARATOR, DEFAULT_TEMPLATE, DateFormatter, format_date, format_date_default,
    format_date_in,
};
pub use input::{DateInput, MAX_TIMESTAMP_MS};
pub use template::{FormatTemplate, SPLIT_DELIMITER, Segment};
pub use tokens::{TOKEN_TABLE, TokenRule, lookup};
pub use types::{DateValue, MONTH_ABBR, WEEKDAY_ABBR};
