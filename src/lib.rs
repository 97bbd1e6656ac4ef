//! Token-based date formatting.
//!
//! ```
//! use datefmt::format_date;
//!
//! let out = format_date("2023-01-05T07:08:09", "ddd-dd-mmm-yy", " ").unwrap();
//! assert_eq!(out, "Thu 05 Jan 23");
//! ```

pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::{
    DEFAULT_SEPARATOR, DEFAULT_TEMPLATE, DateFormatter, DateInput, DateValue, FormatTemplate,
    TOKEN_TABLE, format_date, format_date_default, format_date_in,
};
pub use error::{AppError, FormatError};
pub use utils::Timezone;
