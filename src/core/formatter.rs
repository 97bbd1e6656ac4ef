//! Token-substitution formatter
//!
//! `format_date` resolves the input, renders every template segment and joins
//! the results with the separator. The only failure is an input that does not
//! name a point in time.

use crate::core::input::DateInput;
use crate::core::template::FormatTemplate;
use crate::core::types::DateValue;
use crate::error::FormatError;
use crate::utils::Timezone;

pub const DEFAULT_TEMPLATE: &str = "yyyy-mm-dd";
pub const DEFAULT_SEPARATOR: &str = "-";

/// Reusable formatter: the template is parsed once
#[derive(Debug, Clone, PartialEq)]
pub struct DateFormatter {
    template: FormatTemplate,
    separator: String,
    timezone: Timezone,
}

impl Default for DateFormatter {
    fn default() -> Self {
        DateFormatter {
            template: FormatTemplate::parse(DEFAULT_TEMPLATE),
            separator: DEFAULT_SEPARATOR.to_string(),
            timezone: Timezone::Local,
        }
    }
}

impl DateFormatter {
    pub fn new(template: &str, separator: &str) -> Self {
        DateFormatter::default()
            .with_template(template)
            .with_separator(separator)
    }

    pub fn with_template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn template(&self) -> &FormatTemplate {
        &self.template
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    pub fn format(&self, input: impl Into<DateInput>) -> Result<String, FormatError> {
        let value = input.into().resolve(self.timezone)?;
        Ok(self.format_value(&value))
    }

    pub fn format_value(&self, value: &DateValue) -> String {
        self.template.render(value, &self.separator)
    }
}

/// Format in the local timezone
pub fn format_date(
    input: impl Into<DateInput>,
    template: &str,
    separator: &str,
) -> Result<String, FormatError> {
    format_date_in(input, template, separator, Timezone::Local)
}

pub fn format_date_in(
    input: impl Into<DateInput>,
    template: &str,
    separator: &str,
    timezone: Timezone,
) -> Result<String, FormatError> {
    DateFormatter::new(template, separator)
        .with_timezone(timezone)
        .format(input)
}

/// `format_date(input, "yyyy-mm-dd", "-")`
pub fn format_date_default(input: impl Into<DateInput>) -> Result<String, FormatError> {
    DateFormatter::default().format(input)
}
