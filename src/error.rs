use thiserror::Error;

/// The single failure mode of formatting: the input is not a point in time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid date input \"{input}\"")]
    InvalidInput { input: String },
}

impl FormatError {
    pub(crate) fn invalid(input: impl ToString) -> Self {
        FormatError::InvalidInput {
            input: input.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_display_input() {
        let e = FormatError::InvalidInput {
            input: "not-a-date".to_string(),
        };
        assert_eq!(e.to_string(), r#"Invalid date input "not-a-date""#);
    }

    #[test]
    fn format_error_invalid_from_number() {
        assert_eq!(
            FormatError::invalid(f64::NAN),
            FormatError::InvalidInput {
                input: "NaN".to_string()
            }
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_from_format_error() {
        let app: AppError = FormatError::invalid("abc").into();
        assert_eq!(app.to_string(), r#"Invalid date input "abc""#);
    }
}
