//! Parallel formatting of many inputs

use rayon::prelude::*;
use std::io::BufRead;

use datefmt::{DateFormatter, DateInput, FormatError, debug_log};

/// Result of formatting one raw input
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FormatOutcome {
    pub(crate) input: String,
    pub(crate) result: Result<String, FormatError>,
}

impl FormatOutcome {
    pub(crate) fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Interpret one command-line or stdin value
pub(crate) fn to_input(raw: &str, millis: bool) -> Result<DateInput, FormatError> {
    if !millis {
        return Ok(DateInput::from(raw));
    }
    raw.trim()
        .parse::<f64>()
        .map(DateInput::Number)
        .map_err(|_| FormatError::InvalidInput {
            input: raw.to_string(),
        })
}

/// Format every input in parallel, keeping input order
pub(crate) fn format_batch(
    formatter: &DateFormatter,
    inputs: &[String],
    millis: bool,
) -> Vec<FormatOutcome> {
    debug_log!(
        "Formatting {} input(s) with template \"{}\" ({} segments)",
        inputs.len(),
        formatter.template(),
        formatter.template().segment_count()
    );

    let outcomes: Vec<FormatOutcome> = inputs
        .par_iter()
        .map(|raw| FormatOutcome {
            input: raw.clone(),
            result: to_input(raw, millis).and_then(|input| formatter.format(input)),
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    debug_log!("{} formatted, {} failed", outcomes.len() - failed, failed);
    outcomes
}

/// Non-blank lines from a reader, trimmed of line endings
pub(crate) fn read_inputs<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datefmt::Timezone;

    fn utc_formatter(template: &str, separator: &str) -> DateFormatter {
        DateFormatter::new(template, separator).with_timezone(Timezone::Named(chrono_tz::UTC))
    }

    #[test]
    fn batch_keeps_order_and_reports_failures() {
        let inputs: Vec<String> = (1..=28)
            .map(|d| format!("2023-02-{d:02}T12:00:00Z"))
            .chain(std::iter::once("garbage".to_string()))
            .collect();
        let outcomes = format_batch(&utc_formatter("dd", ""), &inputs, false);

        assert_eq!(outcomes.len(), 29);
        for (i, outcome) in outcomes.iter().take(28).enumerate() {
            assert_eq!(outcome.result.as_deref(), Ok(format!("{:02}", i + 1).as_str()));
        }
        assert_eq!(outcomes[28].input, "garbage");
        assert!(!outcomes[28].is_ok());
    }

    #[test]
    fn millis_inputs() {
        let inputs = vec!["0".to_string(), " 86400000 ".to_string(), "1.5e12".to_string()];
        let outcomes = format_batch(&utc_formatter("yyyy-mm-dd", "-"), &inputs, true);
        let rendered: Vec<_> = outcomes
            .iter()
            .map(|o| o.result.clone().unwrap())
            .collect();
        assert_eq!(rendered, vec!["1970-01-01", "1970-01-02", "2017-07-14"]);
    }

    #[test]
    fn millis_rejects_text() {
        let err = to_input("2023-01-05", true).unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid date input "2023-01-05""#);
        assert!(to_input("NaN", true).is_ok());
    }

    #[test]
    fn read_inputs_skips_blank_lines() {
        let data = "2023-01-05\n\n   \n2024-02-29\r\n";
        let inputs = read_inputs(data.as_bytes()).unwrap();
        assert_eq!(inputs, vec!["2023-01-05", "2024-02-29"]);
    }
}
