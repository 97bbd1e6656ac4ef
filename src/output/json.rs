use serde::Serialize;

use datefmt::DateFormatter;
use datefmt::core::{Segment, TOKEN_TABLE};

use crate::batch::FormatOutcome;
use datefmt::AppError;

#[derive(Serialize)]
struct OutcomeJson<'a> {
    input: &'a str,
    output: Option<&'a str>,
    error: Option<String>,
}

pub(crate) fn outcomes_json(outcomes: &[FormatOutcome]) -> Result<String, AppError> {
    let rows: Vec<OutcomeJson<'_>> = outcomes
        .iter()
        .map(|o| OutcomeJson {
            input: &o.input,
            output: o.result.as_deref().ok(),
            error: o.result.as_ref().err().map(ToString::to_string),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub(crate) fn tokens_json() -> Result<String, AppError> {
    let rows: Vec<serde_json::Value> = TOKEN_TABLE
        .iter()
        .map(|rule| {
            serde_json::json!({
                "token": rule.token,
                "description": rule.description,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub(crate) fn template_json(formatter: &DateFormatter) -> Result<String, AppError> {
    let segments: Vec<serde_json::Value> = formatter
        .template()
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Token(rule) => serde_json::json!({ "kind": "token", "value": rule.token }),
            Segment::Literal(text) => serde_json::json!({ "kind": "literal", "value": text }),
        })
        .collect();
    let output = serde_json::json!({
        "template": formatter.template().to_string(),
        "separator": formatter.separator(),
        "timezone": formatter.timezone().name(),
        "segments": segments,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
