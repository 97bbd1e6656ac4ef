use comfy_table::{Cell, Color};

use datefmt::core::{DateValue, Segment, TOKEN_TABLE};
use datefmt::DateFormatter;

use crate::batch::FormatOutcome;
use crate::output::format::{create_styled_table, describe_separator, header_cell, styled_cell};

/// Fixed sample shown next to each token: Thursday 2023-01-05 07:08:09
fn sample_value() -> Option<DateValue> {
    let naive = chrono::NaiveDate::from_ymd_opt(2023, 1, 5)?.and_hms_opt(7, 8, 9)?;
    Some(DateValue::from_naive(&naive))
}

pub(crate) fn render_token_table(use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Token", use_color),
        header_cell("Meaning", use_color),
        header_cell("Example", use_color),
    ]);

    let token_color = if use_color { Some(Color::Green) } else { None };
    let sample = sample_value();
    for rule in &TOKEN_TABLE {
        let example = sample.as_ref().map(|v| rule.render(v)).unwrap_or_default();
        table.add_row(vec![
            styled_cell(rule.token, token_color),
            Cell::new(rule.description),
            Cell::new(example),
        ]);
    }
    table.to_string()
}

pub(crate) fn render_template_table(formatter: &DateFormatter, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Segment", use_color),
        header_cell("Kind", use_color),
    ]);

    let token_color = if use_color { Some(Color::Green) } else { None };
    let literal_color = if use_color { Some(Color::Yellow) } else { None };
    for (i, segment) in formatter.template().segments().iter().enumerate() {
        let (text, kind, color) = match segment {
            Segment::Token(rule) => (rule.token.to_string(), rule.description, token_color),
            Segment::Literal(text) => (format!("{text:?}"), "literal", literal_color),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            styled_cell(&text, color),
            Cell::new(kind),
        ]);
    }

    format!(
        "{table}\n  separator: {}  timezone: {}\n",
        describe_separator(formatter.separator()),
        formatter.timezone().name()
    )
}

/// Plain text: one formatted line per successful input
pub(crate) fn print_outcomes(outcomes: &[FormatOutcome]) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
