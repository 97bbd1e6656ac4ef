//! Format templates
//!
//! A template is lowercased and split on `-`. The split delimiter is fixed
//! and has nothing to do with the separator used to join the output.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::core::tokens::{self, TokenRule};
use crate::core::types::DateValue;

pub const SPLIT_DELIMITER: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Token(&'static TokenRule),
    /// Unknown segment, emitted verbatim (already lowercased)
    Literal(String),
}

impl Segment {
    fn render(&self, value: &DateValue) -> String {
        match self {
            Segment::Token(rule) => rule.render(value),
            Segment::Literal(text) => text.clone(),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Segment::Token(rule) => rule.token,
            Segment::Literal(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Never fails: anything that is not a token becomes a literal
    pub fn parse(template: &str) -> Self {
        let segments = template
            .to_lowercase()
            .split(SPLIT_DELIMITER)
            .map(|part| match tokens::lookup(part) {
                Some(rule) => Segment::Token(rule),
                None => Segment::Literal(part.to_string()),
            })
            .collect();
        FormatTemplate { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Always at least one: an empty template is a single empty literal
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn token_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Token(_)))
            .count()
    }

    pub fn render(&self, value: &DateValue, separator: &str) -> String {
        self.segments
            .iter()
            .map(|segment| segment.render(value))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl FromStr for FormatTemplate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FormatTemplate::parse(s))
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SPLIT_DELIMITER}")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}
