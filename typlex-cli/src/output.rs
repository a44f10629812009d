//! Rendering of command results in the configured output format.

use crate::error::CliError;
use serde::Serialize;
use std::fmt::Write;
use typlex_config::OutputFormat;
use typlex_parser::typlex::highlighting::LineSpan;
use typlex_parser::typlex::spelling::WordSpan;
use typlex_parser::{HighlightingMarker, Token};

/// A marker as printed, optionally with the text it covers.
#[derive(Debug, Serialize)]
pub struct MarkerRow<'a> {
    #[serde(flatten)]
    pub marker: HighlightingMarker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
}

pub fn render<T, F>(
    items: &[T],
    format: OutputFormat,
    pretty: bool,
    text_line: F,
) -> Result<String, CliError>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    let rendered = match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for item in items {
                // Writing into a String cannot fail
                let _ = writeln!(out, "{}", text_line(item));
            }
            out
        }
        OutputFormat::Json if pretty => serde_json::to_string_pretty(items)? + "\n",
        OutputFormat::Json => serde_json::to_string(items)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(items)?,
    };
    Ok(rendered)
}

pub fn token_line(token: &Token<'_>) -> String {
    token.to_string()
}

pub fn marker_line(row: &MarkerRow<'_>) -> String {
    match row.text {
        Some(text) => format!("{} {:?}", row.marker, text),
        None => row.marker.to_string(),
    }
}

pub fn line_span_line(span: &LineSpan) -> String {
    format!(
        "{}:{} {} {}",
        span.line + 1,
        span.column + 1,
        span.len,
        span.kind
    )
}

pub fn word_line(word: &WordSpan<'_>) -> String {
    format!("{}..{} {}", word.start, word.end(), word.word)
}
