//! Keyword-anchored scanning over the flat line sequence of a datasheet.
//!
//! All matching is case-insensitive substring containment, first match wins,
//! and every scan is a single forward pass over the lines.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::layout::{DEFAULT_SPEC_HEADING, DEFAULT_SPEC_TERMINATORS};

static PURITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)purity.*?(\d{2,3}\.?\d*)\s*%").expect("purity pattern is valid")
});

/// One row of the sales specification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    #[serde(rename = "Characteristic")]
    pub characteristic: String,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Specification")]
    pub specification: String,
    #[serde(rename = "Method")]
    pub method: String,
}

fn contains_ci(line_lower: &str, keyword: &str) -> bool {
    line_lower.contains(&keyword.to_lowercase())
}

/// Collects trimmed lines after the first line containing `start`, up to
/// (not including) the first later line containing any of `stops`.
fn capture_after<S: AsRef<str>>(start: &str, stops: &[S], lines: &[String]) -> Vec<String> {
    let mut content = Vec::new();
    let mut capturing = false;
    for line in lines {
        let lower = line.to_lowercase();
        if contains_ci(&lower, start) {
            capturing = true;
            continue;
        }
        if capturing {
            if stops.iter().any(|stop| contains_ci(&lower, stop.as_ref())) {
                break;
            }
            content.push(line.trim().to_string());
        }
    }
    content
}

/// Returns the text between the `start` heading and the first stop heading.
///
/// Heading lines are never part of the output. A stop keyword seen before
/// the start keyword has no effect. Returns an empty string when `start`
/// never appears.
pub fn extract_section<S: AsRef<str>>(start: &str, stops: &[S], lines: &[String]) -> String {
    capture_after(start, stops, lines).join("\n").trim().to_string()
}

/// Decodes the sales specification table using the default heading and
/// terminators.
pub fn extract_spec_table(lines: &[String]) -> Vec<SpecRow> {
    extract_spec_table_with(DEFAULT_SPEC_HEADING, DEFAULT_SPEC_TERMINATORS, lines)
}

/// Decodes the table region following `heading` into 4-column rows.
///
/// The region is read as a flat run of cells. Rows start at offsets
/// 0, 4, 8, ... and a row is only emitted when a full stride starting one
/// past it still has three cells left (`i + 2 < len` for `i = 1, 5, 9, ...`).
/// Wrapped or merged cells shift every later row; this is a known limitation
/// of positional decoding and is kept as is.
pub fn extract_spec_table_with<S: AsRef<str>>(
    heading: &str,
    terminators: &[S],
    lines: &[String],
) -> Vec<SpecRow> {
    let cells = capture_after(heading, terminators, lines);

    let mut rows = Vec::new();
    let mut i = 1;
    while i < cells.len() {
        if i + 2 < cells.len() {
            rows.push(SpecRow {
                characteristic: cells[i - 1].clone(),
                unit: cells[i].clone(),
                specification: cells[i + 1].clone(),
                method: cells[i + 2].clone(),
            });
        }
        i += 4;
    }
    tracing::debug!(cells = cells.len(), rows = rows.len(), "decoded spec table");
    rows
}

/// Flattens rows into `Characteristic | Unit | Specification | Method` lines.
pub fn format_spec_rows(rows: &[SpecRow]) -> String {
    rows.iter()
        .map(|r| {
            format!(
                "{} | {} | {} | {}",
                r.characteristic, r.unit, r.specification, r.method
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the percentage following "purity" on the first line mentioning it.
///
/// Only that first line is inspected; if it has no 2-3 digit percentage the
/// result is empty.
pub fn extract_purity(lines: &[String]) -> String {
    let Some(line) = lines.iter().find(|l| l.to_lowercase().contains("purity")) else {
        return String::new();
    };
    PURITY_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| format!("{}%", m.as_str()))
        .unwrap_or_default()
}
