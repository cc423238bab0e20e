//! Data-interchange (JSON) extractor.
//!
//! Flattening works on a parsed `serde_json::Value`; the structured fallback
//! re-serializes with canonical two-space indentation. Malformed input never
//! errors here: the raw text is emitted line by line with a best-effort
//! regex classification instead.

use crate::model::{DocumentLine, LineKind, TableProjection};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref KEY_LINE: Regex = Regex::new(r#"^\s*"[^"]*"\s*:"#).unwrap();
    static ref STRING_LINE: Regex = Regex::new(r#"^"(?:[^"\\]|\\.)*",?$"#).unwrap();
    static ref NUMBER_LINE: Regex =
        Regex::new(r"^-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?,?$").unwrap();
    static ref BOOLEAN_LINE: Regex = Regex::new(r"^(?:true|false),?$").unwrap();
    static ref NULL_LINE: Regex = Regex::new(r"^null,?$").unwrap();
    static ref PUNCTUATION_LINE: Regex = Regex::new(r"^[\[\]{},]+,?$").unwrap();
}

/// Indent width used by the canonical pretty form.
const INDENT: usize = 2;

/// Check whether a parsed tree can be represented as a rectangular table.
///
/// Eligible trees are an array whose first element is an object, or an
/// object containing at least one property whose value is such an array.
pub fn can_flatten(value: &Value) -> bool {
    candidate_array(value).is_some()
}

/// The array of records implied by the tree, if any.
fn candidate_array(value: &Value) -> Option<&Vec<Value>> {
    fn qualifies(items: &[Value]) -> bool {
        items.first().map_or(false, |first| first.is_object())
    }

    match value {
        Value::Array(items) if qualifies(items) => Some(items),
        Value::Object(map) => map.values().find_map(|v| match v {
            Value::Array(items) if qualifies(items) => Some(items),
            _ => None,
        }),
        _ => None,
    }
}

/// Flatten an eligible tree to a table projection.
///
/// Object elements contribute their keys to the header list in order of
/// first appearance; non-object elements are skipped. Missing fields render
/// as empty strings; nested values keep their compact serialized form.
pub fn flatten_to_table(value: &Value) -> TableProjection {
    let items = match candidate_array(value) {
        Some(items) => items,
        None => return TableProjection::new(),
    };

    let mut headers: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(
                headers
                    .iter()
                    .map(|h| map.get(h).map(cell_text).unwrap_or_default())
                    .collect(),
            ),
            _ => None,
        })
        .collect();

    debug!(
        "flattened JSON array: {} headers, {} rows",
        headers.len(),
        rows.len()
    );
    TableProjection::from_parts(headers, rows)
}

/// Display text for one cell value.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
        other => other.to_string(),
    }
}

/// Re-serialize JSON text as indented document lines.
///
/// On parse failure the raw text is emitted unmodified, line by line, with
/// approximate classification — this path must not fail.
pub fn pretty_lines(raw: &str) -> Vec<DocumentLine> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => {
            let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string());
            classify_text(&pretty)
        }
        Err(err) => {
            debug!("JSON parse failed ({}), structured raw fallback", err);
            classify_text(raw)
        }
    }
}

fn classify_text(text: &str) -> Vec<DocumentLine> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let indent = line.len() - line.trim_start().len();
            let trimmed = line.trim();
            DocumentLine::new((indent / INDENT) as u32, trimmed, classify_line(trimmed))
        })
        .collect()
}

fn classify_line(line: &str) -> LineKind {
    if KEY_LINE.is_match(line) {
        LineKind::Key
    } else if STRING_LINE.is_match(line) {
        LineKind::StringValue
    } else if NUMBER_LINE.is_match(line) {
        LineKind::NumberValue
    } else if BOOLEAN_LINE.is_match(line) {
        LineKind::BooleanValue
    } else if NULL_LINE.is_match(line) {
        LineKind::NullValue
    } else if PUNCTUATION_LINE.is_match(line) {
        LineKind::Punctuation
    } else {
        LineKind::Text
    }
}
