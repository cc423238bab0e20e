//! Source parsing and representation routing.
//!
//! Each format module normalizes raw text into either the rectangular table
//! model or the hierarchical line model; [`choose_representation`] is the
//! flattening heuristic that routes between the two.

pub mod csv;
pub mod json;
pub mod xml;

use crate::detect::SourceFormat;
use crate::model::{Representation, TableProjection};
use crate::render::LayoutMode;
use log::debug;

/// Build a table projection from CSV text: first row is the header, the
/// rest are body rows carried as parsed (ragged widths preserved).
pub fn csv_table(content: &str) -> TableProjection {
    let mut rows = csv::tokenize(content);
    if rows.is_empty() {
        return TableProjection::new();
    }
    let headers = rows.remove(0);
    TableProjection::from_parts(headers, rows)
}

/// Decide how the content should be represented.
///
/// `Table` wins when the mode forces it or when `Auto` mode finds an
/// eligible repeating structure; everything else routes to `Structured`.
/// CSV is always tabular — the layout mode only matters for JSON and XML.
/// A JSON parse failure always forces the structured raw fallback, and a
/// forced table mode that produces an empty projection falls back as well;
/// both are routing decisions, not errors.
pub fn choose_representation(
    content: &str,
    format: SourceFormat,
    mode: LayoutMode,
) -> Representation {
    let representation = match format {
        SourceFormat::Csv => Representation::Table(csv_table(content)),

        SourceFormat::Json => match serde_json::from_str::<serde_json::Value>(content) {
            Err(_) => Representation::Structured(json::pretty_lines(content)),
            Ok(value) => match mode {
                LayoutMode::Structured => Representation::Structured(json::pretty_lines(content)),
                LayoutMode::Table => table_or_fallback(json::flatten_to_table(&value), || {
                    json::pretty_lines(content)
                }),
                LayoutMode::Auto => {
                    if json::can_flatten(&value) {
                        Representation::Table(json::flatten_to_table(&value))
                    } else {
                        Representation::Structured(json::pretty_lines(content))
                    }
                }
            },
        },

        SourceFormat::Xml => match mode {
            LayoutMode::Structured => Representation::Structured(xml::pretty_lines(content)),
            LayoutMode::Table | LayoutMode::Auto => {
                table_or_fallback(xml::flatten_to_table(content), || {
                    xml::pretty_lines(content)
                })
            }
        },
    };

    debug!(
        "{} routed to {} layout ({} {})",
        format,
        if representation.is_table() {
            "table"
        } else {
            "structured"
        },
        representation.content_count(),
        if representation.is_table() { "rows" } else { "lines" },
    );
    representation
}

fn table_or_fallback<F>(table: TableProjection, fallback: F) -> Representation
where
    F: FnOnce() -> Vec<crate::model::DocumentLine>,
{
    if table.is_empty() {
        Representation::Structured(fallback())
    } else {
        Representation::Table(table)
    }
}
