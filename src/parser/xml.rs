//! Markup hierarchy extractor.
//!
//! This is a documented heuristic parser, not a conforming XML parser. It
//! relies on regex-level tag matching and single-level (non-recursive)
//! open/close pairing, which is sufficient for shallow data-exchange
//! documents. Explicit non-goals: namespaces, CDATA sections, and nested
//! same-name elements beyond one level.

use crate::model::{DocumentLine, LineKind, Record, RecordGroup, TableProjection};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    /// Opening tag: name plus raw attribute text. Never matches `</...>`,
    /// `<?...?>`, or `<!...>` because the first name character must be a
    /// letter or underscore.
    static ref OPEN_TAG: Regex =
        Regex::new(r"<([A-Za-z_][A-Za-z0-9_.:-]*)([^<>]*)>").unwrap();

    /// Attribute pair with a double- or single-quoted value.
    static ref ATTRIBUTE: Regex =
        Regex::new(r#"([A-Za-z_][A-Za-z0-9_.:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
}

/// Prefix marking attribute-origin fields, keeping them distinct from child
/// elements sharing the same name.
pub const ATTRIBUTE_PREFIX: &str = "@";

/// One well-formed element span: tag name, attribute text, inner content.
struct ElementSpan<'a> {
    name: &'a str,
    attrs: &'a str,
    content: &'a str,
}

/// Locate all well-formed element spans in source order.
///
/// For each opening tag the matching close is the next literal `</name>`;
/// spans of container elements therefore include their children verbatim,
/// and the children are matched again on their own.
fn find_spans(text: &str) -> Vec<ElementSpan<'_>> {
    let mut spans = Vec::new();

    for caps in OPEN_TAG.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str();
        let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        // Self-closing tags carry no content span.
        if attrs.trim_end().ends_with('/') {
            continue;
        }

        let close = format!("</{}>", name);
        if let Some(rel) = text[whole.end()..].find(&close) {
            spans.push(ElementSpan {
                name,
                attrs,
                content: &text[whole.end()..whole.end() + rel],
            });
        }
    }

    spans
}

/// Extract all repeating record groups, bucketed by tag name in order of
/// first appearance.
pub fn extract_record_groups(text: &str) -> Vec<RecordGroup> {
    let mut groups: Vec<RecordGroup> = Vec::new();

    for span in find_spans(text) {
        let record = span_to_record(&span);

        match groups.iter_mut().find(|g| g.name == span.name) {
            Some(group) => {
                if !record.is_empty() {
                    group.push(record);
                }
            }
            None => {
                let mut group = RecordGroup::new(span.name);
                if !record.is_empty() {
                    group.push(record);
                }
                groups.push(group);
            }
        }
    }

    groups
}

/// Select the implied "row" entity: the group with the strictly largest
/// member count among groups with more than one member, ties broken by
/// first-seen tag name.
pub fn selected_group(text: &str) -> Option<RecordGroup> {
    let groups = extract_record_groups(text);
    let mut best: Option<RecordGroup> = None;

    for group in groups {
        if group.len() > 1 && best.as_ref().map_or(true, |b| group.len() > b.len()) {
            best = Some(group);
        }
    }

    if let Some(ref group) = best {
        debug!(
            "selected markup group '{}' with {} members",
            group.name,
            group.len()
        );
    }
    best
}

/// Project the selected repeating group to a table. Empty when no tag
/// repeats, which routes the caller to the structured fallback.
pub fn flatten_to_table(text: &str) -> TableProjection {
    match selected_group(text) {
        Some(group) => TableProjection::from_group(&group),
        None => TableProjection::new(),
    }
}

fn span_to_record(span: &ElementSpan<'_>) -> Record {
    let mut record = Record::new();

    for caps in ATTRIBUTE.captures_iter(span.attrs) {
        let key = caps.get(1).unwrap().as_str();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or("");
        record.set(format!("{}{}", ATTRIBUTE_PREFIX, key), value);
    }

    // Direct text-only children become fields keyed by their tag name.
    for caps in OPEN_TAG.captures_iter(span.content) {
        let whole = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str();
        let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if attrs.trim_end().ends_with('/') {
            continue;
        }

        let close = format!("</{}>", name);
        if let Some(rel) = span.content[whole.end()..].find(&close) {
            let inner = &span.content[whole.end()..whole.end() + rel];
            if !inner.contains('<') {
                record.set(name, inner.trim());
            }
        }
    }

    record
}

/// Pretty-print markup into indented document lines.
///
/// Line-oriented heuristic: a break is inserted at every `><` boundary, then
/// each line is re-indented. A closing tag decrements depth before being
/// emitted; any emitted line that is not a declaration, not a closing tag,
/// not self-closing, and does not itself contain a closing tag increments
/// depth for the lines that follow. Depth never goes negative.
pub fn pretty_lines(text: &str) -> Vec<DocumentLine> {
    let broken = text.replace("><", ">\n<");
    let mut lines = Vec::new();
    let mut depth: u32 = 0;

    for raw in broken.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let kind = classify_line(trimmed);

        if kind == LineKind::CloseTag {
            depth = depth.saturating_sub(1);
        }

        lines.push(DocumentLine::new(depth, trimmed, kind));

        let opens_scope = !matches!(
            kind,
            LineKind::Declaration | LineKind::CloseTag | LineKind::SelfClosing
        ) && !trimmed.contains("</");
        if opens_scope {
            depth += 1;
        }
    }

    lines
}

fn classify_line(line: &str) -> LineKind {
    if line.starts_with("<?") || line.starts_with("<!") {
        LineKind::Declaration
    } else if line.starts_with("</") {
        LineKind::CloseTag
    } else if line.ends_with("/>") {
        LineKind::SelfClosing
    } else if line.starts_with('<') {
        LineKind::OpenTag
    } else {
        LineKind::Text
    }
}
