//! Line-oriented structured view.

use serde::{Deserialize, Serialize};

/// One line of a structured (hierarchical) rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLine {
    /// Nesting depth (0 = top level); never negative by construction.
    pub depth: u32,

    /// Line text with indentation stripped.
    pub text: String,

    /// Syntactic classification. Drives color and emphasis only; it never
    /// affects layout.
    pub kind: LineKind,
}

impl DocumentLine {
    /// Create a new document line.
    pub fn new(depth: u32, text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            depth,
            text: text.into(),
            kind,
        }
    }
}

/// Syntactic kind of a structured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    /// Markup processing instruction / declaration (`<?xml ... ?>`)
    Declaration,
    /// Opening tag
    OpenTag,
    /// Closing tag
    CloseTag,
    /// Self-closing tag
    SelfClosing,
    /// Plain text content
    Text,
    /// JSON object key line
    Key,
    /// JSON string value
    StringValue,
    /// JSON number value
    NumberValue,
    /// JSON boolean value
    BooleanValue,
    /// JSON null value
    NullValue,
    /// Structural punctuation (braces, brackets)
    Punctuation,
}
