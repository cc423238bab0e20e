//! JSON source converter.

use crate::detect::SourceFormat;
use crate::render::{Color, FormatProfile};

use super::SourceConverter;

/// Converts JSON files to PDFs.
///
/// Arrays of objects flatten to a table when the layout mode allows it;
/// everything else renders as a pretty-printed, syntax-colored listing.
/// Malformed JSON falls back to a plain listing of the raw text rather
/// than failing the conversion.
#[derive(Debug, Clone, Default)]
pub struct JsonConverter {
    _private: (),
}

impl JsonConverter {
    /// Create a new JSON converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl SourceConverter for JsonConverter {
    fn name(&self) -> &str {
        "json"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn profile(&self) -> FormatProfile {
        FormatProfile {
            default_title: "JSON Export",
            accent: Color::rgb(230, 126, 34),
            count_label: "items",
        }
    }
}
