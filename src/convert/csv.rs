//! CSV source converter.

use crate::detect::SourceFormat;
use crate::render::{Color, FormatProfile};

use super::SourceConverter;

/// Converts CSV files to tabular PDFs.
///
/// CSV input is always rendered as a table regardless of the requested
/// layout mode; there is no structured rendering for flat rows.
#[derive(Debug, Clone, Default)]
pub struct CsvConverter {
    _private: (),
}

impl CsvConverter {
    /// Create a new CSV converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl SourceConverter for CsvConverter {
    fn name(&self) -> &str {
        "csv"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["csv"]
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn profile(&self) -> FormatProfile {
        FormatProfile {
            default_title: "CSV Export",
            accent: Color::rgb(52, 152, 219),
            count_label: "rows",
        }
    }
}
