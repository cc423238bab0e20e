//! XML source converter.

use crate::detect::SourceFormat;
use crate::render::{Color, FormatProfile};

use super::SourceConverter;

/// Converts XML files to PDFs.
///
/// Repeated sibling elements are flattened to a table when the layout
/// mode allows it; otherwise the markup renders as an indented,
/// syntax-colored listing.
#[derive(Debug, Clone, Default)]
pub struct XmlConverter {
    _private: (),
}

impl XmlConverter {
    /// Create a new XML converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl SourceConverter for XmlConverter {
    fn name(&self) -> &str {
        "xml"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Xml
    }

    fn profile(&self) -> FormatProfile {
        FormatProfile {
            default_title: "XML Export",
            accent: Color::rgb(142, 68, 173),
            count_label: "records",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConvertOptions;
    use crate::render::{LayoutMode, RenderOptions};

    const CATALOG: &str = "<catalog>\
        <product><name>Widget</name><price>9.99</price></product>\
        <product><name>Gadget</name><price>19.99</price></product>\
        </catalog>";

    #[test]
    fn test_xml_repeated_elements_flatten() {
        let converter = XmlConverter::new();
        let result = converter
            .convert_str(CATALOG, &ConvertOptions::default())
            .unwrap();

        assert!(result.is_table);
        assert_eq!(result.content_count, 2);
        assert_eq!(result.column_count, Some(2));
    }

    #[test]
    fn test_xml_without_repetition_stays_structured() {
        let converter = XmlConverter::new();
        let result = converter
            .convert_str("<config><host>local</host></config>", &ConvertOptions::default())
            .unwrap();

        assert!(!result.is_table);
        assert_eq!(result.suggested_filename, "xml-export.pdf");
    }

    #[test]
    fn test_xml_structured_mode_forces_listing() {
        let converter = XmlConverter::new();
        let options = ConvertOptions::new().with_render_options(
            RenderOptions::new().with_layout_mode(LayoutMode::Structured),
        );
        let result = converter.convert_str(CATALOG, &options).unwrap();

        assert!(!result.is_table);
    }
}
