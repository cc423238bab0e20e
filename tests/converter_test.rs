//! Integration tests for the converter module.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use docpress::convert::{ConvertOptions, ConverterRegistry, SourceConverter};
use docpress::render::{Color, FormatProfile};
use docpress::{Error, SourceFormat};

/// Mock converter for registry dispatch tests.
struct MockConverter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl SourceConverter for MockConverter {
    fn name(&self) -> &str {
        self.name
    }

    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn profile(&self) -> FormatProfile {
        FormatProfile {
            default_title: "Mock Export",
            accent: Color::BLACK,
            count_label: "rows",
        }
    }
}

#[test]
fn test_registry_new_is_empty() {
    let registry = ConverterRegistry::new();
    assert!(!registry.supports("csv"));
    assert!(!registry.supports("json"));
}

#[test]
fn test_registry_with_defaults() {
    let registry = ConverterRegistry::with_defaults();
    assert!(registry.supports("csv"));
    assert!(registry.supports("JSON"));
    assert!(registry.supports("Xml"));
    assert!(!registry.supports("yaml"));
}

#[test]
fn test_registry_register_custom() {
    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter {
        extensions: vec!["tsv", "tab"],
        name: "tsv",
    }));

    assert!(registry.supports("tsv"));
    assert!(registry.supports("TAB"));
    assert!(registry.get_by_name("tsv").is_some());
}

#[test]
fn test_registry_unsupported_extension() {
    let registry = ConverterRegistry::with_defaults();
    let err = registry
        .convert_str("content", "xyz", &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::UnknownFormat(_)));
}

#[test]
fn test_registry_missing_extension() {
    let registry = ConverterRegistry::with_defaults();
    let err = registry
        .convert_file(Path::new("noextension"), &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::MissingExtension(_)));
}

#[test]
fn test_supported_extensions() {
    let registry = ConverterRegistry::with_defaults();
    let extensions = registry.supported_extensions();
    assert!(extensions.contains(&"csv"));
    assert!(extensions.contains(&"json"));
    assert!(extensions.contains(&"xml"));
}

#[test]
fn test_convert_file_from_disk() {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    file.write_all(b"Name,Age\nAlice,30\nBob,25").unwrap();

    let registry = ConverterRegistry::with_defaults();
    let result = registry
        .convert_file(file.path(), &ConvertOptions::default())
        .unwrap();

    assert!(result.bytes.starts_with(b"%PDF"));
    assert!(result.is_table);
    assert_eq!(result.content_count, 2);
    assert_eq!(result.column_count, Some(2));
    assert_eq!(result.suggested_filename, "export.pdf");
}

#[test]
fn test_convert_file_extension_case_insensitive() {
    let mut file = tempfile::Builder::new()
        .suffix(".JSON")
        .tempfile()
        .unwrap();
    file.write_all(br#"[{"id": 1}, {"id": 2}]"#).unwrap();

    let registry = ConverterRegistry::with_defaults();
    let result = registry
        .convert_file(file.path(), &ConvertOptions::default())
        .unwrap();

    assert_eq!(result.format, SourceFormat::Json);
    assert!(result.is_table);
}

#[test]
fn test_json_nested_object_is_structured() {
    let registry = ConverterRegistry::with_defaults();
    let result = registry
        .convert_str(
            r#"{"server": {"host": "localhost", "port": 8080}}"#,
            "json",
            &ConvertOptions::default(),
        )
        .unwrap();

    assert!(!result.is_table);
    assert_eq!(result.column_count, None);
    assert_eq!(result.suggested_filename, "json-export.pdf");
}

#[test]
fn test_malformed_json_still_converts() {
    let registry = ConverterRegistry::with_defaults();
    let result = registry
        .convert_str("{bad", "json", &ConvertOptions::default())
        .unwrap();

    assert!(!result.is_table);
    assert!(result.bytes.starts_with(b"%PDF"));
}

#[test]
fn test_xml_group_selection_end_to_end() {
    let xml = "<catalog>\
        <meta><version>2</version></meta>\
        <product><name>Widget</name><price>9.99</price></product>\
        <product><name>Gadget</name><price>19.99</price></product>\
        </catalog>";

    let registry = ConverterRegistry::with_defaults();
    let result = registry
        .convert_str(xml, "xml", &ConvertOptions::default())
        .unwrap();

    // Two <product> elements beat the single <meta>.
    assert!(result.is_table);
    assert_eq!(result.content_count, 2);
    assert_eq!(result.column_count, Some(2));
}

#[test]
fn test_empty_input_single_page() {
    let registry = ConverterRegistry::with_defaults();
    for ext in ["csv", "json", "xml"] {
        let result = registry
            .convert_str("", ext, &ConvertOptions::default())
            .unwrap();
        assert_eq!(result.page_count, 1, "{} empty input", ext);
        assert!(result.bytes.starts_with(b"%PDF"));
    }
}

#[test]
fn test_large_csv_paginates() {
    let mut csv = String::from("id,value\n");
    for i in 0..500 {
        csv.push_str(&format!("{},row-{}\n", i, i));
    }

    let registry = ConverterRegistry::with_defaults();
    let result = registry
        .convert_str(&csv, "csv", &ConvertOptions::default())
        .unwrap();

    assert!(result.page_count > 1);
    assert_eq!(result.content_count, 500);
}
