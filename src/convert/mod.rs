//! Source converters and the extension-keyed registry.
//!
//! Each supported source format registers a converter; the registry
//! dispatches on the (lowercased) file extension and every converter runs
//! the same pipeline: parse the text into a representation, compose it onto
//! a PDF surface, and hand back the finished bytes.
//!
//! # Example
//!
//! ```no_run
//! use docpress::convert::{ConverterRegistry, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> docpress::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     let result = registry.convert_file(Path::new("orders.csv"), &ConvertOptions::default())?;
//!     std::fs::write(&result.suggested_filename, &result.bytes)?;
//!     Ok(())
//! }
//! ```

mod csv;
mod json;
mod xml;

pub use csv::CsvConverter;
pub use json::JsonConverter;
pub use xml::XmlConverter;

use crate::detect::SourceFormat;
use crate::error::{Error, Result};
use crate::parser::choose_representation;
use crate::render::{compose, FormatProfile, PageSurface, PdfSurface, RenderOptions};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Options for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Finished PDF bytes
    pub bytes: Vec<u8>,

    /// Pages in the document
    pub page_count: usize,

    /// Whether the tabular layout was used
    pub is_table: bool,

    /// Rows (tabular) or lines (structured) across the document
    pub content_count: usize,

    /// Column count when tabular
    pub column_count: Option<usize>,

    /// Source format that produced this result
    pub format: SourceFormat,

    /// Default output filename for this format
    pub suggested_filename: &'static str,
}

impl ConvertResult {
    /// Output size in bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Trait for source-format converters.
///
/// Implement this to add a new input format; the conversion pipeline
/// itself is shared and provided by the default methods.
pub trait SourceConverter: Send + Sync {
    /// Name of this converter (lowercase format name).
    fn name(&self) -> &str;

    /// Supported file extensions, lowercase without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// The source format this converter handles.
    fn format(&self) -> SourceFormat;

    /// Presentation parameters for this format.
    fn profile(&self) -> FormatProfile;

    /// Convert source text to a PDF.
    fn convert_str(&self, content: &str, options: &ConvertOptions) -> Result<ConvertResult> {
        let profile = self.profile();
        let representation =
            choose_representation(content, self.format(), options.render.layout_mode);

        let title = options
            .render
            .title
            .as_deref()
            .unwrap_or(profile.default_title);
        let mut surface = PdfSurface::new(title);
        let summary = compose(&representation, &options.render, &profile, &mut surface)?;
        let bytes = surface.finish()?;

        Ok(ConvertResult {
            bytes,
            page_count: summary.page_count,
            is_table: summary.is_table,
            content_count: summary.content_count,
            column_count: summary.column_count,
            format: self.format(),
            suggested_filename: self.format().default_filename(),
        })
    }

    /// Convert a file at the given path.
    fn convert_file(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let content = fs::read_to_string(path)?;
        self.convert_str(&content, options)
    }

    /// Check whether this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping file extensions to converters.
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn SourceConverter>>,
    by_name: HashMap<String, Arc<dyn SourceConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in converters (CSV, JSON, XML).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CsvConverter::new()));
        registry.register(Arc::new(JsonConverter::new()));
        registry.register(Arc::new(XmlConverter::new()));
        registry
    }

    /// Register a converter for all its supported extensions.
    pub fn register(&mut self, converter: Arc<dyn SourceConverter>) {
        for ext in converter.supported_extensions() {
            self.converters
                .insert(ext.to_lowercase(), converter.clone());
        }
        self.by_name
            .insert(converter.name().to_lowercase(), converter);
    }

    /// Get a converter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn SourceConverter>> {
        self.converters.get(&ext.to_lowercase()).cloned()
    }

    /// Get a converter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn SourceConverter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.converters.contains_key(&ext.to_lowercase())
    }

    /// All supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.converters.keys().map(|s| s.as_str()).collect()
    }

    /// Convert a file, choosing the converter from its extension.
    pub fn convert_file(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::MissingExtension(path.display().to_string()))?;

        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnknownFormat(ext.to_string()))?;

        converter.convert_file(path, options)
    }

    /// Convert source text, choosing the converter from an extension.
    pub fn convert_str(
        &self,
        content: &str,
        ext: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnknownFormat(ext.to_string()))?;

        converter.convert_str(content, options)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_builder() {
        let options =
            ConvertOptions::new().with_render_options(RenderOptions::new().with_title("Report"));
        assert_eq!(options.render.title.as_deref(), Some("Report"));
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.supports("csv"));
        assert!(registry.supports("CSV"));
        assert!(registry.supports("json"));
        assert!(registry.supports("xml"));
        assert!(!registry.supports("yaml"));
    }

    #[test]
    fn test_registry_get_by_extension() {
        let registry = ConverterRegistry::with_defaults();
        let converter = registry.get_by_extension("json");
        assert!(converter.is_some());
        assert_eq!(converter.unwrap().name(), "json");
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.get_by_name("xml").is_some());
        assert!(registry.get_by_name("yaml").is_none());
    }

    #[test]
    fn test_missing_extension_error() {
        let registry = ConverterRegistry::with_defaults();
        let err = registry
            .convert_file(Path::new("noext"), &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingExtension(_)));
    }

    #[test]
    fn test_unknown_extension_error() {
        let registry = ConverterRegistry::with_defaults();
        let err = registry
            .convert_str("a,b", "yaml", &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(_)));
    }
}
