//! Source format detection.
//!
//! Detection is extension based and case-insensitive: `.csv`, `.json`, and
//! `.xml` map to their formats; anything else is rejected before the engine
//! runs. Content sniffing is deliberately not attempted; callers are
//! expected to name their files honestly.

use crate::error::{Error, Result};
use std::path::Path;

/// Supported source data formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Comma-separated values
    Csv,
    /// JSON data-interchange text
    Json,
    /// XML-like markup
    Xml,
}

impl SourceFormat {
    /// Detect the format from a file extension (without the leading dot).
    ///
    /// Matching is case-insensitive.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "json" => Ok(SourceFormat::Json),
            "xml" => Ok(SourceFormat::Xml),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }

    /// Detect the format from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::MissingExtension(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Default output filename when the caller supplies none.
    pub fn default_filename(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "export.pdf",
            SourceFormat::Json => "json-export.pdf",
            SourceFormat::Xml => "xml-export.pdf",
        }
    }

    /// Canonical lowercase extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Json => "json",
            SourceFormat::Xml => "xml",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "CSV"),
            SourceFormat::Json => write!(f, "JSON"),
            SourceFormat::Xml => write!(f, "XML"),
        }
    }
}

/// Check whether an extension is supported.
pub fn is_supported_extension(ext: &str) -> bool {
    SourceFormat::from_extension(ext).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(SourceFormat::from_extension("csv").unwrap(), SourceFormat::Csv);
        assert_eq!(SourceFormat::from_extension("JSON").unwrap(), SourceFormat::Json);
        assert_eq!(SourceFormat::from_extension("Xml").unwrap(), SourceFormat::Xml);
    }

    #[test]
    fn test_from_extension_rejected() {
        let result = SourceFormat::from_extension("docx");
        assert!(matches!(result, Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            SourceFormat::from_path("data/orders.CSV").unwrap(),
            SourceFormat::Csv
        );
        assert!(matches!(
            SourceFormat::from_path("noextension"),
            Err(Error::MissingExtension(_))
        ));
    }

    #[test]
    fn test_default_filenames() {
        assert_eq!(SourceFormat::Csv.default_filename(), "export.pdf");
        assert_eq!(SourceFormat::Json.default_filename(), "json-export.pdf");
        assert_eq!(SourceFormat::Xml.default_filename(), "xml-export.pdf");
    }

    #[test]
    fn test_is_supported_extension() {
        assert!(is_supported_extension("csv"));
        assert!(is_supported_extension("XML"));
        assert!(!is_supported_extension("pdf"));
    }
}
