//! # docpress
//!
//! Data-to-PDF composition library for Rust.
//!
//! This library turns CSV, JSON, and XML exports into paginated, styled
//! PDF documents. Tabular-looking data renders as a table with a repeated
//! header row; hierarchical data renders as an indented, syntax-colored
//! listing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docpress::convert_file;
//!
//! fn main() -> docpress::Result<()> {
//!     let result = convert_file("orders.csv")?;
//!     std::fs::write("orders.pdf", &result.bytes)?;
//!     println!("{} pages", result.page_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Three input formats**: CSV, JSON, XML, dispatched by extension
//! - **Auto layout**: flattens to a table when the data allows, falls back
//!   to a structured listing otherwise
//! - **Pagination**: repeated table headers, continuation markers, and
//!   `Page i of N` footers
//! - **Decorations**: title, metadata block, logo, custom header/footer
//!   text, row numbers, and a diagonal watermark
//! - **Page setup**: A4 or Letter, portrait or landscape, three font tiers

pub mod convert;
pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, ConverterRegistry, SourceConverter};
pub use detect::{is_supported_extension, SourceFormat};
pub use error::{Error, Result};
pub use model::{DocumentLine, LineKind, Record, RecordGroup, Representation, TableProjection};
pub use render::{
    FontStyle, LayoutMode, PageSurface, RecordingSurface, RenderOptions, TextAlign,
};

use layout::{FontTier, Orientation, PageSize};
use std::path::Path;

/// Convert a data file to a PDF using default options.
///
/// The converter is chosen from the file extension.
///
/// # Example
///
/// ```no_run
/// use docpress::convert_file;
///
/// let result = convert_file("catalog.xml").unwrap();
/// std::fs::write(result.suggested_filename, &result.bytes).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConvertResult> {
    let registry = ConverterRegistry::with_defaults();
    registry.convert_file(path.as_ref(), &ConvertOptions::default())
}

/// Convert a data file to a PDF with custom options.
///
/// # Example
///
/// ```no_run
/// use docpress::{convert_file_with_options, ConvertOptions, RenderOptions};
///
/// let options = ConvertOptions::new()
///     .with_render_options(RenderOptions::new().with_title("Q3 Orders"));
/// let result = convert_file_with_options("orders.csv", &options).unwrap();
/// ```
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    let registry = ConverterRegistry::with_defaults();
    registry.convert_file(path.as_ref(), options)
}

/// Convert source text to a PDF, choosing the converter by format.
///
/// # Example
///
/// ```no_run
/// use docpress::{convert_str, SourceFormat};
///
/// let result = convert_str("a,b\n1,2", SourceFormat::Csv).unwrap();
/// assert!(result.is_table);
/// ```
pub fn convert_str(content: &str, format: SourceFormat) -> Result<ConvertResult> {
    let registry = ConverterRegistry::with_defaults();
    registry.convert_str(content, format.extension(), &ConvertOptions::default())
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use docpress::Docpress;
///
/// let result = Docpress::new()
///     .title("Inventory")
///     .landscape()
///     .row_numbers()
///     .watermark("DRAFT")
///     .convert_file("inventory.csv")?;
/// std::fs::write("inventory.pdf", &result.bytes)?;
/// # Ok::<(), docpress::Error>(())
/// ```
pub struct Docpress {
    render_options: RenderOptions,
}

impl Docpress {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, size: PageSize) -> Self {
        self.render_options = self.render_options.with_page_size(size);
        self
    }

    /// Use landscape orientation.
    pub fn landscape(mut self) -> Self {
        self.render_options = self.render_options.landscape();
        self
    }

    /// Set the font tier.
    pub fn font_tier(mut self, tier: FontTier) -> Self {
        self.render_options = self.render_options.with_font_tier(tier);
        self
    }

    /// Force a layout mode instead of auto-detection.
    pub fn layout_mode(mut self, mode: LayoutMode) -> Self {
        self.render_options = self.render_options.with_layout_mode(mode);
        self
    }

    /// Add a row-number column to tabular output.
    pub fn row_numbers(mut self) -> Self {
        self.render_options = self.render_options.with_row_numbers(true);
        self
    }

    /// Suppress the generated-timestamp metadata block.
    pub fn no_metadata(mut self) -> Self {
        self.render_options = self.render_options.with_metadata(false);
        self
    }

    /// Place a logo image in the top-left corner of every page.
    pub fn logo(mut self, data: Vec<u8>) -> Self {
        self.render_options = self.render_options.with_logo(data);
        self
    }

    /// Set custom header text (top-right of every page).
    pub fn header_text(mut self, text: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_header_text(text);
        self
    }

    /// Set custom footer text (bottom-right of every page).
    pub fn footer_text(mut self, text: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_footer_text(text);
        self
    }

    /// Stamp a diagonal watermark across every page.
    pub fn watermark(mut self, text: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_watermark(text);
        self
    }

    /// Convert a file, choosing the converter from its extension.
    pub fn convert_file<P: AsRef<Path>>(self, path: P) -> Result<ConvertResult> {
        let options = ConvertOptions::new().with_render_options(self.render_options);
        let registry = ConverterRegistry::with_defaults();
        registry.convert_file(path.as_ref(), &options)
    }

    /// Convert source text of a known format.
    pub fn convert_str(self, content: &str, format: SourceFormat) -> Result<ConvertResult> {
        let options = ConvertOptions::new().with_render_options(self.render_options);
        let registry = ConverterRegistry::with_defaults();
        registry.convert_str(content, format.extension(), &options)
    }

    /// Compose source text onto a caller-provided surface.
    ///
    /// This skips PDF serialization entirely; pair it with a
    /// [`RecordingSurface`] to inspect layout decisions without producing
    /// output bytes.
    pub fn compose_into(
        self,
        content: &str,
        format: SourceFormat,
        surface: &mut dyn PageSurface,
    ) -> Result<render::ComposeSummary> {
        let registry = ConverterRegistry::with_defaults();
        let converter = registry
            .get_by_extension(format.extension())
            .ok_or_else(|| Error::UnknownFormat(format.extension().to_string()))?;

        let representation =
            parser::choose_representation(content, format, self.render_options.layout_mode);
        render::compose(
            &representation,
            &self.render_options,
            &converter.profile(),
            surface,
        )
    }
}

impl Default for Docpress {
    fn default() -> Self {
        Self::new()
    }
}
