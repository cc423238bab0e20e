//! Rendering options and configuration.

use crate::layout::{FontTier, Orientation, PageSize};
use serde::{Deserialize, Serialize};

/// Options for composing the output document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page size preset
    pub page_size: PageSize,

    /// Page orientation
    pub orientation: Orientation,

    /// Font size tier (fixes body/header/title point sizes)
    pub font_tier: FontTier,

    /// How to choose between tabular and structured layout
    pub layout_mode: LayoutMode,

    /// Prepend a fixed-width row-number column to tables
    pub row_numbers: bool,

    /// Render the metadata block (timestamp, counts) under the title
    pub metadata: bool,

    /// Custom document title (format default when absent)
    pub title: Option<String>,

    /// Logo image bytes (PNG or JPEG); bad data is skipped, not fatal
    pub logo: Option<Vec<u8>>,

    /// Custom top-right header text
    pub header_text: Option<String>,

    /// Custom right-aligned footer text
    pub footer_text: Option<String>,

    /// Diagonal watermark text
    pub watermark: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size preset.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the page orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Use landscape orientation.
    pub fn landscape(mut self) -> Self {
        self.orientation = Orientation::Landscape;
        self
    }

    /// Set the font size tier.
    pub fn with_font_tier(mut self, tier: FontTier) -> Self {
        self.font_tier = tier;
        self
    }

    /// Set the layout mode.
    pub fn with_layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    /// Enable or disable the row-number column.
    pub fn with_row_numbers(mut self, enabled: bool) -> Self {
        self.row_numbers = enabled;
        self
    }

    /// Enable or disable the metadata block.
    pub fn with_metadata(mut self, enabled: bool) -> Self {
        self.metadata = enabled;
        self
    }

    /// Set a custom title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set logo image bytes.
    pub fn with_logo(mut self, data: Vec<u8>) -> Self {
        self.logo = Some(data);
        self
    }

    /// Set header text.
    pub fn with_header_text(mut self, text: impl Into<String>) -> Self {
        self.header_text = Some(text.into());
        self
    }

    /// Set footer text.
    pub fn with_footer_text(mut self, text: impl Into<String>) -> Self {
        self.footer_text = Some(text.into());
        self
    }

    /// Set watermark text.
    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        self.watermark = Some(text.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            font_tier: FontTier::Medium,
            layout_mode: LayoutMode::Auto,
            row_numbers: false,
            metadata: true,
            title: None,
            logo: None,
            header_text: None,
            footer_text: None,
            watermark: None,
        }
    }
}

/// How the representation is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Table when the data qualifies, structured otherwise
    #[default]
    Auto,
    /// Force the tabular layout (falls back when nothing qualifies)
    Table,
    /// Force the structured layout
    Structured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .with_page_size(PageSize::Letter)
            .landscape()
            .with_font_tier(FontTier::Large)
            .with_row_numbers(true)
            .with_title("Quarterly Orders")
            .with_watermark("DRAFT");

        assert_eq!(options.page_size, PageSize::Letter);
        assert_eq!(options.orientation, Orientation::Landscape);
        assert_eq!(options.font_tier, FontTier::Large);
        assert!(options.row_numbers);
        assert_eq!(options.title.as_deref(), Some("Quarterly Orders"));
        assert_eq!(options.watermark.as_deref(), Some("DRAFT"));
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.layout_mode, LayoutMode::Auto);
        assert!(options.metadata);
        assert!(!options.row_numbers);
        assert!(options.title.is_none());
    }
}
