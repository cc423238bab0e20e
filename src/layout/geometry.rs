//! Page geometry: size presets, orientation, font tiers, margins.
//!
//! All dimensions are PDF points (1 point = 1/72 inch).

use serde::{Deserialize, Serialize};

/// Horizontal margin on both edges.
pub const MARGIN_X: f32 = 40.0;

/// Bottom margin reserved for the footer band.
pub const MARGIN_BOTTOM: f32 = 54.0;

/// Baseline of the title on a first page.
pub const TITLE_BASELINE: f32 = 50.0;

/// Baseline of the "(continued)" marker on continuation pages.
pub const CONTINUED_BASELINE: f32 = 36.0;

/// Page size preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// ISO A4 (210 × 297 mm)
    #[default]
    A4,
    /// US Letter (8.5 × 11 in)
    Letter,
}

impl PageSize {
    /// Portrait dimensions in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

impl Orientation {
    /// Character budget for one structured line before truncation.
    pub fn char_budget(&self) -> usize {
        match self {
            Orientation::Portrait => 80,
            Orientation::Landscape => 120,
        }
    }
}

/// Font size tier; each tier fixes the body, header, and title point sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontTier {
    /// 8 pt body
    Small,
    /// 10 pt body
    #[default]
    Medium,
    /// 12 pt body
    Large,
}

impl FontTier {
    /// Body text size in points.
    pub fn body(&self) -> f32 {
        match self {
            FontTier::Small => 8.0,
            FontTier::Medium => 10.0,
            FontTier::Large => 12.0,
        }
    }

    /// Table header text size in points.
    pub fn header(&self) -> f32 {
        self.body() + 1.0
    }

    /// Title size in points.
    pub fn title(&self) -> f32 {
        match self {
            FontTier::Small => 14.0,
            FontTier::Medium => 16.0,
            FontTier::Large => 18.0,
        }
    }

    /// Fixed line height for body text.
    pub fn line_height(&self) -> f32 {
        self.body() * 1.5
    }

    /// Approximate Helvetica glyph advance at the body size.
    pub fn char_width(&self) -> f32 {
        self.body() * 0.5
    }
}

/// Physical page dimensions derived from a size preset and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
}

impl PageGeometry {
    /// Derive the geometry for a preset and orientation.
    pub fn new(size: PageSize, orientation: Orientation) -> Self {
        let (w, h) = size.dimensions();
        match orientation {
            Orientation::Portrait => Self { width: w, height: h },
            Orientation::Landscape => Self { width: h, height: w },
        }
    }

    /// Width available to content between the horizontal margins.
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * MARGIN_X
    }
}
