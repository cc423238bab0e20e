//! The page-drawing surface abstraction.
//!
//! The engine is polymorphic over anything that can place text and images on
//! selectable pages; it never assumes a specific drawing backend. The
//! coordinate system is top-down: `y` measures points from the top edge,
//! and text positions are baselines.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Construct a color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// White.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Mid gray, used for secondary text.
    pub const GRAY: Color = Color::rgb(120, 120, 120);
    /// Very light gray, used for alternating row fills.
    pub const ROW_FILL: Color = Color::rgb(243, 243, 243);
    /// Low-contrast gray for the watermark overlay.
    pub const WATERMARK: Color = Color::rgb(225, 225, 225);
}

/// Horizontal text alignment relative to the given x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// x is the left edge
    Left,
    /// x is the center
    Center,
    /// x is the right edge
    Right,
}

/// Active font state for subsequent text placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    /// Size in points
    pub size: f32,
    /// Fill color
    pub color: Color,
    /// Bold weight
    pub bold: bool,
}

impl FontStyle {
    /// Regular text at the given size.
    pub fn regular(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            bold: false,
        }
    }

    /// Bold text at the given size.
    pub fn bold(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            bold: true,
        }
    }
}

/// The external page-drawing capability the composer drives.
///
/// Pages are appended with [`begin_page`](PageSurface::begin_page) and can
/// be revisited by index afterwards — total page count is only known once
/// layout completes, so footers and watermarks are stamped in a second pass
/// over already-produced pages.
pub trait PageSurface {
    /// Append a new page with the given dimensions and make it current.
    fn begin_page(&mut self, width: f32, height: f32);

    /// Make an already-produced page current for overlay drawing.
    fn select_page(&mut self, index: usize) -> Result<()>;

    /// Number of pages produced so far.
    fn page_count(&self) -> usize;

    /// Set the font state for subsequent text placement.
    fn set_font(&mut self, style: FontStyle);

    /// Place text at a baseline position, with optional counter-clockwise
    /// rotation in degrees around that position.
    fn text(&mut self, x: f32, y: f32, text: &str, align: TextAlign, angle: f32);

    /// Fill a rectangle; `y` is the top edge.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Place an encoded image (PNG/JPEG) scaled into the given box; `y` is
    /// the top edge. Undecodable data is an error the caller may choose to
    /// recover from.
    fn image(&mut self, data: &[u8], x: f32, y: f32, width: f32, height: f32) -> Result<()>;

    /// Serialize the finished document.
    fn finish(&mut self) -> Result<Vec<u8>>;
}
