//! Op-recording drawing surface.
//!
//! Records every draw call instead of producing output. Tests assert
//! against the recorded ops, and `finish` serializes them to JSON so the
//! recording can stand in for a real backend during inspection.

use super::surface::{Color, FontStyle, PageSurface, TextAlign};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One recorded draw call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Font state change
    SetFont {
        /// New font state
        style: FontStyle,
    },
    /// Text placement
    Text {
        /// Baseline x
        x: f32,
        /// Baseline y (from top)
        y: f32,
        /// The text
        text: String,
        /// Alignment relative to x
        align: TextAlign,
        /// Rotation in degrees
        angle: f32,
    },
    /// Rectangle fill
    Rect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
        /// Fill color
        color: Color,
    },
    /// Image placement
    Image {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
        /// Encoded size in bytes
        byte_len: usize,
    },
}

/// A [`PageSurface`] that records draw calls per page.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pages: Vec<Vec<DrawOp>>,
    dimensions: Vec<(f32, f32)>,
    current: usize,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded ops for one page.
    pub fn ops(&self, page: usize) -> &[DrawOp] {
        &self.pages[page]
    }

    /// Dimensions of one page.
    pub fn dimensions(&self, page: usize) -> (f32, f32) {
        self.dimensions[page]
    }

    /// All text placed on one page, in draw order.
    pub fn texts(&self, page: usize) -> Vec<&str> {
        self.pages[page]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any text on the page contains the needle.
    pub fn contains_text(&self, page: usize, needle: &str) -> bool {
        self.texts(page).iter().any(|t| t.contains(needle))
    }
}

impl PageSurface for RecordingSurface {
    fn begin_page(&mut self, width: f32, height: f32) {
        self.pages.push(Vec::new());
        self.dimensions.push((width, height));
        self.current = self.pages.len() - 1;
    }

    fn select_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(Error::PageOutOfRange(index, self.pages.len()));
        }
        self.current = index;
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_font(&mut self, style: FontStyle) {
        self.pages[self.current].push(DrawOp::SetFont { style });
    }

    fn text(&mut self, x: f32, y: f32, text: &str, align: TextAlign, angle: f32) {
        self.pages[self.current].push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            align,
            angle,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.pages[self.current].push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn image(&mut self, data: &[u8], x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        // Match the real backend's contract: undecodable bytes error out.
        image::load_from_memory(data)
            .map_err(|e| Error::ImageDecode(e.to_string()))?;
        self.pages[self.current].push(DrawOp::Image {
            x,
            y,
            width,
            height,
            byte_len: data.len(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.pages).map_err(|e| Error::Surface(e.to_string()))
    }
}
