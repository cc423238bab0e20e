//! Rendering: page surfaces, the document composer, and render options.

pub mod composer;
pub mod options;
pub mod pdf;
pub mod recording;
pub mod surface;

pub use composer::{compose, ComposeSummary, FormatProfile};
pub use options::{LayoutMode, RenderOptions};
pub use pdf::PdfSurface;
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{Color, FontStyle, PageSurface, TextAlign};
