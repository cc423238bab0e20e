//! Error types for the docpress library.

use std::io;
use thiserror::Error;

/// Result type alias for docpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document composition.
///
/// Recoverable conditions (malformed JSON, missing repeating structure,
/// unloadable logo images) are handled inside the engine by falling back to
/// an alternate representation or skipping the decoration; they never appear
/// here. The variants below are the failures that reach the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension is not one of csv, json, or xml.
    #[error("Unknown source format: {0}")]
    UnknownFormat(String),

    /// The input path carries no extension at all.
    #[error("File has no extension: {0}")]
    MissingExtension(String),

    /// A page index handed to the drawing surface was out of range.
    #[error("Page {0} is out of range (surface has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Image data could not be decoded for placement.
    #[error("Image decoding error: {0}")]
    ImageDecode(String),

    /// Fatal failure in the underlying drawing surface.
    #[error("Drawing surface error: {0}")]
    Surface(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
