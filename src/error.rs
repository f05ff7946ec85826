//! Error types for canvas operations
//!
//! Gesture transitions never fail; they fall back to the default posture
//! instead. What remains here are the raster, fill and settings failures
//! that a host can act on.

use thiserror::Error;

/// Errors that can occur in canvas operations
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Flood fill seed lies outside the raster
    #[error("Fill seed ({x}, {y}) is outside the {width}x{height} buffer")]
    SeedOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Pixel data length does not match the declared dimensions
    #[error("Buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Region read/write reaches outside the raster
    #[error("Region {x},{y} {width}x{height} does not fit inside the buffer")]
    RegionOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Settings failed validation
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encode/decode error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File watcher error
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;

impl From<tempfile::PersistError> for CanvasError {
    fn from(err: tempfile::PersistError) -> Self {
        CanvasError::Io(err.error)
    }
}
