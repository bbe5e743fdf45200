//! Error types for image synthesis and encoding.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while encoding a raster into a container format.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IDAT compression failed: {0}")]
    Compression(#[from] std::io::Error),

    #[error("ICO encoding failed: {0}")]
    Ico(std::io::Error),

    #[error("Invalid image dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        reason: &'static str,
    },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
