//! Error types for pixkit-core
//!
//! Provides a unified error type for the checked operations of the core
//! crate. Out-of-range indexing through `Index`/`IndexMut` is a contract
//! violation and panics instead; the checked accessors return these
//! errors so callers can branch on them.

use thiserror::Error;

/// pixkit core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Pixel coordinates outside the image
    #[error("pixel ({row}, {col}) out of bounds for {height}x{width} image")]
    PixelOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Linear index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two shapes that must agree do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Component buffer length does not match height*width*channels
    #[error("component count mismatch: expected {expected}, got {actual}")]
    ComponentCountMismatch { expected: usize, actual: usize },

    /// Channel index >= channel count
    #[error("channel {channel} out of range for {channels}-channel image")]
    InvalidChannel { channel: usize, channels: usize },

    /// Channel count outside 1..=4
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(usize),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation on an image with no pixels
    #[error("empty image: {0}")]
    EmptyImage(&'static str),
}

/// Result type alias for pixkit-core operations
pub type Result<T> = std::result::Result<T, Error>;
