//! I/O error types
//!
//! Provides a unified error type for image and label I/O. The PNG codec
//! maps its library errors into `IoError` variants so that callers only
//! need to handle one error type.

use thiserror::Error;

/// Error type for image and label I/O.
///
/// I/O failures are always reported through this type; a failed load
/// never yields a partially filled image.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image or label data is structurally invalid
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The codec failed to decode
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The codec failed to encode
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. component count mismatch)
    #[error("core error: {0}")]
    Core(#[from] pixkit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
