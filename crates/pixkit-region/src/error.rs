//! Error types for pixkit-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixkit_core::Error),

    /// A pixel carries no valid region label
    #[error("pixel ({row}, {col}) has no region label (found {label})")]
    UnlabeledPixel { row: usize, col: usize, label: i32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
