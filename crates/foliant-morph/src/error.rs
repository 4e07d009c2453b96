//! Error type for `foliant-morph`

use thiserror::Error;

/// Errors from packing/thresholding/closing operations
#[derive(Error, Debug)]
pub enum MorphError {
    /// Gray buffer length did not match `width * height`
    #[error("gray buffer length mismatch: expected {expected}, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Width or height was zero
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type alias for `foliant-morph`
pub type MorphResult<T> = Result<T, MorphError>;
