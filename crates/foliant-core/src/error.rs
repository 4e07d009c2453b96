//! Shared error types for the foliant workspace

use thiserror::Error;

/// Errors shared across the foliant crates
#[derive(Error, Debug)]
pub enum Error {
    /// A `PageImage` was constructed with width or height of zero
    #[error("invalid page dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The supplied pixel buffer length does not match `kind`/`width`/`height`
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    PixelLengthMismatch { expected: usize, actual: usize },

    /// A quality value outside `[1, 100]` was supplied
    #[error("invalid JPEG quality: {0} (must be in 1..=100)")]
    InvalidQuality(u8),

    /// A DPI value of zero was supplied where a positive DPI is required
    #[error("invalid DPI: {0} (must be positive)")]
    InvalidDpi(u32),
}

/// Result type alias used throughout the foliant workspace
pub type Result<T> = std::result::Result<T, Error>;
