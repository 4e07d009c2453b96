use thiserror::Error;

#[derive(Debug, Error)]
pub enum CcittError {
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("packed buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },
}

pub type CcittResult<T> = Result<T, CcittError>;
