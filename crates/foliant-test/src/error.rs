//! Errors for the reference decoder

use thiserror::Error;

/// Errors the reference T.6 decoder can raise
#[derive(Debug, Error)]
pub enum TestError {
    /// Ran out of bits while looking for a valid Huffman codeword
    #[error("unterminated code word after {bits_read} bits on row {row}")]
    UnterminatedCode { row: usize, bits_read: u32 },

    /// A mode codeword did not match pass, horizontal, vertical or EOFB
    #[error("unrecognised mode codeword on row {row}")]
    UnknownMode { row: usize },

    /// The decoded line did not account for exactly `width` pixels
    #[error("row {row} decoded to {got} pixels, expected {width}")]
    RowWidthMismatch { row: usize, width: u32, got: u32 },
}

/// Result type for the reference decoder
pub type TestResult<T> = Result<T, TestError>;
