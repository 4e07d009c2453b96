//! CCITT Group 4 (T.6) bilevel encoder (C3)
//!
//! Encodes already-packed, MSB-first bilevel rows to a two-dimensionally
//! coded T.6 stream. The encoder never decodes TIFF or interprets anything
//! beyond a packed buffer, width and height.

/// Changing-element search, exposed for test-only reference decoders
pub mod changing;
mod encoder;
mod error;
mod modes;
mod run_length;

/// Modified Huffman code tables, exposed for test-only reference decoders
pub mod tables;

pub use encoder::encode_g4;
pub use error::{CcittError, CcittResult};
