//! Test fixtures and a reference T.6 decoder, used only from other crates'
//! test suites.
//!
//! Not part of the conversion pipeline itself: `foliant-ccitt` only ever
//! writes a G4 stream, never reads one back. This crate exists so the
//! pipeline's tests can assert round-trip properties (spec.md §8) instead of
//! only inspecting encoded bytes for expected prefixes.

mod bitreader;
mod decoder;
mod error;
mod fixtures;
mod huffman;

pub use bitreader::BitReader;
pub use decoder::{decode_g4, pixel_at};
pub use error::{TestError, TestResult};
pub use fixtures::{all_black, all_white, checkerboard_8x1, single_vertical_line, three_page_folder_dims};
pub use huffman::RunTable;
