//! Streaming, forward-only PDF 1.7 writer (C6)

mod counting;
mod error;
mod writer;

pub use error::{PdfError, PdfResult};
pub use writer::PdfWriter;
