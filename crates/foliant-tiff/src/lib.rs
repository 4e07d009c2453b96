//! TIFF decoding, external collaborator wrapping the `tiff` crate (C9)
//!
//! Produces [`foliant_core::PageImage`] values; never reinterpreted by the
//! page encoder beyond `PageKind` and the `bilevel_suitable` hint (§4.4).

mod classify;
mod decoder;
mod dpi;
mod error;

pub use decoder::{decode_pages, decode_pages_owned};
pub use error::{TiffError, TiffResult};
