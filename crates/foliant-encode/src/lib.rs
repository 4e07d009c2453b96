//! Page encoder (C5): pure dispatch from `PageImage` to `PageArtifact`

mod dispatch;
mod error;
mod jpeg;

pub use dispatch::encode_page;
pub use error::{EncodeError, EncodeResult};
