use thiserror::Error;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum TiffError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TIFF decode error in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: tiff::TiffError,
    },
    #[error("unsupported TIFF colour type {0:?}")]
    UnsupportedColorType(tiff::ColorType),
    #[error("page classification failed: {0}")]
    Classify(#[from] foliant_core::Error),
}

pub type TiffResult<T> = Result<T, TiffError>;
