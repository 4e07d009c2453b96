use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("morphology error: {0}")]
    Morph(#[from] foliant_morph::MorphError),
    #[error("CCITT encode error: {0}")]
    Ccitt(#[from] foliant_ccitt::CcittError),
    #[error("JPEG encode error: {0}")]
    Jpeg(String),
}

pub type EncodeResult<T> = Result<T, EncodeError>;
