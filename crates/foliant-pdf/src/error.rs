use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("I/O error writing PDF: {0}")]
    Io(#[from] std::io::Error),
}

pub type PdfResult<T> = Result<T, PdfError>;
