use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload has no usable page sequence.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// Page selection uses 1-based indices.
    #[error("page {page} is out of range (document has {count} pages)")]
    PageOutOfRange { page: usize, count: usize },

    #[error("image error: {0}")]
    Image(String),

    #[error("font error: {0}")]
    Font(String),
}
