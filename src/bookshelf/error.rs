use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input closed")]
    InputClosed,

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
