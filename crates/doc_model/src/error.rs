//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("Invalid content: {0}")]
    InvalidContent(#[from] serde_json::Error),

    #[error("Invalid attribute value for '{name}': {value}")]
    InvalidAttribute { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, DocModelError>;
