//! Error types for local document storage

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Parsed content failed validation
    #[error("Document model error: {0}")]
    DocModel(#[from] doc_model::DocModelError),

    /// The header does not identify a document file
    #[error("Not a document file: {0}")]
    InvalidFormat(String),

    #[error("Unsupported format version {found} (newest supported is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Download names must be a plain file name
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
