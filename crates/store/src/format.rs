//! Document file format

use crate::{Result, StoreError};
use chrono::{DateTime, Utc};
use doc_model::StructuredContent;
use serde::{Deserialize, Serialize};

/// File format version
pub const FORMAT_VERSION: u32 = 1;

/// File extension for saved documents
pub const DOCUMENT_EXTENSION: &str = "dvk";

/// File extension for HTML exports
pub const HTML_EXTENSION: &str = "html";

/// MIME type of saved documents
pub const DOCUMENT_MIME: &str = "application/json";

/// MIME type of HTML exports
pub const HTML_MIME: &str = "text/html";

/// File header for format identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileHeader {
    /// Magic string for format identification
    pub magic: String,
    /// Format version
    pub version: u32,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modified timestamp
    pub modified: DateTime<Utc>,
}

impl FileHeader {
    pub const MAGIC: &'static str = "KRAMER-DVK";

    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            magic: Self::MAGIC.to_string(),
            version: FORMAT_VERSION,
            created: now,
            modified: now,
        }
    }

    /// Check the header identifies a document file this version can read
    pub fn validate(&self) -> Result<()> {
        if self.magic != Self::MAGIC {
            return Err(StoreError::InvalidFormat(self.magic.clone()));
        }
        if self.version > FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: self.version,
                supported: FORMAT_VERSION,
            });
        }
        Ok(())
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFile {
    pub header: FileHeader,
    pub content: StructuredContent,
}

impl DocumentFile {
    pub fn new(content: StructuredContent) -> Self {
        Self {
            header: FileHeader::new(),
            content,
        }
    }
}
