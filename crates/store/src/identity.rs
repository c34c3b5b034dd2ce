//! Identity of the document being edited
//!
//! Tracks the human-facing name of the working document and which storage
//! medium backs it, and normalizes file names to a required extension.

use cloud::DocumentId;
use serde::{Deserialize, Serialize};

/// Application name shown in window titles
pub const APP_NAME: &str = "Kramer Write";

/// Default name of a document that was never saved
pub const DEFAULT_DOCUMENT_NAME: &str = "untitled";

/// Which persistence medium backs the working document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageClass {
    /// Never saved or loaded
    Unsaved,
    /// Saved to or loaded from a local file
    LocalFile,
    /// Saved to or loaded from the remote document collection
    CloudDocument { remote_id: DocumentId },
}

/// Name and storage class of the working document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIdentity {
    display_name: String,
    storage: StorageClass,
}

impl DocumentIdentity {
    /// A fresh, unsaved document
    pub fn untitled(default_name: impl Into<String>) -> Self {
        Self {
            display_name: default_name.into(),
            storage: StorageClass::Unsaved,
        }
    }

    /// A document backed by a local file
    pub fn local(file_name: impl Into<String>) -> Self {
        Self {
            display_name: file_name.into(),
            storage: StorageClass::LocalFile,
        }
    }

    /// A document backed by a cloud document
    pub fn cloud(title: impl Into<String>, remote_id: DocumentId) -> Self {
        Self {
            display_name: title.into(),
            storage: StorageClass::CloudDocument { remote_id },
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn storage(&self) -> &StorageClass {
        &self.storage
    }

    pub fn is_unsaved(&self) -> bool {
        self.storage == StorageClass::Unsaved
    }

    /// Remote ID, present only for cloud documents
    pub fn remote_id(&self) -> Option<&DocumentId> {
        match &self.storage {
            StorageClass::CloudDocument { remote_id } => Some(remote_id),
            _ => None,
        }
    }

    /// Title for the editor window
    pub fn window_title(&self) -> String {
        format!("{} - {}", self.display_name, APP_NAME)
    }
}

impl Default for DocumentIdentity {
    fn default() -> Self {
        Self::untitled(DEFAULT_DOCUMENT_NAME)
    }
}

/// Make `name` end with exactly one `.extension`
///
/// An existing extension (text after the last '.', where the dot is not the
/// first character) is replaced; otherwise the extension is appended.
/// Comparison is case-insensitive and the result always carries the
/// extension as given. `extension` may be passed with or without its dot.
pub fn normalize_extension(name: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    let name = name.trim();

    let base = match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    };

    format!("{}.{}", base, extension)
}

/// Check whether `name` carries `.extension`, case-insensitively
pub fn has_extension(name: &str, extension: &str) -> bool {
    let suffix = format!(".{}", extension.trim_start_matches('.').to_lowercase());
    let name = name.to_lowercase();
    name.len() > suffix.len() && name.ends_with(&suffix)
}
