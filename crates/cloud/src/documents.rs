//! Remote document collection boundary.

use crate::{CloudResult, OwnerId};
use chrono::{DateTime, Utc};
use doc_model::StructuredContent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a stored cloud document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document about to be created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub content: StructuredContent,
    pub created_at: DateTime<Utc>,
}

impl NewDocument {
    /// A new document stamped with the current time
    pub fn now(title: impl Into<String>, content: StructuredContent) -> Self {
        Self {
            title: title.into(),
            content,
            created_at: Utc::now(),
        }
    }
}

/// A stored cloud document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudDocument {
    pub id: DocumentId,
    pub owner: OwnerId,
    pub title: String,
    pub content: StructuredContent,
    pub created_at: DateTime<Utc>,
}

/// Per-owner document collection.
///
/// Every call requires a signed-in session; without one implementations
/// fail with [`crate::CloudError::Unauthenticated`] before doing any work.
#[trait_variant::make(Send)]
pub trait DocumentService: Send + Sync {
    /// Store a new document and return its identifier.
    async fn create(&self, owner: &OwnerId, document: NewDocument) -> CloudResult<DocumentId>;

    /// All documents of an owner, newest first.
    async fn list_by_owner(&self, owner: &OwnerId) -> CloudResult<Vec<CloudDocument>>;

    /// Fetch a single document.
    async fn fetch(&self, id: &DocumentId) -> CloudResult<CloudDocument>;

    /// Delete a document.
    async fn delete(&self, id: &DocumentId) -> CloudResult<()>;
}
