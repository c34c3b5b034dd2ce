//! In-memory document service implementation.
//!
//! Mirrors the access rules of the hosted collection: callers must be
//! signed in, and may only touch documents they own. Every invocation is
//! recorded so tests can assert which calls reached the service.

use crate::{
    CloudDocument, CloudError, CloudResult, DocumentId, DocumentService, NewDocument, OwnerId,
    SessionState,
};
use tokio::sync::{watch, Mutex, RwLock};

/// A call received by [`MemoryDocumentService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    Create { owner: OwnerId, title: String },
    List { owner: OwnerId },
    Fetch(DocumentId),
    Delete(DocumentId),
}

/// In-memory implementation of `DocumentService`
pub struct MemoryDocumentService {
    session: watch::Receiver<SessionState>,
    /// Documents in insertion order
    documents: RwLock<Vec<CloudDocument>>,
    calls: Mutex<Vec<ServiceCall>>,
    fail_next: Mutex<Option<CloudError>>,
}

impl MemoryDocumentService {
    /// Create an empty collection gated by the given session
    pub fn new(session: watch::Receiver<SessionState>) -> Self {
        Self {
            session,
            documents: RwLock::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// Insert a document directly, bypassing access checks
    pub async fn seed(&self, document: CloudDocument) {
        self.documents.write().await.push(document);
    }

    /// Make the next call fail with the given error
    pub async fn fail_next(&self, error: CloudError) {
        *self.fail_next.lock().await = Some(error);
    }

    /// Calls received so far
    pub async fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().await.clone()
    }

    /// Number of stored documents
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }

    async fn begin(&self, call: ServiceCall) -> CloudResult<OwnerId> {
        self.calls.lock().await.push(call);

        let owner = self
            .session
            .borrow()
            .owner_id()
            .cloned()
            .ok_or(CloudError::Unauthenticated)?;

        if let Some(error) = self.fail_next.lock().await.take() {
            return Err(error);
        }
        Ok(owner)
    }
}

fn check_owner(session_owner: &OwnerId, owner: &OwnerId) -> CloudResult<()> {
    if session_owner == owner {
        Ok(())
    } else {
        Err(CloudError::PermissionDenied(format!(
            "documents of {} are not accessible",
            owner
        )))
    }
}

impl DocumentService for MemoryDocumentService {
    async fn create(&self, owner: &OwnerId, document: NewDocument) -> CloudResult<DocumentId> {
        let session_owner = self
            .begin(ServiceCall::Create {
                owner: owner.clone(),
                title: document.title.clone(),
            })
            .await?;
        check_owner(&session_owner, owner)?;

        let id = DocumentId::generate();
        self.documents.write().await.push(CloudDocument {
            id: id.clone(),
            owner: owner.clone(),
            title: document.title,
            content: document.content,
            created_at: document.created_at,
        });
        tracing::debug!(document = %id, "cloud document created");
        Ok(id)
    }

    async fn list_by_owner(&self, owner: &OwnerId) -> CloudResult<Vec<CloudDocument>> {
        let session_owner = self.begin(ServiceCall::List { owner: owner.clone() }).await?;
        check_owner(&session_owner, owner)?;

        // Reverse insertion order first so equal timestamps list the newer insert first.
        let mut documents: Vec<CloudDocument> = self
            .documents
            .read()
            .await
            .iter()
            .rev()
            .filter(|doc| &doc.owner == owner)
            .cloned()
            .collect();
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }

    async fn fetch(&self, id: &DocumentId) -> CloudResult<CloudDocument> {
        let session_owner = self.begin(ServiceCall::Fetch(id.clone())).await?;

        let document = self
            .documents
            .read()
            .await
            .iter()
            .find(|doc| &doc.id == id)
            .cloned()
            .ok_or_else(|| CloudError::DocumentNotFound(id.clone()))?;
        check_owner(&session_owner, &document.owner)?;
        Ok(document)
    }

    async fn delete(&self, id: &DocumentId) -> CloudResult<()> {
        let session_owner = self.begin(ServiceCall::Delete(id.clone())).await?;

        let mut documents = self.documents.write().await;
        let index = documents
            .iter()
            .position(|doc| &doc.id == id)
            .ok_or_else(|| CloudError::DocumentNotFound(id.clone()))?;
        check_owner(&session_owner, &documents[index].owner)?;
        documents.remove(index);
        tracing::debug!(document = %id, "cloud document deleted");
        Ok(())
    }
}
