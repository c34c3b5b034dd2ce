//! Persistence controller
//!
//! Every operation runs from a discrete user action. Operations that await
//! a file read or a remote call and then change the working document take a
//! ticket when they start. A completion is applied only if no New or
//! sign-out happened since the ticket was taken and no later-started
//! operation has already been applied; otherwise it is dropped with
//! [`PersistenceError::Superseded`]. A failed operation never touches the
//! ticket state, so it cannot invalidate others. The remote call itself is
//! never cancelled.

use crate::{
    parse_choice, render_listing, Action, Notice, PersistResult, PersistenceError, PromptResult,
    UserInterface, ValidationError,
};
use cloud::{CloudDocument, DocumentService, NewDocument, Owner, OwnerId, SessionState};
use doc_model::{render_html, ContentStore, StructuredContent};
use render_model::{HeaderTracker, SelectionFollower, ViewportHost};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use store::{
    deserialize_document, has_extension, normalize_extension, serialize_document,
    DocumentIdentity, EditorSettings, FileHandle, LocalFiles, DOCUMENT_MIME, HTML_EXTENSION,
    HTML_MIME,
};
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;

/// The collaborators a controller works with
pub struct Collaborators<C, R, F, U> {
    pub content: Arc<C>,
    pub documents: Arc<R>,
    pub files: Arc<F>,
    pub ui: Arc<U>,
}

/// Taken when an operation starts; checked when its result is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ticket {
    /// Start order among all operations
    seq: u64,
    /// Epoch the operation started in; New and sign-out open a new epoch
    epoch: u64,
}

pub struct PersistenceController<C, R, F, U> {
    content: Arc<C>,
    documents: Arc<R>,
    files: Arc<F>,
    ui: Arc<U>,
    session: watch::Receiver<SessionState>,
    settings: EditorSettings,
    identity: RwLock<DocumentIdentity>,
    started: AtomicU64,
    epoch: AtomicU64,
    /// Sequence number of the last applied operation; written under the identity lock
    applied: AtomicU64,
    /// Owner whose session the UI was last set up for
    active_owner: Mutex<Option<OwnerId>>,
}

impl<C, R, F, U> PersistenceController<C, R, F, U>
where
    C: ContentStore + 'static,
    R: DocumentService + 'static,
    F: LocalFiles + 'static,
    U: UserInterface + 'static,
{
    pub fn new(
        collaborators: Collaborators<C, R, F, U>,
        session: watch::Receiver<SessionState>,
        settings: EditorSettings,
    ) -> Self {
        let identity = DocumentIdentity::untitled(settings.files.default_document_name.clone());
        Self {
            content: collaborators.content,
            documents: collaborators.documents,
            files: collaborators.files,
            ui: collaborators.ui,
            session,
            settings,
            identity: RwLock::new(identity),
            started: AtomicU64::new(0),
            epoch: AtomicU64::new(0),
            applied: AtomicU64::new(0),
            active_owner: Mutex::new(None),
        }
    }

    /// Identity of the working document
    pub async fn identity(&self) -> DocumentIdentity {
        self.identity.read().await.clone()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Clear the editor and start an unsaved document
    pub async fn new_document(&self) {
        self.advance_epoch();
        self.content.clear();
        self.reset_identity().await;
        tracing::info!("new document created");
    }

    /// Save the content as a local document file
    pub async fn save_local(&self) -> PersistResult<()> {
        let result = self.try_save_local().await;
        self.finish(Action::SaveLocal, result)
    }

    /// Load a picked local document file
    pub async fn load_local(&self, file: FileHandle) -> PersistResult<()> {
        let result = self.try_load_local(&file).await;
        self.ui.reset_file_input();
        self.finish(Action::LoadLocal, result)
    }

    /// Export the content as an HTML file; the working document is unchanged
    pub async fn export_html(&self) -> PersistResult<()> {
        let result = self.try_export_html().await;
        self.finish(Action::ExportHtml, result)
    }

    /// Save the content as a new cloud document
    pub async fn save_cloud(&self) -> PersistResult<()> {
        let result = self.try_save_cloud().await;
        self.finish(Action::SaveCloud, result)
    }

    /// Replace the content with a chosen cloud document
    pub async fn load_cloud(&self) -> PersistResult<()> {
        let result = self.try_load_cloud().await;
        self.finish(Action::LoadCloud, result)
    }

    /// Delete a chosen cloud document after confirmation
    pub async fn delete_cloud(&self) -> PersistResult<()> {
        let result = self.try_delete_cloud().await;
        self.finish(Action::DeleteCloud, result)
    }

    /// React to a sign-in or sign-out
    pub async fn handle_session_change(&self, state: &SessionState) {
        let mut active_owner = self.active_owner.lock().await;

        match state {
            SessionState::SignedIn(owner) => {
                let switched = active_owner.as_ref().is_some_and(|id| id != &owner.id);
                if switched {
                    // Never carry one account's content into another's session.
                    self.discard_working_document().await;
                }
                *active_owner = Some(owner.id.clone());

                self.ui.show_session(Some(owner));
                self.set_auth_actions_enabled(true);
                self.ui.set_editor_enabled(true);
                tracing::info!(owner = %owner.id, "signed in");
            }
            SessionState::SignedOut => {
                *active_owner = None;
                self.discard_working_document().await;

                self.ui.show_session(None);
                self.set_auth_actions_enabled(false);
                self.ui.set_editor_enabled(false);
                tracing::info!("signed out");
            }
        }
    }

    /// Apply the current session, then every change, until the auth provider goes away
    pub async fn watch_session(&self) {
        let mut session = self.session.clone();
        loop {
            let state = session.borrow_and_update().clone();
            self.handle_session_change(&state).await;
            if session.changed().await.is_err() {
                tracing::debug!("session channel closed");
                break;
            }
        }
    }

    /// Header collapse tracking with the configured top threshold
    pub fn header_tracker(&self, header_height: f64) -> HeaderTracker {
        HeaderTracker::with_threshold(header_height, self.settings.scrolling.header_top_threshold_px)
    }

    /// Keep `host`'s viewport following the editor selection
    pub fn follow_selection<H: ViewportHost + 'static>(&self, host: H) -> JoinHandle<()> {
        let follower = SelectionFollower::new(self.settings.scrolling.autoscroll_buffer_px);
        tokio::spawn(follower.run(self.content.subscribe_selection(), host))
    }

    async fn try_save_local(&self) -> PersistResult<()> {
        let suggestion = self.identity.read().await.display_name().to_string();
        let name = self.ask("Save document as:", Some(suggestion.as_str()))?;
        let file_name = normalize_extension(&name, &self.settings.files.document_extension);

        let bytes = serialize_document(&self.content.get_all_content())?;
        let ticket = self.begin();
        self.files.download(&file_name, bytes, DOCUMENT_MIME).await?;

        self.commit(ticket, DocumentIdentity::local(file_name.clone()), None)
            .await?;
        tracing::info!(file = %file_name, "document saved locally");
        Ok(())
    }

    async fn try_load_local(&self, file: &FileHandle) -> PersistResult<()> {
        let extension = &self.settings.files.document_extension;
        if !has_extension(&file.name, extension) {
            return Err(ValidationError::WrongExtension {
                file_name: file.name.clone(),
                expected: extension.trim_start_matches('.').to_string(),
            }
            .into());
        }

        let ticket = self.begin();
        let text = self.files.read_text(file).await?;
        let content = deserialize_document(&text)?;

        self.commit(ticket, DocumentIdentity::local(file.name.clone()), Some(content))
            .await?;
        tracing::info!(file = %file.name, "document loaded from local file");
        Ok(())
    }

    async fn try_export_html(&self) -> PersistResult<()> {
        let name = self.ask("Export as:", Some(self.settings.files.export_file_name.as_str()))?;
        let file_name = normalize_extension(&name, HTML_EXTENSION);

        let html = render_html(&self.content.get_all_content());
        self.files
            .download(&file_name, html.into_bytes(), HTML_MIME)
            .await?;
        tracing::info!(file = %file_name, "document exported as HTML");
        Ok(())
    }

    async fn try_save_cloud(&self) -> PersistResult<()> {
        let owner = self.require_owner()?;

        let suggestion = {
            let identity = self.identity.read().await;
            match identity.remote_id() {
                Some(_) => identity.display_name().to_string(),
                None => self.settings.cloud.default_title.clone(),
            }
        };
        let title = self.ask("Save cloud document as:", Some(suggestion.as_str()))?;

        let document = NewDocument::now(title.clone(), self.content.get_all_content());
        let ticket = self.begin();
        let remote_id = self.documents.create(&owner.id, document).await?;
        self.ui
            .notify(Notice::info(format!("'{}' saved to the cloud!", title)));

        self.commit(ticket, DocumentIdentity::cloud(title, remote_id.clone()), None)
            .await?;
        tracing::info!(document = %remote_id, "document saved to the cloud");
        Ok(())
    }

    async fn try_load_cloud(&self) -> PersistResult<()> {
        let owner = self.require_owner()?;

        // The listing only proposes; the operation starts with the user's
        // choice, but a sign-out during the listing still discards it.
        let epoch = self.current_epoch();
        let documents = self.documents.list_by_owner(&owner.id).await?;
        self.ensure_epoch(epoch)?;

        let chosen = self.choose("load", documents)?;
        let ticket = self.ticket_in(epoch);
        let identity = DocumentIdentity::cloud(chosen.title, chosen.id.clone());
        self.commit(ticket, identity, Some(chosen.content)).await?;
        tracing::info!(document = %chosen.id, "document loaded from the cloud");
        Ok(())
    }

    async fn try_delete_cloud(&self) -> PersistResult<()> {
        let owner = self.require_owner()?;

        let documents = self.documents.list_by_owner(&owner.id).await?;
        let chosen = self.choose("delete", documents)?;

        let question = format!(
            "Are you sure you want to permanently delete '{}'? This cannot be undone.",
            chosen.title
        );
        if !self.ui.confirm(&question) {
            return Err(ValidationError::DeletionCancelled.into());
        }

        self.documents.delete(&chosen.id).await?;
        self.ui
            .notify(Notice::info(format!("'{}' deleted.", chosen.title)));
        tracing::info!(document = %chosen.id, "cloud document deleted");
        Ok(())
    }

    /// Offer the listing and return the chosen document
    fn choose(&self, verb: &str, mut documents: Vec<CloudDocument>) -> PersistResult<CloudDocument> {
        if documents.is_empty() {
            return Err(ValidationError::NoDocuments.into());
        }

        let input = self.ui.prompt(&render_listing(verb, &documents), None);
        let index = input
            .as_deref()
            .and_then(|input| parse_choice(input, documents.len()))
            .ok_or(ValidationError::NoSelection)?;
        Ok(documents.swap_remove(index))
    }

    fn ask(&self, message: &str, default: Option<&str>) -> PersistResult<String> {
        PromptResult::from_input(self.ui.prompt(message, default))
            .value()
            .ok_or_else(|| ValidationError::Cancelled.into())
    }

    fn require_owner(&self) -> PersistResult<Owner> {
        self.session
            .borrow()
            .owner()
            .cloned()
            .ok_or(PersistenceError::AuthRequired)
    }

    /// Ticket for an operation starting now
    fn begin(&self) -> Ticket {
        self.ticket_in(self.current_epoch())
    }

    fn ticket_in(&self, epoch: u64) -> Ticket {
        Ticket {
            seq: self.started.fetch_add(1, Ordering::SeqCst) + 1,
            epoch,
        }
    }

    fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Open a new epoch; everything started before it becomes stale
    fn advance_epoch(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    fn ensure_epoch(&self, epoch: u64) -> PersistResult<()> {
        if self.current_epoch() == epoch {
            Ok(())
        } else {
            Err(PersistenceError::Superseded)
        }
    }

    /// Install a new identity, and content if given, unless the ticket is stale
    async fn commit(
        &self,
        ticket: Ticket,
        identity: DocumentIdentity,
        content: Option<StructuredContent>,
    ) -> PersistResult<()> {
        let mut current = self.identity.write().await;
        self.ensure_epoch(ticket.epoch)?;
        if ticket.seq <= self.applied.load(Ordering::SeqCst) {
            return Err(PersistenceError::Superseded);
        }
        self.applied.store(ticket.seq, Ordering::SeqCst);

        if let Some(content) = content {
            self.content.set_all_content(content);
        }
        self.ui.set_title(&identity.window_title());
        *current = identity;
        Ok(())
    }

    async fn reset_identity(&self) {
        let identity = DocumentIdentity::untitled(self.settings.files.default_document_name.clone());
        self.ui.set_title(&identity.window_title());
        *self.identity.write().await = identity;
    }

    async fn discard_working_document(&self) {
        self.advance_epoch();
        self.content.clear();
        self.reset_identity().await;
    }

    fn set_auth_actions_enabled(&self, enabled: bool) {
        for action in Action::ALL.into_iter().filter(Action::requires_auth) {
            self.ui.set_enabled(action, enabled);
        }
    }

    fn finish(&self, action: Action, result: PersistResult<()>) -> PersistResult<()> {
        if let Err(err) = &result {
            self.report(action, err);
        }
        result
    }

    /// Surface a failure to the user the way each kind calls for
    fn report(&self, action: Action, err: &PersistenceError) {
        let notice = match err {
            PersistenceError::Validation(ValidationError::Cancelled) => None,
            PersistenceError::Validation(ValidationError::NoSelection) => {
                (action == Action::DeleteCloud).then(|| Notice::info("No document selected."))
            }
            PersistenceError::Validation(ValidationError::DeletionCancelled) => {
                Some(Notice::info("Deletion cancelled."))
            }
            PersistenceError::Validation(ValidationError::NoDocuments) => {
                Some(Notice::info("No cloud documents found."))
            }
            PersistenceError::Validation(ValidationError::WrongExtension { expected, .. }) => {
                Some(Notice::warning(format!("Please select a valid .{} file.", expected)))
            }
            PersistenceError::AuthRequired => Some(Notice::error(match action {
                Action::SaveCloud => "You must be logged in to save.",
                Action::DeleteCloud => "You must be logged in to delete files.",
                _ => "You must be logged in to load files.",
            })),
            PersistenceError::Remote(_) => Some(Notice::error(match action {
                Action::SaveCloud => "Could not save document. Please try again.",
                Action::DeleteCloud => "Could not delete document. Please try again.",
                _ => "Could not load documents. Please try again.",
            })),
            PersistenceError::Local(_) => Some(Notice::error(match action {
                Action::LoadLocal => "Failed to read the file.",
                Action::ExportHtml => "Could not export the document.",
                _ => "Could not save the file.",
            })),
            PersistenceError::Superseded => None,
        };

        match err {
            PersistenceError::Remote(_) | PersistenceError::Local(_) => {
                tracing::error!(%action, error = %err, "operation failed");
            }
            _ => tracing::debug!(%action, reason = %err, "operation aborted"),
        }

        if let Some(notice) = notice {
            self.ui.notify(notice);
        }
    }
}
