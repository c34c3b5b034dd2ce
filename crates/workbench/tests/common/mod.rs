//! Shared harness for controller tests
//!
//! Provides a scripted UI, a document service whose responses can be held
//! back, and a fully wired controller over a temporary download directory.

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use cloud::{
    CloudDocument, CloudResult, DocumentId, DocumentService, MemoryDocumentService, NewDocument,
    Owner, OwnerId, SessionState,
};
use doc_model::{MemoryContentStore, StructuredContent};
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use store::{DownloadDirectory, EditorSettings};
use tempfile::TempDir;
use tokio::sync::{oneshot, watch};
use workbench::{Action, Collaborators, Notice, PersistenceController, UserInterface};

/// UI double answering prompts from a script and recording everything shown
#[derive(Default)]
pub struct ScriptedUi {
    answers: Mutex<VecDeque<Option<String>>>,
    confirmations: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<(String, Option<String>)>>,
    confirm_questions: Mutex<Vec<String>>,
    notices: Mutex<Vec<Notice>>,
    enabled: Mutex<HashMap<Action, bool>>,
    session_label: Mutex<Option<Option<String>>>,
    editor_enabled: Mutex<Option<bool>>,
    file_input_resets: AtomicUsize,
    title: Mutex<String>,
}

impl ScriptedUi {
    /// Queue the answer to the next prompt; `None` dismisses it
    pub fn answer(&self, answer: Option<&str>) {
        self.answers
            .lock()
            .unwrap()
            .push_back(answer.map(str::to_string));
    }

    /// Queue the answer to the next confirmation
    pub fn answer_confirm(&self, yes: bool) {
        self.confirmations.lock().unwrap().push_back(yes);
    }

    pub fn prompts(&self) -> Vec<(String, Option<String>)> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn confirm_questions(&self) -> Vec<String> {
        self.confirm_questions.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn is_enabled(&self, action: Action) -> Option<bool> {
        self.enabled.lock().unwrap().get(&action).copied()
    }

    /// `Some(Some(label))` when the signed-in controls are shown
    pub fn session_label(&self) -> Option<Option<String>> {
        self.session_label.lock().unwrap().clone()
    }

    pub fn editor_enabled(&self) -> Option<bool> {
        *self.editor_enabled.lock().unwrap()
    }

    pub fn file_input_resets(&self) -> usize {
        self.file_input_resets.load(Ordering::SeqCst)
    }

    pub fn title(&self) -> String {
        self.title.lock().unwrap().clone()
    }
}

impl UserInterface for ScriptedUi {
    fn prompt(&self, message: &str, default: Option<&str>) -> Option<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((message.to_string(), default.map(str::to_string)));
        self.answers.lock().unwrap().pop_front().flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirm_questions.lock().unwrap().push(message.to_string());
        self.confirmations.lock().unwrap().pop_front().unwrap_or(false)
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn set_enabled(&self, action: Action, enabled: bool) {
        self.enabled.lock().unwrap().insert(action, enabled);
    }

    fn show_session(&self, owner: Option<&Owner>) {
        *self.session_label.lock().unwrap() = Some(owner.map(|owner| owner.label.clone()));
    }

    fn set_editor_enabled(&self, enabled: bool) {
        *self.editor_enabled.lock().unwrap() = Some(enabled);
    }

    fn reset_file_input(&self) {
        self.file_input_resets.fetch_add(1, Ordering::SeqCst);
    }

    fn set_title(&self, title: &str) {
        *self.title.lock().unwrap() = title.to_string();
    }
}

/// Document service whose responses wait for the test to release them
///
/// The wrapped call runs first; only the response is held back, like a
/// request the server already processed whose reply is still in flight.
pub struct GatedDocuments {
    pub inner: MemoryDocumentService,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
}

impl GatedDocuments {
    pub fn new(inner: MemoryDocumentService) -> Self {
        Self {
            inner,
            gates: Mutex::new(VecDeque::new()),
        }
    }

    /// Hold back the next response until the returned sender fires
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    async fn respond<T>(&self, result: T) -> T {
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        result
    }
}

impl DocumentService for GatedDocuments {
    async fn create(&self, owner: &OwnerId, document: NewDocument) -> CloudResult<DocumentId> {
        let result = self.inner.create(owner, document).await;
        self.respond(result).await
    }

    async fn list_by_owner(&self, owner: &OwnerId) -> CloudResult<Vec<CloudDocument>> {
        let result = self.inner.list_by_owner(owner).await;
        self.respond(result).await
    }

    async fn fetch(&self, id: &DocumentId) -> CloudResult<CloudDocument> {
        let result = self.inner.fetch(id).await;
        self.respond(result).await
    }

    async fn delete(&self, id: &DocumentId) -> CloudResult<()> {
        let result = self.inner.delete(id).await;
        self.respond(result).await
    }
}

pub type TestController =
    PersistenceController<MemoryContentStore, GatedDocuments, DownloadDirectory, ScriptedUi>;

pub struct Harness {
    /// Stands in for the authentication provider
    pub session: watch::Sender<SessionState>,
    pub content: Arc<MemoryContentStore>,
    pub documents: Arc<GatedDocuments>,
    pub ui: Arc<ScriptedUi>,
    pub controller: TestController,
    pub temp_dir: TempDir,
}

pub fn owner() -> Owner {
    Owner::new(OwnerId::new("u-1"), "ada@example.com")
}

impl Harness {
    pub fn signed_out() -> Self {
        let (session, rx) = watch::channel(SessionState::SignedOut);
        let temp_dir = TempDir::new().unwrap();

        let content = Arc::new(MemoryContentStore::new());
        let documents = Arc::new(GatedDocuments::new(MemoryDocumentService::new(rx.clone())));
        let files = Arc::new(DownloadDirectory::new(temp_dir.path().join("downloads")));
        let ui = Arc::new(ScriptedUi::default());

        let controller = PersistenceController::new(
            Collaborators {
                content: content.clone(),
                documents: documents.clone(),
                files,
                ui: ui.clone(),
            },
            rx,
            EditorSettings::default(),
        );

        Self {
            session,
            content,
            documents,
            ui,
            controller,
            temp_dir,
        }
    }

    pub async fn signed_in() -> Self {
        let harness = Self::signed_out();
        harness.sign_in(owner()).await;
        harness
    }

    pub async fn sign_in(&self, owner: Owner) {
        let state = SessionState::SignedIn(owner);
        self.session.send_replace(state.clone());
        self.controller.handle_session_change(&state).await;
    }

    pub async fn sign_out(&self) {
        self.session.send_replace(SessionState::SignedOut);
        self.controller
            .handle_session_change(&SessionState::SignedOut)
            .await;
    }

    /// Store a document for the test owner, `minute` minutes after a fixed epoch
    pub async fn seed(&self, title: &str, text: &str, minute: i64) -> DocumentId {
        let id = DocumentId::new(format!("doc-{title}"));
        self.documents
            .inner
            .seed(CloudDocument {
                id: id.clone(),
                owner: owner().id,
                title: title.to_string(),
                content: StructuredContent::from_text(text),
                created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
                    + Duration::minutes(minute),
            })
            .await;
        id
    }

    pub fn download_path(&self, file_name: &str) -> PathBuf {
        self.temp_dir.path().join("downloads").join(file_name)
    }

    /// Write a file into the temporary directory and return its path
    pub fn write_file(&self, file_name: &str, text: &str) -> PathBuf {
        let path = self.temp_dir.path().join(file_name);
        std::fs::write(&path, text).unwrap();
        path
    }
}
