//! Startup wiring
//!
//! Builds a controller from the settings file in the app data directory,
//! with downloads written where the settings say.

use crate::{Collaborators, PersistResult, PersistenceController, UserInterface};
use cloud::{DocumentService, SessionState};
use doc_model::ContentStore;
use std::path::PathBuf;
use std::sync::Arc;
use store::{DownloadDirectory, SettingsManager};
use tokio::sync::watch;

/// Controller whose local files go to a download directory
pub type DesktopController<C, R, U> = PersistenceController<C, R, DownloadDirectory, U>;

/// Load the settings file and build a controller from it
pub async fn open_controller<C, R, U>(
    app_data_dir: impl Into<PathBuf>,
    content: Arc<C>,
    documents: Arc<R>,
    ui: Arc<U>,
    session: watch::Receiver<SessionState>,
) -> PersistResult<DesktopController<C, R, U>>
where
    C: ContentStore + 'static,
    R: DocumentService + 'static,
    U: UserInterface + 'static,
{
    let mut manager = SettingsManager::new(app_data_dir);
    let settings = manager.load().await?.clone();
    let files = DownloadDirectory::new(manager.download_dir());
    tracing::info!(downloads = %files.dir().display(), "settings loaded");

    Ok(PersistenceController::new(
        Collaborators {
            content,
            documents,
            files: Arc::new(files),
            ui,
        },
        session,
        settings,
    ))
}
