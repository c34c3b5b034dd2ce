//! Selection-follow driver
//!
//! Connects the content store's selection notifications to the viewport of
//! whatever surface hosts the editor.

use crate::{follow_selection, ScrollRequest, Viewport, DEFAULT_SCROLL_BUFFER};
use doc_model::SelectionChange;
use tokio::sync::broadcast::{self, error::RecvError};

/// The surface that displays the editor and can be scrolled
pub trait ViewportHost: Send + Sync {
    /// Current viewport of the surface
    fn viewport(&self) -> Viewport;

    /// Scroll the surface
    fn scroll_by(&self, request: ScrollRequest);
}

/// Keeps the viewport following the selection
#[derive(Debug, Clone, Copy)]
pub struct SelectionFollower {
    buffer: f64,
}

impl Default for SelectionFollower {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_BUFFER)
    }
}

impl SelectionFollower {
    pub fn new(buffer: f64) -> Self {
        Self { buffer }
    }

    /// Decide how to scroll for one selection change
    ///
    /// Blur notifications and changes without layout bounds never scroll.
    pub fn on_selection_change(
        &self,
        change: &SelectionChange,
        viewport: &Viewport,
    ) -> Option<ScrollRequest> {
        change.range?;
        let bounds = change.bounds?;
        follow_selection(viewport, &bounds, self.buffer)
    }

    /// Follow selection changes until the notification channel closes
    pub async fn run<H: ViewportHost>(
        self,
        mut selections: broadcast::Receiver<SelectionChange>,
        host: H,
    ) {
        loop {
            match selections.recv().await {
                Ok(change) => {
                    if let Some(request) = self.on_selection_change(&change, &host.viewport()) {
                        tracing::trace!(delta_y = request.delta_y, "following selection");
                        host.scroll_by(request);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "selection follower lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}
