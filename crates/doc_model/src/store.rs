//! Content store boundary
//!
//! The editing widget owns the live document body. `ContentStore` is the
//! narrow surface the rest of the application uses to reach it.

use crate::{SelectionChange, StructuredContent};
use tokio::sync::{broadcast, watch};

/// Capacity of the selection notification channel
const SELECTION_CHANNEL_CAPACITY: usize = 64;

/// Access to the editor's document body
pub trait ContentStore: Send + Sync {
    /// Snapshot of the full document content
    fn get_all_content(&self) -> StructuredContent;

    /// Replace the full document content
    fn set_all_content(&self, content: StructuredContent);

    /// Remove all content
    fn clear(&self);

    /// Subscribe to selection/cursor change notifications
    fn subscribe_selection(&self) -> broadcast::Receiver<SelectionChange>;
}

/// In-memory content store
///
/// Content is held in a watch channel so hosts can observe replacements;
/// selection changes are fanned out over a broadcast channel.
pub struct MemoryContentStore {
    content: watch::Sender<StructuredContent>,
    selection: broadcast::Sender<SelectionChange>,
}

impl MemoryContentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_content(StructuredContent::new())
    }

    /// Create a store holding the given content
    pub fn with_content(content: StructuredContent) -> Self {
        let (content, _) = watch::channel(content);
        let (selection, _) = broadcast::channel(SELECTION_CHANNEL_CAPACITY);
        Self { content, selection }
    }

    /// Observe content replacements
    pub fn subscribe_content(&self) -> watch::Receiver<StructuredContent> {
        self.content.subscribe()
    }

    /// Publish a selection change, as the widget does when the caret moves
    pub fn notify_selection(&self, change: SelectionChange) {
        // No subscribers is fine; the notification is simply dropped.
        let receivers = self.selection.send(change).unwrap_or(0);
        tracing::trace!(receivers, "selection change published");
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for MemoryContentStore {
    fn get_all_content(&self) -> StructuredContent {
        self.content.borrow().clone()
    }

    fn set_all_content(&self, content: StructuredContent) {
        self.content.send_replace(content);
    }

    fn clear(&self) {
        self.content.send_replace(StructuredContent::new());
    }

    fn subscribe_selection(&self) -> broadcast::Receiver<SelectionChange> {
        self.selection.subscribe()
    }
}
