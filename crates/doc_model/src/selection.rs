//! Selection model - cursor position and selection change notifications

use serde::{Deserialize, Serialize};

/// A selected character range in the content
///
/// When `length` is zero the selection is collapsed (just a caret).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    /// Character offset of the selection start
    pub index: usize,
    /// Number of selected characters
    pub length: usize,
}

impl SelectionRange {
    /// Create a collapsed selection (caret only)
    pub fn caret(index: usize) -> Self {
        Self { index, length: 0 }
    }
}

/// Vertical extent of a selection in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SelectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Payload of a selection change notification
///
/// `range` is `None` when the editor lost focus.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionChange {
    pub range: Option<SelectionRange>,
    pub bounds: Option<SelectionBounds>,
}

impl SelectionChange {
    /// A selection change with known layout bounds
    pub fn at(range: SelectionRange, bounds: SelectionBounds) -> Self {
        Self {
            range: Some(range),
            bounds: Some(bounds),
        }
    }

    /// The editor lost focus
    pub fn blurred() -> Self {
        Self::default()
    }
}
