//! Viewport management and the selection-follow rule
//!
//! Whenever the selection moves close to (or past) an edge of the visible
//! area, the viewport scrolls by the minimal amount that puts the selection
//! back inside the buffer zone.

use doc_model::SelectionBounds;
use serde::{Deserialize, Serialize};

/// Default distance in pixels kept between the selection and viewport edges
pub const DEFAULT_SCROLL_BUFFER: f64 = 50.0;

/// Represents the current viewport state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current vertical scroll position (top of viewport in document coordinates)
    pub scroll_y: f64,
    /// Height of the visible area
    pub visible_height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, visible_height: f64) -> Self {
        Self {
            scroll_y,
            visible_height,
        }
    }

    /// Update the scroll position
    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y.max(0.0);
    }

    /// Get the top position of the viewport
    pub fn top(&self) -> f64 {
        self.scroll_y
    }

    /// Get the bottom position of the viewport
    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.visible_height
    }

    /// Apply a scroll request to this viewport
    pub fn apply(&mut self, request: ScrollRequest) {
        self.set_scroll(self.scroll_y + request.delta_y);
    }
}

/// How a scroll should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A relative scroll of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Positive scrolls down, negative scrolls up
    pub delta_y: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn smooth(delta_y: f64) -> Self {
        Self {
            delta_y,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Compute the scroll needed to keep a selection clear of the viewport edges
///
/// Returns `None` when the selection already sits inside the buffer zone.
/// The bottom edge takes precedence when a selection is taller than the
/// zone, so the caret end stays visible while extending downwards.
pub fn follow_selection(
    viewport: &Viewport,
    bounds: &SelectionBounds,
    buffer: f64,
) -> Option<ScrollRequest> {
    let lower_limit = viewport.bottom() - buffer;
    if bounds.bottom > lower_limit {
        return Some(ScrollRequest::smooth(bounds.bottom - lower_limit));
    }

    let upper_limit = viewport.top() + buffer;
    if bounds.top < upper_limit {
        // Never scroll above the start of the document.
        let delta = (bounds.top - upper_limit).max(-viewport.scroll_y);
        if delta < 0.0 {
            return Some(ScrollRequest::smooth(delta));
        }
    }

    None
}
