//! Header collapse tracking
//!
//! The app header hides while the user scrolls down and comes back once the
//! page is scrolled (nearly) to the top.

/// Scroll offset at or below which the header is always shown
pub const DEFAULT_HEADER_TOP_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Expanded,
    Collapsed,
}

/// Tracks the last scroll offset to derive the header state
#[derive(Debug, Clone)]
pub struct HeaderTracker {
    last_scroll_top: f64,
    state: HeaderState,
    header_height: f64,
    top_threshold: f64,
}

impl HeaderTracker {
    pub fn new(header_height: f64) -> Self {
        Self::with_threshold(header_height, DEFAULT_HEADER_TOP_THRESHOLD)
    }

    pub fn with_threshold(header_height: f64, top_threshold: f64) -> Self {
        Self {
            last_scroll_top: 0.0,
            state: HeaderState::Expanded,
            header_height,
            top_threshold,
        }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Feed a new scroll offset; returns the new state if it changed
    pub fn on_scroll(&mut self, scroll_top: f64) -> Option<HeaderState> {
        let previous = self.state;

        if scroll_top > self.last_scroll_top && scroll_top > self.header_height / 2.0 {
            self.state = HeaderState::Collapsed;
        } else if scroll_top <= self.top_threshold {
            self.state = HeaderState::Expanded;
        }
        self.last_scroll_top = scroll_top.max(0.0);

        (self.state != previous).then_some(self.state)
    }
}
