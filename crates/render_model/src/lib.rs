//! Render Model - viewport tracking for the editor surface
//!
//! Layout belongs to the editing widget. This crate only decides how the
//! viewport should move in response to selection changes and scrolling:
//! keeping the caret clear of the viewport edges and collapsing the app
//! header while the user scrolls down.

mod follower;
mod header;
mod viewport;

pub use follower::*;
pub use header::*;
pub use viewport::*;
