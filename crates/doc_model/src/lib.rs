//! Document Model - rich-text content and the content store boundary
//!
//! The editing widget itself is external. This crate describes what the
//! rest of the workspace sees of it: the structured content it holds, the
//! store it exposes (get/set/clear plus selection notifications), and an
//! HTML rendering of that content for export.

mod content;
mod error;
mod html;
mod selection;
mod store;

pub use content::*;
pub use error::*;
pub use html::*;
pub use selection::*;
pub use store::*;
