//! Workbench - the editor's persistence controller
//!
//! Implements New, Save, Load and Export for the working document. Each
//! operation decides between local-file and cloud-document semantics from
//! the current [`store::DocumentIdentity`] and [`cloud::SessionState`], talks
//! to the injected collaborators, and keeps the UI affordances in step with
//! the session.

mod controller;
mod error;
mod listing;
mod logging;
mod startup;
mod ui;

pub use controller::*;
pub use error::*;
pub use listing::*;
pub use logging::*;
pub use startup::*;
pub use ui::*;
