//! Cloud - accounts and per-owner document storage
//!
//! The hosted authentication and database service is an external
//! collaborator. This crate defines the boundary the editor talks to:
//!
//! - [`SessionState`]: who is signed in, published over a watch channel that
//!   only the authentication provider can write to
//! - [`AuthProvider`]: sign up, sign in, sign out
//! - [`DocumentService`]: create, list, fetch and delete documents owned by
//!   the signed-in user
//!
//! In-memory implementations of both services back development and tests.

mod auth;
mod documents;
mod error;
mod memory_store;
mod session;

pub use auth::*;
pub use documents::*;
pub use error::*;
pub use memory_store::*;
pub use session::*;
