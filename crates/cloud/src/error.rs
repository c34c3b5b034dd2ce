//! Error types for the cloud crate.

use crate::DocumentId;
use thiserror::Error;

/// Result type alias for cloud operations.
pub type CloudResult<T> = Result<T, CloudError>;

/// Errors returned by the authentication and document services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    /// The call requires a signed-in session.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The signed-in user may not access the resource.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// No document with this ID exists.
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// The e-mail address is malformed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The password does not meet the minimum length.
    #[error("Password should be at least {min_len} characters")]
    WeakPassword { min_len: usize },

    /// An account already exists for this e-mail address.
    #[error("Email already in use: {0}")]
    EmailInUse(String),

    /// Unknown account or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Network or service failure.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
