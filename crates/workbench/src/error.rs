//! Error types for persistence operations

use cloud::CloudError;
use store::StoreError;
use thiserror::Error;

/// Result type alias for persistence operations
pub type PersistResult<T> = Result<T, PersistenceError>;

/// Input problems; always recovered locally without touching any state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The prompt was dismissed or left blank
    #[error("Prompt cancelled")]
    Cancelled,

    /// A picked file does not carry the required extension
    #[error("'{file_name}' is not a .{expected} file")]
    WrongExtension { file_name: String, expected: String },

    /// The owner has no cloud documents to choose from
    #[error("No cloud documents found")]
    NoDocuments,

    /// The chooser input was not a listed number
    #[error("No document selected")]
    NoSelection,

    /// The destructive-action confirmation was declined
    #[error("Deletion cancelled")]
    DeletionCancelled,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A cloud operation was attempted while signed out
    #[error("Authentication required")]
    AuthRequired,

    #[error("Remote document service error: {0}")]
    Remote(CloudError),

    #[error("Local file error: {0}")]
    Local(#[from] StoreError),

    /// A newer operation, New, or a sign-out happened while this one was in flight
    #[error("Superseded by a newer operation")]
    Superseded,
}

impl From<CloudError> for PersistenceError {
    fn from(err: CloudError) -> Self {
        match err {
            CloudError::Unauthenticated => PersistenceError::AuthRequired,
            other => PersistenceError::Remote(other),
        }
    }
}

impl PersistenceError {
    /// True for aborts caused by user input rather than failures
    pub fn is_validation(&self) -> bool {
        matches!(self, PersistenceError::Validation(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, PersistenceError::Validation(ValidationError::Cancelled))
    }
}
