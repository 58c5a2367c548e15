use librarian_db::GatewayError;
use thiserror::Error;

/// Input problems caught before anything reaches the store.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Component name is required.")]
    NameRequired,

    #[error("Code snippet is required.")]
    CodeRequired,

    #[error("Pattern type is required.")]
    PatternRequired,

    #[error("Programming language is required.")]
    LanguageRequired,

    #[error("Invalid component ID.")]
    InvalidId,
}

/// Errors returned by [`crate::Librarian`] operations.
#[derive(Debug, Error)]
pub enum LibrarianError {
    /// Rejected input; the store was not touched
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store refused or failed the insert
    #[error("Database error occurred.")]
    SaveFailed,

    /// The store refused or failed the delete
    #[error("Error deleting component.")]
    DeleteFailed,

    /// No component has this id
    #[error("Component {0} not found.")]
    NotFound(i64),

    /// Store error from one of the fallible read paths
    #[error("Database error: {0}")]
    Store(#[from] GatewayError),
}

impl LibrarianError {
    /// True for errors raised before the store was touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
