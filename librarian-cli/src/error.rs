use librarian_lib::LibrarianError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be opened
    #[error("Database error: {0}")]
    Database(String),

    /// Validation or store failure reported by the librarian
    #[error(transparent)]
    Librarian(#[from] LibrarianError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
