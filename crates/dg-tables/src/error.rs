//! Error types for table storage and validation.

use std::path::PathBuf;

use crate::store::Scope;

/// Errors that can occur when loading, saving, or validating tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// No table with this name exists in the scope.
    #[error("table '{name}' not found in {scope} tables")]
    NotFound {
        /// The requested table name.
        name: String,
        /// The scope that was searched.
        scope: Scope,
    },

    /// A table file or directory could not be accessed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A table definition is not valid table JSON.
    #[error("cannot parse table {location}: {source}")]
    Parse {
        /// Where the definition came from (file path or built-in name).
        location: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A table could not be encoded as JSON.
    #[error("cannot encode table: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A table name is empty or contains unsupported characters.
    #[error("invalid table name '{0}': use only letters, numbers, and underscores")]
    InvalidName(String),

    /// A table entry has malformed bounds.
    #[error("invalid entry: {0}")]
    InvalidEntry(String),
}

impl TableError {
    /// Whether this error means the table simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
