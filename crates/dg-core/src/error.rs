use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when saving or loading dungeon records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Reading or writing a dungeon file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file that was being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The dungeon record could not be encoded or decoded as JSON.
    #[error("invalid dungeon JSON: {0}")]
    Json(#[from] serde_json::Error),
}
