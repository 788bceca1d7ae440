//! Error types for room and dungeon generation.

use dg_tables::TableError;
use thiserror::Error;

/// Result type for generation.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that abort a generation call.
///
/// Missing optional tables never surface here; they are replaced by
/// defaults inside the detail generators.
#[derive(Debug, Error)]
pub enum GenError {
    /// A table every room depends on could not be loaded.
    #[error("mandatory table '{name}' could not be loaded: {source}")]
    MandatoryTable {
        /// The table name.
        name: String,
        /// Why loading failed.
        source: TableError,
    },

    /// A mandatory table has no entries to roll on.
    #[error("table '{0}' has no entries")]
    EmptyTable(String),

    /// The requested room count is outside the allowed range.
    #[error("room count must be between 1 and {max}, got {count}")]
    InvalidRoomCount {
        /// The requested count.
        count: u32,
        /// The configured maximum.
        max: u32,
    },

    /// A themed dungeon was requested without a theme.
    #[error("theme must not be empty")]
    InvalidTheme,

    /// No room with this id exists in the dungeon.
    #[error("no room with id {0}")]
    RoomNotFound(u32),
}
