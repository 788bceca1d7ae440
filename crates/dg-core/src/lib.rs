//! Core records for the dungeon generator.
//!
//! Rooms and dungeons are plain serializable data. Generation lives in
//! `dg-gen`; this crate only owns the records, their invariants (sequential
//! room ids), the JSON file format, and the human-readable room description.

/// Detail values attached to a room.
pub mod detail;
/// The dungeon record and its file format.
pub mod dungeon;
/// Error types used throughout the crate.
pub mod error;
/// The room record and its description.
pub mod room;
/// Small text helpers shared with the generators.
pub mod text;

/// Re-export detail types.
pub use detail::{DetailValue, Details};
/// Re-export the dungeon record.
pub use dungeon::Dungeon;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the room record.
pub use room::Room;
