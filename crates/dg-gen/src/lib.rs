//! Table-driven room and dungeon generation.
//!
//! A room is assembled from independent table rolls: the main feature, the
//! feature's details, and the exits. A dungeon is a sequence of such rooms.
//! The `main_features` table is mandatory; every other table is optional and
//! falls back to a hardcoded default when missing.

pub mod config;
pub mod details;
pub mod dungeon;
pub mod error;
pub mod exits;
pub mod feature;
pub mod room;
pub mod source;

pub use config::GeneratorConfig;
pub use dungeon::DungeonGenerator;
pub use error::{GenError, GenResult};
pub use feature::Feature;
pub use room::RoomGenerator;
pub use source::{ScopedTables, TableLookup};
