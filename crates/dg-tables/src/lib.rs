//! Dice, probability tables, and table storage for the dungeon generator.
//!
//! Provides an injectable randomness source ([`RandomSource`]), the
//! percentile table model, the fallback-to-last table resolver, and table
//! stores for the "standard" and "custom" scopes (directory-backed and
//! in-memory), plus the built-in standard tables.

pub mod builtin;
pub mod dice;
pub mod error;
pub mod resolver;
pub mod store;
pub mod table;

pub use dice::{Dice, DiceExpr, Die, RandomSource, ScriptedDice};
pub use error::{TableError, TableResult};
pub use resolver::{entry_for_roll, resolve};
pub use store::{DirTableStore, MemoryTableStore, Scope, TableStore};
pub use table::{ProbabilityTable, TableEntry, TableInfo, validate_table_name};
