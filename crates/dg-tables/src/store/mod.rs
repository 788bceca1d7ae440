//! Table storage.
//!
//! Tables live in one of two scopes that never overlap: "standard" (shipped
//! reference content) and "custom" (user-authored). Stores do not enforce
//! read-only standard tables; that is the editing caller's policy.

pub mod dir;
pub mod memory;

pub use dir::DirTableStore;
pub use memory::MemoryTableStore;

use std::collections::BTreeSet;
use std::fmt;

use crate::error::TableResult;
use crate::table::ProbabilityTable;

/// File extension used for stored tables.
pub const TABLE_EXTENSION: &str = "json";

/// The namespace a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// Shipped reference tables.
    Standard,
    /// User-authored tables.
    Custom,
}

impl Scope {
    /// Both scopes, standard first.
    pub const ALL: [Scope; 2] = [Scope::Standard, Scope::Custom];

    /// Parse a scope name ("standard"/"std" or "custom").
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "std" => Some(Self::Standard),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Loads, saves, and lists named probability tables.
pub trait TableStore {
    /// Load a table. A missing table is reported as
    /// [`TableError::NotFound`](crate::TableError::NotFound).
    fn load_table(&self, name: &str, scope: Scope) -> TableResult<ProbabilityTable>;

    /// Write or overwrite a table.
    fn save_table(&mut self, name: &str, table: &ProbabilityTable, scope: Scope)
    -> TableResult<()>;

    /// Names of every table stored in a scope.
    fn list_tables(&self, scope: Scope) -> TableResult<BTreeSet<String>>;

    /// Save into the custom scope, the default target for edits.
    fn save_custom_table(&mut self, name: &str, table: &ProbabilityTable) -> TableResult<()> {
        self.save_table(name, table, Scope::Custom)
    }
}

/// Strip a trailing `.json` from a table name, if present.
pub(crate) fn bare_name(name: &str) -> &str {
    name.strip_suffix(".json").unwrap_or(name)
}
