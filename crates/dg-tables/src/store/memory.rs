//! In-memory table store.

use std::collections::{BTreeMap, BTreeSet};

use super::{Scope, TableStore, bare_name};
use crate::builtin;
use crate::error::{TableError, TableResult};
use crate::table::ProbabilityTable;

/// Keeps tables in memory, keyed by scope and name.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableStore {
    tables: BTreeMap<(Scope, String), ProbabilityTable>,
}

impl MemoryTableStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the built-in standard tables.
    pub fn with_builtin() -> TableResult<Self> {
        let mut store = Self::new();
        for (name, table) in builtin::builtin_tables()? {
            store.insert(Scope::Standard, name, table);
        }
        Ok(store)
    }

    /// Add a table (builder style).
    pub fn with_table(mut self, scope: Scope, name: &str, table: ProbabilityTable) -> Self {
        self.insert(scope, name, table);
        self
    }

    /// Add or replace a table.
    pub fn insert(&mut self, scope: Scope, name: &str, table: ProbabilityTable) {
        self.tables.insert((scope, bare_name(name).to_string()), table);
    }
}

impl TableStore for MemoryTableStore {
    fn load_table(&self, name: &str, scope: Scope) -> TableResult<ProbabilityTable> {
        self.tables
            .get(&(scope, bare_name(name).to_string()))
            .cloned()
            .ok_or_else(|| TableError::NotFound {
                name: name.to_string(),
                scope,
            })
    }

    fn save_table(
        &mut self,
        name: &str,
        table: &ProbabilityTable,
        scope: Scope,
    ) -> TableResult<()> {
        self.insert(scope, name, table.clone());
        Ok(())
    }

    fn list_tables(&self, scope: Scope) -> TableResult<BTreeSet<String>> {
        Ok(self
            .tables
            .keys()
            .filter(|(s, _)| *s == scope)
            .map(|(_, name)| name.clone())
            .collect())
    }
}
