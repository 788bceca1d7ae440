//! Where generators get their tables from.

use dg_tables::{ProbabilityTable, Scope, TableResult, TableStore};

/// Looks up a table by name for generation.
pub trait TableLookup {
    /// Load the named table.
    fn lookup(&self, name: &str) -> TableResult<ProbabilityTable>;
}

/// Reads generation tables from a [`TableStore`].
///
/// Tables come from the standard scope. With custom overrides enabled, a
/// custom table of the same name wins, and a missing custom table falls
/// through to the standard one.
#[derive(Debug, Clone)]
pub struct ScopedTables<S> {
    store: S,
    use_custom_tables: bool,
}

impl<S: TableStore> ScopedTables<S> {
    /// Standard-scope lookups only.
    pub fn new(store: S) -> Self {
        Self {
            store,
            use_custom_tables: false,
        }
    }

    /// Enable or disable custom overrides.
    pub fn with_custom_tables(mut self, enabled: bool) -> Self {
        self.use_custom_tables = enabled;
        self
    }

    /// Whether custom overrides are enabled.
    pub fn uses_custom_tables(&self) -> bool {
        self.use_custom_tables
    }
}

impl<S: TableStore> TableLookup for ScopedTables<S> {
    fn lookup(&self, name: &str) -> TableResult<ProbabilityTable> {
        if self.use_custom_tables {
            match self.store.load_table(name, Scope::Custom) {
                Err(e) if e.is_not_found() => {}
                other => return other,
            }
        }
        self.store.load_table(name, Scope::Standard)
    }
}
