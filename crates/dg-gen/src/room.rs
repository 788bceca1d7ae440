//! Single-room generation.

use dg_core::Room;
use dg_tables::{RandomSource, TableStore, resolve};

use crate::details::generate_details;
use crate::error::{GenError, GenResult};
use crate::exits::generate_exits;
use crate::feature::Feature;
use crate::source::{ScopedTables, TableLookup};

/// Name of the mandatory main feature table.
pub const MAIN_FEATURES_TABLE: &str = "main_features";

/// Builds one room per call from the tables in a store.
///
/// Holds no state between calls besides the table source; the dice are
/// passed in.
#[derive(Debug, Clone)]
pub struct RoomGenerator<S> {
    tables: ScopedTables<S>,
}

impl<S: TableStore> RoomGenerator<S> {
    /// Generator reading standard-scope tables from `store`.
    pub fn new(store: S) -> Self {
        Self {
            tables: ScopedTables::new(store),
        }
    }

    /// Let custom tables override standard ones.
    pub fn with_custom_tables(mut self, enabled: bool) -> Self {
        self.tables = self.tables.with_custom_tables(enabled);
        self
    }

    /// Generate a room: main feature, feature details, then exits.
    ///
    /// Fails only if `main_features` cannot be loaded or has no entries.
    /// The returned room has no id.
    pub fn generate_room<R: RandomSource + ?Sized>(&self, dice: &mut R) -> GenResult<Room> {
        let table = self
            .tables
            .lookup(MAIN_FEATURES_TABLE)
            .map_err(|source| GenError::MandatoryTable {
                name: MAIN_FEATURES_TABLE.to_string(),
                source,
            })?;

        let main_feature = resolve(&table.entries, dice)
            .ok_or_else(|| GenError::EmptyTable(MAIN_FEATURES_TABLE.to_string()))?
            .name
            .clone();

        let feature = Feature::from_name(&main_feature);
        if feature.is_none() {
            tracing::debug!(main_feature, "unknown main feature, room left empty");
        }

        let details = generate_details(feature, &self.tables, dice);
        let exits = generate_exits(&self.tables, dice);

        tracing::debug!(main_feature, exits = exits.len(), "generated room");
        Ok(Room::new(main_feature, details, exits))
    }
}
