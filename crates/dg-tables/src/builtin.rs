//! Built-in standard tables shipped with the generator.

use crate::error::TableResult;
use crate::table::ProbabilityTable;

/// Name and JSON source of every built-in standard table.
pub const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("main_features", include_str!("../data/main_features.json")),
    ("corridor_details", include_str!("../data/corridor_details.json")),
    ("chamber_features", include_str!("../data/chamber_features.json")),
    ("exits", include_str!("../data/exits.json")),
];

/// Parse every built-in table.
pub fn builtin_tables() -> TableResult<Vec<(&'static str, ProbabilityTable)>> {
    BUILTIN_TABLES
        .iter()
        .map(|(name, json)| {
            let table = ProbabilityTable::from_json(json, &format!("built-in {name}"))?;
            Ok((*name, table))
        })
        .collect()
}
