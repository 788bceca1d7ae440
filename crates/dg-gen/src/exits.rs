//! Exit generation.
//!
//! The `exits` table describes how many extra exits a room has in free text.
//! That text is mapped onto concrete exit names by substring matching.

use dg_tables::RandomSource;

use crate::details::roll_optional;
use crate::source::TableLookup;

/// Name of the exits table.
pub const EXITS_TABLE: &str = "exits";

/// The way into every room.
pub const MAIN_ENTRANCE: &str = "Main entrance";

/// Exits used when the exits table is unavailable or its text is unrecognised.
pub const DEFAULT_EXITS: &[&str] = &[MAIN_ENTRANCE];

/// Case-sensitive patterns checked in order; the first match wins.
const EXIT_PATTERNS: &[(&str, &[&str])] = &[
    ("No additional exits", &[MAIN_ENTRANCE]),
    ("1 additional exit", &[MAIN_ENTRANCE, "Side passage"]),
    (
        "2 additional exits",
        &[MAIN_ENTRANCE, "Side passage", "Back door"],
    ),
    ("sealed exit", &[MAIN_ENTRANCE, "Sealed door"]),
    ("trapped exit", &[MAIN_ENTRANCE, "Trapped door"]),
    ("hidden exit", &[MAIN_ENTRANCE, "Hidden passage"]),
];

/// Turn an exits-table outcome into a list of exit names.
pub fn interpret_exits(text: &str) -> Vec<String> {
    EXIT_PATTERNS
        .iter()
        .find(|(pattern, _)| text.contains(pattern))
        .map_or(DEFAULT_EXITS, |(_, exits)| *exits)
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Roll on the exits table and interpret the result.
pub fn generate_exits<T, R>(tables: &T, dice: &mut R) -> Vec<String>
where
    T: TableLookup + ?Sized,
    R: RandomSource + ?Sized,
{
    match roll_optional(tables, EXITS_TABLE, dice) {
        Some(entry) => interpret_exits(&entry.name),
        None => DEFAULT_EXITS.iter().map(|s| (*s).to_string()).collect(),
    }
}
