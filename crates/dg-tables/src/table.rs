//! The probability table model.
//!
//! A table is a named list of outcomes, each owning an inclusive percentile
//! range. Entries are evaluated in declared order; they do not need to be
//! sorted and gaps in coverage are tolerated.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// The roll space every table entry is expected to live in.
pub const PERCENTILE_RANGE: RangeInclusive<u32> = 1..=100;

/// Name and description of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name.
    #[serde(default)]
    pub name: String,
    /// What the table is used for.
    #[serde(default)]
    pub description: String,
}

/// One outcome within a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// The outcome text. May encode variable text such as "1 additional exit".
    pub name: String,
    /// Lowest roll (inclusive) selecting this entry.
    pub min: u32,
    /// Highest roll (inclusive) selecting this entry.
    pub max: u32,
    /// Marks a non-terminal outcome. Surfaced as an annotation only.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub roll_again: bool,
}

impl TableEntry {
    /// Create an entry covering `min..=max`.
    pub fn new(name: impl Into<String>, min: u32, max: u32) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            roll_again: false,
        }
    }

    /// Mark this entry as a roll-again outcome.
    pub fn with_roll_again(mut self) -> Self {
        self.roll_again = true;
        self
    }

    /// Whether `roll` falls inside this entry's range.
    pub fn matches(&self, roll: u32) -> bool {
        self.min <= roll && roll <= self.max
    }
}

/// A named set of weighted outcomes addressed by percentile roll ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityTable {
    /// Table name and description.
    #[serde(rename = "table_info", default)]
    pub info: TableInfo,
    /// Entries in evaluation order.
    #[serde(default)]
    pub entries: Vec<TableEntry>,
}

impl ProbabilityTable {
    /// Create an empty table.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            info: TableInfo {
                name: name.into(),
                description: description.into(),
            },
            entries: Vec::new(),
        }
    }

    /// Append an entry (builder style).
    pub fn with_entry(mut self, entry: TableEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Basic shape check: every entry needs a name and bounds with
    /// `1 <= min <= max <= 100`. Coverage gaps and overlaps are allowed.
    pub fn validate(&self) -> TableResult<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            let row = i + 1;
            if entry.name.trim().is_empty() {
                return Err(TableError::InvalidEntry(format!("row {row} has no name")));
            }
            if !PERCENTILE_RANGE.contains(&entry.min) || !PERCENTILE_RANGE.contains(&entry.max) {
                return Err(TableError::InvalidEntry(format!(
                    "row {row} ('{}') has bounds {}-{} outside 1-100",
                    entry.name, entry.min, entry.max
                )));
            }
            if entry.min > entry.max {
                return Err(TableError::InvalidEntry(format!(
                    "row {row} ('{}') has min {} above max {}",
                    entry.name, entry.min, entry.max
                )));
            }
        }
        Ok(())
    }

    /// Rolls in `1..=100` that no entry covers.
    pub fn uncovered_rolls(&self) -> Vec<u32> {
        PERCENTILE_RANGE
            .filter(|roll| !self.entries.iter().any(|e| e.matches(*roll)))
            .collect()
    }

    /// Parse a table from JSON text.
    pub fn from_json(json: &str, location: &str) -> TableResult<Self> {
        serde_json::from_str(json).map_err(|source| TableError::Parse {
            location: location.to_string(),
            source,
        })
    }

    /// Encode the table as pretty-printed JSON.
    pub fn to_json(&self) -> TableResult<String> {
        serde_json::to_string_pretty(self).map_err(TableError::Serialize)
    }
}

/// Check that a new table name is non-empty and uses only ASCII letters,
/// digits, and underscores.
pub fn validate_table_name(name: &str) -> TableResult<()> {
    let valid = !name.is_empty()
        && name.chars().any(|c| c.is_ascii_alphanumeric())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(TableError::InvalidName(name.to_string()))
    }
}
