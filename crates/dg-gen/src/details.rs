//! Feature-specific detail generation.
//!
//! Every generator is best-effort: a missing, unreadable, or empty sub-table
//! is replaced by the feature's default rather than failing the room. All
//! defaults live in this module so [`default_details`] can enumerate them.

use dg_core::{DetailValue, Details};
use dg_tables::{ProbabilityTable, RandomSource, TableEntry, resolve};

use crate::feature::Feature;
use crate::source::TableLookup;

/// Description given to rooms whose main feature is not a known [`Feature`].
pub const EMPTY_ROOM: &str = "Empty room";

/// Annotation added when a detail entry is marked `roll_again`.
pub const ROLL_AGAIN_NOTE: &str = "Roll again on the main feature table";

/// Chamber size used if the inline size table yields nothing.
pub const DEFAULT_CHAMBER_SIZE: &str = "Medium sized";

/// Chamber shape used if the inline shape table yields nothing.
pub const DEFAULT_CHAMBER_SHAPE: &str = "Rectangular";

/// Chamber contents used when `chamber_features` is unavailable.
pub const DEFAULT_CHAMBER_FEATURES: &str = "Various furnishings and decorations";

/// Chamber sizes. Rolled on percentile dice like every other table, so
/// rolls above 20 land on the last row.
pub const CHAMBER_SIZES: [(&str, u32, u32); 6] = [
    ("Closet-sized", 1, 2),
    ("15 feet (5 m) across", 3, 6),
    ("30 feet (9 m) across", 7, 15),
    ("50 feet (15 m) across", 16, 18),
    ("60 feet (18 m) across", 19, 19),
    ("90 feet (27 m) across", 20, 20),
];

/// Chamber shapes. Rolled on percentile dice; rolls above 20 land on the
/// last row.
pub const CHAMBER_SHAPES: [(&str, u32, u32); 6] = [
    ("Circle", 1, 2),
    ("Square", 3, 4),
    ("Rectangle", 5, 17),
    ("Hexagon", 18, 18),
    ("Half circle", 19, 19),
    ("Triangle", 20, 20),
];

/// Description used when a feature's detail table is unavailable.
pub fn default_description(feature: Feature) -> &'static str {
    match feature {
        Feature::Corridor => "Simple corridor",
        Feature::Chamber => DEFAULT_CHAMBER_FEATURES,
        Feature::Creature => "A creature lurks here",
        Feature::Explorers => "A group of explorers is here",
        Feature::InterstitialCavity => "A vast interstitial cavity",
        Feature::Accessway => "An accessway connecting areas",
        Feature::Rupture => "A rupture in the structure",
        Feature::Shaft => "A vertical shaft",
        Feature::AbhumanColony => "An abhuman colony resides here",
        Feature::IntegratedMachine => "An integrated machine dominates this area",
        Feature::MatterLeak => "A strange matter leak is present",
        Feature::EnergyDischarge => "Energy discharges pulse through this area",
        Feature::WeirdEvent => "A bizarre phenomenon occurs here",
        Feature::Vault => "A secure vault containing treasures",
        Feature::RelicChamber => "A chamber housing a powerful relic",
    }
}

/// The details a feature falls back to when none of its tables load.
///
/// Rolled fields (chamber size and shape, creature level) are not included.
pub fn default_details(feature: Option<Feature>) -> Details {
    match feature {
        None => described(EMPTY_ROOM),
        Some(Feature::Chamber) => {
            let mut details = Details::new();
            details.insert("features".to_string(), DEFAULT_CHAMBER_FEATURES.into());
            details
        }
        Some(f) => described(default_description(f)),
    }
}

/// Generate the details for a room's main feature.
///
/// `None` stands for a main feature outside the known set.
pub fn generate_details<T, R>(feature: Option<Feature>, tables: &T, dice: &mut R) -> Details
where
    T: TableLookup + ?Sized,
    R: RandomSource + ?Sized,
{
    let Some(feature) = feature else {
        return default_details(None);
    };

    match feature {
        Feature::Chamber => chamber(tables, dice),
        Feature::Creature => creature(tables, dice),
        Feature::Corridor
        | Feature::Explorers
        | Feature::InterstitialCavity
        | Feature::Accessway
        | Feature::Rupture
        | Feature::Shaft
        | Feature::AbhumanColony
        | Feature::IntegratedMachine
        | Feature::MatterLeak
        | Feature::EnergyDischarge
        | Feature::WeirdEvent
        | Feature::Vault
        | Feature::RelicChamber => from_detail_table(feature, tables, dice),
    }
}

/// `{description: <entry>}` from the feature's detail table, plus a note for
/// roll-again entries.
fn from_detail_table<T, R>(feature: Feature, tables: &T, dice: &mut R) -> Details
where
    T: TableLookup + ?Sized,
    R: RandomSource + ?Sized,
{
    let Some(entry) = roll_optional(tables, feature.detail_table(), dice) else {
        return default_details(Some(feature));
    };

    let mut details = described(&entry.name);
    if entry.roll_again {
        details.insert("note".to_string(), ROLL_AGAIN_NOTE.into());
    }
    details
}

fn chamber<T, R>(tables: &T, dice: &mut R) -> Details
where
    T: TableLookup + ?Sized,
    R: RandomSource + ?Sized,
{
    let sizes = inline_table(&CHAMBER_SIZES);
    let shapes = inline_table(&CHAMBER_SHAPES);

    let size = resolve(&sizes, dice)
        .map_or(DEFAULT_CHAMBER_SIZE, |e| e.name.as_str())
        .to_string();
    let shape = resolve(&shapes, dice)
        .map_or(DEFAULT_CHAMBER_SHAPE, |e| e.name.as_str())
        .to_string();
    let features = roll_optional(tables, Feature::Chamber.detail_table(), dice)
        .map_or_else(|| DEFAULT_CHAMBER_FEATURES.to_string(), |e| e.name);

    let mut details = Details::new();
    details.insert("size".to_string(), size.into());
    details.insert("shape".to_string(), shape.into());
    details.insert("features".to_string(), features.into());
    details
}

fn creature<T, R>(tables: &T, dice: &mut R) -> Details
where
    T: TableLookup + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut details = from_detail_table(Feature::Creature, tables, dice);
    let level = dice.roll_d20() % 10 + 1;
    details.insert(
        "creature_type".to_string(),
        DetailValue::Text(format!("Level {level} hostile entity")),
    );
    details
}

/// Load and roll on an optional table. Any failure yields `None`.
pub(crate) fn roll_optional<T, R>(tables: &T, name: &str, dice: &mut R) -> Option<TableEntry>
where
    T: TableLookup + ?Sized,
    R: RandomSource + ?Sized,
{
    let table: ProbabilityTable = match tables.lookup(name) {
        Ok(table) => table,
        Err(e) if e.is_not_found() => {
            tracing::debug!(table = name, "optional table missing, using default");
            return None;
        }
        Err(e) => {
            tracing::warn!(table = name, error = %e, "optional table unusable, using default");
            return None;
        }
    };

    let entry = resolve(&table.entries, dice).cloned();
    if entry.is_none() {
        tracing::warn!(table = name, "optional table is empty, using default");
    }
    entry
}

fn inline_table(rows: &[(&str, u32, u32)]) -> Vec<TableEntry> {
    rows.iter()
        .map(|(name, min, max)| TableEntry::new(*name, *min, *max))
        .collect()
}

fn described(text: &str) -> Details {
    let mut details = Details::new();
    details.insert("description".to_string(), text.into());
    details
}
