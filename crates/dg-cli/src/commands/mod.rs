pub mod console;
pub mod export;
pub mod generate;
pub mod init;
pub mod regenerate;
pub mod roll;
pub mod show;
pub mod tables;

use std::path::Path;

use colored::Colorize;
use dg_core::{Dungeon, Room};
use dg_gen::{DungeonGenerator, GeneratorConfig};
use dg_tables::{Dice, DirTableStore, Scope};

/// Open the table store under the data directory.
fn open_store(data_dir: &Path) -> DirTableStore {
    tracing::debug!(data_dir = %data_dir.display(), "opening table store");
    DirTableStore::new(data_dir)
}

/// Build a dungeon generator over the data directory's tables.
fn generator(
    data_dir: &Path,
    seed: Option<u64>,
    custom: bool,
) -> DungeonGenerator<DirTableStore> {
    let mut config = GeneratorConfig::default().with_custom_tables(custom);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    DungeonGenerator::new(open_store(data_dir), config)
}

/// Seeded dice if a seed was given, otherwise fresh entropy.
fn dice(seed: Option<u64>) -> Dice {
    seed.map_or_else(Dice::from_entropy, Dice::seeded)
}

fn parse_scope(scope: &str) -> Result<Scope, String> {
    Scope::from_str_tag(scope)
        .ok_or_else(|| format!("unknown scope \"{scope}\". Use: standard, custom"))
}

fn load_dungeon(path: &Path) -> Result<Dungeon, String> {
    Dungeon::load(path).map_err(|e| format!("cannot load dungeon: {e}"))
}

fn save_dungeon(dungeon: &Dungeon, path: &Path) -> Result<(), String> {
    dungeon
        .save(path)
        .map_err(|e| format!("cannot save dungeon: {e}"))
}

/// Print a room with a bold "Room N" header and indented body.
fn print_room(room: &Room) {
    let header = match room.id {
        Some(id) => format!("Room {id}"),
        None => "Room".to_string(),
    };
    println!("  {}", header.bold());
    for line in room.description().lines() {
        println!("    {line}");
    }
    println!();
}

fn print_summary(dungeon: &Dungeon) {
    println!("  {}", dungeon.name.bold());
    println!("  Created: {}", dungeon.created_at.dimmed());
    println!("  Rooms:   {}", dungeon.len());
    if !dungeon.notes.is_empty() {
        println!("  Notes:   {}", dungeon.notes);
    }
    println!();
}
