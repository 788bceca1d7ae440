//! Multi-room dungeon generation.

use dg_core::text::capitalize;
use dg_core::{Dungeon, Room};
use dg_tables::{Dice, RandomSource, TableStore};

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::room::RoomGenerator;

/// Generates whole dungeons and regenerates individual rooms.
///
/// Owns its dice so a seeded generator produces the same sequence of
/// dungeons across runs.
#[derive(Debug)]
pub struct DungeonGenerator<S, R = Dice> {
    rooms: RoomGenerator<S>,
    dice: R,
    config: GeneratorConfig,
}

impl<S: TableStore> DungeonGenerator<S, Dice> {
    /// Create a generator, seeding the dice from `config.seed` or entropy.
    pub fn new(store: S, config: GeneratorConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::from_entropy(),
        };
        Self::with_dice(store, config, dice)
    }
}

impl<S: TableStore, R: RandomSource> DungeonGenerator<S, R> {
    /// Create a generator with an explicit randomness source.
    ///
    /// `config.seed` is ignored.
    pub fn with_dice(store: S, config: GeneratorConfig, dice: R) -> Self {
        let rooms = RoomGenerator::new(store).with_custom_tables(config.use_custom_tables);
        Self {
            rooms,
            dice,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a single room without an id.
    pub fn generate_room(&mut self) -> GenResult<Room> {
        self.rooms.generate_room(&mut self.dice)
    }

    /// Generate a dungeon of `room_count` rooms with ids `1..=room_count`.
    ///
    /// Nothing is returned unless every room generates.
    pub fn generate_dungeon(&mut self, room_count: u32, name: &str) -> GenResult<Dungeon> {
        self.config.check_room_count(room_count)?;

        let mut dungeon = Dungeon::new(name);
        for _ in 0..room_count {
            let room = self.rooms.generate_room(&mut self.dice)?;
            dungeon.add_room(room);
        }

        tracing::info!(name, rooms = room_count, "generated dungeon");
        Ok(dungeon)
    }

    /// Generate a dungeon named and annotated after `theme`.
    ///
    /// The theme only affects the name and notes; rooms are rolled on the
    /// same tables as [`generate_dungeon`](Self::generate_dungeon).
    pub fn generate_themed_dungeon(&mut self, theme: &str, room_count: u32) -> GenResult<Dungeon> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(GenError::InvalidTheme);
        }

        let name = format!("{} Dungeon", capitalize(theme));
        let mut dungeon = self.generate_dungeon(room_count, &name)?;
        dungeon.notes = format!("This dungeon has a {theme} theme.");
        Ok(dungeon)
    }

    /// Replace the room with `room_id` by a freshly generated one.
    ///
    /// The new room keeps the id and position of the old one. On any error
    /// the dungeon is left as it was.
    pub fn regenerate_room(&mut self, dungeon: &mut Dungeon, room_id: u32) -> GenResult<Room> {
        if dungeon.get_room(room_id).is_none() {
            return Err(GenError::RoomNotFound(room_id));
        }

        let room = self.rooms.generate_room(&mut self.dice)?;
        dungeon
            .replace_room(room_id, room)
            .ok_or(GenError::RoomNotFound(room_id))?;

        tracing::info!(room_id, "regenerated room");
        dungeon
            .get_room(room_id)
            .cloned()
            .ok_or(GenError::RoomNotFound(room_id))
    }
}
