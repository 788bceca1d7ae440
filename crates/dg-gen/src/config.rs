//! Configuration for dungeon generation.

use crate::error::{GenError, GenResult};

/// Configuration for a [`DungeonGenerator`](crate::DungeonGenerator).
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// RNG seed for reproducible dungeons. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Let custom tables override standard tables of the same name.
    pub use_custom_tables: bool,
    /// Largest dungeon that may be requested.
    pub max_rooms: u32,
    /// Room count used when the caller does not ask for one.
    pub default_room_count: u32,
    /// Dungeon name used when the caller does not give one.
    pub default_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            use_custom_tables: false,
            max_rooms: 100,
            default_room_count: 5,
            default_name: "Random Dungeon".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable custom table overrides.
    pub fn with_custom_tables(mut self, enabled: bool) -> Self {
        self.use_custom_tables = enabled;
        self
    }

    /// Set the maximum room count (at least 1).
    pub fn with_max_rooms(mut self, max: u32) -> Self {
        self.max_rooms = max.max(1);
        self
    }

    /// Reject room counts outside `1..=max_rooms`.
    pub fn check_room_count(&self, count: u32) -> GenResult<()> {
        if (1..=self.max_rooms).contains(&count) {
            Ok(())
        } else {
            Err(GenError::InvalidRoomCount {
                count,
                max: self.max_rooms,
            })
        }
    }
}
