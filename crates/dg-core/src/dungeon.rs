use std::fmt;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::room::Room;

/// A named collection of generated rooms.
///
/// Room ids are assigned by position at insertion time, so rooms are always
/// numbered `1..=len` in generation order. The only mutation besides
/// appending is wholesale replacement of a room by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    /// Display name of the dungeon.
    #[serde(default = "loaded_name")]
    pub name: String,
    /// Creation timestamp as ISO-8601 text, kept verbatim across save/load.
    #[serde(default = "now_iso8601")]
    pub created_at: String,
    /// Free-text annotation, e.g. a theme description.
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    rooms: Vec<Room>,
}

fn loaded_name() -> String {
    "Loaded Dungeon".to_string()
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl Dungeon {
    /// Create an empty dungeon stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: now_iso8601(),
            notes: String::new(),
            rooms: Vec::new(),
        }
    }

    /// Append a room, assigning it the next sequential id.
    pub fn add_room(&mut self, mut room: Room) -> &Room {
        room.id = Some(self.rooms.len() as u32 + 1);
        self.rooms.push(room);
        &self.rooms[self.rooms.len() - 1]
    }

    /// Find a room by id.
    pub fn get_room(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == Some(id))
    }

    /// Replace the room with the given id, keeping that id on the new room.
    ///
    /// Returns the displaced room, or `None` (leaving the dungeon untouched)
    /// if no room has that id.
    pub fn replace_room(&mut self, id: u32, mut room: Room) -> Option<Room> {
        let slot = self.rooms.iter_mut().find(|r| r.id == Some(id))?;
        room.id = Some(id);
        Some(std::mem::replace(slot, room))
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the dungeon has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Encode the dungeon as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a dungeon from JSON. Stored room ids are kept as-is.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the dungeon to a file.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), rooms = self.rooms.len(), "saved dungeon");
        Ok(())
    }

    /// Read a dungeon previously written by [`Dungeon::save`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dungeon = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), rooms = dungeon.rooms.len(), "loaded dungeon");
        Ok(dungeon)
    }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dungeon: {}", self.name)?;
        writeln!(f, "Created: {}", self.created_at)?;
        writeln!(f, "Rooms: {}", self.rooms.len())?;
        if !self.notes.is_empty() {
            writeln!(f, "Notes: {}", self.notes)?;
        }
        Ok(())
    }
}
