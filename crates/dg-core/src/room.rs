use std::fmt;

use serde::{Deserialize, Serialize};

use crate::detail::{DetailValue, Details};
use crate::text::capitalize;

/// Detail key rendered unlabelled directly under the feature header.
const DESCRIPTION_KEY: &str = "description";

/// A single generated room.
///
/// Rooms are created fully formed by the room generator. The only field that
/// changes afterwards is `id`, which the owning [`Dungeon`](crate::Dungeon)
/// assigns on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Sequential 1-based id, `None` until the room joins a dungeon.
    #[serde(default)]
    pub id: Option<u32>,
    /// Name of the main feature rolled for this room (e.g. "Chamber").
    #[serde(default)]
    pub main_feature: String,
    /// Feature-specific attributes (size, shape, description, notes).
    #[serde(default)]
    pub details: Details,
    /// Named egress points, in generation order.
    #[serde(default)]
    pub exits: Vec<String>,
}

impl Room {
    /// Create a room without an id.
    pub fn new(main_feature: impl Into<String>, details: Details, exits: Vec<String>) -> Self {
        Self {
            id: None,
            main_feature: main_feature.into(),
            details,
            exits,
        }
    }

    /// Look up a detail value by key.
    pub fn detail(&self, key: &str) -> Option<&DetailValue> {
        self.details.get(key)
    }

    /// Full human-readable description of the room.
    ///
    /// Sections appear in a fixed order: the feature header, the raw
    /// description line, known fields for the feature, every remaining detail
    /// key, then the exits line (or "No exits").
    pub fn description(&self) -> String {
        if self.main_feature.is_empty() {
            return "Empty room".to_string();
        }

        let mut out = format!("{}:\n", self.main_feature);

        if let Some(desc) = self.detail(DESCRIPTION_KEY) {
            out.push_str(&format!("{desc}\n"));
        }

        let known = known_fields(&self.main_feature);
        for (key, label) in known {
            if let Some(value) = self.detail(key) {
                out.push_str(&format!("{label}: {value}\n"));
            }
        }

        for (key, value) in &self.details {
            if key == DESCRIPTION_KEY || known.iter().any(|(k, _)| *k == key.as_str()) {
                continue;
            }
            out.push_str(&format!("{}: {value}\n", capitalize(key)));
        }

        if self.exits.is_empty() {
            out.push_str("No exits");
        } else {
            out.push_str(&format!("Exits: {}", self.exits.join(", ")));
        }

        out
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Fields that a feature renders first, with their labels.
fn known_fields(main_feature: &str) -> &'static [(&'static str, &'static str)] {
    match main_feature {
        "Chamber" => &[("size", "Size"), ("shape", "Shape")],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chamber() -> Room {
        let mut details = Details::new();
        details.insert("size".to_string(), "Closet-sized".into());
        details.insert("shape".to_string(), "Hexagon".into());
        details.insert(
            "features".to_string(),
            "Various furnishings and decorations".into(),
        );
        Room::new(
            "Chamber",
            details,
            vec!["Main entrance".to_string(), "Side passage".to_string()],
        )
    }

    #[test]
    fn new_room_has_no_id() {
        assert_eq!(chamber().id, None);
    }

    #[test]
    fn chamber_description_order() {
        assert_eq!(
            chamber().description(),
            "Chamber:\n\
             Size: Closet-sized\n\
             Shape: Hexagon\n\
             Features: Various furnishings and decorations\n\
             Exits: Main entrance, Side passage"
        );
    }

    #[test]
    fn description_line_comes_first() {
        let mut details = Details::new();
        details.insert("description".to_string(), "A creature lurks here".into());
        details.insert(
            "creature_type".to_string(),
            "Level 3 hostile entity".into(),
        );
        let room = Room::new("Creature", details, Vec::new());
        assert_eq!(
            room.description(),
            "Creature:\n\
             A creature lurks here\n\
             Creature_type: Level 3 hostile entity\n\
             No exits"
        );
    }

    #[test]
    fn size_outside_chamber_is_a_plain_field() {
        let mut details = Details::new();
        details.insert("size".to_string(), "Huge".into());
        let room = Room::new("Shaft", details, vec!["Main entrance".to_string()]);
        assert_eq!(room.description(), "Shaft:\nSize: Huge\nExits: Main entrance");
    }

    #[test]
    fn featureless_room_is_empty() {
        let room = Room::new("", Details::new(), Vec::new());
        assert_eq!(room.description(), "Empty room");
        assert_eq!(room.to_string(), "Empty room");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let room: Room = serde_json::from_str(r#"{"main_feature": "Vault"}"#).unwrap();
        assert_eq!(room.id, None);
        assert_eq!(room.main_feature, "Vault");
        assert!(room.details.is_empty());
        assert!(room.exits.is_empty());
    }
}
