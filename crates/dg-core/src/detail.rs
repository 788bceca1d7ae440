use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Feature-specific attributes of a room, keyed by attribute name.
pub type Details = BTreeMap<String, DetailValue>;

/// A single detail value. Serialized as a bare JSON value so dungeon files
/// stay readable and editable by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    /// An explicit JSON `null`.
    Null,
    /// A boolean value.
    Boolean(bool),
    /// A 64-bit signed integer value.
    Integer(i64),
    /// An unsigned integer too large for `Integer`.
    Unsigned(u64),
    /// A 64-bit floating-point value.
    Float(f64),
    /// A text value.
    Text(String),
    /// An ordered list of detail values.
    List(Vec<DetailValue>),
    /// A string-keyed map of nested detail values.
    Map(BTreeMap<String, DetailValue>),
}

impl DetailValue {
    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for DetailValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DetailValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for DetailValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Self::Map(entries) => {
                let parts: Vec<String> = entries.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scalars() {
        assert_eq!(DetailValue::from("Circle").to_string(), "Circle");
        assert_eq!(DetailValue::from(7_i64).to_string(), "7");
        assert_eq!(DetailValue::from(true).to_string(), "true");
        assert_eq!(DetailValue::Null.to_string(), "null");
    }

    #[test]
    fn null_and_large_integers_survive_json() {
        let json = r#"{"big":18446744073709551615,"low":-3,"note":null}"#;
        let details: Details = serde_json::from_str(json).unwrap();
        assert_eq!(details["note"], DetailValue::Null);
        assert_eq!(details["big"], DetailValue::Unsigned(u64::MAX));
        assert_eq!(details["low"], DetailValue::Integer(-3));
        assert_eq!(serde_json::to_string(&details).unwrap(), json);
    }

    #[test]
    fn display_nested() {
        let list = DetailValue::List(vec!["a".into(), 2_i64.into()]);
        assert_eq!(list.to_string(), "[a, 2]");

        let mut map = BTreeMap::new();
        map.insert("level".to_string(), DetailValue::Integer(4));
        map.insert("kind".to_string(), DetailValue::from("latos"));
        assert_eq!(DetailValue::Map(map).to_string(), "{kind: latos, level: 4}");
    }

    #[test]
    fn untagged_json_shape() {
        let mut details = Details::new();
        details.insert("size".to_string(), "Closet-sized".into());
        details.insert("depth".to_string(), 30_i64.into());
        details.insert(
            "tags".to_string(),
            DetailValue::List(vec!["dusty".into(), "dark".into()]),
        );

        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(
            json,
            r#"{"depth":30,"size":"Closet-sized","tags":["dusty","dark"]}"#
        );

        let back: Details = serde_json::from_str(&json).unwrap();
        assert_eq!(back, details);
    }

    #[test]
    fn nested_map_deserializes() {
        let value: DetailValue =
            serde_json::from_str(r#"{"inner": {"x": 1.5}, "flag": false}"#).unwrap();
        let DetailValue::Map(map) = value else {
            panic!("expected map");
        };
        assert_eq!(map["flag"], DetailValue::Boolean(false));
        assert!(matches!(map["inner"], DetailValue::Map(_)));
    }

    #[test]
    fn as_text() {
        assert_eq!(DetailValue::from("x").as_text(), Some("x"));
        assert_eq!(DetailValue::from(1_i64).as_text(), None);
    }
}
