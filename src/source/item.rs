//! Item records returned by a page source.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Render key of an item, in whatever shape the source sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(Number),
    Text(String),
    /// Anything else (bool, array, object, null), kept verbatim.
    Other(Value),
}

impl ItemId {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ItemId::Number(number) => number.as_u64(),
            _ => None,
        }
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId::Number(id.into())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Text(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(number) => write!(f, "{}", number),
            ItemId::Text(text) => f.write_str(text),
            ItemId::Other(value) => write!(f, "{}", value),
        }
    }
}

/// One displayable record.
///
/// The schema belongs to the data source. Only `id`, `title` and `body` are
/// read by the view; any other fields are carried along untouched. A record
/// is never rejected for the shape of its display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Render key. Expected to be unique, but not checked.
    pub id: ItemId,
    #[serde(default, deserialize_with = "display_text")]
    pub title: String,
    #[serde(default, deserialize_with = "display_text")]
    pub body: String,
    /// Fields the view does not use (e.g. `userId`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: ItemId::from(id),
            title: title.into(),
            body: body.into(),
            extra: Map::new(),
        }
    }
}

/// `null` reads as empty, non-string values as their JSON text.
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}
