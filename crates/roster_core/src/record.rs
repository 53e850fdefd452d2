use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Life status of a catalog character as reported by the catalog.
///
/// The wire format uses `"Alive"`, `"Dead"` and `"unknown"`; anything else
/// decodes to `Unknown` so a catalog-side addition never breaks decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl From<String> for CharacterStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "alive" => CharacterStatus::Alive,
            "dead" => CharacterStatus::Dead,
            _ => CharacterStatus::Unknown,
        }
    }
}

impl From<CharacterStatus> for String {
    fn from(value: CharacterStatus) -> Self {
        match value {
            CharacterStatus::Alive => "Alive".to_string(),
            CharacterStatus::Dead => "Dead".to_string(),
            CharacterStatus::Unknown => "unknown".to_string(),
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterStatus::Alive => write!(f, "Alive"),
            CharacterStatus::Dead => write!(f, "Dead"),
            CharacterStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Named reference to a place in the catalog, with an optional detail URL.
///
/// The catalog encodes a missing URL as the empty string; that decodes
/// to `None` here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationRef {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub url: Option<String>,
}

/// One immutable catalog entry. Treated as read-only once fetched;
/// `id` is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub gender: String,
    /// Sub-species descriptor; the catalog calls this field `type`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub origin: LocationRef,
    #[serde(default)]
    pub location: LocationRef,
    #[serde(default)]
    pub image: String,
    /// Episode URLs; only the count is consumed by presentation.
    #[serde(rename = "episode", default)]
    pub episode_refs: Vec<String>,
}

/// One fetch's worth of records plus the catalog's has-more flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogPage {
    pub records: Vec<CharacterRecord>,
    pub has_next: bool,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.is_empty()))
}
