//! City types.

use serde::{Deserialize, Serialize};

/// A city whose metro network can be routed over.
///
/// Slugs are stored lowercase; lookups normalise their input the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,

    #[serde(deserialize_with = "lowercase")]
    pub slug: String,

    #[serde(default)]
    pub state: String,

    #[serde(default = "active_by_default")]
    pub is_active: bool,

    #[serde(default)]
    pub description: String,
}

impl City {
    /// Create an active city.
    pub fn new(name: impl Into<String>, slug: &str, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: normalize_slug(slug),
            state: state.into(),
            is_active: true,
            description: String::new(),
        }
    }
}

/// Normalise a city slug for storage and lookup.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

fn active_by_default() -> bool {
    true
}

fn lowercase<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_slug(&raw))
}
