//! Collection list DTOs and the row model derived from them
//!
//! PokeAPI list endpoints answer with `{ count, next, previous, results: [{ name, url }] }`.
//! Every result is turned into a [`CollectionItem`] whose identifier is taken
//! from the trailing numeric segment of its `url`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `{ name, url }` entry of a list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// Paginated list response of a collection endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedResourceList {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    /// A body without `results` is treated as an empty page
    #[serde(default)]
    pub results: Vec<NamedApiResource>,
}

impl NamedResourceList {
    pub fn into_items(self) -> Vec<CollectionItem> {
        self.results.into_iter().map(CollectionItem::from).collect()
    }
}

/// Identifier parsed out of a resource locator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemId {
    Known(u32),
    Unknown,
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Known(id) => write!(f, "{}", id),
            ItemId::Unknown => f.write_str("-"),
        }
    }
}

/// Extracts the identifier matched by `/(\d+)/?$`
///
/// `https://pokeapi.co/api/v2/pokemon/25/` gives `Known(25)`. Locators without a
/// numeric last segment, or whose number does not fit `u32`, give `Unknown`.
pub fn parse_trailing_id(url: &str) -> ItemId {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let Some((_, segment)) = trimmed.rsplit_once('/') else {
        return ItemId::Unknown;
    };

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return ItemId::Unknown;
    }

    segment.parse::<u32>().map(ItemId::Known).unwrap_or(ItemId::Unknown)
}

/// Table row of either collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: ItemId,
    pub name: String,
    pub url: String,
}

impl From<NamedApiResource> for CollectionItem {
    fn from(resource: NamedApiResource) -> Self {
        Self {
            id: parse_trailing_id(&resource.url),
            name: resource.name,
            url: resource.url,
        }
    }
}

/// Result of one successful load: both collections, applied together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collections {
    pub pokemon: Vec<CollectionItem>,
    pub abilities: Vec<CollectionItem>,
}
