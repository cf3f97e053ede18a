use serde::{Deserialize, Serialize};

/// Collections exposed by the PokeAPI that the browser lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionKind {
    Pokemon,
    Ability,
}

impl CollectionKind {
    /// Path segment of the collection endpoint, relative to the API base
    pub fn path(&self) -> &'static str {
        match self {
            CollectionKind::Pokemon => "pokemon",
            CollectionKind::Ability => "ability",
        }
    }

    /// Human readable table title
    pub fn display_name(&self) -> &'static str {
        match self {
            CollectionKind::Pokemon => "Pokémons",
            CollectionKind::Ability => "Habilidades",
        }
    }

    /// Counter label shown above the tables, e.g. "Pokémons cargados: 50"
    pub fn loaded_label(&self) -> &'static str {
        match self {
            CollectionKind::Pokemon => "Pokémons cargados",
            CollectionKind::Ability => "Habilidades cargadas",
        }
    }

    pub fn all() -> Vec<CollectionKind> {
        vec![CollectionKind::Pokemon, CollectionKind::Ability]
    }
}
