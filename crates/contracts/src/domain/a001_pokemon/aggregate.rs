use serde::{Deserialize, Serialize};

/// `sprites` object of the Pokémon detail response; only the default front sprite is used
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpritesDto {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Subset of `GET /pokemon/{id}/` that the overlay needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDetailDto {
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub sprites: SpritesDto,
}

/// Detail of the selected Pokémon, fetched on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub image_url: Option<String>,
}

impl DetailRecord {
    /// Height formatted in metres, e.g. "0.4 m"
    pub fn height_label(&self) -> String {
        format!("{:.1} m", f64::from(self.height) / 10.0)
    }

    /// Weight formatted in kilograms, e.g. "6.0 kg"
    pub fn weight_label(&self) -> String {
        format!("{:.1} kg", f64::from(self.weight) / 10.0)
    }
}

impl From<PokemonDetailDto> for DetailRecord {
    fn from(dto: PokemonDetailDto) -> Self {
        Self {
            name: dto.name,
            height: dto.height,
            weight: dto.weight,
            image_url: dto.sprites.front_default.filter(|url| !url.is_empty()),
        }
    }
}
