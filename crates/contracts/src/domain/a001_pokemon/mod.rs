pub mod aggregate;

pub use aggregate::{DetailRecord, PokemonDetailDto, SpritesDto};
