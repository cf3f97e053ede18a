//! Pokémon detail overlay
//!
//! Simplified MVVM:
//! - view_model.rs: open/close commands over the shared screen state
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PokemonDetails;
pub use view_model::PokemonDetailsViewModel;
