//! Collection loader: both list endpoints, fetched concurrently and applied as a unit

use crate::shared::api_utils::{get, read_json};
use contracts::enums::CollectionKind;
use contracts::shared::collection::{Collections, NamedResourceList};
use contracts::shared::config::ApiConfig;
use contracts::shared::error::FetchError;
use futures::future::join;
use web_sys::AbortSignal;

/// Fetch the Pokémon and ability lists
///
/// Both requests are in flight at the same time. Any failure, including a
/// non-success status on either side, fails the whole load.
pub async fn fetch_collections(
    config: &ApiConfig,
    signal: Option<&AbortSignal>,
) -> Result<Collections, FetchError> {
    let pokemon_url = config.collection_url(CollectionKind::Pokemon);
    let ability_url = config.collection_url(CollectionKind::Ability);
    log::debug!("GET {} | GET {}", pokemon_url, ability_url);

    let (pokemon, abilities) = join(
        fetch_list(&pokemon_url, signal),
        fetch_list(&ability_url, signal),
    )
    .await;

    combine(pokemon, abilities)
}

async fn fetch_list(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<NamedResourceList, FetchError> {
    let response = get(url, signal).await?;
    read_json::<NamedResourceList>(response).await
}

/// Join both list outcomes; the first failure wins and nothing is kept from the other side
pub fn combine(
    pokemon: Result<NamedResourceList, FetchError>,
    abilities: Result<NamedResourceList, FetchError>,
) -> Result<Collections, FetchError> {
    let pokemon = pokemon?;
    let abilities = abilities?;

    Ok(Collections {
        pokemon: pokemon.into_items(),
        abilities: abilities.into_items(),
    })
}
