//! Detail loader of a single Pokémon

use crate::shared::api_utils::{get, read_json};
use contracts::domain::a001_pokemon::{DetailRecord, PokemonDetailDto};
use contracts::shared::collection::CollectionItem;
use contracts::shared::error::{DetailFetchError, FetchError};
use web_sys::AbortSignal;

/// Fetch the detail of `item` from its own locator
pub async fn fetch_detail(
    item: &CollectionItem,
    signal: Option<&AbortSignal>,
) -> Result<DetailRecord, DetailFetchError> {
    log::debug!("GET {}", item.url);
    fetch_detail_inner(&item.url, signal)
        .await
        .map_err(|source| DetailFetchError::new(item.name.clone(), source))
}

async fn fetch_detail_inner(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<DetailRecord, FetchError> {
    let response = get(url, signal).await?;
    let dto = read_json::<PokemonDetailDto>(response).await?;
    Ok(dto.into())
}
