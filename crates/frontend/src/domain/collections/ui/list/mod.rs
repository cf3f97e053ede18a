pub mod state;

use self::state::create_state;
use crate::domain::a001_pokemon::ui::details::{PokemonDetails, PokemonDetailsViewModel};
use crate::domain::collections::api;
use crate::domain::collections::columns::{ability_columns, pokemon_columns};
use crate::shared::api_utils::{use_api_config, AbortSlot};
use crate::shared::components::table::EntityTable;
use crate::shared::icons::icon;
use contracts::enums::CollectionKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

#[component]
#[allow(non_snake_case)]
pub fn CollectionsList() -> impl IntoView {
    let config = StoredValue::new(use_api_config());
    let state = create_state();
    let load_abort = AbortSlot::new();
    let details_vm = PokemonDetailsViewModel::new(state);

    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));

    let load_collections = move || {
        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let signal = load_abort.renew();
        let config = config.get_value();

        spawn_local(async move {
            let result = api::fetch_collections(&config, signal.as_ref()).await;
            let outcome = result
                .as_ref()
                .map(|c| (c.pokemon.len(), c.abilities.len()))
                .map_err(|e| e.to_string());

            let applied = state
                .try_update(|s| s.finish_load(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale collections load ({:?})", ticket);
                return;
            }

            match outcome {
                Ok((pokemon, abilities)) => {
                    log::info!("Loaded {} pokemon and {} abilities", pokemon, abilities)
                }
                Err(e) => log::error!("Failed to load collections: {}", e),
            }
        });
    };

    let pokemon = Signal::derive(move || state.with(|s| s.pokemon.clone()));
    let abilities = Signal::derive(move || state.with(|s| s.abilities.clone()));
    let empty_text = Signal::derive(move || state.with(|s| s.empty_text()));

    view! {
        <div class="collections-list" style="padding: 12px;">
            <div class="collections-list__actions" style="display: flex; gap: 8px; margin-bottom: 12px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| load_collections()
                    disabled=is_loading
                >
                    {icon("download")}
                    {move || if is_loading.get() { " Cargando..." } else { " Cargar datos" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_collections()
                    disabled=is_loading
                >
                    {icon("refresh")}
                    " Recargar"
                </Button>
            </div>

            <Show when=move || is_loading.get()>
                <p class="loading-spinner">"Cargando..."</p>
            </Show>

            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <p class="error-message" style="color: red;">"Error: " {err}</p>
            })}

            <div class="collections-list__counters">
                {CollectionKind::all()
                    .into_iter()
                    .map(|kind| view! {
                        <p>{kind.loaded_label()} ": " {move || state.with(|s| s.count(kind))}</p>
                    })
                    .collect_view()}
            </div>

            <div class="collections-list__tables" style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;">
                <EntityTable
                    title=CollectionKind::Pokemon.display_name()
                    columns=pokemon_columns()
                    items=pokemon
                    empty_text=empty_text
                    on_select=Callback::new(move |item| details_vm.open_command(item))
                />
                <EntityTable
                    title=CollectionKind::Ability.display_name()
                    columns=ability_columns()
                    items=abilities
                    empty_text=empty_text
                />
            </div>

            <PokemonDetails vm=details_vm />
        </div>
    }
}
