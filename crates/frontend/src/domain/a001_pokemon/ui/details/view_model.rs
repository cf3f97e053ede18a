use crate::domain::a001_pokemon::api;
use crate::domain::collections::ui::list::state::CollectionsState;
use crate::shared::api_utils::AbortSlot;
use contracts::shared::collection::CollectionItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel of the detail overlay
///
/// Owns no state of its own: selection and detail live in [`CollectionsState`].
/// Keeps the abort controller of the detail request in flight.
#[derive(Clone, Copy)]
pub struct PokemonDetailsViewModel {
    pub state: RwSignal<CollectionsState>,
    abort: AbortSlot,
}

impl PokemonDetailsViewModel {
    pub fn new(state: RwSignal<CollectionsState>) -> Self {
        Self {
            state,
            abort: AbortSlot::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_overlay_visible)
    }

    /// Overlay title, e.g. "#25 pikachu"
    pub fn title(&self) -> String {
        self.state.with(|s| {
            s.selected
                .as_ref()
                .map(|item| format!("#{} {}", item.id, item.name))
                .unwrap_or_default()
        })
    }

    /// Select a row, open the overlay and fetch its detail
    pub fn open_command(&self, item: CollectionItem) {
        let Some(ticket) = self.state.try_update(|s| s.open_detail(item.clone())) else {
            return;
        };
        let signal = self.abort.renew();
        let state = self.state;

        spawn_local(async move {
            let result = api::fetch_detail(&item, signal.as_ref()).await;
            let failure = result.as_ref().err().map(|e| e.to_string());

            let applied = state
                .try_update(|s| s.finish_detail(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale detail of {} ({:?})", item.name, ticket);
                return;
            }

            match failure {
                None => log::info!("Loaded detail of {}", item.name),
                Some(e) => log::error!("{}", e),
            }
        });
    }

    /// Close the overlay and drop selection and detail
    pub fn close_command(&self) {
        self.abort.abort();
        self.state.update(|s| s.close_overlay());
    }
}
