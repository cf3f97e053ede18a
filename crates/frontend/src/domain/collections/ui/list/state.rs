//! Screen state of the collections browser
//!
//! All mutation goes through the transition methods below. Every loader start
//! advances a [`RequestTicket`]; completions carrying an older ticket are
//! discarded, so a superseded request can never overwrite newer state.

use contracts::domain::a001_pokemon::DetailRecord;
use contracts::enums::CollectionKind;
use contracts::shared::collection::{CollectionItem, Collections};
use contracts::shared::error::{DetailFetchError, FetchError};
use leptos::prelude::*;

/// Generation number of a loader request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What the detail overlay should show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayContent {
    Hidden,
    Loading,
    Loaded(DetailRecord),
    Failed(String),
    Empty,
}

#[derive(Clone, Debug, Default)]
pub struct CollectionsState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub pokemon: Vec<CollectionItem>,
    pub abilities: Vec<CollectionItem>,
    /// Set once a load has completed successfully
    pub has_loaded: bool,

    pub selected: Option<CollectionItem>,
    pub detail: Option<Result<DetailRecord, DetailFetchError>>,
    pub is_detail_loading: bool,
    pub is_overlay_visible: bool,

    load_ticket: RequestTicket,
    detail_ticket: RequestTicket,
}

impl CollectionsState {
    pub fn items(&self, kind: CollectionKind) -> &[CollectionItem] {
        match kind {
            CollectionKind::Pokemon => &self.pokemon,
            CollectionKind::Ability => &self.abilities,
        }
    }

    pub fn count(&self, kind: CollectionKind) -> usize {
        self.items(kind).len()
    }

    /// Placeholder of an empty table: a hint before the first load, "Sin datos" after
    pub fn empty_text(&self) -> &'static str {
        if self.is_loading {
            "Cargando..."
        } else if !self.has_loaded && self.error.is_none() {
            "Pulsa \"Cargar datos\" para ver el listado"
        } else {
            "Sin datos"
        }
    }

    /// Start a collection load: loading on, previous error and rows cleared
    pub fn begin_load(&mut self) -> RequestTicket {
        self.load_ticket = self.load_ticket.next();
        self.is_loading = true;
        self.error = None;
        self.pokemon.clear();
        self.abilities.clear();
        self.load_ticket
    }

    /// Apply the outcome of a collection load. Returns `false` for a stale ticket.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<Collections, FetchError>,
    ) -> bool {
        if ticket != self.load_ticket {
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(collections) => {
                self.pokemon = collections.pokemon;
                self.abilities = collections.abilities;
                self.has_loaded = true;
            }
            Err(e) => {
                self.pokemon.clear();
                self.abilities.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Select a row and open the overlay in its loading state
    pub fn open_detail(&mut self, item: CollectionItem) -> RequestTicket {
        self.detail_ticket = self.detail_ticket.next();
        self.selected = Some(item);
        self.detail = None;
        self.is_detail_loading = true;
        self.is_overlay_visible = true;
        self.detail_ticket
    }

    /// Apply the outcome of a detail fetch. Returns `false` for a stale ticket.
    pub fn finish_detail(
        &mut self,
        ticket: RequestTicket,
        result: Result<DetailRecord, DetailFetchError>,
    ) -> bool {
        if ticket != self.detail_ticket {
            return false;
        }

        self.is_detail_loading = false;
        self.detail = Some(result);
        true
    }

    /// Dismiss the overlay; any detail request still in flight becomes stale
    pub fn close_overlay(&mut self) {
        self.detail_ticket = self.detail_ticket.next();
        self.selected = None;
        self.detail = None;
        self.is_detail_loading = false;
        self.is_overlay_visible = false;
    }

    pub fn overlay_content(&self) -> OverlayContent {
        if !self.is_overlay_visible {
            return OverlayContent::Hidden;
        }
        if self.is_detail_loading {
            return OverlayContent::Loading;
        }
        match &self.detail {
            Some(Ok(record)) => OverlayContent::Loaded(record.clone()),
            Some(Err(e)) => OverlayContent::Failed(e.to_string()),
            // Not reached through the transitions above; covers a visible overlay with no detail
            None => OverlayContent::Empty,
        }
    }
}

pub fn create_state() -> RwSignal<CollectionsState> {
    RwSignal::new(CollectionsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::collection::{ItemId, NamedApiResource};

    fn page(kind: &str, size: u32) -> Vec<CollectionItem> {
        (1..=size)
            .map(|i| {
                CollectionItem::from(NamedApiResource {
                    name: format!("{}-{}", kind, i),
                    url: format!("https://pokeapi.co/api/v2/{}/{}/", kind, i),
                })
            })
            .collect()
    }

    fn full_load() -> Collections {
        Collections {
            pokemon: page("pokemon", 50),
            abilities: page("ability", 50),
        }
    }

    fn pikachu() -> CollectionItem {
        CollectionItem::from(NamedApiResource {
            name: "pikachu".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/25/".to_string(),
        })
    }

    fn pikachu_detail() -> DetailRecord {
        DetailRecord {
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            image_url: Some("https://example.test/25.png".to_string()),
        }
    }

    fn server_error() -> FetchError {
        FetchError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = CollectionsState::default();
        assert!(!state.is_loading);
        assert!(!state.has_loaded);
        assert_eq!(state.error, None);
        assert_eq!(state.count(CollectionKind::Pokemon), 0);
        assert_eq!(state.overlay_content(), OverlayContent::Hidden);
    }

    #[test]
    fn test_empty_text_tells_first_load_from_empty_result() {
        let mut state = CollectionsState::default();
        assert_eq!(state.empty_text(), "Pulsa \"Cargar datos\" para ver el listado");

        let ticket = state.begin_load();
        assert_eq!(state.empty_text(), "Cargando...");

        state.finish_load(ticket, Ok(Collections::default()));
        assert!(state.has_loaded);
        assert_eq!(state.empty_text(), "Sin datos");
    }

    #[test]
    fn test_empty_text_after_failed_first_load() {
        let mut state = CollectionsState::default();
        let ticket = state.begin_load();
        state.finish_load(ticket, Err(server_error()));
        assert!(!state.has_loaded);
        assert_eq!(state.empty_text(), "Sin datos");
    }

    #[test]
    fn test_visible_overlay_without_detail_shows_placeholder() {
        let state = CollectionsState {
            is_overlay_visible: true,
            selected: Some(pikachu()),
            ..CollectionsState::default()
        };
        assert_eq!(state.overlay_content(), OverlayContent::Empty);
    }

    #[test]
    fn test_successful_load_fills_both_collections() {
        let mut state = CollectionsState::default();
        let ticket = state.begin_load();
        assert!(state.is_loading);

        assert!(state.finish_load(ticket, Ok(full_load())));
        assert!(!state.is_loading);
        assert!(state.has_loaded);
        assert_eq!(state.error, None);
        assert_eq!(state.count(CollectionKind::Pokemon), 50);
        assert_eq!(state.count(CollectionKind::Ability), 50);
        assert_eq!(state.pokemon[24].id, ItemId::Known(25));
        assert_eq!(state.abilities[24].id, ItemId::Known(25));
    }

    #[test]
    fn test_failed_load_leaves_collections_empty() {
        let mut state = CollectionsState::default();
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(full_load()));

        let ticket = state.begin_load();
        assert_eq!(state.count(CollectionKind::Pokemon), 0);
        assert!(state.finish_load(ticket, Err(server_error())));

        assert!(!state.is_loading);
        assert_eq!(state.count(CollectionKind::Pokemon), 0);
        assert_eq!(state.count(CollectionKind::Ability), 0);
        assert_eq!(
            state.error.as_deref(),
            Some("Error en fetch: 500 Internal Server Error")
        );
    }

    #[test]
    fn test_new_load_clears_previous_error() {
        let mut state = CollectionsState::default();
        let ticket = state.begin_load();
        state.finish_load(ticket, Err(FetchError::Network("offline".to_string())));
        assert!(state.error.is_some());

        state.begin_load();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_reload_during_load_keeps_latest() {
        let mut state = CollectionsState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        // The newer request finishes first, the stale one afterwards
        assert!(state.finish_load(second, Ok(full_load())));
        assert!(!state.finish_load(first, Err(server_error())));

        assert_eq!(state.error, None);
        assert_eq!(state.count(CollectionKind::Pokemon), 50);
    }

    #[test]
    fn test_stale_load_does_not_clear_loading_flag() {
        let mut state = CollectionsState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(!state.finish_load(first, Ok(full_load())));
        assert!(state.is_loading);
        assert_eq!(state.count(CollectionKind::Pokemon), 0);

        assert!(state.finish_load(second, Ok(Collections::default())));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_select_shows_loading_then_detail() {
        let mut state = CollectionsState::default();
        let ticket = state.open_detail(pikachu());

        assert!(state.is_overlay_visible);
        assert_eq!(state.selected.as_ref().map(|i| i.name.as_str()), Some("pikachu"));
        assert_eq!(state.overlay_content(), OverlayContent::Loading);

        assert!(state.finish_detail(ticket, Ok(pikachu_detail())));
        assert!(!state.is_detail_loading);
        match state.overlay_content() {
            OverlayContent::Loaded(record) => assert_eq!(record.name, "pikachu"),
            other => panic!("unexpected overlay content: {:?}", other),
        }
    }

    #[test]
    fn test_detail_failure_stays_in_overlay() {
        let mut state = CollectionsState::default();
        let load = state.begin_load();
        state.finish_load(load, Ok(full_load()));

        let ticket = state.open_detail(pikachu());
        let error = DetailFetchError::new(
            "pikachu",
            FetchError::Status {
                status: 404,
                status_text: "Not Found".to_string(),
            },
        );
        assert!(state.finish_detail(ticket, Err(error)));

        assert_eq!(
            state.overlay_content(),
            OverlayContent::Failed("No se pudo cargar pikachu: Error en fetch: 404 Not Found".to_string())
        );
        assert_eq!(state.error, None);
        assert_eq!(state.count(CollectionKind::Pokemon), 50);
    }

    #[test]
    fn test_close_overlay_keeps_collections() {
        let mut state = CollectionsState::default();
        let load = state.begin_load();
        state.finish_load(load, Ok(full_load()));
        let ticket = state.open_detail(pikachu());
        state.finish_detail(ticket, Ok(pikachu_detail()));

        state.close_overlay();

        assert!(!state.is_overlay_visible);
        assert_eq!(state.selected, None);
        assert!(state.detail.is_none());
        assert_eq!(state.overlay_content(), OverlayContent::Hidden);
        assert_eq!(state.count(CollectionKind::Pokemon), 50);
        assert_eq!(state.count(CollectionKind::Ability), 50);
    }

    #[test]
    fn test_detail_after_close_is_discarded() {
        let mut state = CollectionsState::default();
        let ticket = state.open_detail(pikachu());
        state.close_overlay();

        assert!(!state.finish_detail(ticket, Ok(pikachu_detail())));
        assert!(state.detail.is_none());
        assert!(!state.is_overlay_visible);
    }

    #[test]
    fn test_reselect_discards_previous_detail() {
        let mut state = CollectionsState::default();
        let first = state.open_detail(pikachu());
        let bulbasaur = CollectionItem::from(NamedApiResource {
            name: "bulbasaur".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
        });
        let second = state.open_detail(bulbasaur);

        assert!(!state.finish_detail(first, Ok(pikachu_detail())));
        assert_eq!(state.overlay_content(), OverlayContent::Loading);

        let record = DetailRecord {
            name: "bulbasaur".to_string(),
            height: 7,
            weight: 69,
            image_url: None,
        };
        assert!(state.finish_detail(second, Ok(record.clone())));
        assert_eq!(state.overlay_content(), OverlayContent::Loaded(record));
    }

    #[test]
    fn test_detail_does_not_block_collection_load() {
        let mut state = CollectionsState::default();
        let detail = state.open_detail(pikachu());
        let load = state.begin_load();

        assert!(state.finish_load(load, Ok(full_load())));
        assert!(state.is_detail_loading);
        assert!(state.finish_detail(detail, Ok(pikachu_detail())));
        assert!(!state.is_loading);
    }
}
