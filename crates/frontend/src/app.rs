use crate::domain::collections::ui::CollectionsList;
use crate::shared::api_utils::load_api_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the API configuration to every loader via context.
    provide_context(load_api_config());

    view! {
        <main class="app">
            <CollectionsList />
        </main>
    }
}
