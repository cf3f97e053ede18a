use super::view_model::PokemonDetailsViewModel;
use crate::domain::collections::ui::list::state::OverlayContent;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_pokemon::DetailRecord;
use leptos::prelude::*;
use thaw::Spinner;

#[component]
pub fn PokemonDetails(vm: PokemonDetailsViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.is_open()>
            <Modal
                title=Signal::derive(move || vm.title())
                on_close=Callback::new(move |_| vm.close_command())
            >
                {move || match vm.state.with(|s| s.overlay_content()) {
                    OverlayContent::Loading => view! {
                        <div class="detail-loading" style="padding: 32px; text-align: center;">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    OverlayContent::Loaded(record) => detail_card(record).into_any(),
                    OverlayContent::Failed(message) => view! {
                        <div class="warning-box text-error">{message}</div>
                    }
                    .into_any(),
                    OverlayContent::Empty | OverlayContent::Hidden => view! {
                        <p class="detail-empty">"Sin datos"</p>
                    }
                    .into_any(),
                }}
            </Modal>
        </Show>
    }
}

fn detail_card(record: DetailRecord) -> impl IntoView {
    let height = format!("{} ({})", record.height, record.height_label());
    let weight = format!("{} ({})", record.weight, record.weight_label());
    let picture = match record.image_url.clone() {
        Some(url) => view! {
            <img class="detail-card__image" src=url alt=record.name.clone() width="160" height="160" />
        }
        .into_any(),
        None => view! { <div class="detail-card__image detail-card__image--missing">{icon("image-off")}</div> }
            .into_any(),
    };

    view! {
        <div class="detail-card" style="display: flex; gap: 24px; align-items: center;">
            {picture}
            <div class="detail-form">
                <h3 style="text-transform: capitalize; margin-top: 0;">{record.name}</h3>
                <p><strong>"Altura: "</strong>{height}</p>
                <p><strong>"Peso: "</strong>{weight}</p>
            </div>
        </div>
    }
}
