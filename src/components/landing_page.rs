//! Landing Page Component
//!
//! One card per pack; clicking a card opens its checklist.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog;
use crate::components::LoadErrorMessage;
use crate::context::use_app_context;
use crate::navigation;

#[derive(Clone, Debug, PartialEq)]
struct PackCard {
    id: String,
    name: String,
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();

    let (cards, set_cards) = signal(Vec::<PackCard>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    // Load the catalog once on mount
    let catalog_url = config.catalog_url.clone();
    Effect::new(move |_| {
        let catalog_url = catalog_url.clone();
        spawn_local(async move {
            match catalog::fetch_catalog(&catalog_url).await {
                Ok(loaded) => {
                    let loaded: Vec<PackCard> = loaded
                        .packs
                        .into_iter()
                        .map(|pack| PackCard { id: pack.id, name: pack.name })
                        .collect();
                    log::debug!("[LANDING] Rendering {} pack cards", loaded.len());
                    set_cards.set(loaded);
                }
                Err(e) => {
                    log::error!("[LANDING] Error loading packs: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="packs-container">
            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || error.get().map(|message| view! { <LoadErrorMessage message=message /> })}

            <For
                each=move || cards.get()
                key=|card| card.id.clone()
                children=move |card| {
                    let url = navigation::checklist_url(&config, &card.id);
                    view! {
                        <div
                            class="pack-card"
                            data-pack-id=card.id.clone()
                            on:click=move |_| navigation::redirect(&url)
                        >
                            {card.name}
                        </div>
                    }
                }
            />
        </div>
    }
}
