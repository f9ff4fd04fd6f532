//! Checklist Page Component
//!
//! Binds one engine session to the view: loads the pack named by `packId`,
//! resumes from `v`, forwards clicks to the engine and turns the engine's
//! events into row removals and the completion message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::catalog::{self, LoadError};
use crate::components::{GroupItemRow, LoadErrorMessage, SimpleItemRow};
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::engine::{ChecklistEngine, ChecklistEvent};
use crate::navigation::{self, query_param, PACK_ID_PARAM};
use crate::schedule::defer;
use crate::store::*;
use crate::url_state::{self, UrlStateStore};

type Session = ChecklistEngine<UrlStateStore>;

#[component]
pub fn ChecklistPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();

    let store: ChecklistStore = Store::new(ChecklistState::default());
    provide_context(store);
    let engine = StoredValue::new(None::<Session>);

    let search = navigation::current_search();
    let pack_id = query_param(&search, PACK_ID_PARAM).filter(|id| !id.is_empty());
    let pre_verified = url_state::verified_from_query(&search);

    match pack_id {
        None => leave_after_lookup_error(&config, &LoadError::MissingPackId),
        Some(pack_id) => {
            let config = config.clone();
            spawn_local(async move {
                let loaded = catalog::fetch_catalog(&config.catalog_url)
                    .await
                    .and_then(|catalog| {
                        let pack = catalog::resolve_pack(&catalog, Some(&pack_id))?;
                        Ok(ChecklistEngine::initialize(pack, pre_verified, UrlStateStore))
                    });

                match loaded {
                    Ok(mut session) => {
                        let rows = session
                            .pending_items()
                            .map(|(index, item)| ItemRow::from_item(index, item))
                            .collect();
                        store_load_pack(&store, session.pack_name().to_string(), rows);
                        store_set_pending(&store, session.pending_count());
                        let events = session.drain_events();
                        engine.set_value(Some(session));
                        apply_events(store, &config, events);
                    }
                    Err(e) if e.is_pack_lookup() => leave_after_lookup_error(&config, &e),
                    Err(e) => {
                        log::error!("[CHECKLIST] Error loading pack {:?}: {}", pack_id, e);
                        store_set_error(&store, e.to_string());
                        let landing = navigation::landing_url(&config);
                        defer(config.error_redirect_ms, move || navigation::redirect(&landing));
                    }
                }
            });
        }
    }

    // Checkbox click on an item or a group header
    let handler_config = config.clone();
    let on_verify = Callback::new(move |index: usize| {
        let events = with_session(engine, |session| session.verify(index));
        after_transition(engine, store, &handler_config, events);
    });

    // Click on a sub-item row
    let handler_config = config.clone();
    let on_verify_sub = Callback::new(move |(index, sub_id): (usize, String)| {
        let events = with_session(engine, |session| session.verify_sub_item(index, &sub_id));
        after_transition(engine, store, &handler_config, events);
    });

    view! {
        <div class="checklist-container">
            <h1 class="pack-name">{move || store.pack_name().get()}</h1>

            {move || store.error().get().map(|message| view! { <LoadErrorMessage message=message /> })}

            <ul class="checklist-list">
                <For
                    each=move || store.rows().get()
                    key=|row| row.index
                    children=move |row| {
                        match row.kind {
                            RowKind::Simple { quantity } => view! {
                                <SimpleItemRow
                                    index=row.index
                                    name=row.name
                                    quantity=quantity
                                    on_verify=on_verify
                                />
                            }.into_any(),
                            RowKind::Group { sub_items } => view! {
                                <GroupItemRow
                                    index=row.index
                                    name=row.name
                                    sub_items=sub_items
                                    on_verify=on_verify
                                    on_verify_sub=on_verify_sub
                                />
                            }.into_any(),
                        }
                    }
                />
            </ul>

            <p class="item-count">{move || format!("{} items left", store.pending_count().get())}</p>

            <Show when=move || store.complete().get()>
                <div class="complete-message">"Pack complete! Returning to the start page..."</div>
            </Show>
        </div>
    }
}

/// Run one transition and collect what it emitted
fn with_session<F>(engine: StoredValue<Option<Session>>, transition: F) -> Vec<ChecklistEvent>
where
    F: FnOnce(&mut Session) -> bool,
{
    let mut events = Vec::new();
    engine.update_value(|session| {
        if let Some(session) = session.as_mut() {
            if transition(session) {
                events = session.drain_events();
            }
        }
    });
    events
}

fn after_transition(
    engine: StoredValue<Option<Session>>,
    store: ChecklistStore,
    config: &AppConfig,
    events: Vec<ChecklistEvent>,
) {
    if events.is_empty() {
        return;
    }
    if let Some(pending) = engine.with_value(|session| session.as_ref().map(|s| s.pending_count())) {
        store_set_pending(&store, pending);
    }
    apply_events(store, config, events);
}

/// Logical state is already committed; everything here is presentation and
/// scheduled after the fact.
fn apply_events(store: ChecklistStore, config: &AppConfig, events: Vec<ChecklistEvent>) {
    for event in events {
        match event {
            ChecklistEvent::SubItemVerified { sub_id, .. } => {
                store_mark_sub_verified(&store, sub_id);
            }
            ChecklistEvent::ItemVerified { index } => {
                store_mark_leaving(&store, index);
                defer(config.removal_delay_ms, move || store_remove_row(&store, index));
            }
            ChecklistEvent::PackComplete => {
                let landing = navigation::landing_url(config);
                let redirect_ms = config.completion_redirect_ms;
                defer(config.removal_delay_ms, move || {
                    store_set_complete(&store);
                    defer(redirect_ms, move || {
                        url_state::clear_verified_state();
                        navigation::redirect(&landing);
                    });
                });
            }
        }
    }
}

/// Missing or unknown pack: tell the user and go back right away
fn leave_after_lookup_error(config: &AppConfig, error: &LoadError) {
    log::warn!("[CHECKLIST] {}", error);
    navigation::alert(&format!("Error: {}. Returning to the start page.", error));
    navigation::redirect(&navigation::landing_url(config));
}
