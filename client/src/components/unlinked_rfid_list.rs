//! Unlinked-tag list with per-tag assignment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tags and assets are fetched together on mount and on manual refresh.
//! A successful assignment re-fetches both lists before the picker resets.
//! The per-tag busy flag is held for the whole assign + re-fetch sequence.

use leptos::prelude::*;

use crate::components::rfid_row::UnlinkedRfidRow;
use crate::net::config::ApiConfig;
use crate::state::unlinked_rfids::UnlinkedRfidsState;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::util::mutation::{mutate_then_refresh, with_busy_flag};
#[cfg(feature = "hydrate")]
use crate::util::notify;

/// Fetch unlinked tags and all assets concurrently. Failures keep the old lists.
#[cfg(feature = "hydrate")]
async fn load_lists(config: &ApiConfig, state: RwSignal<UnlinkedRfidsState>) {
    state.update(|s| s.loading = true);
    let (rfids, bombonas) = futures::join!(api::fetch_unlinked_rfids(config), api::fetch_bombonas(config));
    match (rfids, bombonas) {
        (Ok(rfids), Ok(bombonas)) => state.update(|s| s.apply_lists(rfids, bombonas)),
        (Err(e), _) | (_, Err(e)) => leptos::logging::warn!("load unlinked rfids: {e}"),
    }
    state.update(|s| s.loading = false);
}

/// List of tags with no linked asset. `on_assigned` fires after each successful link.
#[component]
pub fn UnlinkedRfidList(#[prop(optional)] on_assigned: Option<Callback<()>>) -> impl IntoView {
    let config = StoredValue::new(ApiConfig::resolve(use_context::<ApiConfig>()));
    let state = RwSignal::new(UnlinkedRfidsState::default());

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                load_lists(&config, state).await;
            });
        }
    };

    // Fetch on mount.
    load();

    let on_assign: Callback<(String, i64)> = Callback::new(move |(uid, bombona_id): (String, i64)| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                // Repeat clicks for a tag already being assigned are dropped.
                with_busy_flag(
                    || state.try_update(|s| s.begin_assign(&uid)).unwrap_or(false),
                    async {
                        let result = mutate_then_refresh(api::assign_rfid_by_uid(&config, &uid, bombona_id), || {
                            load_lists(&config, state)
                        })
                        .await;
                        match result {
                            Ok(()) => {
                                state.update(UnlinkedRfidsState::reset_picker);
                                if let Some(cb) = on_assigned {
                                    cb.run(());
                                }
                                notify::alert("RFID atribuída");
                            }
                            Err(e) => notify::report_failure("assign rfid", &e, "Erro ao atribuir RFID"),
                        }
                    },
                    || state.update(|s| s.finish_assign(&uid)),
                )
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (uid, bombona_id, on_assigned, config, state);
        }
    });

    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let rfids = Memo::new(move |_| state.with(|s| s.rfids.clone()));

    view! {
        <section class="card unlinked-rfids">
            <h3>"RFIDs não vinculadas"</h3>
            <div class="unlinked-rfids__toolbar">
                <button class="btn btn--small" on:click=move |_| load()>
                    "Atualizar"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Carregando..."</p> }>
                {move || {
                    let list = rfids.get();
                    if list.is_empty() {
                        view! { <p class="muted">"Nenhuma RFID não vinculada"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="unlinked-rfids__list">
                                {list
                                    .into_iter()
                                    .map(|rfid| view! { <UnlinkedRfidRow rfid=rfid state=state on_assign=on_assign/> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </section>
    }
}
