//! Read dashboard: live feed, counters and activity graph.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount a poll loop ticks immediately and then every `POLL_INTERVAL`.
//! Each tick spawns one cycle that fetches tags, stats and the graph image
//! concurrently. A cycle only lands if all three succeed, the page is still
//! mounted and no newer cycle has landed first; otherwise the previous display
//! stays.
//!
//! The graph arrives as bytes and is shown through a blob URL. The slot that
//! owns it revokes the superseded URL on every swap and the last one on
//! unmount.

use leptos::prelude::*;

use crate::components::read_feed::ReadFeed;
use crate::components::stats_panel::StatsPanel;
use crate::net::config::ApiConfig;
use crate::state::reads::ReadsState;

#[cfg(feature = "hydrate")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::reads::POLL_INTERVAL;
#[cfg(feature = "hydrate")]
use crate::util::object_url::{HandleSlot, ObjectUrl};
#[cfg(feature = "hydrate")]
use crate::util::poll::{PollGate, drive_poll};

#[cfg(feature = "hydrate")]
type GraphSlot = Arc<Mutex<HandleSlot<ObjectUrl>>>;

/// Poll cycle number `cycle`. Results are dropped if `gate` stopped while in
/// flight or a later cycle already landed.
#[cfg(feature = "hydrate")]
async fn run_cycle(cycle: u64, config: ApiConfig, gate: PollGate, slot: GraphSlot, state: RwSignal<ReadsState>) {
    let (tags, stats, graph) = futures::join!(
        api::fetch_tag_reads(&config),
        api::fetch_read_stats(&config),
        api::fetch_graph(&config),
    );
    if !gate.is_alive() || !state.with_untracked(|s| s.accepts(cycle)) {
        return;
    }

    match (tags, stats, graph) {
        (Ok(tags), Ok(stats), Ok(graph)) => {
            let graph_url = match ObjectUrl::from_bytes(&graph.bytes, &graph.mime) {
                Some(handle) => slot.lock().ok().map(|mut slot| slot.replace(handle)),
                None => {
                    leptos::logging::warn!("graph image: could not create object url");
                    None
                }
            };
            state.update(|s| {
                s.apply_cycle(cycle, tags, stats, graph_url);
            });
        }
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            leptos::logging::warn!("read dashboard poll: {e}");
            state.update(|s| s.record_failure(cycle, e.to_string()));
        }
    }
}

/// Read dashboard page for `/`.
#[component]
pub fn ReadDashboardPage() -> impl IntoView {
    let config = ApiConfig::resolve(use_context::<ApiConfig>());
    let download_url = config.download_url();
    let state = RwSignal::new(ReadsState::default());

    #[cfg(feature = "hydrate")]
    {
        let gate = PollGate::new();
        let slot: GraphSlot = Arc::new(Mutex::new(HandleSlot::default()));

        let loop_gate = gate.clone();
        let loop_slot = slot.clone();
        leptos::task::spawn_local(async move {
            let mut next_cycle = 0_u64;
            drive_poll(&loop_gate, POLL_INTERVAL, gloo_timers::future::sleep, || {
                next_cycle += 1;
                leptos::task::spawn_local(run_cycle(
                    next_cycle,
                    config.clone(),
                    loop_gate.clone(),
                    loop_slot.clone(),
                    state,
                ));
            })
            .await;
        });

        on_cleanup(move || {
            gate.stop();
            if let Ok(mut slot) = slot.lock() {
                slot.clear();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    let tags = Memo::new(move |_| state.with(|s| s.tags.clone()));
    let stats = Memo::new(move |_| state.with(|s| s.stats.clone()));
    let graph_url = Memo::new(move |_| state.with(|s| s.graph_url.clone()));
    let last_error = Memo::new(move |_| state.with(|s| s.last_error.clone()));

    view! {
        <div class="reads-page">
            <header class="reads-page__header">
                <h2>"Leituras RFID"</h2>
                <a class="btn" href=download_url download="">
                    "Baixar Banco de Dados (.db)"
                </a>
            </header>

            {move || last_error.get().map(|e| view! { <p class="reads-page__warning">"Falha na atualização: " {e}</p> })}

            <div class="reads-page__grid">
                <section class="card">
                    <h3>"Últimas leituras"</h3>
                    {move || view! { <ReadFeed tags=tags.get()/> }}
                </section>

                <section class="card">
                    <h3>"Estatísticas"</h3>
                    {move || view! { <StatsPanel stats=stats.get()/> }}
                </section>

                <section class="card reads-page__graph">
                    <h3>"Gráfico de Frequência"</h3>
                    {move || match graph_url.get() {
                        Some(src) => view! { <img src=src alt="Gráfico de frequência de leituras"/> }.into_any(),
                        None => view! { <p class="muted">"Carregando gráfico..."</p> }.into_any(),
                    }}
                </section>
            </div>
        </div>
    }
}
