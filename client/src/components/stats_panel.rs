//! Aggregate read counters and the top-5 list.

use leptos::prelude::*;

use crate::net::types::ReadStats;

#[component]
pub fn StatsPanel(stats: Option<ReadStats>) -> impl IntoView {
    let Some(stats) = stats else {
        return view! { <p class="muted">"Aguardando estatísticas..."</p> }.into_any();
    };

    view! {
        <div class="stats-panel">
            <dl class="stats-panel__counters">
                <div>
                    <dt>"Total"</dt>
                    <dd>{stats.total}</dd>
                </div>
                <div>
                    <dt>"Únicos"</dt>
                    <dd>{stats.unique}</dd>
                </div>
                <div>
                    <dt>"Válidos"</dt>
                    <dd>{stats.valid}</dd>
                </div>
            </dl>
            <h4>"Top 5"</h4>
            <ol class="stats-panel__top">
                {stats
                    .top
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li>
                                <span class="mono">{entry.uid}</span>
                                " "
                                <span class="stats-panel__count">{entry.count}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </div>
    }
    .into_any()
}
