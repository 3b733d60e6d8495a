//! Asset list page at `/bombonas`.

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::state::bombonas::{BombonasState, detail_href};
use crate::util::format::{DASH, or_dash};

#[cfg(feature = "hydrate")]
use crate::net::api;

#[component]
pub fn BombonasPage() -> impl IntoView {
    let config = StoredValue::new(ApiConfig::resolve(use_context::<ApiConfig>()));
    let state = RwSignal::new(BombonasState { loading: true, ..BombonasState::default() });

    #[cfg(feature = "hydrate")]
    {
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            match api::fetch_bombonas(&config).await {
                Ok(items) => state.update(|s| {
                    s.items = items;
                    s.error = None;
                }),
                Err(e) => {
                    leptos::logging::warn!("load bombonas: {e}");
                    state.update(|s| s.error = Some(e.to_string()));
                }
            }
            state.update(|s| s.loading = false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    let items = Memo::new(move |_| state.with(|s| s.items.clone()));

    view! {
        <div class="bombonas-page">
            <h2>"Bombonas"</h2>
            {move || {
                state.with(|s| {
                    if s.loading {
                        Some("Carregando...".to_owned())
                    } else {
                        s.error.as_ref().map(|e| format!("Erro ao carregar: {e}"))
                    }
                })
                    .map(|text| view! { <p class="bombonas-page__status">{text}</p> })
            }}
            <table class="bombonas-page__table">
                <thead>
                    <tr>
                        <th>"Serial"</th>
                        <th>"Label"</th>
                        <th>"RFID"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|b| {
                                let href = detail_href(b.id);
                                let uid = b.rfid_uid().unwrap_or(DASH).to_owned();
                                view! {
                                    <tr>
                                        <td>
                                            <a href=href>{b.serial.clone()}</a>
                                        </td>
                                        <td>{or_dash(b.label.as_deref())}</td>
                                        <td class="mono">{uid}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
