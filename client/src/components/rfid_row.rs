//! One unlinked tag with its assignment picker.

use leptos::prelude::*;

use crate::net::types::Rfid;
use crate::state::bombona_form::parse_bombona_id;
use crate::state::unlinked_rfids::UnlinkedRfidsState;
use crate::util::format::{format_coordinates, format_optional_timestamp, serial_with_label};

/// Tag row. `on_assign` receives `(tag uid, asset id)`.
#[component]
pub fn UnlinkedRfidRow(
    rfid: Rfid,
    state: RwSignal<UnlinkedRfidsState>,
    on_assign: Callback<(String, i64)>,
) -> impl IntoView {
    let uid = StoredValue::new(rfid.uid.clone());
    let is_open = Memo::new(move |_| state.with(|s| uid.with_value(|u| s.is_open(u))));
    let busy = Memo::new(move |_| state.with(|s| uid.with_value(|u| s.is_assigning(u))));
    let suggestions = Memo::new(move |_| {
        state.with(|s| if uid.with_value(|u| s.is_open(u)) { s.suggestions() } else { Vec::new() })
    });

    let last_seen = format_optional_timestamp(rfid.last_seen_at.as_deref());
    let metadata = rfid
        .metadata
        .as_ref()
        .filter(|m| !m.is_null())
        .map(|m| format!("meta: {m}"));

    let assign_to = move |bombona_id: i64| on_assign.run((uid.get_value(), bombona_id));

    let assign_manual = move || {
        let raw = state.with_untracked(|s| s.manual_id.clone());
        match parse_bombona_id(&raw) {
            Ok(id) => assign_to(id),
            Err(e) => state.update(|s| s.manual_error = Some(e.to_string())),
        }
    };

    let busy_label = move |idle: &'static str| if busy.get() { "Atribuindo..." } else { idle };

    view! {
        <li class="rfid-row">
            <div class="rfid-row__info">
                <div>
                    <strong class="mono">{rfid.uid.clone()}</strong>
                </div>
                <div class="rfid-row__meta">"Última leitura: " {last_seen}</div>
                {metadata.map(|m| view! { <div class="rfid-row__meta">{m}</div> })}
            </div>

            <div class="rfid-row__actions">
                <button
                    class="btn btn--small"
                    on:click=move |_| uid.with_value(|u| state.update(|s| s.toggle_panel(u)))
                >
                    {move || if is_open.get() { "Fechar" } else { "Atribuir" }}
                </button>

                <Show when=move || is_open.get()>
                    <div class="rfid-row__panel">
                        <input
                            class="rfid-row__search"
                            type="text"
                            placeholder="Buscar por serial ou label..."
                            prop:value=move || state.with(|s| s.search.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.search = value);
                            }
                            autofocus=true
                        />

                        {move || {
                            let list = suggestions.get();
                            if list.is_empty() {
                                view! { <div class="muted">"Nenhuma bombona encontrada"</div> }.into_any()
                            } else {
                                view! {
                                    <ul class="rfid-row__suggestions">
                                        {list
                                            .into_iter()
                                            .map(|b| {
                                                let id = b.id;
                                                let coords = b.coordinates().map(|(lat, lon)| format_coordinates(lat, lon));
                                                view! {
                                                    <li class="rfid-row__suggestion">
                                                        <div>
                                                            <div>{serial_with_label(&b.serial, b.label.as_deref())}</div>
                                                            {coords.map(|c| view! { <div class="rfid-row__meta">{c}</div> })}
                                                        </div>
                                                        <button
                                                            class="btn btn--small"
                                                            disabled=move || busy.get()
                                                            on:click=move |_| assign_to(id)
                                                        >
                                                            {move || busy_label("Atribuir aqui")}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        }}

                        <div class="rfid-row__manual">
                            <input
                                class="rfid-row__manual-input"
                                type="text"
                                inputmode="numeric"
                                placeholder="ID da bombona"
                                prop:value=move || state.with(|s| s.manual_id.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| {
                                        s.manual_id = value;
                                        s.manual_error = None;
                                    });
                                }
                            />
                            <button class="btn btn--small" disabled=move || busy.get() on:click=move |_| assign_manual()>
                                {move || busy_label("Atribuir por ID")}
                            </button>
                        </div>
                        <Show when=move || state.with(|s| s.manual_error.is_some())>
                            <p class="form__error">{move || state.with(|s| s.manual_error.clone().unwrap_or_default())}</p>
                        </Show>
                    </div>
                </Show>
            </div>
        </li>
    }
}
