//! Read and edit panels for the asset detail view.

use leptos::prelude::*;

use crate::net::types::Bombona;
use crate::state::bombona_detail::BombonaDetailState;
use crate::state::bombona_form::BombonaForm;
use crate::util::format::{format_optional_timestamp, or_dash};

/// Labelled text input bound to one form field.
fn form_field(
    state: RwSignal<BombonaDetailState>,
    label: &'static str,
    required: bool,
    get: fn(&BombonaForm) -> String,
    set: fn(&mut BombonaForm, String),
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type="text"
                required=required
                prop:value=move || state.with(|s| get(&s.form))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| {
                        set(&mut s.form, value);
                        s.form_error = None;
                    });
                }
            />
        </label>
    }
}

/// Edit-mode form. Validation errors are rendered above the buttons.
#[component]
pub fn BombonaEditForm(
    state: RwSignal<BombonaDetailState>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    on_unlink: Callback<()>,
) -> impl IntoView {
    let pending = move || state.with(|s| s.pending);
    let has_link = move || state.with(|s| s.linked_uid().is_some());

    view! {
        <form
            class="form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            {form_field(state, "Serial", true, |f| f.serial.clone(), |f, v| f.serial = v)}
            {form_field(state, "Label", false, |f| f.label.clone(), |f, v| f.label = v)}
            {form_field(state, "Descrição", false, |f| f.contents.clone(), |f, v| f.contents = v)}
            {form_field(state, "Latitude", false, |f| f.latitude.clone(), |f, v| f.latitude = v)}
            {form_field(state, "Longitude", false, |f| f.longitude.clone(), |f, v| f.longitude = v)}
            {form_field(state, "RFID (UID)", false, |f| f.rfid_uid.clone(), |f, v| f.rfid_uid = v)}

            <Show when=move || state.with(|s| s.form_error.is_some())>
                <p class="form__error">{move || state.with(|s| s.form_error.clone().unwrap_or_default())}</p>
            </Show>

            <div class="form__actions">
                <button class="btn btn--primary" type="submit" disabled=pending>
                    "Salvar"
                </button>
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
                <button
                    class="btn"
                    type="button"
                    disabled=move || pending() || !has_link()
                    on:click=move |_| on_unlink.run(())
                >
                    "Remover RFID"
                </button>
            </div>
        </form>
    }
}

/// Read-mode summary of an asset.
#[component]
pub fn BombonaInfo(bombona: Bombona) -> impl IntoView {
    let rfid_uid = or_dash(bombona.rfid_uid());
    let last_seen = format_optional_timestamp(bombona.rfid.as_ref().and_then(|r| r.last_seen_at.as_deref()));

    view! {
        <dl class="bombona-info">
            <dt>"Serial"</dt>
            <dd>{bombona.serial.clone()}</dd>
            <dt>"Label"</dt>
            <dd>{or_dash(bombona.label.as_deref())}</dd>
            <dt>"RFID"</dt>
            <dd class="mono">{rfid_uid}</dd>
            <dt>"Última leitura"</dt>
            <dd>{last_seen}</dd>
            <dt>"Descrição"</dt>
            <dd>{or_dash(bombona.contents.as_deref())}</dd>
        </dl>
    }
}
