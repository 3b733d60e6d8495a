//! Modal dialogs replacing browser prompts and confirms.
//!
//! `InputDialog` validates its single field with a parser before calling
//! `on_submit`; invalid input is reported inline and nothing is dispatched.

use leptos::prelude::*;

use crate::state::bombona_form::FormError;

/// Single-field dialog with client-side validation.
#[component]
pub fn InputDialog(
    title: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    parse: fn(&str) -> Result<String, FormError>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let value = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move || match parse(&value.get_untracked()) {
        Ok(parsed) => {
            error.set(None);
            on_submit.run(parsed);
        }
        Err(e) => error.set(Some(e.to_string())),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    {label}
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| {
                            value.set(event_target_value(&ev));
                            error.set(None);
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            } else if ev.key() == "Escape" {
                                on_cancel.run(());
                            }
                        }
                        autofocus=true
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit()>
                        "Confirmar"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Yes/no confirmation dialog.
#[component]
pub fn ConfirmDialog(message: &'static str, on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <p>{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        "Confirmar"
                    </button>
                </div>
            </div>
        </div>
    }
}
