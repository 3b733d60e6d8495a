//! Asset detail page: map, info/edit panel, quick actions and history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation is followed by a full re-fetch of the asset and its
//! movements, awaited strictly after the mutation response. Nothing is merged
//! locally, so the panel always shows what the backend returned last.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::bombona_form::{BombonaEditForm, BombonaInfo};
use crate::components::dialogs::{ConfirmDialog, InputDialog};
use crate::components::map_panel::MapPanel;
use crate::components::movement_list::MovementList;
use crate::net::config::ApiConfig;
use crate::state::bombona_detail::{BombonaDetailState, DetailAction, DetailDialog, DetailMode};
use crate::state::bombona_form::{parse_location, parse_rfid_uid};
use crate::util::format::serial_with_label;
use crate::util::map::MapView;

#[cfg(feature = "hydrate")]
use crate::net::{api, error::ApiError};
#[cfg(feature = "hydrate")]
use crate::state::bombona_detail::MOVEMENT_HISTORY_LIMIT;
#[cfg(feature = "hydrate")]
use crate::state::bombona_form::{RfidChange, SavePlan};
#[cfg(feature = "hydrate")]
use crate::util::mutation::mutate_then_refresh;
#[cfg(feature = "hydrate")]
use crate::util::notify;

/// Re-fetch the asset and then its movements into `state`.
#[cfg(feature = "hydrate")]
async fn refresh(config: &ApiConfig, id: i64, state: RwSignal<BombonaDetailState>) {
    let bombona = match api::fetch_bombona(config, id).await {
        Ok(b) => b,
        Err(e) => {
            leptos::logging::warn!("load bombona {id}: {e}");
            state.update(|s| s.load_error = Some(e.to_string()));
            return;
        }
    };
    match api::fetch_movements(config, id, MOVEMENT_HISTORY_LIMIT).await {
        Ok(movements) => state.update(|s| s.apply_snapshot(bombona, movements)),
        Err(e) => {
            leptos::logging::warn!("load movements {id}: {e}");
            state.update(|s| {
                s.bombona = Some(bombona);
                s.load_error = Some(e.to_string());
            });
        }
    }
}

#[cfg(feature = "hydrate")]
async fn execute(config: &ApiConfig, id: i64, action: &DetailAction) -> Result<(), ApiError> {
    match action {
        DetailAction::Checkout { to_location } => api::checkout(config, id, to_location).await,
        DetailAction::Checkin { at_location } => api::checkin(config, id, at_location).await,
        DetailAction::AssignRfid { uid } => api::assign_rfid_to_bombona(config, id, uid).await,
        DetailAction::UnlinkRfid => api::unlink_rfid(config, id).await,
        DetailAction::MarkSeen { uid } => api::mark_rfid_seen(config, uid).await,
    }
}

/// Attribute update first, then the link call the plan asks for.
#[cfg(feature = "hydrate")]
async fn save(config: &ApiConfig, id: i64, plan: &SavePlan) -> Result<(), ApiError> {
    api::update_bombona(config, id, &plan.update).await?;
    match &plan.rfid {
        RfidChange::Keep => Ok(()),
        RfidChange::Assign(uid) => api::assign_rfid_to_bombona(config, id, uid).await,
        RfidChange::Unlink => api::unlink_rfid(config, id).await,
    }
}

/// Detail page for `/bombonas/:id`.
#[component]
pub fn BombonaDetailPage() -> impl IntoView {
    let config = StoredValue::new(ApiConfig::resolve(use_context::<ApiConfig>()));
    let params = use_params_map();
    let state = RwSignal::new(BombonaDetailState::default());

    let bombona_id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));
    let current_id = move || params.with_untracked(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

    // Load on mount and whenever the route id changes.
    Effect::new(move || {
        let Some(id) = bombona_id() else {
            state.update(|s| s.load_error = Some("ID de bombona inválido".to_owned()));
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                refresh(&config.get_value(), id, state).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, config);
        }
    });

    let bombona = Memo::new(move |_| state.with(|s| s.bombona.clone()));
    let movements = Memo::new(move |_| state.with(|s| s.movements.clone()));
    let mode = Memo::new(move |_| state.with(|s| s.mode));
    let dialog = Memo::new(move |_| state.with(|s| s.dialog));
    let pending = Memo::new(move |_| state.with(|s| s.pending));
    let has_link = Memo::new(move |_| bombona.with(|b| b.as_ref().is_some_and(|b| b.rfid.is_some())));

    let run_action: Callback<DetailAction> = Callback::new(move |action: DetailAction| {
        let Some(id) = current_id() else {
            return;
        };
        if state.with_untracked(|s| s.pending) {
            return;
        }
        state.update(|s| {
            s.close_dialog();
            s.pending = true;
        });
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let result =
                    mutate_then_refresh(execute(&config, id, &action), || refresh(&config, id, state)).await;
                match result {
                    Ok(()) => state.update(|s| s.after_action(&action)),
                    Err(e) => notify::report_failure(action.log_context(), &e, action.failure_message()),
                }
                state.update(|s| s.pending = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, action);
            state.update(|s| s.pending = false);
        }
    });

    let on_save: Callback<()> = Callback::new(move |()| {
        let Some(current) = state.with_untracked(|s| s.bombona.clone()) else {
            return;
        };
        let plan = match state.with_untracked(|s| s.form.plan_save(&current)) {
            Ok(plan) => plan,
            Err(e) => {
                state.update(|s| s.form_error = Some(e.to_string()));
                return;
            }
        };
        state.update(|s| s.pending = true);
        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let result =
                    mutate_then_refresh(save(&config, current.id, &plan), || refresh(&config, current.id, state)).await;
                match result {
                    Ok(()) => {
                        state.update(BombonaDetailState::end_edit);
                        notify::alert("Bombona atualizada");
                    }
                    Err(e) => notify::report_failure("save bombona", &e, "Erro ao salvar bombona"),
                }
                state.update(|s| s.pending = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = plan;
            state.update(|s| s.pending = false);
        }
    });

    let on_cancel_edit: Callback<()> = Callback::new(move |()| state.update(BombonaDetailState::end_edit));
    let on_unlink: Callback<()> =
        Callback::new(move |()| state.update(|s| s.open_dialog(DetailDialog::ConfirmUnlink)));
    let close_dialog: Callback<()> = Callback::new(move |()| state.update(BombonaDetailState::close_dialog));
    let open = move |d: DetailDialog| state.update(|s| s.open_dialog(d));

    let title = move || {
        bombona.with(|b| {
            b.as_ref()
                .map(|b| serial_with_label(&b.serial, b.label.as_deref()))
                .unwrap_or_default()
        })
    };

    let dialog_view = move || {
        dialog.get().map(|d| match d {
            DetailDialog::Checkout => view! {
                <InputDialog
                    title="Checkout"
                    label="Local de saída/rota"
                    parse=parse_location
                    on_submit=Callback::new(move |to_location: String| {
                        run_action.run(DetailAction::Checkout { to_location });
                    })
                    on_cancel=close_dialog
                />
            }
            .into_any(),
            DetailDialog::Checkin => view! {
                <InputDialog
                    title="Checkin"
                    label="Local de chegada"
                    parse=parse_location
                    on_submit=Callback::new(move |at_location: String| {
                        run_action.run(DetailAction::Checkin { at_location });
                    })
                    on_cancel=close_dialog
                />
            }
            .into_any(),
            DetailDialog::AssignRfid => view! {
                <InputDialog
                    title="Atribuir RFID"
                    label="UID da RFID"
                    placeholder="E200..."
                    parse=parse_rfid_uid
                    on_submit=Callback::new(move |uid: String| {
                        run_action.run(DetailAction::AssignRfid { uid });
                    })
                    on_cancel=close_dialog
                />
            }
            .into_any(),
            DetailDialog::ConfirmUnlink => view! {
                <ConfirmDialog
                    message="Remover vínculo da RFID?"
                    on_confirm=Callback::new(move |()| run_action.run(DetailAction::UnlinkRfid))
                    on_cancel=close_dialog
                />
            }
            .into_any(),
            DetailDialog::ConfirmMarkSeen => view! {
                <ConfirmDialog
                    message="Marcar leitura agora?"
                    on_confirm=Callback::new(move |()| {
                        if let Some(uid) = state.with_untracked(BombonaDetailState::linked_uid) {
                            run_action.run(DetailAction::MarkSeen { uid });
                        }
                    })
                    on_cancel=close_dialog
                />
            }
            .into_any(),
        })
    };

    view! {
        <div class="detail-page">
            <Show
                when=move || bombona.with(Option::is_some)
                fallback=move || {
                    view! {
                        <p class="detail-page__status">
                            {move || {
                                state
                                    .with(|s| s.load_error.clone())
                                    .map_or_else(|| "Carregando...".to_owned(), |e| format!("Erro ao carregar: {e}"))
                            }}
                        </p>
                    }
                }
            >
                <div class="detail-page__main">
                    <header class="detail-page__header">
                        <h2>{title}</h2>
                        <a class="btn" href="/bombonas">
                            "Voltar"
                        </a>
                    </header>
                    {move || bombona.get().map(|b| view! { <MapPanel frame=MapView::for_bombona(&b)/> })}
                </div>

                <aside class="detail-page__aside">
                    <section class="detail-page__section">
                        <h3>"Informações"</h3>
                        {move || match mode.get() {
                            DetailMode::Edit => view! {
                                <BombonaEditForm
                                    state=state
                                    on_save=on_save
                                    on_cancel=on_cancel_edit
                                    on_unlink=on_unlink
                                />
                            }
                            .into_any(),
                            DetailMode::Read => view! {
                                {move || bombona.get().map(|b| view! { <BombonaInfo bombona=b/> })}
                                <div class="detail-page__buttons">
                                    <button class="btn" on:click=move |_| state.update(BombonaDetailState::begin_edit)>
                                        "Editar"
                                    </button>
                                    <Show when=move || has_link.get()>
                                        <button
                                            class="btn"
                                            disabled=move || pending.get()
                                            on:click=move |_| open(DetailDialog::ConfirmMarkSeen)
                                        >
                                            "Marcar leitura"
                                        </button>
                                    </Show>
                                </div>
                            }
                            .into_any(),
                        }}
                    </section>

                    <section class="detail-page__section">
                        <h3>"Ações rápidas"</h3>
                        <div class="detail-page__buttons">
                            <button
                                class="btn"
                                disabled=move || pending.get()
                                on:click=move |_| open(DetailDialog::Checkout)
                            >
                                "Checkout"
                            </button>
                            <button
                                class="btn"
                                disabled=move || pending.get()
                                on:click=move |_| open(DetailDialog::Checkin)
                            >
                                "Checkin"
                            </button>
                            <button
                                class="btn"
                                disabled=move || pending.get()
                                on:click=move |_| open(DetailDialog::AssignRfid)
                            >
                                "Atribuir RFID"
                            </button>
                        </div>
                    </section>

                    <section class="detail-page__section">
                        <h3>"Movimentos (histórico)"</h3>
                        <div class="detail-page__history">
                            {move || view! { <MovementList movements=movements.get()/> }}
                        </div>
                    </section>
                </aside>
            </Show>
            {dialog_view}
        </div>
    }
}
