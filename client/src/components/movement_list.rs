//! Movement history list for the asset detail view.

use leptos::prelude::*;

use crate::net::types::Movement;
use crate::util::format::{format_coordinates, format_timestamp, or_dash};

#[component]
pub fn MovementList(movements: Vec<Movement>) -> impl IntoView {
    if movements.is_empty() {
        return view! { <p class="movement-list__empty">"Nenhum movimento"</p> }.into_any();
    }

    view! {
        <div class="movement-list">
            {movements
                .into_iter()
                .map(|m| {
                    let coords = m.coordinates().map(|(lat, lon)| format!("coords: {}", format_coordinates(lat, lon)));
                    let kind = m.kind.label().to_owned();
                    view! {
                        <div class="movement-list__item">
                            <div class="movement-list__head">
                                <b>{kind}</b>
                                " — "
                                {format_timestamp(&m.timestamp)}
                            </div>
                            <div class="movement-list__location">{or_dash(m.location.as_deref())}</div>
                            {coords.map(|c| view! { <div class="movement-list__meta">{c}</div> })}
                            <div class="movement-list__meta">"actor: " {or_dash(m.actor.as_deref())}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
