//! Latest-reads feed for the read dashboard.

use leptos::prelude::*;

use crate::net::types::TagRead;
use crate::state::reads::validity_badge;
use crate::util::format::time_of_day;

/// Feed of recent tag reads, newest first as returned by the backend.
#[component]
pub fn ReadFeed(tags: Vec<TagRead>) -> impl IntoView {
    if tags.is_empty() {
        return view! { <p class="muted">"Nenhuma leitura recente"</p> }.into_any();
    }

    view! {
        <ul class="read-feed">
            {tags
                .into_iter()
                .map(|tag| {
                    let (badge, badge_class) = validity_badge(tag.valid);
                    let time = time_of_day(&tag.timestamp).to_owned();
                    view! {
                        <li class="read-feed__item">
                            <span class="read-feed__uid mono">{tag.uid}</span>
                            <span class=format!("read-feed__badge {badge_class}")>{badge}</span>
                            <span class="read-feed__time">{time}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
