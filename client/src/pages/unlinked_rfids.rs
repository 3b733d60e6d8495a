//! Page wrapper for the unlinked-tag list at `/rfids`.

use leptos::prelude::*;

use crate::components::unlinked_rfid_list::UnlinkedRfidList;

#[component]
pub fn UnlinkedRfidsPage() -> impl IntoView {
    view! {
        <div class="rfids-page">
            <UnlinkedRfidList/>
        </div>
    }
}
