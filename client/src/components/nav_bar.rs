//! Top navigation shared by every page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"Bombonas"</span>
            <nav class="nav-bar__links">
                <A href="/">"Leituras"</A>
                <A href="/bombonas">"Bombonas"</A>
                <A href="/rfids">"RFIDs não vinculadas"</A>
            </nav>
        </header>
    }
}
