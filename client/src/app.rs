//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::net::config::{ApiConfig, BOMBONAS_META, READS_META};
use crate::pages::{
    bombona_detail::BombonaDetailPage, bombonas::BombonasPage, reads::ReadDashboardPage,
    unlinked_rfids::UnlinkedRfidsPage,
};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend base URLs are written into `<meta>` tags so the hydrated
/// client talks to the same backends the server was configured with.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = ApiConfig::resolve(use_context::<ApiConfig>());
    let bombonas_base = config.bombonas_base().to_owned();
    let reads_base = config.reads_base().to_owned();

    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BOMBONAS_META content=bombonas_base/>
                <meta name=READS_META content=reads_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the resolved `ApiConfig` to every page and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::resolve(use_context::<ApiConfig>()));

    view! {
        <Stylesheet id="leptos" href="/pkg/bombona-dashboard.css"/>
        <Title text="Bombonas"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("") view=ReadDashboardPage/>
                    <Route path=StaticSegment("bombonas") view=BombonasPage/>
                    <Route path=(StaticSegment("bombonas"), ParamSegment("id")) view=BombonaDetailPage/>
                    <Route path=StaticSegment("rfids") view=UnlinkedRfidsPage/>
                </Routes>
            </main>
        </Router>
    }
}
