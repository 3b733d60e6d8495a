//! Embedded map for an asset location.

use leptos::prelude::*;

use crate::util::map::MapView;

/// OpenStreetMap embed framed by `frame`, with a link to the full map.
#[component]
pub fn MapPanel(frame: MapView) -> impl IntoView {
    let embed = frame.embed_url();
    let full = frame.view_url();
    let caption = if frame.marker.is_some() { "Localização da bombona" } else { "Sem coordenadas" };

    view! {
        <figure class="map-panel">
            <iframe class="map-panel__frame" src=embed title={caption} {leptos::tachys::html::attribute::loading("lazy")}></iframe>
            <figcaption class="map-panel__caption">
                {caption}
                " · "
                <a href=full target="_blank" rel="noopener">
                    "Abrir mapa"
                </a>
            </figcaption>
        </figure>
    }
}
