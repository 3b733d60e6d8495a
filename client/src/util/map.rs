//! Map framing for an asset location.
//!
//! Rendered as an OpenStreetMap embed; the bounding box is derived from the
//! centre and a web-mercator style zoom level.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::net::types::Bombona;

/// Centre used when an asset has no coordinates (São Paulo region).
pub const DEFAULT_CENTER: (f64, f64) = (-23.5, -46.6);
/// Zoom used when an asset has no coordinates.
pub const DEFAULT_ZOOM: u8 = 5;
/// Zoom used when centring on an asset marker.
pub const MARKER_ZOOM: u8 = 15;

const EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";
const VIEW_BASE: &str = "https://www.openstreetmap.org/";

/// What the map shows for one asset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub marker: Option<(f64, f64)>,
}

impl MapView {
    /// Centre on the asset when both coordinates are known, else the default view.
    pub fn for_bombona(bombona: &Bombona) -> Self {
        match bombona.coordinates() {
            Some(point) => Self { center: point, zoom: MARKER_ZOOM, marker: Some(point) },
            None => Self { center: DEFAULT_CENTER, zoom: DEFAULT_ZOOM, marker: None },
        }
    }

    /// `(min_lon, min_lat, max_lon, max_lat)` around the centre.
    pub fn bbox(&self) -> (f64, f64, f64, f64) {
        let lon_span = 360.0 / 2f64.powi(i32::from(self.zoom));
        let lat_span = lon_span / 2.0;
        let (lat, lon) = self.center;
        (lon - lon_span, lat - lat_span / 2.0, lon + lon_span, lat + lat_span / 2.0)
    }

    /// `src` for the embedded map iframe.
    pub fn embed_url(&self) -> String {
        let (min_lon, min_lat, max_lon, max_lat) = self.bbox();
        let mut url = format!(
            "{EMBED_BASE}?bbox={min_lon:.5}%2C{min_lat:.5}%2C{max_lon:.5}%2C{max_lat:.5}&layer=mapnik"
        );
        if let Some((lat, lon)) = self.marker {
            url.push_str(&format!("&marker={lat:.5}%2C{lon:.5}"));
        }
        url
    }

    /// Link to the full map at the same framing.
    pub fn view_url(&self) -> String {
        let (lat, lon) = self.center;
        match self.marker {
            Some(_) => format!("{VIEW_BASE}?mlat={lat:.5}&mlon={lon:.5}#map={}/{lat:.5}/{lon:.5}", self.zoom),
            None => format!("{VIEW_BASE}#map={}/{lat:.5}/{lon:.5}", self.zoom),
        }
    }
}
