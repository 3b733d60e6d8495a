//! REST helpers for the asset and read-analytics backends.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every call resolves to
//! [`ApiError::Unavailable`], since these requests are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so a failed action
//! leaves the page usable. Mutation responses are not decoded; pages re-fetch
//! the affected records afterwards.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::error::ApiError;
use super::types::{
    AssignByBombonaRequest, AssignByUidRequest, Bombona, BombonaEnvelope, BombonaUpdate,
    BombonasEnvelope, CheckinRequest, CheckoutRequest, Movement, MovementsEnvelope, ReadStats,
    Rfid, RfidUnlink, RfidsEnvelope, TagRead,
};

/// Raw frequency graph returned by `GET /graph`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphImage {
    pub bytes: Vec<u8>,
    pub mime: String,
}

#[derive(Clone, Copy)]
enum Method {
    Post,
    Patch,
}

#[cfg(feature = "hydrate")]
async fn checked(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = checked(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn send_json<B: Serialize>(method: Method, url: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match method {
            Method::Post => gloo_net::http::Request::post(url),
            Method::Patch => gloo_net::http::Request::patch(url),
        };
        let resp = builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// ASSETS
// =============================================================================

/// Fetch one asset via `GET /bombonas/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status or decode failure.
pub async fn fetch_bombona(config: &ApiConfig, id: i64) -> Result<Bombona, ApiError> {
    let envelope: BombonaEnvelope = get_json(&config.bombona_url(id)).await?;
    Ok(envelope.bombona)
}

/// Fetch the most recent `limit` movements of an asset.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status or decode failure.
pub async fn fetch_movements(config: &ApiConfig, id: i64, limit: u32) -> Result<Vec<Movement>, ApiError> {
    let envelope: MovementsEnvelope = get_json(&config.movements_url(id, limit)).await?;
    Ok(envelope.movements)
}

/// Fetch every asset via `GET /bombonas`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status or decode failure.
pub async fn fetch_bombonas(config: &ApiConfig) -> Result<Vec<Bombona>, ApiError> {
    let envelope: BombonasEnvelope = get_json(&config.bombonas_url()).await?;
    Ok(envelope.bombonas)
}

/// Update asset attributes via `PATCH /bombonas/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn update_bombona(config: &ApiConfig, id: i64, update: &BombonaUpdate) -> Result<(), ApiError> {
    send_json(Method::Patch, &config.bombona_url(id), update).await
}

/// Remove the tag link of an asset (`PATCH` with `{"rfidId": null}`).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn unlink_rfid(config: &ApiConfig, id: i64) -> Result<(), ApiError> {
    send_json(Method::Patch, &config.bombona_url(id), &RfidUnlink::default()).await
}

/// Record a checkout towards `to_location`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn checkout(config: &ApiConfig, id: i64, to_location: &str) -> Result<(), ApiError> {
    send_json(Method::Post, &config.checkout_url(id), &CheckoutRequest { to_location }).await
}

/// Record a checkin at `at_location`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn checkin(config: &ApiConfig, id: i64, at_location: &str) -> Result<(), ApiError> {
    send_json(Method::Post, &config.checkin_url(id), &CheckinRequest { at_location }).await
}

/// Link tag `uid` to asset `id`, addressed by asset.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn assign_rfid_to_bombona(config: &ApiConfig, id: i64, uid: &str) -> Result<(), ApiError> {
    send_json(Method::Post, &config.assign_rfid_url(id), &AssignByBombonaRequest { uid }).await
}

/// Link tag `uid` to asset `bombona_id`, addressed by tag.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn assign_rfid_by_uid(config: &ApiConfig, uid: &str, bombona_id: i64) -> Result<(), ApiError> {
    send_json(Method::Post, &config.assign_by_uid_url(uid), &AssignByUidRequest { bombona_id }).await
}

/// Stamp a manual read on tag `uid`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn mark_rfid_seen(config: &ApiConfig, uid: &str) -> Result<(), ApiError> {
    send_json(Method::Post, &config.mark_seen_url(uid), &serde_json::json!({})).await
}

/// Fetch tags with no linked asset via `GET /rfids/unlinked`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status or decode failure.
pub async fn fetch_unlinked_rfids(config: &ApiConfig) -> Result<Vec<Rfid>, ApiError> {
    let envelope: RfidsEnvelope = get_json(&config.unlinked_rfids_url()).await?;
    Ok(envelope.rfids)
}

// =============================================================================
// READ ANALYTICS
// =============================================================================

/// Fetch the recent read feed via `GET /tags`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status or decode failure.
pub async fn fetch_tag_reads(config: &ApiConfig) -> Result<Vec<TagRead>, ApiError> {
    get_json(&config.tags_url()).await
}

/// Fetch aggregate counters via `GET /stats`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network, status or decode failure.
pub async fn fetch_read_stats(config: &ApiConfig) -> Result<ReadStats, ApiError> {
    get_json(&config.stats_url()).await
}

/// Fetch the server-rendered frequency graph via `GET /graph`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network or status failure.
pub async fn fetch_graph(config: &ApiConfig) -> Result<GraphImage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.graph_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = checked(resp).await?;
        let mime = resp
            .headers()
            .get("content-type")
            .unwrap_or_else(|| "image/png".to_owned());
        let bytes = resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(GraphImage { bytes, mime })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}
