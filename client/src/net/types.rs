//! Wire types for the asset and read-analytics backends.
//!
//! DESIGN
//! ======
//! These mirror the JSON the backends emit (camelCase keys). Nothing here is
//! persisted client-side; pages hold transient copies refreshed on demand.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// ASSETS
// =============================================================================

/// A tracked container ("bombona").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bombona {
    pub id: i64,
    pub serial: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub contents: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub rfid: Option<Rfid>,
}

impl Bombona {
    /// Coordinate pair, present only when both halves are.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Uid of the linked tag, if any.
    pub fn rfid_uid(&self) -> Option<&str> {
        self.rfid.as_ref().map(|r| r.uid.as_str())
    }
}

/// An RFID tag record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfid {
    #[serde(default)]
    pub id: Option<i64>,
    pub uid: String,
    #[serde(default)]
    pub last_seen_at: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Movement direction recorded by the backend.
///
/// Unknown types keep the backend's raw string so it can still be shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MovementKind {
    Checkout,
    Checkin,
    Other(String),
}

impl From<String> for MovementKind {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "checkout" => Self::Checkout,
            "checkin" => Self::Checkin,
            _ => Self::Other(raw),
        }
    }
}

impl From<MovementKind> for String {
    fn from(kind: MovementKind) -> Self {
        match kind {
            MovementKind::Other(raw) => raw,
            known => known.label().to_owned(),
        }
    }
}

impl MovementKind {
    pub fn label(&self) -> &str {
        match self {
            Self::Checkout => "checkout",
            Self::Checkin => "checkin",
            Self::Other(raw) => raw,
        }
    }
}

/// One immutable history entry for an asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub timestamp: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form; usually carries `latitude`/`longitude` as numbers or strings.
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub actor: Option<String>,
}

impl Movement {
    /// Coordinates recorded with the movement, when both halves parse.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let meta = self.metadata.as_ref()?;
        Some((coordinate(meta.get("latitude")?)?, coordinate(meta.get("longitude")?)?))
    }
}

fn coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

// =============================================================================
// ENVELOPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct BombonaEnvelope {
    pub bombona: Bombona,
}

#[derive(Debug, Default, Deserialize)]
pub struct BombonasEnvelope {
    #[serde(default)]
    pub bombonas: Vec<Bombona>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MovementsEnvelope {
    #[serde(default)]
    pub movements: Vec<Movement>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RfidsEnvelope {
    #[serde(default)]
    pub rfids: Vec<Rfid>,
}

/// Error body shape used by the assets backend.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

/// Attribute update sent by the edit form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BombonaUpdate {
    pub serial: String,
    pub label: String,
    pub contents: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Patch body that removes the tag link (`{"rfidId": null}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RfidUnlink {
    pub rfid_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest<'a> {
    pub to_location: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRequest<'a> {
    pub at_location: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AssignByBombonaRequest<'a> {
    pub uid: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignByUidRequest {
    pub bombona_id: i64,
}

// =============================================================================
// READ ANALYTICS
// =============================================================================

/// One raw tag read from the analytics feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagRead {
    pub uid: String,
    pub timestamp: String,
    #[serde(default, deserialize_with = "truthy")]
    pub valid: bool,
}

/// Accept JSON booleans as well as SQLite-style `0`/`1` flags.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        Some(Flag::Text(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true"),
    })
}

/// Read frequency entry in the top-5 list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidCount {
    pub uid: String,
    pub count: u64,
}

/// Aggregate read counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStats {
    pub total: u64,
    #[serde(rename = "unicos")]
    pub unique: u64,
    #[serde(rename = "validos")]
    pub valid: u64,
    #[serde(rename = "top5", default)]
    pub top: Vec<UidCount>,
}
