//! Edit form staging, client-side validation and the save plan.
//!
//! DESIGN
//! ======
//! The form keeps raw strings exactly as typed. `plan_save` turns them into
//! the requests a save needs, or a [`FormError`] that is shown inline without
//! dispatching anything.

#[cfg(test)]
#[path = "bombona_form_test.rs"]
mod bombona_form_test;

use crate::net::types::{Bombona, BombonaUpdate, Rfid};

/// Client-side validation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("O serial é obrigatório")]
    MissingSerial,
    #[error("{field} inválida")]
    InvalidCoordinate { field: &'static str },
    #[error("Latitude deve estar entre -90 e 90")]
    LatitudeOutOfRange,
    #[error("Longitude deve estar entre -180 e 180")]
    LongitudeOutOfRange,
    #[error("Informe latitude e longitude juntas")]
    PartialCoordinates,
    #[error("Informe o local")]
    MissingLocation,
    #[error("Informe o UID da RFID")]
    MissingRfidUid,
    #[error("ID de bombona inválido")]
    InvalidBombonaId,
}

/// Staged edit values, one string per input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BombonaForm {
    pub serial: String,
    pub label: String,
    pub contents: String,
    pub latitude: String,
    pub longitude: String,
    pub rfid_uid: String,
}

/// What happens to the tag link on save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RfidChange {
    Keep,
    Assign(String),
    Unlink,
}

/// Requests issued by one save, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct SavePlan {
    pub update: BombonaUpdate,
    pub rfid: RfidChange,
}

impl BombonaForm {
    pub fn from_bombona(bombona: &Bombona) -> Self {
        Self {
            serial: bombona.serial.clone(),
            label: bombona.label.clone().unwrap_or_default(),
            contents: bombona.contents.clone().unwrap_or_default(),
            latitude: bombona.latitude.map(|v| v.to_string()).unwrap_or_default(),
            longitude: bombona.longitude.map(|v| v.to_string()).unwrap_or_default(),
            rfid_uid: bombona.rfid_uid().unwrap_or_default().to_owned(),
        }
    }

    /// Validate the staged values against `current`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] found; nothing should be sent then.
    pub fn plan_save(&self, current: &Bombona) -> Result<SavePlan, FormError> {
        let serial = self.serial.trim();
        if serial.is_empty() {
            return Err(FormError::MissingSerial);
        }
        let latitude = parse_coordinate(&self.latitude, "Latitude")?;
        let longitude = parse_coordinate(&self.longitude, "Longitude")?;
        match (latitude, longitude) {
            (Some(_), None) | (None, Some(_)) => return Err(FormError::PartialCoordinates),
            _ => {}
        }
        if latitude.is_some_and(|v| !(-90.0..=90.0).contains(&v)) {
            return Err(FormError::LatitudeOutOfRange);
        }
        if longitude.is_some_and(|v| !(-180.0..=180.0).contains(&v)) {
            return Err(FormError::LongitudeOutOfRange);
        }

        Ok(SavePlan {
            update: BombonaUpdate {
                serial: serial.to_owned(),
                label: self.label.trim().to_owned(),
                contents: self.contents.trim().to_owned(),
                latitude,
                longitude,
            },
            rfid: plan_rfid_change(&self.rfid_uid, current.rfid.as_ref()),
        })
    }
}

/// Decide the link call for a staged uid.
///
/// Unchanged uid: nothing. New non-empty uid: assign. Cleared uid over an
/// existing link: unlink.
pub fn plan_rfid_change(staged: &str, current: Option<&Rfid>) -> RfidChange {
    let staged = staged.trim();
    let current_uid = current.map_or("", |r| r.uid.as_str());
    if staged == current_uid {
        RfidChange::Keep
    } else if staged.is_empty() {
        RfidChange::Unlink
    } else {
        RfidChange::Assign(staged.to_owned())
    }
}

fn parse_coordinate(raw: &str, field: &'static str) -> Result<Option<f64>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or(FormError::InvalidCoordinate { field })
}

/// Location typed into the checkout/checkin dialog.
///
/// # Errors
///
/// [`FormError::MissingLocation`] when blank.
pub fn parse_location(raw: &str) -> Result<String, FormError> {
    non_empty(raw).ok_or(FormError::MissingLocation)
}

/// Tag uid typed into the assign dialog.
///
/// # Errors
///
/// [`FormError::MissingRfidUid`] when blank.
pub fn parse_rfid_uid(raw: &str) -> Result<String, FormError> {
    non_empty(raw).ok_or(FormError::MissingRfidUid)
}

/// Asset id typed into the manual assignment field.
///
/// # Errors
///
/// [`FormError::InvalidBombonaId`] unless a positive integer.
pub fn parse_bombona_id(raw: &str) -> Result<i64, FormError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(FormError::InvalidBombonaId)
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
