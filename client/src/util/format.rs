//! Display formatting for timestamps, coordinates and optional text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Placeholder for absent values.
pub const DASH: &str = "-";

/// Render a backend timestamp as `dd/mm/yyyy hh:mm:ss`.
///
/// Accepts RFC 3339 and `yyyy-mm-dd hh:mm:ss`; anything else is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    let out = format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");
    let plain = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let trimmed = raw.trim();

    if let Ok(t) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        if let Ok(s) = t.format(&out) {
            return s;
        }
    }
    if let Ok(t) = PrimitiveDateTime::parse(trimmed, &plain) {
        if let Ok(s) = t.format(&out) {
            return s;
        }
    }
    trimmed.to_owned()
}

/// Like [`format_timestamp`], with a dash for missing values.
pub fn format_optional_timestamp(raw: Option<&str>) -> String {
    raw.map_or_else(|| DASH.to_owned(), format_timestamp)
}

/// Time-of-day part of a read timestamp (`yyyy-mm-dd hh:mm:ss` → `hh:mm:ss`).
pub fn time_of_day(raw: &str) -> &str {
    raw.split_once(' ')
        .or_else(|| raw.split_once('T'))
        .map_or(raw, |(_, time)| time)
}

/// Trimmed text, or a dash when missing or blank.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => DASH.to_owned(),
    }
}

/// `lat, lon` with five decimals.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.5}, {longitude:.5}")
}

/// Serial plus optional label, as shown in headers and pickers.
pub fn serial_with_label(serial: &str, label: Option<&str>) -> String {
    match label.map(str::trim) {
        Some(l) if !l.is_empty() => format!("{serial} — {l}"),
        _ => serial.to_owned(),
    }
}
