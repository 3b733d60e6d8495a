//! Blocking alerts for action outcomes.
//!
//! Failures are logged to the console and surfaced through `window.alert`
//! with the server message when one was sent. Nothing is retried here.

use crate::net::error::ApiError;

/// Show a blocking browser alert. No-op outside the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Log a failed action and alert the user.
pub fn report_failure(context: &str, err: &ApiError, fallback: &str) {
    leptos::logging::error!("{context}: {err}");
    alert(&err.user_message(fallback));
}
