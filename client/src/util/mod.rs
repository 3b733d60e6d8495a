//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (alerts, timers,
//! blob URLs) and display formatting from page and component logic to
//! improve reuse and testability.

pub mod format;
pub mod map;
pub mod mutation;
pub mod notify;
pub mod object_url;
pub mod poll;
