//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split per page so each component depends on a small focused
//! model. Nothing is shared across pages; each holds its own transient copy
//! of backend records.

pub mod bombona_detail;
pub mod bombona_form;
pub mod bombonas;
pub mod reads;
pub mod unlinked_rfids;
