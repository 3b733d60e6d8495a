//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, polling, mutation
//! sequencing) and delegates rendering details to `components`.

pub mod bombona_detail;
pub mod bombonas;
pub mod reads;
pub mod unlinked_rfids;
