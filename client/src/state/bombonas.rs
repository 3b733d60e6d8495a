//! Asset list state for the `/bombonas` page.

#[cfg(test)]
#[path = "bombonas_test.rs"]
mod bombonas_test;

use crate::net::types::Bombona;

#[derive(Clone, Debug, Default)]
pub struct BombonasState {
    pub items: Vec<Bombona>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Detail route for an asset.
pub fn detail_href(id: i64) -> String {
    format!("/bombonas/{id}")
}
