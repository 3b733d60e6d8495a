//! Unlinked-tag list state: loaded lists, picker panel and per-tag busy flags.
//!
//! DESIGN
//! ======
//! Busy flags are keyed by tag uid, so a pending assignment blocks repeat
//! clicks for that tag only.

#[cfg(test)]
#[path = "unlinked_rfids_test.rs"]
mod unlinked_rfids_test;

use std::collections::HashSet;

use crate::net::types::{Bombona, Rfid};

/// Maximum number of assets offered by the picker.
pub const SUGGESTION_LIMIT: usize = 10;

#[derive(Clone, Debug, Default)]
pub struct UnlinkedRfidsState {
    pub rfids: Vec<Rfid>,
    pub bombonas: Vec<Bombona>,
    pub loading: bool,
    pub assigning: HashSet<String>,
    pub open_uid: Option<String>,
    pub search: String,
    pub manual_id: String,
    pub manual_error: Option<String>,
}

impl UnlinkedRfidsState {
    pub fn apply_lists(&mut self, rfids: Vec<Rfid>, bombonas: Vec<Bombona>) {
        self.rfids = rfids;
        self.bombonas = bombonas;
    }

    /// Open the picker for `uid`, or close it if already open.
    pub fn toggle_panel(&mut self, uid: &str) {
        if self.open_uid.as_deref() == Some(uid) {
            self.open_uid = None;
            self.search.clear();
        } else {
            self.open_uid = Some(uid.to_owned());
            self.search.clear();
            self.manual_id.clear();
            self.manual_error = None;
        }
    }

    pub fn is_open(&self, uid: &str) -> bool {
        self.open_uid.as_deref() == Some(uid)
    }

    /// Mark `uid` busy. Returns `false` if an assignment is already pending for it.
    pub fn begin_assign(&mut self, uid: &str) -> bool {
        self.assigning.insert(uid.to_owned())
    }

    pub fn finish_assign(&mut self, uid: &str) {
        self.assigning.remove(uid);
    }

    pub fn is_assigning(&self, uid: &str) -> bool {
        self.assigning.contains(uid)
    }

    /// Close the picker and clear its inputs after a successful assignment.
    pub fn reset_picker(&mut self) {
        self.open_uid = None;
        self.search.clear();
        self.manual_id.clear();
        self.manual_error = None;
    }

    pub fn suggestions(&self) -> Vec<Bombona> {
        suggestions(&self.bombonas, &self.search)
    }
}

/// Assets whose serial or label contains `search`, case-insensitively.
///
/// An empty search returns the first assets unfiltered. Either way at most
/// [`SUGGESTION_LIMIT`] are returned.
pub fn suggestions(bombonas: &[Bombona], search: &str) -> Vec<Bombona> {
    let needle = search.trim().to_lowercase();
    bombonas
        .iter()
        .filter(|b| {
            needle.is_empty()
                || b.serial.to_lowercase().contains(&needle)
                || b.label.as_deref().is_some_and(|l| l.to_lowercase().contains(&needle))
        })
        .take(SUGGESTION_LIMIT)
        .cloned()
        .collect()
}
