//! Asset detail view state: loaded records, read/edit mode and dialogs.
//!
//! DESIGN
//! ======
//! The displayed asset and movements are only ever replaced wholesale by
//! `apply_snapshot` after a fetch. Mutations never patch them locally.

#[cfg(test)]
#[path = "bombona_detail_test.rs"]
mod bombona_detail_test;

use crate::net::types::{Bombona, Movement};
use crate::state::bombona_form::BombonaForm;

/// Number of movements requested for the history panel.
pub const MOVEMENT_HISTORY_LIMIT: u32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailMode {
    #[default]
    Read,
    Edit,
}

/// Dialog currently open over the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailDialog {
    Checkout,
    Checkin,
    AssignRfid,
    ConfirmUnlink,
    ConfirmMarkSeen,
}

/// A point mutation issued from the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailAction {
    Checkout { to_location: String },
    Checkin { at_location: String },
    AssignRfid { uid: String },
    UnlinkRfid,
    MarkSeen { uid: String },
}

impl DetailAction {
    /// Alert text used when the server sends no message.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Checkout { .. } => "Erro ao registrar checkout",
            Self::Checkin { .. } => "Erro ao registrar checkin",
            Self::AssignRfid { .. } => "Erro ao atribuir RFID",
            Self::UnlinkRfid => "Erro ao remover vínculo da RFID",
            Self::MarkSeen { .. } => "Erro ao marcar leitura",
        }
    }

    pub fn log_context(&self) -> &'static str {
        match self {
            Self::Checkout { .. } => "checkout",
            Self::Checkin { .. } => "checkin",
            Self::AssignRfid { .. } => "assign rfid",
            Self::UnlinkRfid => "unlink rfid",
            Self::MarkSeen { .. } => "mark rfid seen",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BombonaDetailState {
    pub bombona: Option<Bombona>,
    pub movements: Vec<Movement>,
    pub mode: DetailMode,
    pub form: BombonaForm,
    pub form_error: Option<String>,
    pub dialog: Option<DetailDialog>,
    pub pending: bool,
    pub load_error: Option<String>,
}

impl BombonaDetailState {
    /// Replace displayed records with a fresh fetch.
    pub fn apply_snapshot(&mut self, bombona: Bombona, movements: Vec<Movement>) {
        self.bombona = Some(bombona);
        self.movements = movements;
        self.load_error = None;
    }

    /// Enter edit mode with the form staged from the current asset.
    pub fn begin_edit(&mut self) {
        if let Some(bombona) = &self.bombona {
            self.form = BombonaForm::from_bombona(bombona);
            self.form_error = None;
            self.mode = DetailMode::Edit;
        }
    }

    /// Leave edit mode and discard staged values.
    pub fn end_edit(&mut self) {
        self.mode = DetailMode::Read;
        self.form = BombonaForm::default();
        self.form_error = None;
    }

    /// Open `dialog` unless it needs a linked tag and there is none.
    pub fn open_dialog(&mut self, dialog: DetailDialog) {
        let needs_tag = matches!(dialog, DetailDialog::ConfirmMarkSeen | DetailDialog::ConfirmUnlink);
        if needs_tag && self.linked_uid().is_none() {
            return;
        }
        self.dialog = Some(dialog);
    }

    /// Keep a staged form consistent with a link change made from a dialog.
    pub fn after_action(&mut self, action: &DetailAction) {
        if self.mode != DetailMode::Edit {
            return;
        }
        match action {
            DetailAction::UnlinkRfid => self.form.rfid_uid.clear(),
            DetailAction::AssignRfid { uid } => self.form.rfid_uid.clone_from(uid),
            _ => {}
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn linked_uid(&self) -> Option<String> {
        self.bombona.as_ref().and_then(|b| b.rfid_uid()).map(str::to_owned)
    }
}
