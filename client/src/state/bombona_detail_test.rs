use super::*;
use crate::net::types::{MovementKind, Rfid};

fn bombona(serial: &str, uid: Option<&str>) -> Bombona {
    Bombona {
        id: 1,
        serial: serial.to_owned(),
        label: None,
        contents: None,
        latitude: None,
        longitude: None,
        rfid: uid.map(|u| Rfid { id: None, uid: u.to_owned(), last_seen_at: None, metadata: None }),
    }
}

fn movement(id: i64) -> Movement {
    Movement {
        id,
        kind: MovementKind::Checkin,
        timestamp: "2024-05-01T10:00:00Z".to_owned(),
        location: None,
        metadata: None,
        actor: None,
    }
}

#[test]
fn defaults_to_read_mode_with_nothing_loaded() {
    let s = BombonaDetailState::default();
    assert!(s.bombona.is_none());
    assert!(s.movements.is_empty());
    assert_eq!(s.mode, DetailMode::Read);
    assert!(s.dialog.is_none());
    assert!(!s.pending);
}

#[test]
fn snapshot_replaces_records_wholesale() {
    let mut s = BombonaDetailState::default();
    s.apply_snapshot(bombona("A1", None), vec![movement(1), movement(2)]);
    s.load_error = Some("offline".to_owned());
    s.apply_snapshot(bombona("A1-b", Some("E1")), vec![movement(3)]);

    assert_eq!(s.bombona.as_ref().unwrap().serial, "A1-b");
    assert_eq!(s.movements, vec![movement(3)]);
    assert!(s.load_error.is_none());
}

#[test]
fn begin_edit_stages_form_from_current_bombona() {
    let mut s = BombonaDetailState::default();
    s.apply_snapshot(bombona("A1", Some("E1")), Vec::new());
    s.begin_edit();
    assert_eq!(s.mode, DetailMode::Edit);
    assert_eq!(s.form.serial, "A1");
    assert_eq!(s.form.rfid_uid, "E1");
}

#[test]
fn begin_edit_without_bombona_stays_in_read_mode() {
    let mut s = BombonaDetailState::default();
    s.begin_edit();
    assert_eq!(s.mode, DetailMode::Read);
}

#[test]
fn end_edit_discards_staged_values() {
    let mut s = BombonaDetailState::default();
    s.apply_snapshot(bombona("A1", None), Vec::new());
    s.begin_edit();
    s.form.serial = "changed".to_owned();
    s.form_error = Some("x".to_owned());
    s.end_edit();
    assert_eq!(s.mode, DetailMode::Read);
    assert_eq!(s.form, BombonaForm::default());
    assert!(s.form_error.is_none());
}

#[test]
fn tag_dialogs_require_linked_tag() {
    let mut s = BombonaDetailState::default();
    s.apply_snapshot(bombona("A1", None), Vec::new());
    s.open_dialog(DetailDialog::ConfirmMarkSeen);
    assert!(s.dialog.is_none());
    s.open_dialog(DetailDialog::Checkout);
    assert_eq!(s.dialog, Some(DetailDialog::Checkout));

    s.apply_snapshot(bombona("A1", Some("E7")), Vec::new());
    s.open_dialog(DetailDialog::ConfirmUnlink);
    assert_eq!(s.dialog, Some(DetailDialog::ConfirmUnlink));
    assert_eq!(s.linked_uid().as_deref(), Some("E7"));
    s.close_dialog();
    assert!(s.dialog.is_none());
}

#[test]
fn actions_have_distinct_fallback_messages() {
    let action = DetailAction::Checkout { to_location: "Rota".to_owned() };
    assert_eq!(action.failure_message(), "Erro ao registrar checkout");
    assert_eq!(DetailAction::UnlinkRfid.log_context(), "unlink rfid");
}

#[test]
fn link_changes_from_dialogs_restage_edit_form() {
    let mut s = BombonaDetailState::default();
    s.apply_snapshot(bombona("A1", Some("E1")), Vec::new());
    s.begin_edit();
    s.after_action(&DetailAction::UnlinkRfid);
    assert_eq!(s.form.rfid_uid, "");
    s.after_action(&DetailAction::AssignRfid { uid: "E5".to_owned() });
    assert_eq!(s.form.rfid_uid, "E5");
}

#[test]
fn after_action_leaves_read_mode_form_alone() {
    let mut s = BombonaDetailState::default();
    s.apply_snapshot(bombona("A1", Some("E1")), Vec::new());
    s.after_action(&DetailAction::UnlinkRfid);
    assert_eq!(s.form, BombonaForm::default());
}
