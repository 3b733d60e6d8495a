use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Bombona, Movement, MovementKind, Rfid};
use crate::state::bombona_detail::{BombonaDetailState, DetailAction, DetailMode};
use crate::state::unlinked_rfids::UnlinkedRfidsState;

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

fn movement(id: i64, kind: MovementKind) -> Movement {
    Movement { id, kind, timestamp: "t".to_owned(), location: None, metadata: None, actor: None }
}

fn server_error() -> ApiError {
    ApiError::Status { status: 409, message: Some("RFID já vinculada".to_owned()) }
}

#[test]
fn refresh_runs_after_successful_mutation() {
    let log = RefCell::new(Vec::new());
    let result = block_on(mutate_then_refresh(
        async {
            log.borrow_mut().push("checkout");
            Ok::<_, ApiError>(())
        },
        || async {
            log.borrow_mut().push("fetch bombona");
            log.borrow_mut().push("fetch movements");
        },
    ));
    assert!(result.is_ok());
    assert_eq!(*log.borrow(), vec!["checkout", "fetch bombona", "fetch movements"]);
}

#[test]
fn failed_mutation_skips_refresh() {
    let log = RefCell::new(Vec::new());
    let result = block_on(mutate_then_refresh(
        async {
            log.borrow_mut().push("checkin");
            Err::<(), _>(server_error())
        },
        || async { log.borrow_mut().push("refresh") },
    ));
    assert_eq!(result, Err(server_error()));
    assert_eq!(*log.borrow(), vec!["checkin"]);
}

#[test]
fn detail_shows_refetched_records_after_action() {
    let state = RefCell::new(BombonaDetailState::default());
    state.borrow_mut().apply_snapshot(bombona("A1", None), vec![movement(1, MovementKind::Checkin)]);

    let action = DetailAction::Checkout { to_location: "Rota 3".to_owned() };
    let result = block_on(mutate_then_refresh(async { Ok::<_, ApiError>(()) }, || async {
        state
            .borrow_mut()
            .apply_snapshot(bombona("A1", None), vec![movement(2, MovementKind::Checkout), movement(1, MovementKind::Checkin)]);
    }));
    if result.is_ok() {
        state.borrow_mut().after_action(&action);
    }

    let s = state.borrow();
    assert_eq!(s.movements.len(), 2);
    assert_eq!(s.movements[0].kind, MovementKind::Checkout);
}

#[test]
fn detail_keeps_prior_display_when_action_fails() {
    let state = RefCell::new(BombonaDetailState::default());
    state.borrow_mut().apply_snapshot(bombona("A1", Some("E1")), vec![movement(1, MovementKind::Checkin)]);
    state.borrow_mut().begin_edit();

    let result = block_on(mutate_then_refresh(async { Err::<(), _>(server_error()) }, || async {
        state.borrow_mut().apply_snapshot(bombona("A1", None), Vec::new());
    }));
    if result.is_ok() {
        state.borrow_mut().after_action(&DetailAction::UnlinkRfid);
    }

    let s = state.borrow();
    assert!(result.is_err());
    assert_eq!(s.bombona.as_ref().and_then(Bombona::rfid_uid), Some("E1"));
    assert_eq!(s.movements.len(), 1);
    assert_eq!(s.mode, DetailMode::Edit);
    assert_eq!(s.form.rfid_uid, "E1");
}

#[test]
fn save_leaves_edit_mode_only_after_refresh() {
    let state = RefCell::new(BombonaDetailState::default());
    state.borrow_mut().apply_snapshot(bombona("A1", None), Vec::new());
    state.borrow_mut().begin_edit();

    let mode_during_refresh = RefCell::new(None);
    let result = block_on(mutate_then_refresh(async { Ok::<_, ApiError>(()) }, || async {
        *mode_during_refresh.borrow_mut() = Some(state.borrow().mode);
        state.borrow_mut().apply_snapshot(bombona("A1-b", None), Vec::new());
    }));
    if result.is_ok() {
        state.borrow_mut().end_edit();
    }

    assert_eq!(*mode_during_refresh.borrow(), Some(DetailMode::Edit));
    assert_eq!(state.borrow().mode, DetailMode::Read);
    assert_eq!(state.borrow().bombona.as_ref().unwrap().serial, "A1-b");
}

/// Assignment flow as the unlinked-tag list runs it.
fn assign(
    state: &RefCell<UnlinkedRfidsState>,
    log: &RefCell<Vec<String>>,
    uid: &str,
    outcome: Result<(), ApiError>,
) -> Option<Result<(), ApiError>> {
    block_on(with_busy_flag(
        || state.borrow_mut().begin_assign(uid),
        async {
            log.borrow_mut().push(format!("assign {uid}"));
            let result = mutate_then_refresh(async { outcome }, || async {
                log.borrow_mut().push("fetch lists".to_owned());
            })
            .await;
            if result.is_ok() {
                state.borrow_mut().reset_picker();
            }
            result
        },
        || state.borrow_mut().finish_assign(uid),
    ))
}

#[test]
fn successful_assign_refetches_then_resets_picker_and_clears_busy() {
    let state = RefCell::new(UnlinkedRfidsState::default());
    state.borrow_mut().toggle_panel("E1");
    state.borrow_mut().search = "A1".to_owned();
    let log = RefCell::new(Vec::new());

    let result = assign(&state, &log, "E1", Ok(()));

    assert_eq!(result, Some(Ok(())));
    assert_eq!(*log.borrow(), vec!["assign E1".to_owned(), "fetch lists".to_owned()]);
    let s = state.borrow();
    assert!(s.open_uid.is_none());
    assert!(s.search.is_empty());
    assert!(!s.is_assigning("E1"));
}

#[test]
fn failed_assign_clears_busy_and_keeps_picker() {
    let state = RefCell::new(UnlinkedRfidsState::default());
    state.borrow_mut().toggle_panel("E1");
    state.borrow_mut().search = "A1".to_owned();
    let log = RefCell::new(Vec::new());

    let result = assign(&state, &log, "E1", Err(server_error()));

    assert_eq!(result, Some(Err(server_error())));
    assert_eq!(*log.borrow(), vec!["assign E1".to_owned()]);
    let s = state.borrow();
    assert!(s.is_open("E1"));
    assert_eq!(s.search, "A1");
    assert!(!s.is_assigning("E1"));
}

#[test]
fn busy_tag_rejects_second_assign_without_running_it() {
    let state = RefCell::new(UnlinkedRfidsState::default());
    let log = RefCell::new(Vec::new());

    let outer = block_on(with_busy_flag(
        || state.borrow_mut().begin_assign("E1"),
        async {
            let repeat = with_busy_flag(
                || state.borrow_mut().begin_assign("E1"),
                async { log.borrow_mut().push("repeat E1") },
                || state.borrow_mut().finish_assign("E1"),
            )
            .await;
            let other = with_busy_flag(
                || state.borrow_mut().begin_assign("E2"),
                async { log.borrow_mut().push("assign E2") },
                || state.borrow_mut().finish_assign("E2"),
            )
            .await;
            (repeat, other)
        },
        || state.borrow_mut().finish_assign("E1"),
    ));

    assert_eq!(outer, Some((None, Some(()))));
    assert_eq!(*log.borrow(), vec!["assign E2"]);
    assert!(!state.borrow().is_assigning("E1"));
}
