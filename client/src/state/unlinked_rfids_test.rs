use super::*;

fn bombona(id: i64, serial: &str, label: Option<&str>) -> Bombona {
    Bombona {
        id,
        serial: serial.to_owned(),
        label: label.map(str::to_owned),
        contents: None,
        latitude: None,
        longitude: None,
        rfid: None,
    }
}

fn ids(list: &[Bombona]) -> Vec<i64> {
    list.iter().map(|b| b.id).collect()
}

#[test]
fn empty_search_returns_first_ten_unfiltered() {
    let all: Vec<_> = (1..=15).map(|i| bombona(i, &format!("S{i}"), None)).collect();
    assert_eq!(ids(&suggestions(&all, "")), (1..=10).collect::<Vec<_>>());
    assert_eq!(ids(&suggestions(&all, "   ")), (1..=10).collect::<Vec<_>>());
}

#[test]
fn search_matches_serial_or_label_case_insensitively() {
    let all = vec![
        bombona(1, "a100", None),
        bombona(2, "B200", Some("lote A1")),
        bombona(3, "C300", Some("vazio")),
        bombona(4, "XA1Y", None),
    ];
    assert_eq!(ids(&suggestions(&all, "A1")), vec![1, 2, 4]);
}

#[test]
fn search_results_are_capped_at_ten() {
    let all: Vec<_> = (1..=25).map(|i| bombona(i, &format!("A1-{i}"), None)).collect();
    let found = suggestions(&all, "a1");
    assert_eq!(found.len(), SUGGESTION_LIMIT);
    assert_eq!(ids(&found), (1..=10).collect::<Vec<_>>());
}

#[test]
fn search_without_matches_is_empty() {
    let all = vec![bombona(1, "A1", Some("x"))];
    assert!(suggestions(&all, "zzz").is_empty());
}

#[test]
fn second_assign_on_same_tag_is_rejected_while_pending() {
    let mut s = UnlinkedRfidsState::default();
    assert!(s.begin_assign("E1"));
    assert!(!s.begin_assign("E1"));
    assert!(s.is_assigning("E1"));

    // Other tags stay actionable.
    assert!(s.begin_assign("E2"));

    s.finish_assign("E1");
    assert!(!s.is_assigning("E1"));
    assert!(s.is_assigning("E2"));
    assert!(s.begin_assign("E1"));
}

#[test]
fn toggle_panel_opens_and_closes_with_fresh_search() {
    let mut s = UnlinkedRfidsState::default();
    s.search = "old".to_owned();
    s.manual_id = "9".to_owned();
    s.toggle_panel("E1");
    assert!(s.is_open("E1"));
    assert!(s.search.is_empty());
    assert!(s.manual_id.is_empty());

    s.search = "A".to_owned();
    s.toggle_panel("E2");
    assert!(s.is_open("E2"));
    assert!(!s.is_open("E1"));
    assert!(s.search.is_empty());

    s.search = "B".to_owned();
    s.toggle_panel("E2");
    assert!(s.open_uid.is_none());
    assert!(s.search.is_empty());
}

#[test]
fn reset_picker_clears_panel_state() {
    let mut s = UnlinkedRfidsState::default();
    s.toggle_panel("E1");
    s.search = "A1".to_owned();
    s.manual_id = "3".to_owned();
    s.manual_error = Some("x".to_owned());
    s.reset_picker();
    assert!(s.open_uid.is_none());
    assert!(s.search.is_empty());
    assert!(s.manual_id.is_empty());
    assert!(s.manual_error.is_none());
}

#[test]
fn state_suggestions_use_current_search() {
    let mut s = UnlinkedRfidsState::default();
    s.apply_lists(Vec::new(), vec![bombona(1, "A1", None), bombona(2, "B2", None)]);
    s.search = "b".to_owned();
    assert_eq!(ids(&s.suggestions()), vec![2]);
}
