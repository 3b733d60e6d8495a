use super::*;

#[test]
fn bombona_decodes_camel_case_with_linked_rfid() {
    let value = serde_json::json!({
        "id": 7,
        "serial": "A100",
        "label": "Etanol",
        "contents": null,
        "latitude": -23.55,
        "longitude": -46.63,
        "rfid": { "id": 3, "uid": "E200341", "lastSeenAt": "2024-05-01T12:00:00Z" }
    });
    let b: Bombona = serde_json::from_value(value).unwrap();
    assert_eq!(b.id, 7);
    assert_eq!(b.coordinates(), Some((-23.55, -46.63)));
    assert_eq!(b.rfid_uid(), Some("E200341"));
    assert_eq!(b.rfid.unwrap().last_seen_at.as_deref(), Some("2024-05-01T12:00:00Z"));
}

#[test]
fn bombona_with_missing_optionals_decodes() {
    let b: Bombona = serde_json::from_value(serde_json::json!({ "id": 1, "serial": "X" })).unwrap();
    assert!(b.label.is_none());
    assert!(b.rfid.is_none());
    assert_eq!(b.coordinates(), None);
}

#[test]
fn half_coordinate_pair_is_treated_as_absent() {
    let b: Bombona =
        serde_json::from_value(serde_json::json!({ "id": 1, "serial": "X", "latitude": 1.0 })).unwrap();
    assert_eq!(b.coordinates(), None);
}

#[test]
fn movement_kind_accepts_lower_and_upper_case() {
    let m: Movement = serde_json::from_value(serde_json::json!({
        "id": 1, "type": "CHECKOUT", "timestamp": "2024-05-01T12:00:00Z"
    }))
    .unwrap();
    assert_eq!(m.kind, MovementKind::Checkout);

    let m: Movement = serde_json::from_value(serde_json::json!({
        "id": 2, "type": "checkin", "timestamp": "t", "metadata": { "latitude": 1.5, "longitude": 2.5 }
    }))
    .unwrap();
    assert_eq!(m.kind, MovementKind::Checkin);
    assert_eq!(m.coordinates(), Some((1.5, 2.5)));
}

#[test]
fn unknown_movement_kind_keeps_raw_type() {
    let m: Movement =
        serde_json::from_value(serde_json::json!({ "id": 1, "type": "Transfer", "timestamp": "t" })).unwrap();
    assert_eq!(m.kind, MovementKind::Other("Transfer".to_owned()));
    assert_eq!(m.kind.label(), "Transfer");
    assert_eq!(serde_json::to_value(&m.kind).unwrap(), serde_json::json!("Transfer"));
}

#[test]
fn movement_metadata_accepts_string_coordinates() {
    let m: Movement = serde_json::from_value(serde_json::json!({
        "id": 1, "type": "checkout", "timestamp": "t",
        "metadata": { "latitude": "-23.5", "longitude": "-46,6" }
    }))
    .unwrap();
    assert_eq!(m.coordinates(), Some((-23.5, -46.6)));
}

#[test]
fn movement_metadata_of_any_shape_decodes() {
    let list: MovementsEnvelope = serde_json::from_value(serde_json::json!({
        "movements": [
            { "id": 1, "type": "checkout", "timestamp": "t", "metadata": "gps off" },
            { "id": 2, "type": "checkin", "timestamp": "t", "metadata": { "latitude": "n/a", "longitude": 1.0 } },
            { "id": 3, "type": "checkin", "timestamp": "t", "metadata": { "source": "handheld" } }
        ]
    }))
    .unwrap();
    assert_eq!(list.movements.len(), 3);
    assert!(list.movements.iter().all(|m| m.coordinates().is_none()));
}

#[test]
fn tag_read_validity_accepts_integer_flags() {
    let reads: Vec<TagRead> = serde_json::from_value(serde_json::json!([
        { "uid": "AA", "timestamp": "2024-05-01 10:00:00", "valid": 1 },
        { "uid": "BB", "timestamp": "2024-05-01 10:00:01", "valid": 0 },
        { "uid": "CC", "timestamp": "2024-05-01 10:00:02", "valid": true },
        { "uid": "DD", "timestamp": "2024-05-01 10:00:03", "valid": null },
        { "uid": "EE", "timestamp": "2024-05-01 10:00:04" }
    ]))
    .unwrap();
    let flags: Vec<bool> = reads.iter().map(|r| r.valid).collect();
    assert_eq!(flags, vec![true, false, true, false, false]);
}

#[test]
fn envelopes_default_missing_lists_to_empty() {
    let e: RfidsEnvelope = serde_json::from_str("{}").unwrap();
    assert!(e.rfids.is_empty());
    let e: MovementsEnvelope = serde_json::from_str("{}").unwrap();
    assert!(e.movements.is_empty());
}

#[test]
fn unlink_patch_serializes_null_rfid_id() {
    let body = serde_json::to_value(RfidUnlink::default()).unwrap();
    assert_eq!(body, serde_json::json!({ "rfidId": null }));
}

#[test]
fn action_bodies_use_expected_keys() {
    assert_eq!(
        serde_json::to_value(CheckoutRequest { to_location: "Rota 3" }).unwrap(),
        serde_json::json!({ "toLocation": "Rota 3" })
    );
    assert_eq!(
        serde_json::to_value(CheckinRequest { at_location: "Depósito" }).unwrap(),
        serde_json::json!({ "atLocation": "Depósito" })
    );
    assert_eq!(
        serde_json::to_value(AssignByUidRequest { bombona_id: 12 }).unwrap(),
        serde_json::json!({ "bombonaId": 12 })
    );
}

#[test]
fn read_stats_decode_portuguese_keys() {
    let stats: ReadStats = serde_json::from_value(serde_json::json!({
        "total": 40, "unicos": 5, "validos": 38,
        "top5": [{ "uid": "AA", "count": 20 }, { "uid": "BB", "count": 9 }]
    }))
    .unwrap();
    assert_eq!(stats.unique, 5);
    assert_eq!(stats.valid, 38);
    assert_eq!(stats.top[0], UidCount { uid: "AA".to_owned(), count: 20 });
}
