use super::*;

// =============================================================
// UserInfo pass-through
// =============================================================

#[test]
fn user_info_default_is_logged_out() {
    let info = UserInfo::default();
    assert!(!info.is_authenticated);
    assert!(info.extra.is_empty());
}

#[test]
fn user_info_keeps_extra_fields_verbatim() {
    let body = serde_json::json!({
        "is_authenticated": true,
        "name": "X",
        "id": 7
    });
    let info: UserInfo = serde_json::from_value(body.clone()).expect("user info");
    assert!(info.is_authenticated);
    assert_eq!(info.extra.get("name"), Some(&serde_json::json!("X")));
    assert_eq!(info.extra.get("id"), Some(&serde_json::json!(7)));

    // Round-trips to exactly the server's body.
    assert_eq!(serde_json::to_value(&info).expect("to_value"), body);
}

#[test]
fn user_info_missing_flag_defaults_to_false() {
    let info: UserInfo = serde_json::from_value(serde_json::json!({"name": "X"})).expect("user info");
    assert!(!info.is_authenticated);
}

// =============================================================
// Entity records
// =============================================================

#[test]
fn ticket_decodes_denormalized_names() {
    let ticket: Ticket = serde_json::from_value(serde_json::json!({
        "id": 1,
        "flight": 3,
        "flight_name": "MOW-LED",
        "passenger": 5,
        "passenger_name": "Ivanov I. I.",
        "rate": 2,
        "rate_name": "Economy",
        "seat": "12A",
        "booking_date": "2024-05-01T10:00:00Z"
    }))
    .expect("ticket");
    assert_eq!(ticket.flight_name, "MOW-LED");
    assert_eq!(ticket.rate_name, "Economy");
    assert_eq!(ticket.seat, "12A");
}

#[test]
fn flight_tolerates_missing_optional_fields() {
    let flight: Flight = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "SU-100",
        "airline": null,
        "price": 4500,
        "departure_time": "2024-05-01T10:00:00Z",
        "arrival_time": "2024-05-01T12:00:00Z"
    }))
    .expect("flight");
    assert_eq!(flight.route, "");
    assert!(flight.airline.is_none());
}
