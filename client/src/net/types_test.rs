use super::*;
use serde_json::json;

// =============================================================
// LoginPayload
// =============================================================

#[test]
fn login_payload_reads_token_pair() {
    let payload: LoginPayload = serde_json::from_value(json!({ "access": "A", "refresh": "R" })).unwrap();
    assert_eq!(payload.access.as_deref(), Some("A"));
    assert_eq!(payload.refresh.as_deref(), Some("R"));
    assert!(!payload.two_factor_required);
    assert!(payload.user.is_none());
}

#[test]
fn login_payload_reads_two_factor_step() {
    let payload: LoginPayload =
        serde_json::from_value(json!({ "two_factor_required": true, "message": "OTP sent" })).unwrap();
    assert!(payload.two_factor_required);
    assert!(payload.access.is_none());
    assert_eq!(payload.extra.get("message"), Some(&json!("OTP sent")));
}

#[test]
fn refresh_payload_requires_access() {
    assert!(serde_json::from_value::<RefreshPayload>(json!({ "refresh": "R2" })).is_err());
    let ok: RefreshPayload = serde_json::from_value(json!({ "access": "A2", "refresh": "R2" })).unwrap();
    assert_eq!(ok.access, "A2");
}

#[test]
fn request_bodies_serialize_expected_fields() {
    let creds = Credentials::new("u", "p");
    assert_eq!(serde_json::to_value(&creds).unwrap(), json!({ "username": "u", "password": "p" }));
    assert_eq!(serde_json::to_value(RefreshRequest { refresh: "R" }).unwrap(), json!({ "refresh": "R" }));
    let otp = OtpRequest { username: "u", password: "p", otp_code: "123456" };
    assert_eq!(
        serde_json::to_value(otp).unwrap(),
        json!({ "username": "u", "password": "p", "otp_code": "123456" })
    );
}

// =============================================================
// Listing
// =============================================================

#[test]
fn listing_accepts_plain_array() {
    let listing: Listing = serde_json::from_value(json!([{ "id": 1 }, { "id": 2 }])).unwrap();
    assert_eq!(listing.total(), 2);
    assert_eq!(listing.into_rows().len(), 2);
}

#[test]
fn listing_accepts_paginated_envelope() {
    let listing: Listing =
        serde_json::from_value(json!({ "count": 40, "next": null, "results": [{ "id": 1 }] })).unwrap();
    assert_eq!(listing.total(), 40);
    assert_eq!(listing.into_rows(), vec![json!({ "id": 1 })]);
}

#[test]
fn listing_rejects_other_shapes() {
    assert!(serde_json::from_value::<Listing>(json!({ "detail": "nope" })).is_err());
}

// =============================================================
// row_label
// =============================================================

#[test]
fn row_label_prefers_name_then_title() {
    assert_eq!(row_label(&json!({ "name": "Diop & Fils", "title": "x" })), "Diop & Fils");
    assert_eq!(row_label(&json!({ "title": "Bail commercial" })), "Bail commercial");
}

#[test]
fn row_label_skips_blank_fields() {
    assert_eq!(row_label(&json!({ "name": "  ", "reference": "D-2024-001" })), "D-2024-001");
}

#[test]
fn row_label_joins_person_names() {
    assert_eq!(row_label(&json!({ "first_name": "Awa", "last_name": "Ndiaye" })), "Awa Ndiaye");
}

#[test]
fn row_label_falls_back_to_id() {
    assert_eq!(row_label(&json!({ "id": 7 })), "#7");
    assert_eq!(row_label(&json!({ "id": "abc" })), "#abc");
    assert_eq!(row_label(&json!({})), "(unnamed)");
}

// =============================================================
// Notification
// =============================================================

#[test]
fn notification_decodes_server_row() {
    let row = json!({
        "id": 12,
        "user": 3,
        "level": "WARNING",
        "title": "Échéance proche",
        "message": "Audience demain",
        "is_read": false,
        "entity_type": "deadline",
        "entity_id": 44,
        "created_at": "2024-05-02T09:00:00Z"
    });
    let n: Notification = serde_json::from_value(row).unwrap();
    assert_eq!(n.id, 12);
    assert_eq!(n.level, NotificationLevel::Warning);
    assert!(!n.is_read);
    assert_eq!(n.entity_type.as_deref(), Some("deadline"));
    assert_eq!(n.entity_id, Some(44));
}

#[test]
fn notification_level_tolerates_unknown_values() {
    let n: Notification = serde_json::from_value(json!({ "id": 1, "level": "CRITICAL" })).unwrap();
    assert_eq!(n.level, NotificationLevel::Other);
    assert_eq!(n.title, "");
    assert!(n.created_at.is_none());
}

#[test]
fn decode_rows_drops_malformed_rows() {
    let listing = Listing::Plain(vec![json!({ "id": 1 }), json!({ "title": "no id" }), json!({ "id": 2 })]);
    let ids: Vec<u64> = listing.decode_rows::<Notification>().into_iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn empty_listing_is_plain() {
    assert_eq!(Listing::default().total(), 0);
    assert!(Listing::default().into_rows().is_empty());
}
