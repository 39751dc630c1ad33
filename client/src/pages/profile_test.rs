use serde_json::json;

use super::*;

#[test]
fn profile_fields_keep_scalars_only() {
    let record = json!({
        "id": 3,
        "username": "fall",
        "email": "",
        "is_admin": false,
        "phone": "+221 77 000 00 00",
        "password": "hash",
        "groups": [1, 2],
        "cabinet": {"name": "Fall & Associés"},
    });
    let mut fields = profile_fields(&record);
    fields.sort();
    assert_eq!(
        fields,
        vec![
            ("is admin".to_owned(), "no".to_owned()),
            ("phone".to_owned(), "+221 77 000 00 00".to_owned()),
            ("username".to_owned(), "fall".to_owned()),
        ]
    );
}

#[test]
fn non_object_record_has_no_fields() {
    assert!(profile_fields(&json!([1, 2])).is_empty());
}

#[test]
fn expiry_label_rounds_up_to_minutes() {
    assert_eq!(expiry_label(Some(1_000 + 61), 1_000), "in 2 min");
    assert_eq!(expiry_label(Some(1_000 + 60), 1_000), "in 1 min");
    assert_eq!(expiry_label(Some(1_000), 1_000), "expired");
    assert_eq!(expiry_label(None, 1_000), "unknown");
}
