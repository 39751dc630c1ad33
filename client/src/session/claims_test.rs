use super::*;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

fn token_with_payload(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_reads_named_claims() {
    let token = token_with_payload(&serde_json::json!({
        "username": "amadou",
        "role": "AVOCAT",
        "exp": 1_900_000_000,
        "email": "amadou@cabinet.sn",
        "is_admin": false,
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.username, "amadou");
    assert_eq!(claims.role, Role::Lawyer);
    assert_eq!(claims.exp, Some(1_900_000_000));
    assert_eq!(claims.email.as_deref(), Some("amadou@cabinet.sn"));
    assert!(!claims.is_admin);
}

#[test]
fn decode_keeps_unnamed_claims_in_extra() {
    let token = token_with_payload(&serde_json::json!({
        "username": "u",
        "exp": 10,
        "user_id": 42,
        "token_type": "access",
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.extra.get("user_id"), Some(&serde_json::json!(42)));
    assert_eq!(claims.extra.get("token_type"), Some(&serde_json::json!("access")));
}

#[test]
fn decode_accepts_padded_payload() {
    let header = URL_SAFE_NO_PAD.encode(b"{}");
    let body = URL_SAFE.encode(br#"{"username":"ab","exp":1}"#);
    let token = format!("{header}.{body}.sig");
    assert_eq!(decode_claims(&token).unwrap().username, "ab");
}

#[test]
fn decode_unknown_role_maps_to_other() {
    let token = token_with_payload(&serde_json::json!({ "role": "HUISSIER", "exp": 1 }));
    assert_eq!(decode_claims(&token).unwrap().role, Role::Other);
}

#[test]
fn decode_missing_role_defaults_to_other() {
    let token = token_with_payload(&serde_json::json!({ "exp": 1 }));
    assert_eq!(decode_claims(&token).unwrap().role, Role::Other);
}

#[test]
fn decode_rejects_token_without_payload_segment() {
    assert_eq!(decode_claims("not-a-jwt"), Err(DecodeError::Segments));
    assert_eq!(decode_claims("header."), Err(DecodeError::Segments));
}

#[test]
fn decode_rejects_bad_base64() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_rejects_non_object_payload() {
    let body = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
    assert!(matches!(decode_claims(&format!("h.{body}.s")), Err(DecodeError::Json(_))));

    let body = URL_SAFE_NO_PAD.encode(b"not json");
    assert!(matches!(decode_claims(&format!("h.{body}.s")), Err(DecodeError::Json(_))));
}

// =============================================================
// Claims
// =============================================================

#[test]
fn is_live_compares_exp_strictly() {
    let claims = Claims { exp: Some(100), ..Claims::default() };
    assert!(claims.is_live_at(99));
    assert!(!claims.is_live_at(100));
    assert!(!claims.is_live_at(101));
}

#[test]
fn claims_without_exp_are_never_live() {
    assert!(!Claims::default().is_live_at(0));
}

#[test]
fn merged_with_user_overrides_token_fields() {
    let claims = Claims {
        username: "old".to_owned(),
        role: Role::Associate,
        exp: Some(5),
        ..Claims::default()
    };
    let user = serde_json::json!({ "username": "new", "role": "CLIENT", "first_name": "Awa" });
    let merged = claims.merged_with(user.as_object().unwrap()).unwrap();
    assert_eq!(merged.username, "new");
    assert_eq!(merged.role, Role::Client);
    assert_eq!(merged.exp, Some(5));
    assert_eq!(merged.extra.get("first_name"), Some(&serde_json::json!("Awa")));
}

#[test]
fn merged_with_rejects_ill_typed_user() {
    let user = serde_json::json!({ "username": 12 });
    assert!(Claims::default().merged_with(user.as_object().unwrap()).is_err());
}

#[test]
fn claims_json_round_trip_keeps_extra() {
    let token = token_with_payload(&serde_json::json!({
        "username": "u",
        "role": "ADMIN",
        "exp": 77,
        "jti": "abc",
    }));
    let claims = decode_claims(&token).unwrap();
    let stored = serde_json::to_string(&claims).unwrap();
    let restored: Claims = serde_json::from_str(&stored).unwrap();
    assert_eq!(restored, claims);
}

#[test]
fn role_labels_are_human_readable() {
    assert_eq!(Role::Admin.label(), "Administrator");
    assert_eq!(Role::Client.label(), "Client");
    assert_eq!(Role::Other.label(), "Staff");
}

#[test]
fn now_epoch_secs_is_after_2020() {
    assert!(now_epoch_secs() > 1_577_836_800);
}
