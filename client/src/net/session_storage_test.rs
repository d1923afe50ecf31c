use super::*;

#[test]
fn decode_reads_serialized_session() {
    let raw = serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_700_003_600,
        "user": { "id": "u-1", "email": "a@b.com" }
    })
    .to_string();
    let session = decode(&raw).unwrap();
    assert_eq!(session.refresh_token, "rt");
    assert_eq!(session.user.id, "u-1");
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode("not json").is_none());
    assert!(decode(r#"{"access_token":"at"}"#).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_empty_outside_browser() {
    clear();
    assert!(load().is_none());
}
