use super::*;
use crate::auth::token_store::{MemoryBackend, TOKEN_KEY};
use serde_json::json;

fn memory_store() -> TokenStore<MemoryBackend> {
    TokenStore::new(MemoryBackend::new())
}

#[test]
fn extract_token_reads_top_level_and_envelope() {
    assert_eq!(extract_token(&json!({ "token": "a" })), Some("a"));
    assert_eq!(extract_token(&json!({ "data": { "token": "b" } })), Some("b"));
    assert_eq!(extract_token(&json!({ "token": "" })), None);
    assert_eq!(extract_token(&json!({ "user": {} })), None);
    assert_eq!(extract_token(&Value::Null), None);
}

#[test]
fn successful_login_stores_token_and_cookie() {
    let store = memory_store();
    let token = complete_login(&store, Ok(json!({ "token": "tok123" }))).unwrap();

    assert_eq!(token, "tok123");
    assert_eq!(store.backend().item(TOKEN_KEY).as_deref(), Some("tok123"));
    let header = store.backend().cookie_header().unwrap();
    assert!(header.contains("portfolio_auth_token=tok123"));
}

#[test]
fn failed_login_normalizes_error_and_writes_nothing() {
    let store = memory_store();
    let body = json!({ "message": "Invalid credentials" });
    let err = complete_login(&store, Err(ApiError::from_response(401, Some(body.clone())))).unwrap_err();

    assert_eq!(err.status, 401);
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(err.data, Some(body));
    assert_eq!(store.get_token(), None);
    assert!(store.backend().cookie_writes().is_empty());
}

#[test]
fn login_without_token_is_an_error() {
    let store = memory_store();
    let err = complete_login(&store, Ok(json!({ "ok": true }))).unwrap_err();
    assert_eq!(err.message, MISSING_TOKEN_MESSAGE);
    assert_eq!(err.status, 0);
    assert_eq!(store.get_token(), None);
}

#[test]
fn login_with_disabled_storage_still_succeeds() {
    let store = TokenStore::new(MemoryBackend::disabled());
    let token = complete_login(&store, Ok(json!({ "token": "tok123" }))).unwrap();
    assert_eq!(token, "tok123");
    assert_eq!(store.get_token(), None);
}

#[test]
fn registration_login_with_token_stores_session() {
    let store = memory_store();
    assert!(accept_registration_login(&store, &json!({ "data": { "token": "tok9" } })));
    assert_eq!(store.get_token().as_deref(), Some("tok9"));
    assert!(store.backend().cookie_header().unwrap().contains("portfolio_auth_token=tok9"));
}

#[test]
fn registration_login_without_token_stores_nothing() {
    let store = memory_store();
    assert!(!accept_registration_login(&store, &json!({ "user": { "id": 1 } })));
    assert_eq!(store.get_token(), None);
    assert!(store.backend().cookie_writes().is_empty());
}
