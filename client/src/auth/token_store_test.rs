use super::*;

fn memory_store() -> TokenStore<MemoryBackend> {
    TokenStore::new(MemoryBackend::new())
}

// =============================================================================
// get / set / clear
// =============================================================================

#[test]
fn get_token_empty_store_returns_none() {
    let store = memory_store();
    assert_eq!(store.get_token(), None);
    assert!(!store.has_session());
}

#[test]
fn set_token_then_get_token_returns_it() {
    let store = memory_store();
    store.set_token("tok123");
    assert_eq!(store.get_token().as_deref(), Some("tok123"));
    assert!(store.has_session());
}

#[test]
fn set_token_mirrors_into_cookie() {
    let store = memory_store();
    store.set_token("tok123");
    assert_eq!(store.backend().cookie(TOKEN_KEY).as_deref(), Some("tok123"));
    assert_eq!(
        store.backend().cookie_header().as_deref(),
        Some("portfolio_auth_token=tok123")
    );
}

#[test]
fn set_token_ignores_empty_token() {
    let store = memory_store();
    store.set_token("");
    assert_eq!(store.get_token(), None);
    assert!(store.backend().cookie_writes().is_empty());
}

#[test]
fn empty_stored_value_reads_as_none() {
    let backend = MemoryBackend::new();
    backend.set_item(TOKEN_KEY, "").unwrap();
    let store = TokenStore::new(backend);
    assert_eq!(store.get_token(), None);
}

#[test]
fn set_token_overwrites_previous_token() {
    let store = memory_store();
    store.set_token("first");
    store.set_token("second");
    assert_eq!(store.get_token().as_deref(), Some("second"));
    assert_eq!(store.backend().cookie(TOKEN_KEY).as_deref(), Some("second"));
}

#[test]
fn clear_token_removes_both_copies() {
    let store = memory_store();
    store.set_token("tok123");
    store.clear_token();
    assert_eq!(store.get_token(), None);
    assert_eq!(store.backend().item(TOKEN_KEY), None);
    assert_eq!(store.backend().cookie(TOKEN_KEY), None);
    assert_eq!(store.backend().cookie_header(), None);
}

#[test]
fn clear_token_twice_is_idempotent() {
    let store = memory_store();
    store.set_token("tok123");
    store.clear_token();
    store.clear_token();
    assert_eq!(store.get_token(), None);
    assert_eq!(store.backend().cookie_header(), None);

    let writes = store.backend().cookie_writes();
    assert_eq!(writes.len(), 3);
    assert_eq!(writes[1], writes[2]);
}

#[test]
fn clear_token_on_empty_store_is_harmless() {
    let store = memory_store();
    store.clear_token();
    assert_eq!(store.get_token(), None);
}

// =============================================================================
// disabled storage
// =============================================================================

#[test]
fn disabled_storage_reads_as_no_token() {
    let store = TokenStore::new(MemoryBackend::disabled());
    assert_eq!(store.get_token(), None);
    assert!(!store.has_session());
}

#[test]
fn disabled_storage_set_token_does_not_panic() {
    let store = TokenStore::new(MemoryBackend::disabled());
    store.set_token("tok123");
    assert_eq!(store.backend().item(TOKEN_KEY), None);
    assert!(store.backend().cookie_writes().is_empty());
}

#[test]
fn disabled_storage_clear_token_does_not_panic() {
    let store = TokenStore::new(MemoryBackend::disabled());
    store.clear_token();
    store.clear_token();
}

#[test]
fn storage_disabled_after_login_reads_as_logged_out() {
    let store = memory_store();
    store.set_token("tok123");
    store.backend().set_disabled(true);
    assert_eq!(store.get_token(), None);

    store.backend().set_disabled(false);
    assert_eq!(store.get_token().as_deref(), Some("tok123"));
}

// =============================================================================
// cookie serialization
// =============================================================================

#[test]
fn session_cookie_has_path_samesite_and_seven_day_expiry() {
    let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let cookie = session_cookie("tok123", now);
    assert_eq!(cookie.name(), TOKEN_KEY);
    assert_eq!(cookie.value(), "tok123");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.expires_datetime(), Some(now + Duration::days(7)));
}

#[test]
fn session_cookie_serializes_all_attributes() {
    let now = OffsetDateTime::from_unix_timestamp(0).unwrap();
    let raw = session_cookie("abc", now).to_string();
    assert!(raw.starts_with("portfolio_auth_token=abc"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("SameSite=Lax"));
    assert!(raw.contains("Expires=Thu, 08 Jan 1970 00:00:00 GMT"));
}

#[test]
fn expired_cookie_uses_epoch_and_same_attributes() {
    let raw = expired_cookie().to_string();
    assert!(raw.starts_with("portfolio_auth_token=;"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("SameSite=Lax"));
    assert!(raw.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
}

#[test]
fn set_token_at_writes_expiry_relative_to_clock() {
    let store = memory_store();
    let now = OffsetDateTime::now_utc();
    store.set_token_at("tok", now);
    let written = store.backend().cookie_writes().pop().unwrap();
    let parsed = Cookie::parse(written).unwrap();
    let expected = (now + COOKIE_TTL).replace_nanosecond(0).unwrap();
    assert_eq!(parsed.expires_datetime(), Some(expected));
}

// =============================================================================
// browser backend outside the browser
// =============================================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_outside_browser_has_no_session() {
    set_token("tok123");
    assert_eq!(get_token(), None);
    assert!(!has_session());
    clear_token();
}
