use super::*;

#[test]
fn register_with_stored_session_goes_to_dashboard() {
    assert_eq!(after_register_path(true), "/dashboard");
}

#[test]
fn register_without_token_goes_to_login() {
    assert_eq!(after_register_path(false), "/login");
}

#[test]
fn dashboard_screens_redirect_only_without_session() {
    assert_eq!(dashboard_redirect(false), Some("/login"));
    assert_eq!(dashboard_redirect(true), None);
}
