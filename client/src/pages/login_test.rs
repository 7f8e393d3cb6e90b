use super::*;

#[test]
fn failure_shows_normalized_message() {
    let err = ApiError::from_response(401, Some(serde_json::json!({ "message": "Invalid credentials" })));
    assert_eq!(failure_message(&err), "Invalid credentials");
}

#[test]
fn failure_without_body_uses_status_text() {
    let err = ApiError::from_response(500, None);
    assert_eq!(failure_message(&err), "Request failed with status code 500");
}

#[test]
fn blank_failure_falls_back_to_login_failed() {
    assert_eq!(failure_message(&ApiError::local("")), LOGIN_FAILED);
}
