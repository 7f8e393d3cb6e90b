use super::*;

fn login(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn login_valid_input_builds_request() {
    let request = login(" a@b.com ", "secret1").validate().unwrap();
    assert_eq!(request, LoginRequest { email: "a@b.com".to_owned(), password: "secret1".to_owned() });
}

#[test]
fn login_reports_both_fields() {
    let errors = login("nope", "123").validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("email"), Some("Please enter a valid email"));
    assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
}

#[test]
fn login_password_exactly_six_chars_is_enough() {
    assert!(login("a@b.com", "123456").validate().is_ok());
    assert!(login("a@b.com", "12345").validate().is_err());
}

fn register(name: &str, password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        name: name.to_owned(),
        email: "a@b.com".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[test]
fn register_valid_input_builds_request() {
    let request = register("Ada", "secret1", "secret1").validate().unwrap();
    assert_eq!(request.name, "Ada");
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.password, "secret1");
}

#[test]
fn register_mismatch_reported_on_confirm_field() {
    let errors = register("Ada", "secret1", "secret2").validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
}

#[test]
fn register_short_confirm_takes_precedence_over_mismatch() {
    let errors = register("Ada", "secret1", "abc").validate().unwrap_err();
    assert_eq!(errors.get("confirmPassword"), Some("Confirm your password"));
}

#[test]
fn register_requires_name_of_two_chars() {
    let errors = register(" A ", "secret1", "secret1").validate().unwrap_err();
    assert_eq!(errors.get("name"), Some("Name is required"));
}
