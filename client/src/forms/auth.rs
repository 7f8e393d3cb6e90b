//! Login and registration forms.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::FieldErrors;
use super::rules::{char_len, is_valid_email};
use crate::net::types::{LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns per-field messages for an invalid email or short password.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let email = self.email.trim();
        let mut errors = FieldErrors::new();
        errors.check(!is_valid_email(email), "email", "Please enter a valid email");
        errors.check(
            char_len(&self.password) < MIN_PASSWORD_LEN,
            "password",
            "Password must be at least 6 characters",
        );
        errors.into_result(LoginRequest { email: email.to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns per-field messages; a password mismatch is reported on
    /// `confirmPassword`.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let mut errors = FieldErrors::new();
        errors.check(char_len(name) < 2, "name", "Name is required");
        errors.check(!is_valid_email(email), "email", "Please enter a valid email");
        errors.check(
            char_len(&self.password) < MIN_PASSWORD_LEN,
            "password",
            "Password must be at least 6 characters",
        );
        errors.check(
            char_len(&self.confirm_password) < MIN_PASSWORD_LEN,
            "confirmPassword",
            "Confirm your password",
        );
        errors.check(
            self.password != self.confirm_password,
            "confirmPassword",
            "Passwords do not match",
        );
        errors.into_result(RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }
}
