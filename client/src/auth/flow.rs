//! Login and registration flows.
//!
//! The network half lives in [`login`] / [`register`]; the part that turns a
//! response into a stored session is [`complete_login`], which works against
//! any [`TokenStore`] so it can run without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use serde_json::Value;

use super::token_store::{TokenBackend, TokenStore, browser_store};
use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest};

pub const MISSING_TOKEN_MESSAGE: &str = "Missing token in response";

/// Token from a login response: top-level `token`, or `data.token`.
pub fn extract_token(body: &Value) -> Option<&str> {
    body.get("token")
        .or_else(|| body.get("data").and_then(|d| d.get("token")))
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
}

/// Store the token from a login result.
///
/// A failed call leaves the store untouched.
///
/// # Errors
///
/// Passes through the call's [`ApiError`], or returns one carrying
/// [`MISSING_TOKEN_MESSAGE`] when the response has no token.
pub fn complete_login<B: TokenBackend>(
    store: &TokenStore<B>,
    response: Result<Value, ApiError>,
) -> Result<String, ApiError> {
    let body = response?;
    let token = extract_token(&body).ok_or_else(|| ApiError::local(MISSING_TOKEN_MESSAGE))?;
    store.set_token(token);
    Ok(token.to_owned())
}

/// Authenticate and persist the session in the browser.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] from the call or token extraction.
pub async fn login(credentials: LoginRequest) -> Result<(), ApiError> {
    let response = api::login(&credentials).await;
    complete_login(&browser_store(), response).map(drop)
}

/// Store the token from the follow-up login after registration, if any.
///
/// Returns whether a session was stored.
pub fn accept_registration_login<B: TokenBackend>(store: &TokenStore<B>, body: &Value) -> bool {
    match extract_token(body) {
        Some(token) => {
            store.set_token(token);
            true
        }
        None => {
            log::debug!("registration login returned no token");
            false
        }
    }
}

/// Create an account, then log in with the same credentials.
///
/// A login response without a token still counts as success: the account
/// exists and the user can sign in manually. The returned flag tells whether
/// a session was stored.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] from registration or the follow-up login.
pub async fn register(account: RegisterRequest) -> Result<bool, ApiError> {
    api::register(&account).await?;
    let credentials = LoginRequest { email: account.email, password: account.password };
    let body = api::login(&credentials).await?;
    Ok(accept_registration_login(&browser_store(), &body))
}
