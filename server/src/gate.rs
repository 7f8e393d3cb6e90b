//! Edge gate: cookie-presence redirects ahead of page rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on every full page request before Leptos renders anything. The client
//! mirrors its token into the `portfolio_auth_token` cookie so this layer can
//! see the session without reading local storage.
//!
//! DESIGN
//! ======
//! Presence only: the token is never validated here. An expired or forged
//! token passes the gate and fails later at the content API.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use portfolio_client::auth::token_store::TOKEN_KEY;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    Redirect(&'static str),
}

/// `/dashboard` itself or anything below `/dashboard/`.
pub fn is_protected(path: &str) -> bool {
    path == DASHBOARD_PATH || path.strip_prefix(DASHBOARD_PATH).is_some_and(|rest| rest.starts_with('/'))
}

pub fn decide(path: &str, has_session: bool) -> GateDecision {
    if !has_session && is_protected(path) {
        return GateDecision::Redirect(LOGIN_PATH);
    }
    if has_session && path == LOGIN_PATH {
        return GateDecision::Redirect(DASHBOARD_PATH);
    }
    GateDecision::Pass
}

/// A non-empty session cookie is present.
pub fn has_session(jar: &CookieJar) -> bool {
    jar.get(TOKEN_KEY).is_some_and(|c| !c.value().is_empty())
}

/// `axum::middleware::from_fn` adapter for [`decide`].
pub async fn edge_gate(request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let session = has_session(&jar);
    let path = request.uri().path();

    match decide(path, session) {
        GateDecision::Pass => next.run(request).await,
        GateDecision::Redirect(to) => {
            tracing::debug!(%path, session, to, "edge gate redirect");
            Redirect::temporary(to).into_response()
        }
    }
}
