//! Client-side session redirects.
//!
//! The edge gate only sees full page loads. Router navigations into the
//! dashboard and the hop after registration never reach it, so they are
//! checked here against the local token.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Destination after a successful registration.
pub fn after_register_path(session_stored: bool) -> &'static str {
    if session_stored { DASHBOARD_PATH } else { LOGIN_PATH }
}

/// Redirect for a dashboard management screen, if the session is missing.
pub fn dashboard_redirect(has_session: bool) -> Option<&'static str> {
    (!has_session).then_some(LOGIN_PATH)
}

/// Replace the current route with the login page once hydrated without a token.
pub fn use_session_guard() {
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(path) = dashboard_redirect(super::has_session()) {
            log::debug!("no session on dashboard route, redirecting to {path}");
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
