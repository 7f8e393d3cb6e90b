//! Owner login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable only without a session on full loads: the edge gate sends
//! signed-in visitors to `/dashboard`. A successful login writes the token to
//! both stores before navigating, so the gate lets the dashboard through.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::flow;
use crate::components::field::TextField;
use crate::forms::FieldErrors;
use crate::forms::auth::LoginForm;
use crate::net::http::ApiError;
use crate::state::toast::{ToastState, toast_error, toast_success};

pub const LOGIN_SUCCESS: &str = "Logged in successfully";
pub const LOGIN_FAILED: &str = "Login failed";

fn failure_message(err: &ApiError) -> String {
    err.message_or(LOGIN_FAILED)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match flow::login(credentials).await {
                Ok(()) => {
                    toast_success(toasts, LOGIN_SUCCESS);
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: status={} {}", e.status, e.message);
                    toast_error(toasts, failure_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Owner Login"</h1>
                <p class="auth-card__subtitle">"Access your dashboard securely"</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <TextField
                        label="Email"
                        name="email"
                        value=email
                        errors=errors
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <TextField
                        label="Password"
                        name="password"
                        value=password
                        errors=errors
                        input_type="password"
                        placeholder="••••••"
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in…" } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Create one"</a>
                </p>
            </div>
        </main>
    }
}
