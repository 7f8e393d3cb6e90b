//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::{flow, guard};
use crate::components::field::TextField;
use crate::forms::FieldErrors;
use crate::forms::auth::RegisterForm;
use crate::net::http::ApiError;
use crate::state::toast::{ToastState, toast_error, toast_success};

pub const REGISTER_SUCCESS: &str = "Account created";
pub const REGISTER_FAILED: &str = "Registration failed";

fn failure_message(err: &ApiError) -> String {
    err.message_or(REGISTER_FAILED)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let account = match form.validate() {
            Ok(account) => account,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match flow::register(account).await {
                Ok(session_stored) => {
                    toast_success(toasts, REGISTER_SUCCESS);
                    navigate(guard::after_register_path(session_stored), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: status={} {}", e.status, e.message);
                    toast_error(toasts, failure_message(&e));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <p class="auth-card__subtitle">"Join us and start building today."</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <TextField label="Name" name="name" value=name errors=errors placeholder="Your name"/>
                    <TextField
                        label="Email"
                        name="email"
                        value=email
                        errors=errors
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <TextField label="Password" name="password" value=password errors=errors input_type="password"/>
                    <TextField
                        label="Confirm password"
                        name="confirmPassword"
                        value=confirm_password
                        errors=errors
                        input_type="password"
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating…" } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </main>
    }
}
