//! Labelled form inputs with inline validation messages.

use leptos::prelude::*;

use crate::forms::FieldErrors;

/// Message for `field`, if the last validation recorded one.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> impl Fn() -> Option<&'static str> + Copy + Send + Sync + 'static {
    move || errors.with(|e| e.get(field))
}

/// Single-line text input bound to `value`.
#[component]
pub fn TextField(
    label: &'static str,
    /// Wire name used as the error key.
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let error = field_error(errors, name);
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class=move || input_class(error().is_some())
                type=input_type
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError message=Signal::derive(error)/>
        </label>
    }
}

/// Multi-line text input bound to `value`.
#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    let error = field_error(errors, name);
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input"
                name=name
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <FieldError message=Signal::derive(error)/>
        </label>
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid { "field__input field__input--invalid" } else { "field__input" }
}

#[component]
pub fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <span class="field__error">{move || message.get().unwrap_or_default()}</span>
        </Show>
    }
}
