//! Transient toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth flows and dashboard editors report outcomes here; the `Toaster`
//! component renders the queue in the top-right corner.
//!
//! DESIGN
//! ======
//! The queue is a plain struct held in an `RwSignal` context. Each toast gets
//! a monotonically increasing id so the auto-dismiss timer removes exactly the
//! toast it was scheduled for, even if others were dismissed in between.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Show a success toast that auto-dismisses.
pub fn toast_success(state: RwSignal<ToastState>, message: impl Into<String>) {
    show(state, ToastKind::Success, message.into());
}

/// Show an error toast that auto-dismisses.
pub fn toast_error(state: RwSignal<ToastState>, message: impl Into<String>) {
    show(state, ToastKind::Error, message.into());
}

fn show(state: RwSignal<ToastState>, kind: ToastKind, message: String) {
    let mut id = 0;
    state.update(|s| id = s.push(kind, message));
    schedule_dismiss(state, id);
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(state: RwSignal<ToastState>, id: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        state.try_update(|s| s.dismiss(id));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(state: RwSignal<ToastState>, id: u64) {
    let _ = (state, id);
}
