use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Logged in successfully");
    let b = state.push(ToastKind::Error, "Login failed");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].message, "Login failed");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "x");
    state.dismiss(a);
    let b = state.push(ToastKind::Error, "y");
    assert_ne!(a, b);
}

#[test]
fn kind_classes_differ() {
    assert_eq!(ToastKind::Success.class(), "toast toast--success");
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}

#[test]
fn toast_helpers_append_to_signal() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.with(|| {
        let state = RwSignal::new(ToastState::default());
        toast_success(state, "Blog created");
        toast_error(state, "Failed to load blogs");
        let toasts = state.get_untracked().toasts;
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[1].message, "Failed to load blogs");
    });
}
