//! Thin wrappers over `window` dialogs and navigation.
//!
//! Outside the browser these are no-ops: `confirm` answers `false` and
//! `prompt` answers `None`, so SSR never takes a destructive branch.

/// Ask the user to confirm an action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Ask the user for a line of text. Cancel and empty input both yield `None`.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.prompt_with_message(message).ok().flatten())
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        None
    }
}

/// Full page navigation, so the edge gate sees the updated cookie.
pub fn hard_navigate(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                log::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
