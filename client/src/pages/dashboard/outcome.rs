//! User-facing messages for dashboard content operations.
//!
//! Every create/update/delete reports through a toast. Failures show the
//! normalized API message and fall back to a per-operation default.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::http::ApiError;
use crate::state::toast::{ToastState, toast_error, toast_success};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Blog,
    Project,
}

impl ContentKind {
    /// Lowercase singular noun used in messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Blog => "Blog",
            Self::Project => "Project",
        }
    }

    pub fn list_href(self) -> &'static str {
        match self {
            Self::Blog => "/dashboard/blogs",
            Self::Project => "/dashboard/projects",
        }
    }

    pub fn new_href(self) -> &'static str {
        match self {
            Self::Blog => "/dashboard/blogs/new",
            Self::Project => "/dashboard/projects/new",
        }
    }

    pub fn delete_prompt(self) -> String {
        format!("Are you sure you want to delete this {}?", self.noun())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentAction {
    LoadList,
    Load,
    Create,
    Update,
    Delete,
}

impl ContentAction {
    fn past_tense(self) -> Option<&'static str> {
        match self {
            Self::LoadList | Self::Load => None,
            Self::Create => Some("created"),
            Self::Update => Some("updated"),
            Self::Delete => Some("deleted"),
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::LoadList | Self::Load => "load",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Toast text after a successful mutation; loads are silent.
pub fn success_message(kind: ContentKind, action: ContentAction) -> Option<String> {
    action.past_tense().map(|done| format!("{} {done}", kind.title()))
}

/// Default text when the API error carries no usable message.
pub fn failure_fallback(kind: ContentKind, action: ContentAction) -> String {
    let plural = if action == ContentAction::LoadList { "s" } else { "" };
    format!("Failed to {} {}{plural}", action.verb(), kind.noun())
}

pub fn failure_message(kind: ContentKind, action: ContentAction, err: &ApiError) -> String {
    err.message_or(&failure_fallback(kind, action))
}

/// Toast the result of a mutation; on success return to the list page.
pub fn report(
    kind: ContentKind,
    toasts: RwSignal<ToastState>,
    action: ContentAction,
    result: Result<(), ApiError>,
    navigate: &impl Fn(&str, NavigateOptions),
) {
    match result {
        Ok(()) => {
            if let Some(message) = success_message(kind, action) {
                toast_success(toasts, message);
            }
            navigate(kind.list_href(), NavigateOptions::default());
        }
        Err(e) => {
            log::warn!("{} {:?} failed: {}", kind.noun(), action, e.message);
            toast_error(toasts, failure_message(kind, action, &e));
        }
    }
}
