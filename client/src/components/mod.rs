//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and form controls shared by public and
//! dashboard pages, reading shared state from Leptos context providers.

pub mod editor;
pub mod field;
pub mod footer;
pub mod navbar;
pub mod not_found;
pub mod toaster;
