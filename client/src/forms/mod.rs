//! Form models and validation for auth and dashboard editors.
//!
//! DESIGN
//! ======
//! Each form is a plain struct of raw input strings. `validate()` returns the
//! request body on success or per-field messages on failure, so pages only
//! bind inputs and render errors.

pub mod auth;
pub mod content;
pub mod rules;

use std::collections::BTreeMap;

/// Validation messages keyed by field name (wire name, e.g. `confirmPassword`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    /// Record `message` when `failed` is true.
    pub fn check(&mut self, failed: bool, field: &'static str, message: &'static str) {
        if failed {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no errors were recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when any field failed.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}
