//! In-process [`TokenBackend`] for tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use cookie::Cookie;
use time::{Duration, OffsetDateTime};

use super::{StorageError, TokenBackend};

/// In-process backend with a cookie jar that honours `Expires` and `Max-Age`.
///
/// `set_disabled(true)` makes every call fail, simulating storage that throws.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RefCell<BTreeMap<String, String>>,
    jar: RefCell<BTreeMap<String, String>>,
    cookie_writes: RefCell<Vec<String>>,
    disabled: Cell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose every operation fails with [`StorageError::Unavailable`].
    pub fn disabled() -> Self {
        let backend = Self::default();
        backend.set_disabled(true);
        backend
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    /// Raw item lookup, bypassing the disabled switch.
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Live cookie value by name.
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.jar.borrow().get(name).cloned()
    }

    /// Live cookies rendered as a request `Cookie` header (`a=1; b=2`).
    pub fn cookie_header(&self) -> Option<String> {
        let jar = self.jar.borrow();
        if jar.is_empty() {
            return None;
        }
        let pairs: Vec<String> = jar.iter().map(|(k, v)| format!("{k}={v}")).collect();
        Some(pairs.join("; "))
    }

    /// Every cookie string applied so far, oldest first.
    pub fn cookie_writes(&self) -> Vec<String> {
        self.cookie_writes.borrow().clone()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.disabled.get() { Err(StorageError::Unavailable) } else { Ok(()) }
    }
}

fn cookie_is_expired(cookie: &Cookie<'_>, now: OffsetDateTime) -> bool {
    if cookie.max_age().is_some_and(|age| age <= Duration::ZERO) {
        return true;
    }
    cookie.expires_datetime().is_some_and(|at| at <= now)
}

impl TokenBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.item(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn set_cookie(&self, cookie: &str) -> Result<(), StorageError> {
        self.check()?;
        let parsed = Cookie::parse(cookie.to_owned()).map_err(|e| StorageError::Access(e.to_string()))?;
        self.cookie_writes.borrow_mut().push(cookie.to_owned());

        let mut jar = self.jar.borrow_mut();
        if cookie_is_expired(&parsed, OffsetDateTime::now_utc()) {
            jar.remove(parsed.name());
        } else {
            jar.insert(parsed.name().to_owned(), parsed.value().to_owned());
        }
        Ok(())
    }
}
