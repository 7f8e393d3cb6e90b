//! Token store: local storage plus a mirrored session cookie.
//!
//! DESIGN
//! ======
//! `TokenStore` is generic over a [`TokenBackend`] so the same read/write
//! rules run against the browser (`BrowserBackend`) and against an in-memory
//! fake (`MemoryBackend`, only built for tests and the `test-support` feature).
//!
//! ERROR HANDLING
//! ==============
//! Backends report [`StorageError`]; the store logs and swallows every one of
//! them. A failed write never interrupts the caller, and a failed read is the
//! same as "no token".

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(any(test, feature = "test-support"))]
#[path = "memory_backend.rs"]
mod memory_backend;

#[cfg(any(test, feature = "test-support"))]
pub use memory_backend::MemoryBackend;

use cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

/// Local storage key and cookie name shared with the edge gate.
pub const TOKEN_KEY: &str = "portfolio_auth_token";

/// Advisory cookie lifetime, matching the backend token expiry.
pub const COOKIE_TTL: Duration = Duration::days(7);

/// Failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage context exists (server rendering, no `window`, disabled storage).
    #[error("storage unavailable")]
    Unavailable,
    /// The storage API exists but the call was rejected (quota, permissions).
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Raw persistence primitives the token store is built on.
pub trait TokenBackend {
    /// Read a persistent item.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a persistent item.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a persistent item.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Apply a serialized `Set-Cookie`-style string, as `document.cookie = ...` does.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the cookie cannot be written.
    fn set_cookie(&self, cookie: &str) -> Result<(), StorageError>;
}

/// Cookie written on login: whole-site path, lax same-site, expires at `now + 7d`.
pub fn session_cookie(token: &str, now: OffsetDateTime) -> Cookie<'static> {
    Cookie::build((TOKEN_KEY, token.to_owned()))
        .path("/")
        .expires(now + COOKIE_TTL)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie written on logout: same attributes as the session cookie, empty
/// value, epoch expiry.
pub fn expired_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_KEY, ""))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .same_site(SameSite::Lax)
        .build()
}

/// Best-effort bearer-token store over a [`TokenBackend`].
#[derive(Debug, Default, Clone)]
pub struct TokenStore<B> {
    backend: B,
}

impl<B: TokenBackend> TokenStore<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current token, or `None` when absent, empty, or unreadable.
    pub fn get_token(&self) -> Option<String> {
        match self.backend.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::debug!("token read failed: {e}");
                None
            }
        }
    }

    /// Session presence as seen by this store.
    pub fn has_session(&self) -> bool {
        self.get_token().is_some()
    }

    /// Persist `token` and mirror it into the session cookie.
    pub fn set_token(&self, token: &str) {
        self.set_token_at(token, OffsetDateTime::now_utc());
    }

    /// [`Self::set_token`] with an explicit clock reading for the cookie expiry.
    pub fn set_token_at(&self, token: &str, now: OffsetDateTime) {
        if token.is_empty() {
            return;
        }
        if let Err(e) = self.backend.set_item(TOKEN_KEY, token) {
            log::debug!("token write failed: {e}");
        }
        if let Err(e) = self.backend.set_cookie(&session_cookie(token, now).to_string()) {
            log::debug!("session cookie write failed: {e}");
        }
    }

    /// Remove the local copy and expire the cookie. Safe to call repeatedly.
    pub fn clear_token(&self) {
        if let Err(e) = self.backend.remove_item(TOKEN_KEY) {
            log::debug!("token removal failed: {e}");
        }
        if let Err(e) = self.backend.set_cookie(&expired_cookie().to_string()) {
            log::debug!("session cookie expiry failed: {e}");
        }
    }
}

// =============================================================================
// BROWSER BACKEND
// =============================================================================

/// `window.localStorage` + `document.cookie`. Unavailable outside the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserBackend;

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(js_error)?
        .ok_or(StorageError::Unavailable)
}

impl TokenBackend for BrowserBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_cookie(&self, cookie: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(StorageError::Unavailable)?
                .dyn_into::<web_sys::HtmlDocument>()
                .map_err(|_| StorageError::Unavailable)?;
            document.set_cookie(cookie).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cookie;
            Err(StorageError::Unavailable)
        }
    }
}

/// Store bound to the browser backend.
pub const fn browser_store() -> TokenStore<BrowserBackend> {
    TokenStore::new(BrowserBackend)
}

/// Browser token, or `None` outside the browser.
pub fn get_token() -> Option<String> {
    browser_store().get_token()
}

/// Persist a token in the browser (local storage + cookie).
pub fn set_token(token: &str) {
    browser_store().set_token(token);
}

/// Drop the browser token from both locations.
pub fn clear_token() {
    browser_store().clear_token();
}

/// Whether the browser currently holds a token.
pub fn has_session() -> bool {
    browser_store().has_session()
}
