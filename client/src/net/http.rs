//! HTTP client for the content API.
//!
//! Client-side (hydrate): real requests via `gloo-net`, with the bearer token
//! from the token store attached when present.
//! Server-side (SSR): every request resolves to a normalized error, since
//! content is fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, transport or API, becomes one [`ApiError`] shape
//! (`status`, `message`, `data`). Callers branch on that alone.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Backend used when `PORTFOLIO_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://portfolio-backend-omega-rust.vercel.app/api";

/// Message used when neither the response body nor the transport says anything useful.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unexpected error, please try again.";

/// Normalized failure of any API call.
#[derive(Clone, Debug, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, or `0` when no response arrived.
    pub status: u16,
    /// Human-readable message suitable for a toast.
    pub message: String,
    /// Parsed error body, if the server sent one.
    pub data: Option<Value>,
}

impl ApiError {
    /// Build from whatever is known about a failure.
    ///
    /// The body's `message` wins, then the transport message, then
    /// [`FALLBACK_ERROR_MESSAGE`].
    pub fn normalize(status: Option<u16>, body: Option<Value>, transport: Option<&str>) -> Self {
        let body_message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty());
        let message = body_message
            .or(transport.filter(|m| !m.is_empty()))
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
            .to_owned();
        Self { status: status.unwrap_or(0), message, data: body }
    }

    /// Non-2xx response with an optional JSON body.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let reason = format!("Request failed with status code {status}");
        Self::normalize(Some(status), body, Some(&reason))
    }

    /// No response at all (network error, CORS, request build failure).
    pub fn from_transport(err: impl std::fmt::Display) -> Self {
        Self::normalize(None, None, Some(&err.to_string()))
    }

    /// Client-side failure that never reached the network.
    pub fn local(message: impl Into<String>) -> Self {
        Self { status: 0, message: message.into(), data: None }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Message for display, or `fallback` when the message is blank.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.message.trim().is_empty() { fallback.to_owned() } else { self.message.clone() }
    }
}

/// HTTP verbs used by the content API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Configured API base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("PORTFOLIO_API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
}

/// Absolute URL for an API path such as `/posts`.
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for a token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Accept both `{ "data": T }` and bare `T` success bodies.
pub fn unwrap_payload(mut body: Value) -> Value {
    let has_data = body.get("data").is_some_and(|d| !d.is_null());
    if has_data {
        if let Some(data) = body.as_object_mut().and_then(|m| m.remove("data")) {
            return data;
        }
    }
    body
}

/// Unwrap and deserialize a success body.
///
/// # Errors
///
/// Returns an [`ApiError`] with status `0` when the payload does not match `T`.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(unwrap_payload(body)).map_err(|e| ApiError::local(format!("Unexpected response: {e}")))
}

/// Send a request to the content API and return the raw JSON body.
///
/// Empty success bodies come back as `Value::Null`.
///
/// # Errors
///
/// Returns a normalized [`ApiError`] for transport failures and non-2xx responses.
pub async fn request(method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include);
        let builder = match crate::auth::get_token() {
            Some(token) => builder.header("Authorization", &bearer_header(&token)),
            None => builder,
        };
        let request = match body {
            Some(json) => builder.json(json),
            None => builder.build(),
        }
        .map_err(ApiError::from_transport)?;

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{} {path} failed: {e}", method.as_str());
                return Err(ApiError::from_transport(e));
            }
        };
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let parsed = if text.trim().is_empty() { None } else { serde_json::from_str::<Value>(&text).ok() };

        if response.ok() {
            Ok(parsed.unwrap_or(Value::Null))
        } else {
            log::warn!("{} {path} returned {status}", method.as_str());
            Err(ApiError::from_response(status, parsed))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::local("not available on server"))
    }
}

/// `GET` and decode.
///
/// # Errors
///
/// See [`request`] and [`decode`].
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(request(Method::Get, path, None).await?)
}

/// Serialize `body` and send it with `method`.
///
/// # Errors
///
/// See [`request`].
pub async fn send_json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<Value, ApiError> {
    let json = serde_json::to_value(body).map_err(|e| ApiError::local(e.to_string()))?;
    request(method, path, Some(&json)).await
}
