//! REST API Client
//!
//! Thin wrappers over `gloo-net` requests. Every call attaches the session's
//! bearer token; a 401 response broadcasts `skate:logout` on `window` so the
//! app can drop the session wherever the call was made from.

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsValue;

mod auth;
mod competitions;
mod feedback;
mod people;
mod profile;
mod search;
mod tossies;
mod uploads;

pub use auth::*;
pub use competitions::*;
pub use feedback::*;
pub use people::*;
pub use profile::*;
pub use search::*;
pub use tossies::*;
pub use uploads::*;

/// DOM event fired on `window` when the API rejects the token
pub const LOGOUT_EVENT: &str = "skate:logout";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("your session has expired, please sign in again")]
    Unauthorized,

    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Client bound to one base URL and (optionally) one bearer token
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {path}");
        let response = self.authorize(Request::get(&self.url(path))).send().await?;
        decode(check(response).await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        tracing::debug!("POST {path}");
        let request = self.authorize(Request::post(&self.url(path))).json(body)?;
        decode(check(request.send().await?).await?).await
    }

    /// POST whose response body is ignored
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!("POST {path}");
        let request = self.authorize(Request::post(&self.url(path))).json(body)?;
        check(request.send().await?).await.map(|_| ())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        tracing::debug!("PUT {path}");
        let request = self.authorize(Request::put(&self.url(path))).json(body)?;
        decode(check(request.send().await?).await?).await
    }

    /// Multipart POST; the browser sets the boundary header
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
        tracing::debug!("POST {path} (multipart)");
        let request = self.authorize(Request::post(&self.url(path))).body(JsValue::from(form))?;
        decode(check(request.send().await?).await?).await
    }
}

/// Percent-encode one path segment
pub fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == 401 {
        tracing::warn!("{} rejected the session token", response.url());
        broadcast_logout();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body).unwrap_or_else(|| response.status_text());
        tracing::error!("{} failed: {status} {message}", response.url());
        return Err(ApiError::Http { status, message });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!("failed to decode {}: {e}", response.url());
        ApiError::Decode(e.to_string())
    })
}

/// Human-readable message from an error body (`detail`, `message` or `error`)
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

/// Tell the app the session is gone
pub fn broadcast_logout() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match web_sys::CustomEvent::new(LOGOUT_EVENT) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                tracing::warn!("failed to dispatch {LOGOUT_EVENT}: {e:?}");
            }
        }
        Err(e) => tracing::warn!("failed to create {LOGOUT_EVENT}: {e:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_keys() {
        assert_eq!(server_message(r#"{"detail": "Competition not found"}"#).as_deref(), Some("Competition not found"));
        assert_eq!(server_message(r#"{"error": "bad credential"}"#).as_deref(), Some("bad credential"));
        assert_eq!(server_message(r#"{"detail": "  "}"#), None);
        assert_eq!(server_message("<html>502</html>"), None);
    }

    #[test]
    fn test_urls_and_segments() {
        let api = ApiClient::new("https://api.example.org/api/", None);
        assert_eq!(api.url("/skaters/4"), "https://api.example.org/api/skaters/4");
        assert!(!api.is_authenticated());
        assert_eq!(segment("nqs 2/a"), "nqs%202%2Fa");
        assert_eq!(segment("ice-queen"), "ice-queen");
    }
}
