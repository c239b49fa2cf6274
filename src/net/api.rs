//! REST helpers for the backend auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: `HttpAuthApi` answers every call with
//! a transport error, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Status and body interpretation lives in the pure `parse_*` functions so
//! it is tested without a network. Callers get `AuthError` values, never
//! panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginRequest, RegisterRequest, Session, UserProfile};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{AuthResponseBody, ErrorBody, ProfileResponseBody};
use crate::config::ClientConfig;
use crate::error::AuthError;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const PROFILE_PATH: &str = "/api/auth/profile";

/// The three auth endpoints this layer talks to. Enables fakes in tests.
#[async_trait(?Send)]
pub trait AuthApi {
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the request fails, the server rejects it,
    /// or the response carries no access token.
    async fn login(&self, request: &LoginRequest) -> Result<Session, AuthError>;

    /// # Errors
    ///
    /// Same failure modes as [`AuthApi::login`].
    async fn register(&self, request: &RegisterRequest) -> Result<Session, AuthError>;

    /// Read the signed-in user's profile with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] on `401`, and other variants for
    /// transport, status, or decode failures.
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, AuthError>;
}

/// `AuthApi` over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base: String,
}

impl HttpAuthApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base, path)
    }
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message)
}

/// Interpret a login/registration response.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_auth_response(status: u16, body: &str) -> Result<Session, AuthError> {
    if !is_success(status) {
        return Err(AuthError::Rejected { status, message: error_message(body) });
    }
    let parsed: AuthResponseBody = serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))?;
    match parsed.access_token.filter(|t| !t.is_empty()) {
        Some(access_token) => Ok(Session { access_token, user: parsed.user }),
        None => Err(AuthError::MissingToken { message: parsed.message }),
    }
}

/// Interpret a profile response. `401` maps to [`AuthError::Unauthorized`].
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_profile_response(status: u16, body: &str) -> Result<UserProfile, AuthError> {
    if status == 401 {
        return Err(AuthError::Unauthorized);
    }
    if !is_success(status) {
        return Err(AuthError::Rejected { status, message: error_message(body) });
    }
    let parsed: ProfileResponseBody = serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))?;
    Ok(parsed.user)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable(url: &str) -> AuthError {
    log::debug!("auth request skipped outside the browser: {url}");
    AuthError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<Session, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| AuthError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
    parse_auth_response(status, &body)
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(LOGIN_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(unavailable(&self.url(LOGIN_PATH)))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(REGISTER_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(unavailable(&self.url(REGISTER_PATH)))
        }
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(PROFILE_PATH))
                .header("Authorization", &bearer(access_token))
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
            parse_profile_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err(unavailable(&self.url(PROFILE_PATH)))
        }
    }
}
