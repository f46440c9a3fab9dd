//! Authenticated caller extractor.
//!
//! The `apiusers` endpoints are gated: the caller must present an API key
//! that resolves to a registered user. Taking [`Caller`] as a handler
//! argument is what puts a handler behind the gate, so the authentication
//! requirement is visible in the handler signature rather than hidden in
//! ambient middleware state.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use stacks_catalog::ApiUser;
use stacks_persistence::CatalogStorage;
use tracing::debug;

use crate::error::RestError;
use crate::state::AppState;

/// The authenticated caller of a gated endpoint.
///
/// Extraction fails with 403 when the request carries no credentials or the
/// key does not resolve to a user. Credentials are read from
/// `Authorization: Bearer <key>` or `X-Api-Key: <key>`.
#[derive(Debug, Clone)]
pub struct Caller {
    user: ApiUser,
}

impl Caller {
    /// The resolved API user.
    pub fn user(&self) -> &ApiUser {
        &self.user
    }

    /// The caller's username.
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

/// Pulls the API key out of the request headers.
fn api_key_from_headers(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers.get("authorization") {
        let value = value.to_str().ok()?;
        return value.strip_prefix("Bearer ").map(str::trim);
    }
    headers.get("x-api-key").and_then(|v| v.to_str().ok())
}

impl<S> FromRequestParts<AppState<S>> for Caller
where
    S: CatalogStorage + Send + Sync + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let Some(api_key) = api_key_from_headers(&parts.headers) else {
            debug!(path = %parts.uri.path(), "Rejecting request without credentials");
            return Err(RestError::AuthenticationRequired);
        };

        match state.storage().authenticate(api_key).await? {
            Some(user) => {
                debug!(username = %user.username, "Authenticated caller");
                Ok(Caller { user })
            }
            None => {
                debug!(path = %parts.uri.path(), "Rejecting unknown API key");
                Err(RestError::AuthenticationRequired)
            }
        }
    }
}
