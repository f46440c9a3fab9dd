//! Collection query extractor.
//!
//! Parses the request query string into a [`ListQuery`] (filters plus row
//! window) using the configured page-size defaults, and keeps the decoded
//! pairs in request order so the envelope builder can reproduce the query
//! in its `self`/`previous`/`next` links.

use axum::{extract::FromRequestParts, http::request::Parts};
use stacks_persistence::{CatalogStorage, ListQuery};
use url::form_urlencoded;

use crate::error::RestError;
use crate::state::AppState;

/// Parsed collection query parameters.
#[derive(Debug, Clone)]
pub struct ListParams {
    /// Decoded query pairs in request order, including `offset`/`limit`.
    pub pairs: Vec<(String, String)>,

    /// The store query: whitelist-checked downstream by the backend.
    pub query: ListQuery,
}

impl<S> FromRequestParts<AppState<S>> for ListParams
where
    S: CatalogStorage + Send + Sync + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let query = ListQuery::from_pairs(
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            state.default_page_size(),
            state.max_page_size(),
        )
        .map_err(|e| RestError::BadRequest {
            message: e.to_string(),
        })?;

        Ok(ListParams { pairs, query })
    }
}
