//! Call-number aggregate handlers.
//!
//! Two endpoints derived from the item shelflist rather than a resource
//! table:
//!
//! - `GET [base]/callnumbermatches/` - call numbers matching a prefix,
//!   returned as a bare JSON array (the one deliberately un-enveloped
//!   collection in the API).
//! - `GET [base]/firstitemperlocation/` - the first item on the shelf at
//!   each location, in the standard envelope.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use stacks_persistence::CatalogStorage;
use tracing::debug;
use url::form_urlencoded;

use crate::error::{RestError, RestResult};
use crate::extractors::ListParams;
use crate::responses::collection_envelope;
use crate::state::AppState;

/// Handler for call-number prefix matching.
///
/// Accepts `callNumber` (prefix, empty matches everything) and `limit`.
/// Returns a bare JSON array of call numbers in shelf order. Parameters
/// are parsed by hand so a bad `limit` carries the same structured error
/// body as every other endpoint.
pub async fn call_number_matches_handler<S>(
    State(state): State<AppState<S>>,
    uri: Uri,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    let mut prefix = String::new();
    let mut limit = state.default_page_size();

    let raw = uri.query().unwrap_or("");
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "callNumber" => prefix = value.into_owned(),
            "limit" => {
                let parsed: usize = value.parse().map_err(|_| RestError::BadRequest {
                    message: format!(
                        "invalid value for parameter 'limit': expected a non-negative integer, got '{value}'"
                    ),
                })?;
                if parsed == 0 {
                    return Err(RestError::BadRequest {
                        message: "invalid value for parameter 'limit': limit must be at least 1"
                            .to_string(),
                    });
                }
                limit = parsed.min(state.max_page_size());
            }
            _ => {}
        }
    }

    debug!(prefix = %prefix, limit, "Matching call numbers");

    let matches = state.storage().call_number_matches(&prefix, limit).await?;

    Ok((StatusCode::OK, Json(matches)).into_response())
}

/// Handler for the first item per shelving location.
///
/// Accepts the usual item filters; rows are ordered by location code and
/// the envelope's `totalCount` counts locations, not items.
pub async fn first_item_per_location_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(filters = params.query.filters.len(), "Finding first item per location");

    let page = state.storage().first_item_per_location(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/firstitemperlocation/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "items",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}
