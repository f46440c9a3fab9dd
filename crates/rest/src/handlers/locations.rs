//! Location List and Detail handlers.
//!
//! `GET [base]/locations/` and `GET [base]/locations/{code}` - shelving
//! locations, keyed by short code rather than record number.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use stacks_persistence::CatalogStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::ListParams;
use crate::responses::collection_envelope;
use crate::state::AppState;

/// Handler for the location collection.
pub async fn list_locations_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(offset = params.query.offset, "Listing locations");

    let page = state.storage().list_locations(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/locations/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "locations",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// Handler for one location by code.
pub async fn get_location_handler<S>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(code = %code, "Reading location");

    match state.storage().get_location(&code).await? {
        Some(location) => Ok((StatusCode::OK, Json(location)).into_response()),
        None => Err(RestError::NotFound {
            resource: "locations",
            id: code,
        }),
    }
}
