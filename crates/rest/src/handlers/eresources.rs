//! E-resource List and Detail handlers.
//!
//! `GET [base]/eresources/` and `GET [base]/eresources/{id}`

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

/// Handler for the e-resource collection.
pub async fn list_eresources_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(offset = params.query.offset, "Listing eresources");

    let page = state.storage().list_eresources(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/eresources/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "eresources",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// Handler for one e-resource by record number.
pub async fn get_eresource_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(id = %id, "Reading eresource");

    match state.storage().get_eresource(&id).await? {
        Some(eresource) => Ok((StatusCode::OK, Json(eresource)).into_response()),
        None => Err(RestError::NotFound {
            resource: "eresources",
            id,
        }),
    }
}
