//! Bib List and Detail handlers.
//!
//! `GET [base]/bibs/` and `GET [base]/bibs/{id}`

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

/// Handler for the bib collection.
pub async fn list_bibs_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(filters = params.query.filters.len(), offset = params.query.offset, "Listing bibs");

    let page = state.storage().list_bibs(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/bibs/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "bibs",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// Handler for one bib by record number.
pub async fn get_bib_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(id = %id, "Reading bib");

    match state.storage().get_bib(&id).await? {
        Some(bib) => Ok((StatusCode::OK, Json(bib)).into_response()),
        None => Err(RestError::NotFound {
            resource: "bibs",
            id,
        }),
    }
}
