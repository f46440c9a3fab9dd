//! MARC List and Detail handlers.
//!
//! `GET [base]/marc/` and `GET [base]/marc/{id}` - the MARC rendition of a
//! bib, keyed by the owning bib's record number. MARC field content lives
//! in an opaque JSON document, so only `id` is filterable.

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

/// Handler for the MARC collection.
pub async fn list_marc_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(offset = params.query.offset, "Listing MARC records");

    let page = state.storage().list_marc(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/marc/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "marc",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// Handler for one MARC record by bib record number.
pub async fn get_marc_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(id = %id, "Reading MARC record");

    match state.storage().get_marc(&id).await? {
        Some(record) => Ok((StatusCode::OK, Json(record)).into_response()),
        None => Err(RestError::NotFound {
            resource: "marc",
            id,
        }),
    }
}
