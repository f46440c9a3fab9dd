//! Item List and Detail handlers.
//!
//! `GET [base]/items/` and `GET [base]/items/{id}`

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

/// Handler for the item collection.
///
/// Supports `field[op]=value` filters (callNumber, barcode, locationCode,
/// itemTypeCode, statusCode, bibId, suppressed and friends) plus
/// `offset`/`limit` windowing. Returns the paginated envelope.
pub async fn list_items_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(filters = params.query.filters.len(), offset = params.query.offset, "Listing items");

    let page = state.storage().list_items(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/items/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "items",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// Handler for one item by record number.
///
/// - `200 OK` - item found, returned bare (no envelope)
/// - `404 Not Found` - no item with that record number
pub async fn get_item_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(id = %id, "Reading item");

    match state.storage().get_item(&id).await? {
        Some(item) => Ok((StatusCode::OK, Json(item)).into_response()),
        None => Err(RestError::NotFound {
            resource: "items",
            id,
        }),
    }
}
