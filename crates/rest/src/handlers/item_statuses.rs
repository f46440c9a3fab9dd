//! Item-status List and Detail handlers.
//!
//! `GET [base]/itemstatuses/` and `GET [base]/itemstatuses/{code}`

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

/// Handler for the item-status collection.
pub async fn list_item_statuses_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(offset = params.query.offset, "Listing item statuses");

    let page = state.storage().list_item_statuses(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/itemstatuses/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "itemstatuses",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// Handler for one item status by code.
pub async fn get_item_status_handler<S>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(code = %code, "Reading item status");

    match state.storage().get_item_status(&code).await? {
        Some(item_status) => Ok((StatusCode::OK, Json(item_status)).into_response()),
        None => Err(RestError::NotFound {
            resource: "itemstatuses",
            id: code,
        }),
    }
}
