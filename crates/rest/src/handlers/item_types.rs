//! Item-type List and Detail handlers.
//!
//! `GET [base]/itemtypes/` and `GET [base]/itemtypes/{code}`

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

/// Handler for the item-type collection.
pub async fn list_item_types_handler<S>(
    State(state): State<AppState<S>>,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(offset = params.query.offset, "Listing item types");

    let page = state.storage().list_item_types(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/itemtypes/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "itemtypes",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// Handler for one item type by code.
pub async fn get_item_type_handler<S>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(code = %code, "Reading item type");

    match state.storage().get_item_type(&code).await? {
        Some(item_type) => Ok((StatusCode::OK, Json(item_type)).into_response()),
        None => Err(RestError::NotFound {
            resource: "itemtypes",
            id: code,
        }),
    }
}
