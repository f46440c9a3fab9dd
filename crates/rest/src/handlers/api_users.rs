//! API-user List and Detail handlers.
//!
//! `GET [base]/apiusers/` and `GET [base]/apiusers/{username}`
//!
//! Both handlers take a [`Caller`], which is what gates them: extraction
//! rejects the request with 403 before either body runs when the caller's
//! API key is missing or unknown. A Detail 404 for an unknown username is
//! only reachable by an authenticated caller.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use stacks_persistence::CatalogStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{Caller, ListParams};
use crate::responses::collection_envelope;
use crate::state::AppState;

/// Handler for the API-user collection. Gated.
pub async fn list_api_users_handler<S>(
    State(state): State<AppState<S>>,
    caller: Caller,
    params: ListParams,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(caller = %caller.username(), offset = params.query.offset, "Listing API users");

    let page = state.storage().list_api_users(&params.query).await?;
    let envelope = collection_envelope(
        state.base_url(),
        "/apiusers/",
        &params.pairs,
        &page,
        params.query.offset,
        params.query.limit,
        "apiusers",
    );

    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// Handler for one API user by username. Gated.
pub async fn get_api_user_handler<S>(
    State(state): State<AppState<S>>,
    caller: Caller,
    Path(username): Path<String>,
) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!(caller = %caller.username(), username = %username, "Reading API user");

    match state.storage().get_api_user(&username).await? {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => Err(RestError::NotFound {
            resource: "apiusers",
            id: username,
        }),
    }
}
