//! API root discovery document handler.
//!
//! `GET [base]/` returns the entry point for the whole API: the catalog
//! API version, a `_links` table naming every collection, and the server's
//! current time. Computed fresh per request.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, SecondsFormat};
use stacks_persistence::CatalogStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// The catalog API major version advertised in the root document.
pub const CATALOG_API_VERSION: &str = "1";

const COLLECTIONS: &[&str] = &[
    "apiusers",
    "bibs",
    "callnumbermatches",
    "eresources",
    "firstitemperlocation",
    "items",
    "itemstatuses",
    "itemtypes",
    "locations",
    "marc",
];

/// Handler for the API root.
pub async fn root_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: CatalogStorage + Send + Sync + 'static,
{
    debug!("Serving API root document");

    let base = state.base_url();
    let mut links = serde_json::json!({
        "self": { "href": format!("{base}/") },
    });
    for &collection in COLLECTIONS {
        links[collection] = serde_json::json!({ "href": format!("{base}/{collection}/") });
    }

    let now = Local::now();
    let document = serde_json::json!({
        "catalogApi": {
            "version": CATALOG_API_VERSION,
            "_links": links,
        },
        "serverTime": {
            "currentTime": now.to_rfc3339_opts(SecondsFormat::Secs, false),
            "timezone": state.config().timezone,
            "utcOffset": now.format("%:z").to_string(),
        },
    });

    Ok((StatusCode::OK, Json(document)).into_response())
}
