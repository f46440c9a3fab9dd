//! Catalog API route configuration.
//!
//! Every route is exact-match GET. A matched path with any other verb
//! falls through to the method-not-allowed fallback on its MethodRouter
//! (405); an unmatched path falls through to the router fallback (404).

use axum::{Router, routing::get};
use stacks_persistence::CatalogStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all catalog API routes.
///
/// # Routes
///
/// - `GET /` - API root discovery document
/// - `GET /health` - health check
/// - `GET /{collection}/` - List (items, bibs, marc, eresources,
///   locations, itemtypes, itemstatuses, apiusers)
/// - `GET /{collection}/{id}` - Detail
/// - `GET /callnumbermatches/` - bare call-number array
/// - `GET /firstitemperlocation/` - first item per location (envelope)
///
/// The `apiusers` routes are gated by the [`Caller`] extractor inside
/// their handlers.
///
/// [`Caller`]: crate::extractors::Caller
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: CatalogStorage + Send + Sync + 'static,
{
    let mna = handlers::method_not_allowed_handler;

    Router::new()
        .route("/", get(handlers::root_handler::<S>).fallback(mna))
        .route("/health", get(handlers::health_handler::<S>).fallback(mna))
        // Catalog collections
        .route("/items/", get(handlers::list_items_handler::<S>).fallback(mna))
        .route("/items/{id}", get(handlers::get_item_handler::<S>).fallback(mna))
        .route("/bibs/", get(handlers::list_bibs_handler::<S>).fallback(mna))
        .route("/bibs/{id}", get(handlers::get_bib_handler::<S>).fallback(mna))
        .route("/marc/", get(handlers::list_marc_handler::<S>).fallback(mna))
        .route("/marc/{id}", get(handlers::get_marc_handler::<S>).fallback(mna))
        .route(
            "/eresources/",
            get(handlers::list_eresources_handler::<S>).fallback(mna),
        )
        .route(
            "/eresources/{id}",
            get(handlers::get_eresource_handler::<S>).fallback(mna),
        )
        // Code tables
        .route(
            "/locations/",
            get(handlers::list_locations_handler::<S>).fallback(mna),
        )
        .route(
            "/locations/{code}",
            get(handlers::get_location_handler::<S>).fallback(mna),
        )
        .route(
            "/itemtypes/",
            get(handlers::list_item_types_handler::<S>).fallback(mna),
        )
        .route(
            "/itemtypes/{code}",
            get(handlers::get_item_type_handler::<S>).fallback(mna),
        )
        .route(
            "/itemstatuses/",
            get(handlers::list_item_statuses_handler::<S>).fallback(mna),
        )
        .route(
            "/itemstatuses/{code}",
            get(handlers::get_item_status_handler::<S>).fallback(mna),
        )
        // Gated resource
        .route(
            "/apiusers/",
            get(handlers::list_api_users_handler::<S>).fallback(mna),
        )
        .route(
            "/apiusers/{username}",
            get(handlers::get_api_user_handler::<S>).fallback(mna),
        )
        // Call-number aggregates
        .route(
            "/callnumbermatches/",
            get(handlers::call_number_matches_handler::<S>).fallback(mna),
        )
        .route(
            "/firstitemperlocation/",
            get(handlers::first_item_per_location_handler::<S>).fallback(mna),
        )
        // Anything else
        .fallback(handlers::no_route_handler)
        .with_state(state)
}
