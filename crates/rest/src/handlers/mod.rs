//! HTTP request handlers for the catalog API.
//!
//! One module per resource, each with a List and a Detail handler, plus:
//!
//! - [`root`] - API root discovery document
//! - [`call_numbers`] - call-number aggregates (`/callnumbermatches/`,
//!   `/firstitemperlocation/`)
//! - [`health`] - health check endpoint
//! - [`fallback`] - 404 (no route) and 405 (wrong verb) terminal handlers

pub mod api_users;
pub mod bibs;
pub mod call_numbers;
pub mod eresources;
pub mod fallback;
pub mod health;
pub mod item_statuses;
pub mod item_types;
pub mod items;
pub mod locations;
pub mod marc;
pub mod root;

// Re-export handlers for convenience
pub use api_users::{get_api_user_handler, list_api_users_handler};
pub use bibs::{get_bib_handler, list_bibs_handler};
pub use call_numbers::{call_number_matches_handler, first_item_per_location_handler};
pub use eresources::{get_eresource_handler, list_eresources_handler};
pub use fallback::{method_not_allowed_handler, no_route_handler};
pub use health::health_handler;
pub use item_statuses::{get_item_status_handler, list_item_statuses_handler};
pub use item_types::{get_item_type_handler, list_item_types_handler};
pub use items::{get_item_handler, list_items_handler};
pub use locations::{get_location_handler, list_locations_handler};
pub use marc::{get_marc_handler, list_marc_handler};
pub use root::root_handler;
