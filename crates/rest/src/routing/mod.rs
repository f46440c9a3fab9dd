//! Route configuration.

pub mod api_routes;
