//! Common test utilities for catalog API testing.
//!
//! Provides a seeded in-memory backend and a TestServer wired the same way
//! the production binary wires the app.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use stacks_catalog::{
    ApiUser, Bib, EResource, Item, ItemStatus, ItemType, Location, MarcField, MarcRecord,
    MarcSubfield,
};
use stacks_persistence::backends::sqlite::SqliteBackend;
use stacks_rest::{AppState, ServerConfig};

/// API key registered for the seeded test user.
pub const TEST_API_KEY: &str = "s00persekrit";

/// Username of the seeded API user.
pub const TEST_USERNAME: &str = "catalog-batch";

/// Base URL the test config advertises; envelope links start with this.
pub const TEST_BASE_URL: &str = "https://example.com/api/v1";

/// Builds a TestServer over the given backend with the test configuration.
pub fn build_server(backend: SqliteBackend) -> TestServer {
    let config = ServerConfig::for_testing();
    let state = AppState::new(Arc::new(backend), config);
    let app = stacks_rest::routing::api_routes::create_routes(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// An empty in-memory backend with the schema applied.
pub fn empty_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    backend
}

/// An in-memory backend seeded with the standard catalog fixtures.
pub fn seeded_backend() -> SqliteBackend {
    let backend = empty_backend();

    backend
        .insert_bib(&Bib {
            id: "420911802087".to_string(),
            title: "The Practice of Everyday Life".to_string(),
            author: Some("Certeau, Michel de".to_string()),
            publication_year: Some(1984),
            material_type: Some("book".to_string()),
            call_number: Some("ML410 .B1".to_string()),
            suppressed: false,
        })
        .expect("Failed to seed bib");

    backend
        .insert_item(&Item {
            id: "450972300486".to_string(),
            bib_id: "420911802087".to_string(),
            call_number: Some("ML410 .B1".to_string()),
            barcode: Some("1002077657".to_string()),
            location_code: Some("w4422".to_string()),
            item_type_code: Some("43".to_string()),
            status_code: Some("a".to_string()),
            copy_number: Some(1),
            suppressed: false,
        })
        .expect("Failed to seed item");

    backend
        .insert_marc(&MarcRecord {
            id: "420909507305".to_string(),
            leader: Some("01142cam  2200301 a 4500".to_string()),
            fields: vec![MarcField {
                tag: "245".to_string(),
                value: None,
                indicator1: Some("1".to_string()),
                indicator2: Some("4".to_string()),
                subfields: vec![MarcSubfield {
                    code: "a".to_string(),
                    value: "The Practice of Everyday Life".to_string(),
                }],
            }],
        })
        .expect("Failed to seed MARC record");

    backend
        .insert_eresource(&EResource {
            id: "433792696897".to_string(),
            title: "Music Online Reference".to_string(),
            resource_type: Some("database".to_string()),
            publisher: Some("Alexander Street Press".to_string()),
            subjects: vec!["Music".to_string()],
            holdings_count: Some(3),
        })
        .expect("Failed to seed eresource");

    backend
        .insert_location(&Location {
            code: "w4422".to_string(),
            label: "Music Library".to_string(),
        })
        .expect("Failed to seed location");

    backend
        .insert_item_type(&ItemType {
            code: "43".to_string(),
            label: "Score".to_string(),
        })
        .expect("Failed to seed item type");

    backend
        .insert_item_status(&ItemStatus {
            code: "a".to_string(),
            label: "AVAILABLE".to_string(),
        })
        .expect("Failed to seed item status");

    backend
        .insert_api_user(
            &ApiUser {
                username: TEST_USERNAME.to_string(),
                permissions: vec!["read".to_string()],
            },
            TEST_API_KEY,
        )
        .expect("Failed to seed API user");

    backend
}

/// A TestServer over the standard seeded backend.
pub fn seeded_server() -> TestServer {
    build_server(seeded_backend())
}
