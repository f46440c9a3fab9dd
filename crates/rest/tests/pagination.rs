//! Collection envelope and pagination tests.
//!
//! Walks the paginated envelope across windows of a 45-item collection:
//! totals, inclusive row indexes, the presence rules for
//! `previous`/`next`, and the percent-encoded reproduction of filter
//! parameters in every link.

mod common;

use axum::http::StatusCode;
use serde_json::Value;
use stacks_catalog::Item;
use stacks_persistence::backends::sqlite::SqliteBackend;

use common::{TEST_BASE_URL, build_server, empty_backend};

/// Seeds `count` items across two locations with ascending call numbers.
fn backend_with_items(count: usize) -> SqliteBackend {
    let backend = empty_backend();
    for n in 0..count {
        let location = if n % 2 == 0 { "w4422" } else { "czm" };
        backend
            .insert_item(&Item {
                id: format!("4509723{n:05}"),
                bib_id: "420911802087".to_string(),
                call_number: Some(format!("ML410 .B{n:03}")),
                barcode: Some(format!("10020{n:05}")),
                location_code: Some(location.to_string()),
                item_type_code: Some("43".to_string()),
                status_code: Some("a".to_string()),
                copy_number: Some(1),
                suppressed: false,
            })
            .expect("Failed to seed item");
    }
    backend
}

#[tokio::test]
async fn first_window_of_a_collection() {
    let server = build_server(backend_with_items(45));

    let response = server.get("/items/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["totalCount"], 45);
    assert_eq!(body["startRow"], 0);
    assert_eq!(body["endRow"], 19);
    assert_eq!(body["_embedded"]["items"].as_array().unwrap().len(), 20);

    let links = &body["_links"];
    assert_eq!(links["self"]["href"], format!("{TEST_BASE_URL}/items/"));
    assert!(links.get("previous").is_none());
    assert_eq!(
        links["next"]["href"],
        format!("{TEST_BASE_URL}/items/?offset=20")
    );
}

#[tokio::test]
async fn middle_window_links_both_neighbors() {
    let server = build_server(backend_with_items(45));

    let body: Value = server
        .get("/items/")
        .add_query_param("offset", "20")
        .await
        .json();

    assert_eq!(body["startRow"], 20);
    assert_eq!(body["endRow"], 39);
    // previous carries an explicit offset=0
    assert_eq!(
        body["_links"]["previous"]["href"],
        format!("{TEST_BASE_URL}/items/?offset=0")
    );
    assert_eq!(
        body["_links"]["next"]["href"],
        format!("{TEST_BASE_URL}/items/?offset=40")
    );
}

#[tokio::test]
async fn final_window_has_no_next() {
    let server = build_server(backend_with_items(45));

    let body: Value = server
        .get("/items/")
        .add_query_param("offset", "40")
        .await
        .json();

    assert_eq!(body["startRow"], 40);
    assert_eq!(body["endRow"], 44);
    assert_eq!(body["_embedded"]["items"].as_array().unwrap().len(), 5);
    assert!(body["_links"].get("next").is_none());
    assert_eq!(
        body["_links"]["previous"]["href"],
        format!("{TEST_BASE_URL}/items/?offset=20")
    );
}

#[tokio::test]
async fn filters_survive_in_links_percent_encoded() {
    let server = build_server(backend_with_items(45));

    let body: Value = server
        .get("/items/")
        .add_query_param("callNumber[matches]", "^ML")
        .add_query_param("offset", "20")
        .await
        .json();

    assert_eq!(body["totalCount"], 45);
    assert_eq!(
        body["_links"]["self"]["href"],
        format!("{TEST_BASE_URL}/items/?callNumber%5Bmatches%5D=%5EML&offset=20")
    );
    assert_eq!(
        body["_links"]["previous"]["href"],
        format!("{TEST_BASE_URL}/items/?callNumber%5Bmatches%5D=%5EML&offset=0")
    );
    assert_eq!(
        body["_links"]["next"]["href"],
        format!("{TEST_BASE_URL}/items/?callNumber%5Bmatches%5D=%5EML&offset=40")
    );
}

#[tokio::test]
async fn limit_changes_the_window_size() {
    let server = build_server(backend_with_items(45));

    let body: Value = server
        .get("/items/")
        .add_query_param("limit", "10")
        .await
        .json();

    assert_eq!(body["endRow"], 9);
    assert_eq!(body["_embedded"]["items"].as_array().unwrap().len(), 10);
    assert_eq!(
        body["_links"]["next"]["href"],
        format!("{TEST_BASE_URL}/items/?limit=10&offset=10")
    );
}

#[tokio::test]
async fn oversized_limit_is_clamped() {
    let server = build_server(backend_with_items(45));

    // Test config caps the page size at 100; 5000 must not blow past it.
    let body: Value = server
        .get("/items/")
        .add_query_param("limit", "5000")
        .await
        .json();

    assert_eq!(body["totalCount"], 45);
    assert_eq!(body["endRow"], 44);
    assert!(body["_links"].get("next").is_none());
}

#[tokio::test]
async fn empty_collection_reports_end_row_minus_one() {
    let server = build_server(empty_backend());

    let body: Value = server.get("/items/").await.json();
    assert_eq!(body["totalCount"], 0);
    assert_eq!(body["startRow"], 0);
    assert_eq!(body["endRow"], -1);
    assert_eq!(body["_embedded"]["items"], serde_json::json!([]));
    assert!(body["_links"].get("previous").is_none());
    assert!(body["_links"].get("next").is_none());
}

#[tokio::test]
async fn filtered_window_counts_only_matches() {
    let server = build_server(backend_with_items(45));

    let body: Value = server
        .get("/items/")
        .add_query_param("locationCode", "czm")
        .await
        .json();

    // Odd-numbered items live at czm.
    assert_eq!(body["totalCount"], 22);
    let rows = body["_embedded"]["items"].as_array().unwrap();
    assert!(rows.iter().all(|i| i["locationCode"] == "czm"));
}

#[tokio::test]
async fn first_item_per_location_envelope() {
    let server = build_server(backend_with_items(45));

    let body: Value = server.get("/firstitemperlocation/").await.json();

    // Two locations seeded; total counts locations, not items.
    assert_eq!(body["totalCount"], 2);
    let rows = body["_embedded"]["items"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    // Rows come back in location-code order with each shelf's leader.
    assert_eq!(rows[0]["locationCode"], "czm");
    assert_eq!(rows[0]["callNumber"], "ML410 .B001");
    assert_eq!(rows[1]["locationCode"], "w4422");
    assert_eq!(rows[1]["callNumber"], "ML410 .B000");
}
