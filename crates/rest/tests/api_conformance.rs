//! Catalog API conformance tests.
//!
//! Exercises the public contract end to end against a seeded in-memory
//! backend: status codes (200, 400, 403, 404, 405), the root discovery
//! document, the structured JSON error body, the authentication gate, and
//! the bare-array asymmetry of `/callnumbermatches/`.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{TEST_API_KEY, TEST_USERNAME, seeded_server};

#[tokio::test]
async fn root_document_describes_the_api() {
    let server = seeded_server();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["catalogApi"]["version"], "1");

    let links = &body["catalogApi"]["_links"];
    assert_eq!(links["self"]["href"], "https://example.com/api/v1/");
    for collection in [
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
    ] {
        let href = links[collection]["href"]
            .as_str()
            .unwrap_or_else(|| panic!("missing link for {collection}"));
        assert_eq!(href, format!("https://example.com/api/v1/{collection}/"));
    }

    let server_time = &body["serverTime"];
    assert!(server_time["currentTime"].is_string());
    assert_eq!(server_time["timezone"], "America/Chicago");
    assert!(server_time["utcOffset"].is_string());
}

#[tokio::test]
async fn item_detail_hit() {
    let server = seeded_server();

    let response = server.get("/items/450972300486").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let item: Value = response.json();
    assert_eq!(item["id"], "450972300486");
    assert_eq!(item["bibId"], "420911802087");
    assert_eq!(item["callNumber"], "ML410 .B1");
    assert_eq!(item["locationCode"], "w4422");
    assert_eq!(item["suppressed"], false);
}

#[tokio::test]
async fn item_detail_miss_is_structured_404() {
    let server = seeded_server();

    let response = server.get("/items/00000").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["httpStatus"], 404);
    assert_eq!(body["error"], "not_found");
    assert!(body["details"].as_str().unwrap().contains("00000"));
}

#[tokio::test]
async fn bib_and_marc_and_eresource_details() {
    let server = seeded_server();

    let bib: Value = server.get("/bibs/420911802087").await.json();
    assert_eq!(bib["title"], "The Practice of Everyday Life");
    assert_eq!(bib["publicationYear"], 1984);

    let marc: Value = server.get("/marc/420909507305").await.json();
    assert_eq!(marc["fields"][0]["tag"], "245");
    assert_eq!(
        marc["fields"][0]["subfields"][0]["value"],
        "The Practice of Everyday Life"
    );

    let eresource: Value = server.get("/eresources/433792696897").await.json();
    assert_eq!(eresource["resourceType"], "database");
    assert_eq!(eresource["subjects"][0], "Music");
}

#[tokio::test]
async fn code_table_details() {
    let server = seeded_server();

    let location: Value = server.get("/locations/w4422").await.json();
    assert_eq!(location["label"], "Music Library");

    let response = server.get("/locations/a0").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let item_type: Value = server.get("/itemtypes/43").await.json();
    assert_eq!(item_type["label"], "Score");

    let item_status: Value = server.get("/itemstatuses/a").await.json();
    assert_eq!(item_status["label"], "AVAILABLE");

    let response = server.get("/itemstatuses/zz").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn disallowed_verbs_are_405_before_identity_lookup() {
    let server = seeded_server();

    // The record number doesn't exist; the verb must be rejected anyway.
    let response = server.delete("/bibs/000000").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = response.json();
    assert_eq!(body["httpStatus"], 405);
    assert_eq!(body["error"], "method_not_allowed");
    assert!(body["details"].as_str().unwrap().contains("DELETE"));

    let response = server.post("/items/").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let response = server.put("/").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn disallowed_verbs_on_gated_collection_are_405() {
    let server = seeded_server();

    // The verb is rejected whether or not credentials are presented.
    let response = server.post("/apiusers/").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = response.json();
    assert_eq!(body["httpStatus"], 405);
    assert_eq!(body["error"], "method_not_allowed");

    let response = server
        .post("/apiusers/")
        .authorization_bearer(TEST_API_KEY)
        .await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unmatched_paths_are_structured_404s() {
    let server = seeded_server();

    let response = server.get("/borrowers/").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["httpStatus"], 404);
    assert_eq!(body["error"], "no_route");
}

#[tokio::test]
async fn api_users_require_credentials() {
    let server = seeded_server();

    let response = server.get("/apiusers/").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let body: Value = response.json();
    assert_eq!(body["httpStatus"], 403);
    assert_eq!(body["error"], "authentication_required");

    let response = server
        .get(&format!("/apiusers/{TEST_USERNAME}"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_api_key_is_403() {
    let server = seeded_server();

    let response = server
        .get("/apiusers/")
        .authorization_bearer("wrong-key")
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn authenticated_caller_lists_api_users() {
    let server = seeded_server();

    let response = server
        .get("/apiusers/")
        .authorization_bearer(TEST_API_KEY)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["totalCount"], 1);

    let user = &body["_embedded"]["apiusers"][0];
    assert_eq!(user["username"], TEST_USERNAME);
    // The key authenticates the caller; it must never serialize back out.
    assert!(user.get("apiKey").is_none());
    assert!(user.get("api_key").is_none());
}

#[tokio::test]
async fn x_api_key_header_also_authenticates() {
    let server = seeded_server();

    let response = server
        .get(&format!("/apiusers/{TEST_USERNAME}"))
        .add_header("x-api-key", TEST_API_KEY)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let user: Value = response.json();
    assert_eq!(user["username"], TEST_USERNAME);
}

#[tokio::test]
async fn authenticated_miss_on_api_user_detail_is_404() {
    let server = seeded_server();

    let response = server
        .get("/apiusers/nobody")
        .authorization_bearer(TEST_API_KEY)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn call_number_matches_is_a_bare_array() {
    let server = seeded_server();

    let response = server
        .get("/callnumbermatches/")
        .add_query_param("callNumber", "ML")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body.is_array());
    assert_eq!(body[0], "ML410 .B1");
}

#[tokio::test]
async fn call_number_matches_rejects_bad_limit_with_structured_400() {
    let server = seeded_server();

    let response = server
        .get("/callnumbermatches/")
        .add_query_param("callNumber", "ML")
        .add_query_param("limit", "twenty")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["httpStatus"], 400);
    assert_eq!(body["error"], "invalid_parameter");
    assert!(body["details"].as_str().unwrap().contains("limit"));

    let response = server
        .get("/callnumbermatches/")
        .add_query_param("limit", "0")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "invalid_parameter");
}

#[tokio::test]
async fn unknown_filter_field_is_400() {
    let server = seeded_server();

    let response = server
        .get("/items/")
        .add_query_param("shelf", "x")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "invalid_parameter");
}

#[tokio::test]
async fn malformed_offset_is_400() {
    let server = seeded_server();

    let response = server
        .get("/items/")
        .add_query_param("offset", "twenty")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_backend() {
    let server = seeded_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "sqlite");
}
