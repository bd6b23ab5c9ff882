//! Integration tests for the `GET /formats` catalog endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: GET /formats returns the full catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn format_catalog_lists_every_category() {
    let app = common::build_test_app();
    let response = get(app, "/formats").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 6);

    let ids: Vec<&str> = categories
        .iter()
        .map(|category| category["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["image", "video", "audio", "document", "spreadsheet", "archive"]
    );

    // Spot-check one category's label and membership.
    let document = categories
        .iter()
        .find(|category| category["id"] == "document")
        .unwrap();
    assert_eq!(document["label"], "Document");
    let extensions = document["extensions"].as_array().unwrap();
    assert!(extensions.iter().any(|ext| ext == "pdf"));
    assert!(extensions.iter().any(|ext| ext == "docx"));
}

// ---------------------------------------------------------------------------
// Test: the flat list agrees with the categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn flat_format_list_matches_category_contents() {
    let app = common::build_test_app();
    let response = get(app, "/formats").await;
    let json = body_json(response).await;

    let formats = json["formats"].as_array().unwrap();
    let per_category: usize = json["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|category| category["extensions"].as_array().unwrap().len())
        .sum();

    assert_eq!(formats.len(), per_category);
    assert!(formats.iter().any(|ext| ext == "mp4"));
    assert!(formats.iter().any(|ext| ext == "zip"));
}
