mod common;

use common::TestApp;
use mongodb::bson::doc;
use reqwest::{Client, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_provider_returns_201_and_persists() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/providers", app.address))
        .json(&json!({
            "provider_id": "iso_001",
            "name": "ISO Insurance",
            "price": 450,
            "website_link": "https://www.isoa.org"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["provider_id"], "iso_001");
    assert_eq!(body["name"], "ISO Insurance");
    assert_eq!(body["price"].as_f64(), Some(450.0));
    assert_eq!(body["website_link"], "https://www.isoa.org");
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());

    let stored = app
        .db
        .find_by_id("iso_001")
        .await
        .expect("Failed to query database")
        .expect("Provider not found in database");
    assert_eq!(stored.name, "ISO Insurance");
    assert_eq!(stored.price, 450.0);
    assert_eq!(stored.website_link, "https://www.isoa.org");

    app.cleanup().await;
}

#[tokio::test]
async fn create_provider_with_missing_field_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/providers", app.address))
        .json(&json!({
            "provider_id": "x1",
            "name": "X",
            "price": 100
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "All fields are required");

    let count = app
        .db
        .providers()
        .count_documents(doc! {}, None)
        .await
        .expect("Failed to count providers");
    assert_eq!(count, 0);

    app.cleanup().await;
}

#[tokio::test]
async fn create_provider_with_negative_price_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/providers", app.address))
        .json(&json!({
            "provider_id": "x1",
            "name": "X",
            "price": -5,
            "website_link": "http://x"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Price must be a positive number");

    app.cleanup().await;
}

#[tokio::test]
async fn create_provider_with_non_numeric_price_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/providers", app.address))
        .json(&json!({
            "provider_id": "x1",
            "name": "X",
            "price": "cheap",
            "website_link": "http://x"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].is_string());

    app.cleanup().await;
}

#[tokio::test]
async fn create_duplicate_provider_id_returns_400_and_keeps_original() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    app.create_provider(&client, "sg_002", "Student Guard", 600.0)
        .await;

    let response = client
        .post(format!("{}/providers", app.address))
        .json(&json!({
            "provider_id": "sg_002",
            "name": "Impostor Guard",
            "price": 1,
            "website_link": "https://www.impostor.example"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Provider ID already exists");

    // The original record is untouched and remains the only one
    let stored = app
        .db
        .find_by_id("sg_002")
        .await
        .expect("Failed to query database")
        .expect("Provider not found in database");
    assert_eq!(stored.name, "Student Guard");
    assert_eq!(stored.price, 600.0);

    let count = app
        .db
        .providers()
        .count_documents(doc! {}, None)
        .await
        .expect("Failed to count providers");
    assert_eq!(count, 1);

    app.cleanup().await;
}

#[tokio::test]
async fn get_provider_returns_created_record() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    app.create_provider(&client, "icp_003", "International Care Plus", 550.0)
        .await;

    let response = client
        .get(format!("{}/providers/icp_003", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["provider_id"], "icp_003");
    assert_eq!(body["name"], "International Care Plus");
    assert_eq!(body["price"].as_f64(), Some(550.0));

    app.cleanup().await;
}

#[tokio::test]
async fn get_unknown_provider_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/providers/nope_000", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Provider not found");

    app.cleanup().await;
}

#[tokio::test]
async fn delete_provider_removes_record() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    app.create_provider(&client, "chs_004", "Campus Health Shield", 480.0)
        .await;

    let response = client
        .delete(format!("{}/providers/chs_004", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Provider deleted successfully");

    let follow_up = client
        .get(format!("{}/providers/chs_004", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NOT_FOUND, follow_up.status());

    app.cleanup().await;
}

#[tokio::test]
async fn delete_unknown_provider_returns_404_without_mutation() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    app.create_provider(&client, "gsi_005", "Global Student Insurance", 520.0)
        .await;

    let response = client
        .delete(format!("{}/providers/nope_000", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Provider not found");

    let count = app
        .db
        .providers()
        .count_documents(doc! {}, None)
        .await
        .expect("Failed to count providers");
    assert_eq!(count, 1);

    app.cleanup().await;
}
