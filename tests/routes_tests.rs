// HTTP route tests for Donor Match

use actix_web::{http::StatusCode, test, web, App};
use donor_match::core::DonationTools;
use donor_match::routes::{self, tools::AppState};
use donor_match::services::{FileDataset, InlineDataset};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

fn mock_state() -> AppState {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/mock_data.json");
    AppState {
        tools: DonationTools::new(Arc::new(FileDataset::new(path))),
        top_n: 3,
    }
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = app!(mock_state());
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_find_donors() {
    let app = app!(mock_state());
    let req = test::TestRequest::post()
        .uri("/api/v1/tools/matches")
        .set_json(json!({"recipientId": "R003"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "found");
    assert_eq!(body["data"][0]["donor"]["id"], "D005");
    assert!(body["data"][0]["distance_km"].as_f64().unwrap() >= 0.0);
}

#[actix_web::test]
async fn test_find_donors_not_found() {
    let app = app!(mock_state());
    let req = test::TestRequest::post()
        .uri("/api/v1/tools/matches")
        .set_json(json!({"recipient_id": "R999"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["data"]["kind"], "recipient_not_found");
}

#[actix_web::test]
async fn test_find_donors_invalid_input() {
    let app = app!(mock_state());
    let req = test::TestRequest::post()
        .uri("/api/v1/tools/matches")
        .set_json(json!({"recipientId": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["kind"], "invalid_input");
}

#[actix_web::test]
async fn test_inventory_empty_sentinel() {
    let fixture = r#"{
        "hospitals": [{"id": "H1", "name": "Stocked", "location": {"lat": 1.0, "lon": 1.0},
                       "inventory": {"blood": {"O-": 9}, "organs": {"Heart": 1}}}],
        "donors": [],
        "recipients": []
    }"#;
    let state = AppState {
        tools: DonationTools::new(Arc::new(InlineDataset::new(fixture))),
        top_n: 3,
    };
    let app = app!(state);

    let req = test::TestRequest::get().uri("/api/v1/tools/inventory").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({"status": "empty"}));
}

#[actix_web::test]
async fn test_distance() {
    let app = app!(mock_state());
    let req = test::TestRequest::post()
        .uri("/api/v1/tools/distance")
        .set_json(json!({"loc1": {"lat": 0.0, "lon": 0.0}, "loc2": {"lat": 0.0, "lon": 1.0}}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["distanceKm"].as_f64(), Some(111.32));
}

#[actix_web::test]
async fn test_distance_invalid_location() {
    let app = app!(mock_state());
    let req = test::TestRequest::post()
        .uri("/api/v1/tools/distance")
        .set_json(json!({"loc1": {"lat": 95.0, "lon": 0.0}, "loc2": {"lat": 0.0, "lon": 1.0}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "invalid_location");
}

#[actix_web::test]
async fn test_dashboard_markdown() {
    let app = app!(mock_state());
    let req = test::TestRequest::get()
        .uri("/api/v1/dashboard?format=markdown&topN=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("# Donation Dashboard Report"));
    assert!(text.contains("## Generated Emergency Alerts"));
}

#[actix_web::test]
async fn test_dashboard_json_respects_top_n() {
    let app = app!(mock_state());
    let req = test::TestRequest::get().uri("/api/v1/dashboard?topN=1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 5);
    for entry in matches {
        if entry["top"]["status"] == "found" {
            assert_eq!(entry["top"]["data"].as_array().unwrap().len(), 1);
        }
    }
}

#[actix_web::test]
async fn test_dashboard_rejects_zero_top_n() {
    let app = app!(mock_state());
    let req = test::TestRequest::get().uri("/api/v1/dashboard?topN=0").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
