//! # HTTP Integration Tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`, using the bundled
//! table in `data/` and assets in `static/`.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use momento_mori::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let data = LifeData::from_csv("data/life_expectancy.csv").expect("Failed to load bundled CSV");
    let table = LifeTable::builder()
        .data(data)
        .build()
        .expect("Failed to build LifeTable");
    router(AppState::new(table), "static")
}

async fn get(uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    let json = serde_json::from_str(&body).unwrap_or_else(|e| panic!("{uri}: {e}: {body}"));
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], momento_mori::VERSION);
}

#[tokio::test]
async fn test_homepage() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Momento Mori"));
    assert!(body.contains("Anti-Procrastination App"));
}

#[tokio::test]
async fn test_api_valid_input() {
    let (status, json) = get_json("/api/v1/life-expectancy?age=25&gender=female").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["age"], 25);
    assert_eq!(json["gender"], "female");

    let result: LookupResult = serde_json::from_value(json).unwrap();
    assert!(result.years_remaining > 0.0);
}

#[tokio::test]
async fn test_api_matches_table_row() {
    let data = LifeData::from_csv("data/life_expectancy.csv").unwrap();
    let table = LifeTable::builder().data(data).build().unwrap();

    let (_, json) = get_json("/api/v1/life-expectancy?age=25&gender=female").await;
    let result: LookupResult = serde_json::from_value(json).unwrap();
    assert_eq!(
        result.years_remaining,
        table.value_at(25, Gender::Female).unwrap()
    );
}

#[tokio::test]
async fn test_api_young_person() {
    let (status, json) = get_json("/api/v1/life-expectancy?age=20&gender=male").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["years_remaining"].as_f64().unwrap() > 50.0);
}

#[tokio::test]
async fn test_api_old_person() {
    let (status, json) = get_json("/api/v1/life-expectancy?age=100&gender=male").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["years_remaining"].as_f64().unwrap() < 10.0);
}

#[tokio::test]
async fn test_api_validation_errors() {
    let cases = [
        "/api/v1/life-expectancy?age=-5&gender=male",
        "/api/v1/life-expectancy?age=200&gender=female",
        "/api/v1/life-expectancy?age=25&gender=other",
        "/api/v1/life-expectancy?age=abc&gender=male",
        "/api/v1/life-expectancy?gender=male",
        "/api/v1/life-expectancy",
    ];
    for uri in cases {
        let (status, json) = get_json(uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert!(json["detail"].is_array(), "{uri}");
    }
}

#[tokio::test]
async fn test_api_missing_parameters_lists_both() {
    let (_, json) = get_json("/api/v1/life-expectancy").await;
    let fields: Vec<&str> = json["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["age", "gender"]);
}

#[tokio::test]
async fn test_api_age_beyond_table_is_server_error() {
    // Bundled table covers 0..=119; 121 is inside the declared bounds
    let (status, json) = get_json("/api/v1/life-expectancy?age=121&gender=male").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["detail"].as_str().unwrap().contains("exceeds available data"));
}

#[tokio::test]
async fn test_page_valid_input() {
    let (status, body) = get("/expectancy?age=25&gender=female").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("years left"));
    assert!(body.contains("death-") || body.contains("time-gentle"));
}

#[tokio::test]
async fn test_page_imagery_follows_years() {
    // Age 100 has under 5 years left in the bundled table
    let (status, body) = get("/expectancy?age=100&gender=male").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/static/images/death-severe.svg"));

    let (_, body) = get("/expectancy?age=20&gender=male").await;
    assert!(body.contains("/static/images/time-gentle.svg"));
}

#[tokio::test]
async fn test_page_too_old() {
    let (status, body) = get("/expectancy?age=150&gender=male").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Ambassadors"));
    assert!(!body.contains("years left"));
}

#[tokio::test]
async fn test_page_huge_age_is_too_old() {
    let (status, body) = get("/expectancy?age=100000000000000000000&gender=female").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Ambassadors"));
}

#[tokio::test]
async fn test_page_age_within_ceiling_beyond_table_is_server_error() {
    // 120..=122 pass the ceiling check, so they reach the 120-row table
    for age in [120, 121, 122] {
        let (status, json) = get_json(&format!("/expectancy?age={age}&gender=male")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "age {age}");
        assert!(json["detail"].as_str().unwrap().contains("exceeds available data"));
    }
}

#[tokio::test]
async fn test_repeated_query_key_keeps_last_value() {
    let (status, json) = get_json("/api/v1/life-expectancy?age=25&age=30&gender=male").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["age"], 30);
    assert_eq!(json["gender"], "male");

    let (status, body) = get("/expectancy?age=30&gender=robot&gender=female").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("years left"));

    // The last value is the one validated
    let (status, json) = get_json("/api/v1/life-expectancy?age=25&age=abc&gender=male").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["detail"][0]["field"], "age");
}

#[tokio::test]
async fn test_page_validation_errors() {
    for uri in [
        "/expectancy?age=-1&gender=female",
        "/expectancy?age=30&gender=robot",
        "/expectancy?age=30",
    ] {
        let (status, _) = get(uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}

#[tokio::test]
async fn test_static_assets_served() {
    let (status, body) = get("/static/css/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("body"));

    for bucket in [
        ImageBucket::Gentle,
        ImageBucket::Mild,
        ImageBucket::Moderate,
        ImageBucket::Severe,
    ] {
        let (status, _) = get(&bucket.url()).await;
        assert_eq!(status, StatusCode::OK, "{}", bucket.url());
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get("/api/v2/life-expectancy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
