//! Weather and soil proxy tests
//!
//! Upstream APIs are mocked with httpmock:
//! - pass-through of the provider JSON
//! - default location when none is given
//! - 500 with an error message on upstream failure
//! - per-client rate limiting (10 per minute)

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header::RETRY_AFTER, Request, StatusCode},
    Router,
};
use httpmock::prelude::*;
use serde_json::{json, Value};
use spectra_backend::{create_app, AppState, Config};
use tower::ServiceExt; // for oneshot

fn app_for(server: &MockServer) -> Router {
    let mut config = Config::default();
    config.weather.api_endpoint = server.base_url();
    config.weather.api_key = "test-key".to_string();
    config.soil.api_endpoint = server.base_url();
    create_app(AppState::new(config))
}

async fn get_from(app: Router, uri: &str, client: [u8; 4]) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .extension(ConnectInfo(SocketAddr::from((client, 40000))))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// ============================================================================
// Weather
// ============================================================================

#[tokio::test]
async fn test_weather_passes_provider_json_through() {
    let server = MockServer::start_async().await;
    let payload = json!({
        "name": "Hyderabad",
        "main": { "temp": 303.15, "humidity": 48 },
        "weather": [{ "main": "Clear", "description": "clear sky" }]
    });

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/weather")
                .query_param("q", "Hyderabad")
                .query_param("appid", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(payload.clone());
        })
        .await;

    let (status, body) = get_from(
        app_for(&server),
        "/api/weather?location=Hyderabad",
        [127, 0, 0, 1],
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_weather_defaults_location() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/weather").query_param("q", "India");
            then.status(200).json_body(json!({ "name": "India" }));
        })
        .await;

    let (status, body) = get_from(app_for(&server), "/api/weather", [127, 0, 0, 1]).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "India");
}

#[tokio::test]
async fn test_weather_upstream_failure_is_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/weather");
            then.status(404).json_body(json!({ "cod": "404", "message": "city not found" }));
        })
        .await;

    let (status, body) = get_from(
        app_for(&server),
        "/api/weather?location=Atlantis",
        [127, 0, 0, 1],
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Error fetching weather data"));
}

#[tokio::test]
async fn test_weather_non_200_success_status_is_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/weather");
            then.status(203).json_body(json!({ "partial": true }));
        })
        .await;

    let (status, body) = get_from(app_for(&server), "/api/weather", [127, 0, 0, 1]).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error fetching weather data: 203 Non Authoritative Information");
}

#[tokio::test]
async fn test_weather_unreachable_upstream_is_server_error() {
    let mut config = Config::default();
    config.weather.api_endpoint = "http://127.0.0.1:9".to_string();
    config.weather.api_key = "test-key".to_string();
    let app = create_app(AppState::new(config));

    let (status, body) = get_from(app, "/api/weather", [127, 0, 0, 1]).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_weather_without_api_key_is_server_error() {
    let server = MockServer::start_async().await;
    let mut config = Config::default();
    config.weather.api_endpoint = server.base_url();
    let app = create_app(AppState::new(config));

    let (status, body) = get_from(app, "/api/weather", [127, 0, 0, 1]).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Configuration error: Weather API key not configured"
    );
}

#[tokio::test]
async fn test_weather_rate_limited_per_client() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/weather");
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;

    let app = app_for(&server);

    for _ in 0..10 {
        let (status, _) = get_from(app.clone(), "/api/weather", [192, 168, 1, 10]).await;
        assert_eq!(status, StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/weather")
                .extension(ConnectInfo(SocketAddr::from(([192, 168, 1, 10], 40000))))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(RETRY_AFTER));

    // Another client still has its full budget
    let (status, _) = get_from(app.clone(), "/api/weather", [192, 168, 1, 11]).await;
    assert_eq!(status, StatusCode::OK);

    // Limited requests never reach the provider
    mock.assert_hits_async(11).await;
}

#[tokio::test]
async fn test_recommendations_not_rate_limited() {
    let server = MockServer::start_async().await;
    let app = app_for(&server);
    let body = json!({
        "crop_type": "Rice",
        "ndvi_value": 0.5,
        "soil_moisture": 30,
        "temperature": 25,
        "humidity": 60
    });

    for _ in 0..15 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/recommendations")
                    .header("Content-Type", "application/json")
                    .extension(ConnectInfo(SocketAddr::from(([192, 168, 1, 20], 40000))))
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

// ============================================================================
// Soil
// ============================================================================

#[tokio::test]
async fn test_soil_passes_provider_json_through() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/properties")
                .query_param("lat", "17.385")
                .query_param("lon", "78.4867");
            then.status(200).json_body(json!({ "properties": { "PHIHOX": 6.4 } }));
        })
        .await;

    let (status, body) = get_from(
        app_for(&server),
        "/api/soil?latitude=17.385&longitude=78.4867",
        [127, 0, 0, 1],
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["properties"]["PHIHOX"], 6.4);
}

#[tokio::test]
async fn test_soil_rejects_out_of_range_coordinates() {
    let server = MockServer::start_async().await;

    let (status, body) = get_from(
        app_for(&server),
        "/api/soil?latitude=95&longitude=78.4",
        [127, 0, 0, 1],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Latitude must be between -90 and 90");
}

#[tokio::test]
async fn test_soil_requires_coordinates() {
    let server = MockServer::start_async().await;

    let (status, body) = get_from(app_for(&server), "/api/soil?latitude=12", [127, 0, 0, 1]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_soil_upstream_failure_is_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/properties");
            then.status(503);
        })
        .await;

    let (status, body) = get_from(
        app_for(&server),
        "/api/soil?latitude=12.9&longitude=77.5",
        [127, 0, 0, 1],
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Error fetching soil data"));
}

#[tokio::test]
async fn test_soil_no_content_is_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/properties");
            then.status(204);
        })
        .await;

    let (status, body) = get_from(
        app_for(&server),
        "/api/soil?latitude=12.9&longitude=77.5",
        [127, 0, 0, 1],
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error fetching soil data: 204 No Content");
}
