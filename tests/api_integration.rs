//! Integration tests for the HTTP API.
//!
//! Drives the real router in-process and asserts the full external contract
//! of both endpoints, including the routing-layer behavior for unmatched
//! paths.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use chrono::{NaiveDateTime, Utc};
use tower::ServiceExt;

use stratus::create_router;
use stratus::middleware::REQUEST_ID_HEADER;

async fn get(uri: &str) -> Response {
    create_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn health_is_stateless_across_calls() {
    let app = create_router();

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}

#[tokio::test]
async fn weather_returns_report_for_city() {
    let response = get("/weather/Paris").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["city"], "Paris");
    assert_eq!(json["temperature_c"], 27.3);
    assert_eq!(json["condition"], "Cloudy");
    assert_eq!(json["humidity"], 70);
    assert!(json["time"].is_string());
}

#[tokio::test]
async fn weather_timestamp_is_near_request_time() {
    let response = get("/weather/Reykjavik").await;
    let json = body_json(response).await;

    let time = json["time"].as_str().unwrap();
    let parsed = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S%.f")
        .expect("time parses as ISO-8601 without offset");

    let delta = (Utc::now().naive_utc() - parsed).num_seconds().abs();
    assert!(delta < 5, "timestamp {time} not within tolerance of now");
}

#[tokio::test]
async fn weather_echoes_city_verbatim() {
    for city in ["Oslo", "X", "santiago-de-chile", "J%C3%B6nk%C3%B6ping"] {
        let response = get(&format!("/weather/{city}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        // The routing layer percent-decodes the segment before extraction
        let expected = match city {
            "J%C3%B6nk%C3%B6ping" => "Jönköping",
            other => other,
        };
        assert_eq!(json["city"], expected);
    }
}

#[tokio::test]
async fn weather_decodes_space_in_segment() {
    let response = get("/weather/San%20Francisco").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["city"], "San Francisco");
}

#[tokio::test]
async fn weather_empty_segment_is_not_found() {
    // The route requires a non-empty city segment; an empty one does not
    // match and falls through to the router's default 404.
    let response = get("/weather/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get("/forecast/Paris").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_request_id_header() {
    for uri in ["/health", "/weather/Paris"] {
        let response = get(uri).await;
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("x-request-id header present");
        assert!(uuid::Uuid::parse_str(request_id).is_ok());
    }
}

#[tokio::test]
async fn responses_carry_cache_control() {
    let health = get("/health").await;
    assert_eq!(
        health
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("no-cache")
    );

    let weather = get("/weather/Paris").await;
    assert_eq!(
        weather
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
}
