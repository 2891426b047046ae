//! End-to-end tests of the HTTP routes with a mock upstream.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt as _;

use weather_proxy::routes::router;
use weather_proxy::{OpenWeatherClient, WeatherCache, WeatherService};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> Router {
    let client = OpenWeatherClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let cache = Arc::new(WeatherCache::new(Duration::from_secs(600)));
    router(Arc::new(WeatherService::new(
        client,
        cache,
        Some("test-key".to_string()),
    )))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_get_weather_valid_city() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "London",
            "sys": { "country": "GB" },
            "main": { "temp": 289.5, "humidity": 65, "pressure": 1012 },
            "weather": [{ "main": "Clouds", "description": "few clouds", "icon": "02d" }],
            "wind": { "speed": 3.5 },
            "clouds": { "all": 40 }
        })))
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let (status, body) = send(&app, "GET", "/weather/London").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "city": "London",
            "country": "GB",
            "temperature": { "kelvin": 289.5, "celsius": 16.4, "fahrenheit": 61.4 },
            "condition": { "main": "Clouds", "description": "few clouds", "icon": "02d" },
            "details": { "humidity": 65, "pressure": 1012, "wind_speed": 3.5, "cloud_cover": 40 },
            "advisory_message": "It's cool outside. It's cloudy today."
        })
    );
}

#[tokio::test]
async fn test_get_weather_invalid_city() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let (status, body) = send(&app, "GET", "/weather/Fakeville").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "City 'Fakeville' not found" }));
}

#[tokio::test]
async fn test_upstream_error_is_500_without_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key. secret-ish"))
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);
    let (status, body) = send(&app, "GET", "/weather/London").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Error fetching weather data"));
    assert!(!message.contains("secret-ish"));
}

#[tokio::test]
async fn test_use_cache_query_and_stats() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Oslo",
            "main": { "temp": 268.15 },
            "weather": [{ "description": "light snow" }]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let app = app_for(&mock_server);

    let (status, body) = send(&app, "GET", "/weather/Oslo?use_cache=false").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["advisory_message"],
        "It's freezing! Bundle up well. Watch out for snow and ice!"
    );

    // Served from the entry written by the bypassing read above.
    send(&app, "GET", "/weather/oslo").await;
    // Camel-case spelling is accepted too.
    send(&app, "GET", "/weather/Oslo?useCache=false").await;

    let (_, stats) = send(&app, "GET", "/cache/stats").await;
    assert_eq!(stats["total_entries"], 1);
    assert_eq!(stats["active_entries"], 1);
    assert_eq!(stats["expired_entries"], 0);

    let (status, body) = send(&app, "DELETE", "/cache/clear").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Cache cleared successfully" }));

    let (_, stats) = send(&app, "GET", "/cache/stats").await;
    assert_eq!(stats["total_entries"], 0);
    assert_eq!(stats["active_entries"], 0);
    assert_eq!(stats["expired_entries"], 0);
}
