//! HTTP routes of the proxy.
//!
//! Handlers only translate between HTTP and the fetch pipeline; every failure
//! leaves as `{"error": <message>}`, with the status chosen by `WeatherError`
//! or 400 for a query string that does not parse.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::constants::{SERVICE_DESCRIPTION, SERVICE_NAME};
use crate::error::WeatherError;
use crate::models::{CacheStats, WeatherQuery, WeatherReport};
use crate::service::WeatherService;

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error_response(status, self.user_message())
    }
}

pub fn router(service: Arc<WeatherService>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/weather/{location}", get(get_weather))
        .route("/cache/stats", get(cache_stats))
        .route("/cache/clear", delete(cache_clear))
        .with_state(service)
}

async fn service_info() -> Json<Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": SERVICE_DESCRIPTION,
        "endpoints": ["/weather/{city}", "/cache/stats", "/cache/clear"],
    }))
}

async fn get_weather(
    State(service): State<Arc<WeatherService>>,
    Path(location): Path<String>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherReport>, Response> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Rejected query for '{}': {}", location, rejection);
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid query: {}", rejection.body_text()),
        )
    })?;
    tracing::info!("Weather request for '{}' (use_cache={})", location, query.use_cache);

    match service.fetch(&location, query.use_cache).await {
        Ok(report) => Ok(Json(report)),
        Err(err) => {
            tracing::warn!("Weather request for '{}' failed: {}", location, err);
            Err(err.into_response())
        }
    }
}

async fn cache_stats(State(service): State<Arc<WeatherService>>) -> Json<CacheStats> {
    Json(service.cache().stats())
}

async fn cache_clear(State(service): State<Arc<WeatherService>>) -> Json<Value> {
    service.cache().clear();
    Json(json!({ "message": "Cache cleared successfully" }))
}
