//! OpenWeatherMap current-conditions client.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::constants::USER_AGENT;
use crate::error::WeatherError;
use crate::models::OpenWeatherResponse;

/// Upstream error bodies are truncated to this many bytes.
const MAX_DETAIL_LEN: usize = 500;

/// Thin client for the configured upstream endpoint
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Arc<Client>,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single GET with `q` and `appid`; no retries.
    pub async fn current(
        &self,
        location: &str,
        api_key: &str,
    ) -> Result<OpenWeatherResponse, WeatherError> {
        tracing::info!("Requesting current conditions for '{}'", location);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", location), ("appid", api_key)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::warn!("Upstream does not know '{}'", location);
            return Err(WeatherError::NotFound {
                location: location.to_string(),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!("Upstream request for '{}' failed with {}", location, status);
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                detail: truncate(&body, MAX_DETAIL_LEN).to_string(),
            });
        }

        parse_payload(&body)
            .inspect_err(|e| tracing::warn!("Unusable upstream body for '{}': {}", location, e))
    }
}

/// Only a body that is not a JSON object is rejected; individual fields
/// that do not fit fall back to `None`.
fn parse_payload(body: &str) -> Result<OpenWeatherResponse, WeatherError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| WeatherError::MalformedPayload(e.to_string()))?;
    if !value.is_object() {
        return Err(WeatherError::MalformedPayload("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| WeatherError::MalformedPayload(e.to_string()))
}

fn truncate(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
