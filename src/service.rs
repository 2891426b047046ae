//! Cache-augmented fetch pipeline and payload-to-report transform.

use std::sync::Arc;

use crate::advisory::weather_message;
use crate::cache::WeatherCache;
use crate::convert::{kelvin_to_celsius, kelvin_to_fahrenheit, round_one_decimal};
use crate::error::WeatherError;
use crate::models::{
    Condition, Details, OpenWeatherResponse, Temperature, WeatherInfo, WeatherReport,
};
use crate::provider::OpenWeatherClient;

/// Cache-augmented fetch pipeline shared by both service boundaries
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: OpenWeatherClient,
    cache: Arc<WeatherCache>,
    api_key: Option<String>,
}

impl WeatherService {
    /// Creates a pipeline over an injected cache. A blank key counts as missing.
    pub fn new(
        client: OpenWeatherClient,
        cache: Arc<WeatherCache>,
        api_key: Option<String>,
    ) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("No OpenWeatherMap API key configured; weather requests will fail");
        }

        Self {
            client,
            cache,
            api_key,
        }
    }

    pub fn cache(&self) -> &Arc<WeatherCache> {
        &self.cache
    }

    /// Returns the current report for `location`.
    ///
    /// With `use_cache` a fresh cached report is returned without touching the
    /// upstream. Every successful upstream fetch is written to the cache, even
    /// when `use_cache` is false. Concurrent misses for the same location are
    /// not coalesced; each one calls the upstream and the last write wins.
    pub async fn fetch(
        &self,
        location: &str,
        use_cache: bool,
    ) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::Configuration)?;

        if use_cache {
            if let Some(report) = self.cache.get(location) {
                return Ok(report);
            }
            tracing::debug!("Cache miss for '{}'", location);
        }

        let payload = self.client.current(location, api_key).await?;
        let report = build_report(payload);

        // Written regardless of `use_cache`.
        self.cache.put(location, report.clone());

        Ok(report)
    }
}

/// Maps the raw provider payload onto the stable report shape.
pub fn build_report(payload: OpenWeatherResponse) -> WeatherReport {
    let main = payload.main.unwrap_or_default();
    let weather = payload
        .weather
        .and_then(|list| list.into_iter().next())
        .unwrap_or_default();
    let WeatherInfo {
        main: condition_main,
        description,
        icon,
    } = weather;

    let kelvin = main.temp;
    let celsius = kelvin.map(kelvin_to_celsius);
    let advisory_message =
        celsius.map(|c| weather_message(c, description.as_deref().unwrap_or_default()));

    WeatherReport {
        city: payload.name,
        country: payload.sys.and_then(|sys| sys.country),
        temperature: Temperature {
            kelvin,
            celsius: celsius.map(round_one_decimal),
            fahrenheit: kelvin.map(kelvin_to_fahrenheit).map(round_one_decimal),
        },
        condition: Condition {
            main: condition_main,
            description,
            icon,
        },
        details: Details {
            humidity: main.humidity,
            pressure: main.pressure,
            wind_speed: payload.wind.and_then(|wind| wind.speed),
            cloud_cover: payload.clouds.and_then(|clouds| clouds.all),
        },
        advisory_message,
    }
}
