use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================

// Every field is optional: a missing path, or a value of the wrong JSON type,
// becomes `null` in the report. Integer readings stay `Number` so they are
// echoed exactly as received.

/// Reads any JSON value and keeps it only if it converts to `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenWeatherResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sys: Option<SysData>,
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<MainData>,
    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<Vec<WeatherInfo>>,
    #[serde(default, deserialize_with = "lenient")]
    pub wind: Option<WindData>,
    #[serde(default, deserialize_with = "lenient")]
    pub clouds: Option<CloudData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SysData {
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MainData {
    /// Kelvin
    #[serde(default, deserialize_with = "lenient")]
    pub temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub humidity: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub pressure: Option<Number>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeatherInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindData {
    #[serde(default, deserialize_with = "lenient")]
    pub speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CloudData {
    #[serde(default, deserialize_with = "lenient")]
    pub all: Option<Number>,
}

// ============================================================================
// Proxy Output Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: Option<String>,
    pub country: Option<String>,
    pub temperature: Temperature,
    pub condition: Condition,
    pub details: Details,
    pub advisory_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub kelvin: Option<f64>,
    pub celsius: Option<f64>,
    pub fahrenheit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub main: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub humidity: Option<Number>,
    pub pressure: Option<Number>,
    pub wind_speed: Option<f64>,
    pub cloud_cover: Option<Number>,
}

/// Snapshot of cache occupancy, classified against the TTL at call time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub active_entries: usize,
    pub expired_entries: usize,
    pub ttl_seconds: u64,
}

// ============================================================================
// Boundary Request Models
// ============================================================================

fn default_use_cache() -> bool {
    true
}

/// Query string of `GET /weather/{location}`
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default = "default_use_cache", alias = "useCache")]
    pub use_cache: bool,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// City name, optionally with country code (e.g. "London" or "London,GB")
    pub location: String,
    /// Serve a cached report when one is still fresh (default true)
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}
