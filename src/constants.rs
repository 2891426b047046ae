/// User agent string for upstream HTTP requests
pub const USER_AGENT: &str = concat!("weather-proxy/", env!("CARGO_PKG_VERSION"));

/// OpenWeatherMap current-conditions endpoint
pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// How long a cached report stays valid, in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Upper bound for a single upstream round trip, in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Listen address for the HTTP boundary
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub const SERVICE_NAME: &str = "Weather Proxy API";

pub const SERVICE_DESCRIPTION: &str =
    "A proxy API for OpenWeatherMap with caching and custom messages";
