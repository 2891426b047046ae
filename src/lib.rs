//! Caching proxy for OpenWeatherMap current conditions.
//!
//! The fetch pipeline (`service`) consults an injected TTL cache, calls the
//! upstream on a miss and turns the raw payload into a `WeatherReport` with
//! converted temperatures and an advisory message. It is exposed over HTTP
//! (`routes`, `server`) and as MCP tools (`mcp`).

pub mod advisory;
pub mod cache;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod mcp;
pub mod models;
pub mod provider;
pub mod routes;
pub mod server;
pub mod service;

pub use cache::WeatherCache;
pub use config::Config;
pub use error::WeatherError;
pub use models::{CacheStats, WeatherReport};
pub use provider::OpenWeatherClient;
pub use service::WeatherService;
