//! Runtime configuration: CLI flags with environment fallbacks.
//!
//! `main` loads an optional `.env` file first, so every setting can come from
//! the command line, the process environment or `.env`, in that order.

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_CACHE_TTL_SECS, DEFAULT_UPSTREAM_TIMEOUT_SECS,
    OPENWEATHER_BASE_URL,
};

#[derive(Debug, Parser)]
#[command(
    name = "weather-proxy",
    version,
    about = "Caching proxy for OpenWeatherMap current conditions"
)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    /// Address the HTTP API listens on
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Serve the same operations as MCP tools over stdio
    Mcp,
}

/// Settings shared by every service boundary
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// OpenWeatherMap API key; requests fail until one is set
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Upstream current-conditions endpoint
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = OPENWEATHER_BASE_URL)]
    pub base_url: String,

    /// Seconds a cached report stays valid
    #[arg(long, env = "CACHE_TTL_SECS", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl_secs: u64,

    /// Upstream request timeout in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = DEFAULT_UPSTREAM_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENWEATHER_BASE_URL.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Collects every problem instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), String> {
        let mut issues: Vec<String> = Vec::new();

        if self.cache_ttl_secs == 0 {
            issues.push("cache TTL must be > 0".into());
        }
        if self.timeout_secs == 0 {
            issues.push("upstream timeout must be > 0".into());
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(format!("base URL must be http(s): {}", self.base_url));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(format!("Invalid config:\n - {}", issues.join("\n - ")))
        }
    }
}
