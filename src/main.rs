use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_proxy::config::{Cli, Command};
use weather_proxy::{mcp, server, OpenWeatherClient, WeatherCache, WeatherService};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_proxy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = dotenv {
        tracing::debug!("No .env file loaded: {}", e);
    }

    let cli = Cli::parse();
    let config = cli.config;
    config.validate().map_err(anyhow::Error::msg)?;

    let client = OpenWeatherClient::new(config.base_url.clone(), config.timeout())
        .context("building upstream HTTP client")?;
    tracing::info!(
        "Upstream {} (cache TTL {}s)",
        client.base_url(),
        config.cache_ttl_secs
    );

    let cache = Arc::new(WeatherCache::new(config.cache_ttl()));
    let service = Arc::new(WeatherService::new(client, cache, config.api_key));

    match cli.command {
        Some(Command::Mcp) => {
            tracing::info!("Starting MCP weather server");
            mcp::serve_stdio(service).await?;
        }
        Some(Command::Serve) | None => server::serve(service, cli.bind).await?,
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}
