use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServiceExt,
    ErrorData as McpError,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::WeatherError;
use crate::models::GetWeatherRequest;
use crate::service::WeatherService;

/// MCP tool server over the same pipeline the HTTP routes use
#[derive(Clone)]
pub struct WeatherTools {
    service: Arc<WeatherService>,
    tool_router: ToolRouter<Self>,
}

impl WeatherTools {
    pub fn new(service: Arc<WeatherService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(format!("Failed to encode result: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

fn to_mcp_error(err: WeatherError) -> McpError {
    match err {
        WeatherError::NotFound { .. } => McpError::invalid_params(err.user_message(), None),
        _ => McpError::internal_error(err.user_message(), None),
    }
}

#[tool_handler]
impl ServerHandler for WeatherTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-proxy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Current weather conditions from OpenWeatherMap with temperature conversions \
                and a short advisory. Reports are cached per city."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl WeatherTools {
    /// Gets the current weather report for a city
    #[tool(description = "Get current weather for a city (e.g. 'London' or 'Paris,FR'). Returns temperatures in Kelvin, Celsius and Fahrenheit plus an advisory. Set use_cache to false to force a fresh upstream read.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather for: {}", request.location);

        let report = self
            .service
            .fetch(&request.location, request.use_cache)
            .await
            .map_err(to_mcp_error)?;

        Self::json_result(&report)
    }

    /// Reports how many cached entries are active or expired
    #[tool(description = "Show cache statistics: total, active and expired entries.")]
    async fn cache_stats(&self) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.service.cache().stats())
    }

    /// Drops every cached report
    #[tool(description = "Clear all cached weather reports.")]
    async fn clear_cache(&self) -> Result<CallToolResult, McpError> {
        self.service.cache().clear();
        Ok(CallToolResult::success(vec![Content::text(
            "Cache cleared successfully",
        )]))
    }
}

/// Runs the tool server on stdin/stdout until the client disconnects.
pub async fn serve_stdio(service: Arc<WeatherService>) -> Result<()> {
    let server = WeatherTools::new(service).serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;
    Ok(())
}
