//! Errors raised by the fetch pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("OpenWeatherMap API key is not configured")]
    Configuration,

    #[error("City '{location}' not found")]
    NotFound { location: String },

    #[error("upstream returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl WeatherError {
    /// HTTP status the service boundary answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            _ => 500,
        }
    }

    /// Short message safe to hand to proxy clients.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration | Self::NotFound { .. } => self.to_string(),
            Self::Upstream { status, .. } => {
                format!("Error fetching weather data: upstream returned {}", status)
            }
            Self::MalformedPayload(_) => {
                "Error fetching weather data: malformed upstream payload".to_string()
            }
            Self::Network(_) => "Error fetching weather data: upstream unreachable".to_string(),
        }
    }
}
