use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::{Config, model::WeatherRecord, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Result of a request that produced a readable payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The payload carried the success code.
    Found(WeatherRecord),

    /// The payload carried any other code, e.g. `"404"` for an unknown city.
    NotFound {
        code: String,
        message: Option<String>,
    },
}

/// The request could not produce a readable payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Transport(String),

    #[error("malformed weather payload: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a city name, one outbound request per call.
    async fn current_by_city(&self, city: &str) -> Result<FetchOutcome, FetchError>;
}

/// Construct the OpenWeather provider from configuration.
///
/// `env_api_key` takes precedence over the key stored in the file.
pub fn provider_from_config(
    config: &Config,
    env_api_key: Option<String>,
) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.resolve_api_key(env_api_key)?;
    OpenWeatherProvider::new(api_key, &config.openweather)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg, None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No OpenWeather API key configured"));
        assert!(msg.contains("Hint: run `weather-search configure`"));
    }

    #[test]
    fn provider_from_config_uses_env_key() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg, Some("ENV_KEY".into()));
        assert!(provider.is_ok());
    }

    #[test]
    fn transport_and_parse_errors_display() {
        let err = FetchError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));

        let err: FetchError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
