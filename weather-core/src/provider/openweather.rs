use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    config::OpenWeatherConfig,
    model::{Condition, WeatherRecord},
};

use super::{FetchError, FetchOutcome, WeatherProvider};

/// The only `cod` value treated as success. Compared as a number: the string
/// `"200"` does not count.
const SUCCESS_CODE: i64 = 200;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, config: &OpenWeatherConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    fn current_url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: Option<i64>,
    main: Option<String>,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

impl TryFrom<OwCurrentResponse> for WeatherRecord {
    type Error = FetchError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let weather = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Parse("payload has no weather entry".to_string()))?;

        Ok(WeatherRecord {
            city: parsed.name,
            condition: Condition {
                id: weather.id,
                main: weather.main,
                description: weather.description,
                icon: weather.icon,
            },
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            sunrise: parsed.sys.sunrise,
            sunset: parsed.sys.sunset,
            observed_at: parsed.dt,
        })
    }
}

/// Classify a response body. The HTTP status is not consulted; the provider
/// reports failures such as unknown cities through `cod` in the body.
pub(crate) fn parse_current(body: &str) -> Result<FetchOutcome, FetchError> {
    let value: Value = serde_json::from_str(body)?;

    let code = value.get("cod");
    if code.and_then(Value::as_i64) != Some(SUCCESS_CODE) {
        let code = match code {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let message = value.get("message").and_then(Value::as_str).map(str::to_string);

        return Ok(FetchOutcome::NotFound { code, message });
    }

    let parsed: OwCurrentResponse = serde_json::from_value(value)?;
    Ok(FetchOutcome::Found(parsed.try_into()?))
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn current_by_city(&self, city: &str) -> Result<FetchOutcome, FetchError> {
        let res = self
            .http
            .get(self.current_url())
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "received current weather response");

        parse_current(&body)
    }
}
