use serde::{Deserialize, Serialize};

/// Weather condition as reported by the provider (`weather[0]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: Option<i64>,
    pub main: Option<String>,
    pub description: String,
    pub icon: String,
}

impl Condition {
    /// URL of the provider's condition icon.
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}.png", self.icon)
    }
}

/// Parsed result of the last successful fetch.
///
/// Values are passed through as the provider sent them (units are already
/// metric); timestamps are Unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub condition: Condition,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub sunrise: i64,
    pub sunset: i64,
    pub observed_at: i64,
}
