//! Day/night classification and time-of-day formatting.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::model::WeatherRecord;

/// Values derived from a [`WeatherRecord`]; never mutated on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTiming {
    pub is_daytime: bool,
    pub local_time: String,
    pub sunrise_time: String,
    pub sunset_time: String,
}

impl DerivedTiming {
    pub fn from_record(record: &WeatherRecord, offset: FixedOffset) -> Self {
        Self {
            is_daytime: is_daytime(record.observed_at, record.sunrise, record.sunset),
            local_time: format_time_of_day(record.observed_at, offset),
            sunrise_time: format_time_of_day(record.sunrise, offset),
            sunset_time: format_time_of_day(record.sunset, offset),
        }
    }
}

/// `true` when `observed` lies within `[sunrise, sunset]`, both ends included.
pub fn is_daytime(observed: i64, sunrise: i64, sunset: i64) -> bool {
    observed >= sunrise && observed <= sunset
}

/// Format a Unix timestamp as a 12-hour wall clock time, e.g. `7:05:09 PM`.
pub fn format_time_of_day(ts: i64, offset: FixedOffset) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(utc) => utc.with_timezone(&offset).format("%-I:%M:%S %p").to_string(),
        None => String::from("--:--:--"),
    }
}
