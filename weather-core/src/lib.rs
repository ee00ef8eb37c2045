//! Core library for the `weather-search` widget.
//!
//! This crate defines:
//! - Local city autocomplete
//! - The OpenWeather current-conditions client
//! - Widget state, its reducer and the session event loop
//! - Day/night timing and theming
//!
//! It is used by `weather-search-cli`, but any front end can drive a
//! [`Session`] and render its [`Snapshot`]s.

pub mod config;
pub mod model;
pub mod provider;
pub mod session;
pub mod state;
pub mod suggest;
pub mod theme;
pub mod timing;

pub use config::{API_KEY_ENV, Config, OpenWeatherConfig};
pub use model::{Condition, WeatherRecord};
pub use provider::{
    FetchError, FetchOutcome, WeatherProvider, openweather::OpenWeatherProvider,
    provider_from_config,
};
pub use session::Session;
pub use state::{Effect, Event, RequestId, SearchError, Snapshot, WidgetState};
pub use suggest::{DEFAULT_CITIES, default_cities, filter_suggestions};
pub use theme::{Phase, Theme};
pub use timing::{DerivedTiming, format_time_of_day, is_daytime};
