//! Widget state and the reducer that drives it.
//!
//! `WidgetState::reduce` is pure: network work is requested through the
//! returned [`Effect`] and its result comes back as [`Event::FetchCompleted`].

use chrono::FixedOffset;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    model::WeatherRecord,
    provider::{FetchError, FetchOutcome},
    suggest::filter_suggestions,
    theme::Theme,
    timing::DerivedTiming,
};

/// Identifies one fetch cycle. Issued in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestId(u64);

/// User-facing error shown in place of weather details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("City not found. Please try again.")]
    NotFound,

    #[error("Failed to fetch weather data. Please try again.")]
    FetchFailure,
}

#[derive(Debug)]
pub enum Event {
    /// The text in the search box changed.
    QueryChanged(String),
    /// Enter key or search icon.
    Submit,
    /// A suggestion was clicked; fetches immediately.
    SuggestionPicked(String),
    FetchCompleted {
        request: RequestId,
        result: Result<FetchOutcome, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { request: RequestId, city: String },
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    query: String,
    suggestions: Vec<String>,
    loading: bool,
    error: Option<SearchError>,
    weather: Option<WeatherRecord>,
    timing: Option<DerivedTiming>,

    reference: Vec<String>,
    display_offset: FixedOffset,
    next_request: u64,
    pending: Option<RequestId>,
}

impl WidgetState {
    /// `reference` feeds autocomplete; `display_offset` is used for the
    /// formatted times.
    pub fn new(reference: Vec<String>, display_offset: FixedOffset) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            loading: false,
            error: None,
            weather: None,
            timing: None,
            reference,
            display_offset,
            next_request: 0,
            pending: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<SearchError> {
        self.error
    }

    pub fn weather(&self) -> Option<&WeatherRecord> {
        self.weather.as_ref()
    }

    pub fn timing(&self) -> Option<&DerivedTiming> {
        self.timing.as_ref()
    }

    pub fn theme(&self) -> Theme {
        Theme::for_timing(self.timing.as_ref())
    }

    /// The request whose completion will be applied, if one is in flight.
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn reduce(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::QueryChanged(query) => {
                self.set_query(query);
                None
            }
            Event::Submit => {
                if self.query.is_empty() {
                    return None;
                }
                Some(self.begin_fetch(self.query.clone()))
            }
            Event::SuggestionPicked(city) => {
                self.set_query(city.clone());
                Some(self.begin_fetch(city))
            }
            Event::FetchCompleted { request, result } => {
                if self.pending != Some(request) {
                    debug!(?request, latest = ?self.pending, "discarding stale fetch result");
                    return None;
                }
                self.complete_fetch(result);
                None
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            query: self.query.clone(),
            suggestions: self.suggestions.clone(),
            loading: self.loading,
            error: self.error.map(|e| e.to_string()),
            weather: self.weather.clone(),
            timing: self.timing.clone(),
            theme: self.theme(),
        }
    }

    fn set_query(&mut self, query: String) {
        self.suggestions = filter_suggestions(&query, &self.reference);
        self.query = query;
    }

    fn begin_fetch(&mut self, city: String) -> Effect {
        let request = RequestId(self.next_request);
        self.next_request += 1;
        self.pending = Some(request);
        self.loading = true;

        debug!(?request, %city, "starting fetch cycle");
        Effect::Fetch { request, city }
    }

    fn complete_fetch(&mut self, result: Result<FetchOutcome, FetchError>) {
        match result {
            Ok(FetchOutcome::Found(record)) => {
                info!(city = %record.city, "weather updated");
                self.timing = Some(DerivedTiming::from_record(&record, self.display_offset));
                self.weather = Some(record);
                self.error = None;
            }
            Ok(FetchOutcome::NotFound { code, message }) => {
                info!(%code, ?message, "city not found");
                self.weather = None;
                self.error = Some(SearchError::NotFound);
            }
            Err(err) => {
                warn!(error = %err, "weather fetch failed");
                self.weather = None;
                self.error = Some(SearchError::FetchFailure);
            }
        }

        self.suggestions.clear();
        self.query.clear();
        self.pending = None;
        self.loading = false;
    }
}

/// Read-only view of the state handed to the rendering side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub query: String,
    pub suggestions: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub weather: Option<WeatherRecord>,
    pub timing: Option<DerivedTiming>,
    pub theme: Theme,
}
