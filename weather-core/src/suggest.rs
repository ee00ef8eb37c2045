//! Local autocomplete over a fixed list of city names.
//!
//! Suggestions never come from the weather provider; they are a pure function
//! of the typed query and the reference list.

/// Reference list used when the configuration doesn't override it.
pub const DEFAULT_CITIES: [&str; 8] = [
    "London",
    "Paris",
    "New York",
    "Tokyo",
    "Berlin",
    "Sydney",
    "Moscow",
    "Los Angeles",
];

/// Return every reference entry containing `query`, ignoring case.
///
/// An empty query yields no suggestions rather than the whole list. Results
/// keep reference order; there is no ranking.
pub fn filter_suggestions<S: AsRef<str>>(query: &str, reference: &[S]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    reference
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

/// Owned copy of [`DEFAULT_CITIES`].
pub fn default_cities() -> Vec<String> {
    DEFAULT_CITIES.iter().map(|c| c.to_string()).collect()
}
