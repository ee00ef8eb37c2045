use inquire::{
    CustomUserError,
    autocompletion::{Autocomplete, Replacement},
};
use weather_search_core::filter_suggestions;

/// Autocompletes city names from the configured reference list.
#[derive(Debug, Clone)]
pub struct CityCompleter {
    cities: Vec<String>,
}

impl CityCompleter {
    pub fn new(cities: Vec<String>) -> Self {
        Self { cities }
    }
}

impl Autocomplete for CityCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(filter_suggestions(input, &self.cities))
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion.or_else(|| {
            // Tab with nothing highlighted completes only an unambiguous match.
            match filter_suggestions(input, &self.cities).as_slice() {
                [only] => Some(only.clone()),
                _ => None,
            }
        }))
    }
}
