//! Country search state for the autocomplete control.

use claimline::Country;

/// Maximum number of suggestions shown under the search field.
pub const MAX_SUGGESTIONS: usize = 8;

/// State related to the country search control.
///
/// Responsibilities:
/// - Holding the query text buffer
/// - Tracking the remote country list and the dataset fallback
/// - Filtering options by case-insensitive substring match
/// - Tracking the committed selection
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current query text
    query: String,
    /// Country list fetched from the lookup service (empty on failure)
    remote_countries: Vec<Country>,
    /// Countries present in the loaded dataset, used when the fetch
    /// returned nothing
    fallback_countries: Vec<Country>,
    /// The committed selection, if any
    selected: Option<Country>,
    /// Whether the suggestion list is showing
    suggestions_open: bool,
}

impl SearchState {
    /// Creates a new, empty search state.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Returns the query text buffer for the text field.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    /// Returns the committed selection, if any.
    pub fn selected(&self) -> Option<&Country> {
        self.selected.as_ref()
    }

    /// Returns whether the suggestion list is showing.
    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }

    /// Returns the available options: the remote list when the fetch
    /// succeeded, otherwise the loaded dataset's countries.
    pub fn options(&self) -> &[Country] {
        if self.remote_countries.is_empty() {
            &self.fallback_countries
        } else {
            &self.remote_countries
        }
    }

    /// Returns up to [`MAX_SUGGESTIONS`] options whose name contains the
    /// query, case-insensitively. An empty query matches everything.
    pub fn suggestions(&self) -> Vec<Country> {
        let needle = self.query.to_lowercase();
        self.options()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }

    // ===== Mutations =====

    /// Installs the fetched remote country list.
    pub fn set_remote_countries(&mut self, countries: Vec<Country>) {
        self.remote_countries = countries;
    }

    /// Installs the dataset-derived fallback list.
    pub fn set_fallback_countries(&mut self, countries: Vec<Country>) {
        self.fallback_countries = countries;
    }

    /// Commits a selection and mirrors its name into the query field.
    pub fn select(&mut self, country: Country) {
        self.query = country.name.clone();
        self.selected = Some(country);
        self.suggestions_open = false;
    }

    /// Opens or closes the suggestion list.
    pub fn set_suggestions_open(&mut self, open: bool) {
        self.suggestions_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, name: &str) -> Country {
        Country { code: code.to_string(), name: name.to_string() }
    }

    #[test]
    fn test_filtering_is_case_insensitive() {
        let mut state = SearchState::new();
        state.set_remote_countries(vec![
            country("230", "Spain"),
            country("200", "United Kingdom"),
            country("520", "Somalia"),
        ]);

        *state.query_mut() = "spa".to_string();
        let matches = state.suggestions();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Spain");

        *state.query_mut() = "KINGDOM".to_string();
        assert_eq!(state.suggestions().len(), 1);
    }

    #[test]
    fn test_fallback_used_when_remote_empty() {
        let mut state = SearchState::new();
        state.set_fallback_countries(vec![country("520", "Somalia")]);
        assert_eq!(state.options().len(), 1);

        state.set_remote_countries(vec![country("230", "Spain"), country("020", "Canada")]);
        assert_eq!(state.options().len(), 2);
        assert_eq!(state.options()[0].name, "Spain");
    }

    #[test]
    fn test_select_mirrors_name_and_closes_list() {
        let mut state = SearchState::new();
        state.set_suggestions_open(true);
        state.select(country("230", "Spain"));

        assert_eq!(state.selected().unwrap().code, "230");
        assert_eq!(state.query_mut().as_str(), "Spain");
        assert!(!state.suggestions_open());
    }

    #[test]
    fn test_suggestion_cap() {
        let mut state = SearchState::new();
        let many: Vec<Country> = (0..20).map(|i| country(&i.to_string(), &format!("Land {i}"))).collect();
        state.set_remote_countries(many);

        *state.query_mut() = "land".to_string();
        assert_eq!(state.suggestions().len(), MAX_SUGGESTIONS);
    }
}
