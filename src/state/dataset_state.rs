//! Loaded dataset and active-country state.

use claimline::{Country, CountryClaims, Dataset};
use std::path::PathBuf;

/// State related to the loaded claims dataset.
///
/// Responsibilities:
/// - Managing dataset lifetime
/// - Tracking the source file path (None for sample data)
/// - Tracking which country's claims are displayed
#[derive(Default)]
pub struct DatasetState {
    /// The currently loaded dataset (if any)
    dataset: Option<Dataset>,
    /// Path to the currently loaded file (None for sample data)
    file_path: Option<PathBuf>,
    /// Code of the country whose claims are displayed
    active_country_code: Option<String>,
}

impl DatasetState {
    /// Creates a new dataset state with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a new dataset, clearing the active country.
    pub fn load(&mut self, dataset: Dataset, path: Option<PathBuf>) {
        self.dataset = Some(dataset);
        self.file_path = path;
        self.active_country_code = None;
    }

    /// Clears all dataset state.
    pub fn clear(&mut self) {
        self.dataset = None;
        self.file_path = None;
        self.active_country_code = None;
    }

    // ===== Queries =====

    /// Returns the loaded dataset, if any.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Returns the source file path, if the dataset came from disk.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Returns the claims entry for the active country, if one is selected
    /// and present in the dataset.
    pub fn active_country(&self) -> Option<&CountryClaims> {
        let code = self.active_country_code.as_deref()?;
        self.dataset.as_ref()?.find_country(code)
    }

    /// Returns the country records for the search fallback.
    pub fn country_options(&self) -> Vec<Country> {
        self.dataset
            .as_ref()
            .map(|d| d.country_options())
            .unwrap_or_default()
    }

    // ===== Mutations =====

    /// Sets the active country by code.
    pub fn set_active_country(&mut self, code: String) {
        self.active_country_code = Some(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimline::generate_sample_dataset;

    #[test]
    fn test_active_country_lookup() {
        let mut state = DatasetState::new();
        assert!(state.active_country().is_none());

        state.load(generate_sample_dataset(42), None);
        assert!(state.active_country().is_none());

        state.set_active_country("230".to_string());
        assert_eq!(state.active_country().unwrap().name, "Spain");

        // Unknown codes resolve to nothing rather than panicking
        state.set_active_country("999".to_string());
        assert!(state.active_country().is_none());
    }

    #[test]
    fn test_load_resets_active_country() {
        let mut state = DatasetState::new();
        state.load(generate_sample_dataset(42), None);
        state.set_active_country("230".to_string());

        state.load(generate_sample_dataset(43), None);
        assert!(state.active_country().is_none());
    }
}
