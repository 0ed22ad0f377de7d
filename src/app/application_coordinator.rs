//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like dataset loading, the
//! country-list fetch, selection changes, and scroll publication.

use claimline::{Country, Dataset};
use eframe::egui;
use std::path::PathBuf;

use crate::app::AppState;
use crate::io::{AsyncDatasetLoader, CountryFetchResult, CountryFetcher, DatasetLoadResult};

/// Seed used for the built-in sample dataset.
const SAMPLE_SEED: u64 = 42;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing dataset loading workflows
/// - Handling fetch and load completion
/// - Applying selection and scroll interactions to state
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous dataset loading.
    ///
    /// Immediately clears previous dataset state to show the loading
    /// indicator.
    pub fn open_dataset(
        state: &mut AppState,
        loader: &mut AsyncDatasetLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_dataset_state();
        loader.start_load(path, ctx);
    }

    /// Generates and installs the built-in sample dataset.
    pub fn load_sample(state: &mut AppState) {
        let dataset = claimline::generate_sample_dataset(SAMPLE_SEED);
        Self::install_dataset(state, dataset, None);
    }

    /// Checks for loading completion and applies results to state.
    ///
    /// Called once per frame in the update loop. Returns true if a load
    /// operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncDatasetLoader) -> bool {
        match loader.check_completion() {
            DatasetLoadResult::Success { dataset, path } => {
                Self::install_dataset(state, dataset, Some(path));
                true
            }
            DatasetLoadResult::Error(error_msg) => {
                log::error!("Dataset load failed: {error_msg}");
                state.error_message = Some(format!("Error loading dataset: {error_msg}"));
                state.dataset.clear();
                true
            }
            DatasetLoadResult::None => false,
        }
    }

    /// Checks for country-list fetch completion.
    ///
    /// A failed fetch is logged and leaves the option list empty; the
    /// search control then falls back to the dataset's countries.
    pub fn check_fetch_completion(state: &mut AppState, fetcher: &mut CountryFetcher) {
        match fetcher.check_completion() {
            CountryFetchResult::Success(countries) => {
                log::info!("Fetched {} countries", countries.len());
                state.search.set_remote_countries(countries);
            }
            CountryFetchResult::Error(error_msg) => {
                log::error!("Error fetching countries: {error_msg}");
            }
            CountryFetchResult::None => {}
        }
    }

    /// Reconciles both panel scroll containers against the shared offset.
    ///
    /// Called once per frame before rendering. Each container is only
    /// re-scrolled when it has drifted past the deadband.
    pub fn reconcile_scroll(state: &mut AppState) {
        let shared = state.shared_scroll_left;
        state.timeline_scroll.sync_external(shared);
        state.claims_scroll.sync_external(shared);
    }

    /// Applies a user-driven year selection.
    pub fn handle_year_selected(state: &mut AppState, year: i32) {
        if state.timeline.set_selected_year(year) {
            log::debug!("Selected year {year}");
        }
    }

    /// Publishes a user-driven scroll offset to the shared owner.
    pub fn handle_scroll_published(state: &mut AppState, offset: f32) {
        state.shared_scroll_left = offset;
    }

    /// Applies a country selection from the search control.
    pub fn handle_country_selected(state: &mut AppState, country: Country) {
        state.dataset.set_active_country(country.code.clone());
        state.search.select(country);
        state.selection.clear();
    }

    /// Applies a claim selection from either panel.
    pub fn handle_claim_selected(state: &mut AppState, index: usize) {
        state.selection.toggle_claim(index);
    }

    fn install_dataset(state: &mut AppState, dataset: Dataset, path: Option<PathBuf>) {
        let range = dataset.range();
        log::info!(
            "Loaded dataset: {} countries, {} claims, {}–{}",
            dataset.countries().len(),
            dataset.claim_count(),
            range.start_year,
            range.end_year
        );

        state.reset_dataset_state();
        state.search.set_fallback_countries(dataset.country_options());
        state.dataset.load(dataset, path);
        state.timeline.initialize(range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_install_initializes_timeline() {
        let mut state = AppState::new();
        ApplicationCoordinator::load_sample(&mut state);

        let dataset_range = state.dataset.dataset().unwrap().range();
        assert_eq!(state.timeline.range(), dataset_range);
        assert!(dataset_range.contains(state.timeline.selected_year()));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_country_selection_drives_active_claims() {
        let mut state = AppState::new();
        ApplicationCoordinator::load_sample(&mut state);

        let country = Country { code: "230".to_string(), name: "Spain".to_string() };
        ApplicationCoordinator::handle_country_selected(&mut state, country);

        assert_eq!(state.dataset.active_country().unwrap().name, "Spain");
        assert_eq!(state.search.selected().unwrap().code, "230");
        assert_eq!(state.selection.selected_claim(), None);
    }

    #[test]
    fn test_scroll_publication_feeds_reconciliation() {
        let mut state = AppState::new();
        state.timeline_scroll.update_metrics(600.0, 2000.0);
        state.claims_scroll.update_metrics(600.0, 2000.0);

        ApplicationCoordinator::handle_scroll_published(&mut state, 240.0);
        ApplicationCoordinator::reconcile_scroll(&mut state);

        assert_eq!(state.timeline_scroll.take_pending_scroll(), Some(240.0));
        assert_eq!(state.claims_scroll.take_pending_scroll(), Some(240.0));

        // Both panels settled: a second reconcile queues nothing
        ApplicationCoordinator::reconcile_scroll(&mut state);
        assert_eq!(state.timeline_scroll.take_pending_scroll(), None);
        assert_eq!(state.claims_scroll.take_pending_scroll(), None);
    }
}
