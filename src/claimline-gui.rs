//! Claimline GUI application.
//!
//! An interactive desktop viewer for self-determination claims data, built
//! with the egui framework. The viewer features:
//! - A scrollable year timeline with colored claim-period bars
//! - A draggable year selector bounded to the dataset's year range
//! - A claims panel listing the active country's movements, scroll-synced
//!   with the timeline
//! - A country search control backed by a remote country list
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core business logic (geometry, scroll rules)
//! - `presentation/` - Visual styling and color mapping
//! - `io/` - Dataset loading and the country-list fetch
//! - `rendering/` - Low-level painting for bars, axis, and overlays
//! - `state/` - Focused state components
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod domain;
mod io;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::{AsyncDatasetLoader, CountryFetcher};
use state::LayoutState;
use ui::panel_manager::{PanelInteraction, PanelManager};

const LAYOUT_KEY: &str = "layout";

/// Main application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset file to load on startup
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Claimline — Self-Determination Claims"),
        ..Default::default()
    };

    eframe::run_native(
        "Claimline",
        options,
        Box::new(move |cc| Ok(Box::new(ClaimlineApp::new(cc, initial_file)))),
    )
}

/// The main claimline viewer application.
///
/// Most functionality is delegated:
/// - `ApplicationCoordinator` handles loading, fetching, and interactions
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct ClaimlineApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous dataset loader
    loader: AsyncDatasetLoader,
    /// One-shot country-list fetcher
    fetcher: CountryFetcher,
    /// Optional file to load on first frame
    pending_dataset_load: Option<PathBuf>,
    /// Whether the startup country fetch has been kicked off
    fetch_started: bool,
}

impl ClaimlineApp {
    /// Creates a new viewer with theme and layout loaded from storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        let stored: LayoutState =
            SettingsCoordinator::load_setting_or(cc.storage, LAYOUT_KEY, LayoutState::new());
        let layout = LayoutState::from_persisted(stored.timeline_height(), stored.gutter_width());

        Self {
            state: AppState::with_theme_and_layout(theme_name, layout),
            loader: AsyncDatasetLoader::new(),
            fetcher: CountryFetcher::new(),
            pending_dataset_load: initial_file,
            fetch_started: false,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenDatasetRequested(path) => {
                ApplicationCoordinator::open_dataset(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::LoadSampleRequested => {
                ApplicationCoordinator::load_sample(&mut self.state);
            }
            PanelInteraction::CountrySelected(country) => {
                ApplicationCoordinator::handle_country_selected(&mut self.state, country);
            }
            PanelInteraction::YearSelected(year) => {
                ApplicationCoordinator::handle_year_selected(&mut self.state, year);
            }
            PanelInteraction::ClaimSelected(index) => {
                ApplicationCoordinator::handle_claim_selected(&mut self.state, index);
            }
            PanelInteraction::ScrollPublished(offset) => {
                ApplicationCoordinator::handle_scroll_published(&mut self.state, offset);
            }
        }
    }
}

impl eframe::App for ClaimlineApp {
    /// Called when the app is being shut down — persists preferences.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAYOUT_KEY, &self.state.layout);
    }

    /// Main update loop.
    ///
    /// 1. Pick up async load/fetch completions
    /// 2. Apply the current theme
    /// 3. Kick off the one-shot country fetch and any initial file load
    /// 4. Reconcile panel scroll containers against the shared offset
    /// 5. Render all panels and apply interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);
        ApplicationCoordinator::check_fetch_completion(&mut self.state, &mut self.fetcher);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if !self.fetch_started {
            self.fetch_started = true;
            self.fetcher.start_fetch(CountryFetcher::resolve_url(), ctx);
        }

        if let Some(path) = self.pending_dataset_load.take() {
            ApplicationCoordinator::open_dataset(&mut self.state, &mut self.loader, path, ctx);
        }

        ApplicationCoordinator::reconcile_scroll(&mut self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
