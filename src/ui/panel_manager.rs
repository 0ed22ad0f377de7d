//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, claims, timeline, status) and manages
//! their layout and interaction bubbling.

use claimline::Country;
use eframe::egui;
use std::path::PathBuf;

use crate::app::AppState;
use crate::io::AsyncDatasetLoader;
use crate::presentation::color_mapping;
use crate::ui::{claims_panel, header, status_bar, timeline_panel};

/// Result of panel interactions handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a dataset file
    OpenDatasetRequested(PathBuf),
    /// User requested the built-in sample dataset
    LoadSampleRequested,
    /// A country was chosen in the search control
    CountrySelected(Country),
    /// The year selector was moved
    YearSelected(i32),
    /// A claim bar was clicked (in either panel)
    ClaimSelected(usize),
    /// A panel published a user-driven scroll offset
    ScrollPublished(f32),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncDatasetLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenDatasetRequested(path) => {
                        PanelInteraction::OpenDatasetRequested(path)
                    }
                    header::HeaderInteraction::LoadSampleRequested => {
                        PanelInteraction::LoadSampleRequested
                    }
                    header::HeaderInteraction::CountrySelected(country) => {
                        PanelInteraction::CountrySelected(country)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Timeline panel above the status bar
        let panel_response = egui::TopBottomPanel::bottom("timeline_panel")
            .default_height(state.layout.timeline_height())
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    if loader.is_loading() {
                        render_loading_indicator(ui, &theme_colors);
                        return;
                    }
                    if let Some(timeline_interaction) =
                        timeline_panel::render_timeline_panel(ui, state, &theme_colors)
                    {
                        interaction = Some(match timeline_interaction {
                            timeline_panel::TimelinePanelInteraction::YearSelected(year) => {
                                PanelInteraction::YearSelected(year)
                            }
                            timeline_panel::TimelinePanelInteraction::ClaimSelected(index) => {
                                PanelInteraction::ClaimSelected(index)
                            }
                            timeline_panel::TimelinePanelInteraction::ScrollChanged(offset) => {
                                PanelInteraction::ScrollPublished(offset)
                            }
                        });
                    }
                });
            });
        state
            .layout
            .set_timeline_height(panel_response.response.rect.height());

        // Central panel: claims rows
        let claims_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(claims_frame).show(ctx, |ui| {
            ui.heading("Movements & Claims");
            ui.separator();

            if loader.is_loading() {
                render_loading_indicator(ui, &theme_colors);
                return;
            }

            if let Some(claims_interaction) =
                claims_panel::render_claims_panel(ui, state, &theme_colors)
            {
                interaction = Some(match claims_interaction {
                    claims_panel::ClaimsPanelInteraction::ClaimSelected(index) => {
                        PanelInteraction::ClaimSelected(index)
                    }
                    claims_panel::ClaimsPanelInteraction::ScrollChanged(offset) => {
                        PanelInteraction::ScrollPublished(offset)
                    }
                });
            }
        });

        interaction
    }
}

/// Renders a loading indicator while a dataset is being parsed.
fn render_loading_indicator(ui: &mut egui::Ui, theme_colors: &claimline::ThemeColors) {
    let canvas_rect = ui.available_rect_before_wrap();
    ui.painter().text(
        canvas_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Loading…",
        egui::FontId::proportional(24.0),
        theme_colors.text_dim,
    );
}
