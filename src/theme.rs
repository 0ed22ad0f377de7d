//! Theme support for the claimline GUI.
//!
//! Provides the chrome color palettes (Light, Dark, Parchment) and a
//! centralized theme manager. Claim category colors are intentionally NOT
//! part of the theme: they are fixed display colors shared by the legend and
//! the bars, defined in the GUI's presentation layer.

use egui::Color32;
use std::collections::HashMap;

/// Chrome color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    /// Year selector thumb, track fill, and value label
    pub accent: Color32,
    /// Axis tick marks and year labels
    pub axis: Color32,

    // Status colors
    pub error: Color32,
    pub warning: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Parchment".to_string(), parchment_theme());

        Self {
            themes,
            current_theme_name: "Light".to_string(),
        }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme.
    pub fn current_theme(&self) -> &Theme {
        &self.themes[&self.current_theme_name]
    }

    /// Sets the current theme by name.
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme (default).
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with the default purple accent".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(250, 250, 252),
            panel_background: Color32::from_rgb(250, 250, 252),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(20, 20, 24),
            text_dim: Color32::from_rgb(120, 120, 128),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(214, 200, 236),
            hover: Color32::from_rgb(230, 228, 235),
            border: Color32::from_rgb(176, 172, 184),

            // The application's signature purple
            accent: hex_to_color32("#663399"),
            axis: Color32::from_rgb(96, 96, 104),

            error: Color32::from_rgb(196, 40, 40),
            warning: Color32::from_rgb(220, 130, 20),
        },
    }
}

/// Creates the Dark theme.
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with a lightened purple accent".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(34, 34, 38),
            panel_background: Color32::from_rgb(34, 34, 38),
            extreme_background: Color32::from_rgb(18, 18, 22),

            text: Color32::from_rgb(235, 235, 240),
            text_dim: Color32::from_rgb(150, 150, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(74, 56, 104),
            hover: Color32::from_rgb(60, 60, 68),
            border: Color32::from_rgb(96, 96, 108),

            // Brightened for contrast against the dark panel
            accent: hex_to_color32("#9b6dd6"),
            axis: Color32::from_rgb(170, 170, 180),

            error: Color32::from_rgb(235, 90, 80),
            warning: Color32::from_rgb(240, 170, 60),
        },
    }
}

/// Creates the Parchment theme, a warm variant for long reading sessions.
fn parchment_theme() -> Theme {
    Theme {
        name: "Parchment".to_string(),
        description: "Warm paper tones with a muted plum accent".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#f4ecdc"),
            panel_background: hex_to_color32("#f4ecdc"),
            extreme_background: hex_to_color32("#fbf6ea"),

            text: hex_to_color32("#3a3226"),
            text_dim: hex_to_color32("#8a8070"),
            text_strong: hex_to_color32("#201a10"),

            selection: hex_to_color32("#dcc8d8"),
            hover: hex_to_color32("#e8dfce"),
            border: hex_to_color32("#b8ac94"),

            accent: hex_to_color32("#7a4a8a"),
            axis: hex_to_color32("#6a6254"),

            error: hex_to_color32("#a83232"),
            warning: hex_to_color32("#b07818"),
        },
    }
}

/// Converts a hex color string (like "#663399") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#663399"), Color32::from_rgb(0x66, 0x33, 0x99));
        assert_eq!(hex_to_color32("ffffff"), Color32::from_rgb(255, 255, 255));
        assert_eq!(hex_to_color32("#bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_all_themes_resolve() {
        let manager = ThemeManager::new();
        for name in manager.list_themes() {
            assert!(manager.get_theme(name).is_some());
        }
    }

    #[test]
    fn test_set_unknown_theme_fails() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Dracula").is_err());
        assert!(manager.set_current_theme("Dark").is_ok());
        assert_eq!(manager.current_theme().name, "Dark");
    }
}
