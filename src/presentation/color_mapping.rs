//! Color mapping for claim-category bars.
//!
//! Category colors are fixed display colors, deliberately independent of
//! the chrome theme so that bars read the same in every theme. Spans whose
//! source label matched no category render in the neutral color.

use claimline::{hex_to_color32, ClaimCategory, ThemeColors, ThemeManager};
use egui::Color32;
use once_cell::sync::Lazy;

static CATEGORY_COLORS: Lazy<[(ClaimCategory, Color32); 4]> = Lazy::new(|| {
    [
        (ClaimCategory::Autonomy, hex_to_color32("#90ee90")),
        (ClaimCategory::SubStateSecession, hex_to_color32("#006400")),
        (ClaimCategory::Independence, hex_to_color32("#add8e6")),
        (ClaimCategory::Irredentism, hex_to_color32("#00008b")),
    ]
});

static UNKNOWN_CLAIM_COLOR: Lazy<Color32> = Lazy::new(|| hex_to_color32("#a9a9a9"));

/// Returns the bar color for a claim category.
///
/// `None` (an unrecognized source label) maps to the neutral color.
pub fn claim_color(category: Option<ClaimCategory>) -> Color32 {
    match category {
        Some(category) => {
            CATEGORY_COLORS
                .iter()
                .find(|(c, _)| *c == category)
                .map(|(_, color)| *color)
                .unwrap_or(*UNKNOWN_CLAIM_COLOR)
        }
        None => *UNKNOWN_CLAIM_COLOR,
    }
}

/// Returns legend entries in display order: (label, color).
pub fn legend_entries() -> Vec<(&'static str, Color32)> {
    ClaimCategory::ALL
        .iter()
        .map(|category| (category.label(), claim_color(Some(*category))))
        .collect()
}

/// Returns a reference to the current theme's color palette.
///
/// Falls back to the Light theme colors if the name does not resolve.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.current_theme().colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_color_is_pure() {
        for category in ClaimCategory::ALL {
            assert_eq!(claim_color(Some(category)), claim_color(Some(category)));
        }
        assert_eq!(claim_color(None), claim_color(None));
    }

    #[test]
    fn test_unknown_maps_to_neutral() {
        assert_eq!(claim_color(None), hex_to_color32("#a9a9a9"));
    }

    #[test]
    fn test_categories_have_distinct_colors() {
        let colors: Vec<Color32> = ClaimCategory::ALL
            .iter()
            .map(|c| claim_color(Some(*c)))
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
            assert_ne!(*a, claim_color(None));
        }
    }

    #[test]
    fn test_legend_matches_bar_colors() {
        for (label, color) in legend_entries() {
            let category = ClaimCategory::from_label(label).unwrap();
            assert_eq!(color, claim_color(Some(category)));
        }
    }
}
