//! Claim bar rendering logic.
//!
//! Paints a single claim period as a rounded colored bar, with a diagonal
//! hatch for claims that saw violent escalation, a selection outline, and a
//! hover tooltip.

use claimline::{adjust_brightness, with_alpha, Claim};
use eframe::egui;
use egui::Color32;

use crate::presentation::color_mapping;
use crate::utils::format_year_span;

/// Spacing of the diagonal hatch stripes for violent claims.
const HATCH_STEP_PX: f32 = 9.0;

/// Renders one claim bar into `bar_rect`.
///
/// Click detection is manual (hover + primary click) so the surrounding
/// scroll container keeps receiving drag gestures.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `bar_rect` - The bar's pixel rectangle
/// * `claim` - The claim being drawn (category, years, violence)
/// * `selected` - Whether this claim is the current selection
/// * `emphasized` - Whether the selected year falls inside this claim
/// * `interactive` - Whether clicks and tooltips are enabled
///
/// # Returns
/// True when the bar was clicked this frame.
pub fn render_claim_bar(
    ui: &mut egui::Ui,
    bar_rect: egui::Rect,
    claim: &Claim,
    selected: bool,
    emphasized: bool,
    interactive: bool,
) -> bool {
    let base_color = color_mapping::claim_color(claim.span.category);
    let bar_color = if emphasized {
        adjust_brightness(base_color, 1.15)
    } else {
        base_color
    };

    ui.painter().rect_filled(bar_rect, 3.0, bar_color);

    if claim.span.violence {
        draw_violence_hatch(ui, bar_rect);
    }

    if selected {
        ui.painter().rect_stroke(
            bar_rect,
            3.0,
            egui::Stroke::new(2.0, adjust_brightness(bar_color, 1.4)),
            egui::StrokeKind::Outside,
        );
    }

    if !interactive {
        return false;
    }

    // Hover sense only, so drag gestures pass through to the scroll layer
    let bar_id = ui.id().with(("claim_bar", &claim.movement, claim.span.from));
    let response = ui.interact(bar_rect, bar_id, egui::Sense::hover());

    let hovered = response.hovered();
    if hovered {
        response.on_hover_ui(|ui| {
            ui.label(egui::RichText::new(&claim.movement).strong());
            ui.label(format!("{} {}", claim.label, format_year_span(&claim.span)));
            if claim.span.open_ended {
                ui.label("Ongoing");
            }
            if claim.span.violence {
                ui.label("Violent escalation");
            }
        });
    }

    hovered && ui.input(|i| i.pointer.primary_clicked())
}

/// Draws the 45° white hatch stripes used for violent claim periods.
fn draw_violence_hatch(ui: &egui::Ui, bar_rect: egui::Rect) {
    let painter = ui.painter().with_clip_rect(bar_rect);
    let stroke = egui::Stroke::new(2.0, with_alpha(Color32::WHITE, 170));

    let mut x = bar_rect.left() - bar_rect.height();
    while x < bar_rect.right() {
        painter.line_segment(
            [
                egui::pos2(x, bar_rect.bottom()),
                egui::pos2(x + bar_rect.height(), bar_rect.top()),
            ],
            stroke,
        );
        x += HATCH_STEP_PX;
    }
}
