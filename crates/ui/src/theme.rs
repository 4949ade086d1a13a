//! Light dashboard theme and the shared color vocabulary of the panels.

use bevy_egui::{egui, EguiContexts};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

pub const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(249, 250, 251);
pub const CARD_BG: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
pub const INSET_BG: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);

pub const TEXT: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
pub const RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const ORANGE: egui::Color32 = egui::Color32::from_rgb(234, 88, 12);
pub const YELLOW: egui::Color32 = egui::Color32::from_rgb(202, 138, 4);
pub const GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const PURPLE: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);

pub const FONT_TITLE: f32 = 17.0;
pub const FONT_HEADING: f32 = 14.0;
pub const FONT_BODY: f32 = 12.5;
pub const FONT_SMALL: f32 = 11.0;

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Convert a core bevy color (style palette, legend swatches) to egui.
pub fn to_color32(color: bevy::prelude::Color) -> egui::Color32 {
    let s = color.to_srgba();
    egui::Color32::from_rgb(
        (s.red * 255.0).round() as u8,
        (s.green * 255.0).round() as u8,
        (s.blue * 255.0).round() as u8,
    )
}

/// Convert a report dataset color triple to egui.
pub fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

// ---------------------------------------------------------------------------
// Theme application
// ---------------------------------------------------------------------------

/// Apply the light dashboard styling once at startup.
pub fn apply_dashboard_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = PAGE_BG;
    style.visuals.window_fill = CARD_BG;
    style.visuals.extreme_bg_color = INSET_BG;
    style.visuals.faint_bg_color = INSET_BG;

    style.visuals.widgets.noninteractive.bg_fill = PAGE_BG;
    style.visuals.widgets.inactive.bg_fill = INSET_BG;
    style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(226, 232, 240);
    style.visuals.widgets.active.bg_fill = PRIMARY;

    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT);
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT);

    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas::style::SITE_PLANNING;

    #[test]
    fn to_color32_round_trips_srgb_bytes() {
        // #6b7280 stored as components must come back as the same bytes.
        let c = to_color32(SITE_PLANNING);
        assert_eq!(c, egui::Color32::from_rgb(107, 114, 128));
    }

    #[test]
    fn rgb_passes_bytes_through() {
        assert_eq!(rgb([1, 2, 3]), egui::Color32::from_rgb(1, 2, 3));
    }
}
