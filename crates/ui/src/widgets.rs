//! Small shared building blocks for the dashboard panels.

use bevy_egui::egui;

use atlas::layers::LayerGlyph;

use crate::theme;

/// A white card with a hairline border, the container every sidebar
/// section uses.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(theme::CARD_BG)
        .stroke(egui::Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, add_contents)
        .inner
}

/// A tinted inset card, used for alert and region entries.
pub fn inset_card<R>(
    ui: &mut egui::Ui,
    fill: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(8.0)
        .show(ui, add_contents)
        .inner
}

/// Card section title.
pub fn card_title(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .strong()
            .color(theme::TEXT),
    );
    ui.add_space(6.0);
}

/// One headline figure with a caption below it.
pub fn stat_card(ui: &mut egui::Ui, value: &str, caption: &str, color: egui::Color32) {
    card(ui, |ui| {
        ui.set_min_width(130.0);
        ui.label(egui::RichText::new(value).size(16.0).strong().color(color));
        ui.label(
            egui::RichText::new(caption)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        );
    });
}

/// A `label: value` row with the value right-aligned and colored.
pub fn kv_row(ui: &mut egui::Ui, label: &str, value: &str, value_color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(theme::FONT_SMALL)
                    .strong()
                    .color(value_color),
            );
        });
    });
}

/// A small pill badge.
pub fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32, fg: egui::Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(9))
        .inner_margin(egui::Margin::symmetric(7, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(theme::FONT_SMALL).color(fg));
        });
}

/// A themed progress bar with a custom fill color.
pub fn progress(ui: &mut egui::Ui, fraction: f32, color: egui::Color32) {
    ui.add(
        egui::ProgressBar::new(fraction.clamp(0.0, 1.0))
            .fill(color)
            .desired_height(7.0),
    );
}

/// Paint a small legend swatch; `round` draws a dot, otherwise a square.
pub fn swatch(ui: &mut egui::Ui, color: egui::Color32, round: bool) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    if round {
        painter.circle_filled(rect.center(), 5.0, color);
    } else {
        painter.rect_filled(rect, 2.0, color);
    }
}

/// Text glyph for a layer's symbolic icon reference.
pub fn glyph_text(glyph: LayerGlyph) -> &'static str {
    match glyph {
        LayerGlyph::Satellite => "📡",
        LayerGlyph::TreePine => "🌲",
        LayerGlyph::AlertTriangle => "⚠",
        LayerGlyph::MapPin => "📌",
        LayerGlyph::Users => "👥",
        LayerGlyph::Home => "🏠",
        LayerGlyph::TrendingUp => "📈",
        LayerGlyph::Building => "🏛",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_text() {
        let glyphs = [
            LayerGlyph::Satellite,
            LayerGlyph::TreePine,
            LayerGlyph::AlertTriangle,
            LayerGlyph::MapPin,
            LayerGlyph::Users,
            LayerGlyph::Home,
            LayerGlyph::TrendingUp,
            LayerGlyph::Building,
        ];
        for glyph in glyphs {
            assert!(!glyph_text(glyph).is_empty());
        }
    }
}
