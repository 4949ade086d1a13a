//! On-map overlays: the legend panel, the map info box, and the zoom
//! buttons. Each is an egui `Area` anchored inside the free central rect
//! left over after the side and top panels, so they float over the map.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::catalog::FeatureCatalogs;
use atlas::compose::RenderPlan;
use atlas::config::ANALYSIS_PERIOD;
use atlas::context::AnalysisContext;
use atlas::controls::{ActiveContext, ActiveTimeRange, BaseMap};
use atlas::layers::LayerRegistry;

use rendering::camera::OrbitCamera;
use rendering::picking::CursorMapPos;

use crate::format;
use crate::theme;
use crate::widgets;

fn overlay_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(egui::Color32::from_rgba_premultiplied(255, 255, 255, 235))
        .stroke(egui::Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(10.0)
}

/// Legend panel in the top-left corner of the map viewport: the context
/// theme block (only buckets with rendered features) plus the active
/// layer list.
pub fn legend_ui(
    mut contexts: EguiContexts,
    plan: Res<RenderPlan>,
    registry: Res<LayerRegistry>,
    active: Res<ActiveContext>,
) {
    let ctx = contexts.ctx_mut();
    let map_rect = ctx.available_rect();
    let anchor = map_rect.min + egui::vec2(12.0, 12.0);

    // Investment buckets render as marker dots, fire buckets as fill
    // squares, mirroring the shapes on the map.
    let round_swatches = active.0 == AnalysisContext::InvestmentInclusion;

    egui::Area::new(egui::Id::new("map_legend"))
        .fixed_pos(anchor)
        .interactable(false)
        .show(ctx, |ui| {
            overlay_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(plan.legend_title)
                        .size(theme::FONT_SMALL)
                        .strong()
                        .color(theme::TEXT),
                );
                for entry in &plan.legend {
                    ui.horizontal(|ui| {
                        widgets::swatch(ui, theme::to_color32(entry.swatch), round_swatches);
                        ui.label(
                            egui::RichText::new(entry.label)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT),
                        );
                    });
                }

                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Active Layers")
                        .size(theme::FONT_SMALL)
                        .strong()
                        .color(theme::TEXT),
                );
                for layer in registry.all().iter().filter(|l| l.active) {
                    ui.horizontal(|ui| {
                        widgets::swatch(ui, theme::to_color32(layer.id.legend_dot()), true);
                        ui.label(
                            egui::RichText::new(layer.name)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT),
                        );
                    });
                }
            });
        });
}

/// Info box in the bottom-left corner of the map viewport.
pub fn map_info_ui(
    mut contexts: EguiContexts,
    base_map: Res<BaseMap>,
    time_range: Res<ActiveTimeRange>,
    catalogs: Res<FeatureCatalogs>,
    cursor: Res<CursorMapPos>,
) {
    let ctx = contexts.ctx_mut();
    let map_rect = ctx.available_rect();
    let anchor = egui::pos2(map_rect.min.x + 12.0, map_rect.max.y - 12.0);

    egui::Area::new(egui::Id::new("map_info"))
        .fixed_pos(anchor)
        .pivot(egui::Align2::LEFT_BOTTOM)
        .interactable(false)
        .show(ctx, |ui| {
            overlay_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Current View: {}",
                        base_map.0.short_label()
                    ))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT),
                );
                ui.label(
                    egui::RichText::new(format!("Analysis Period: {ANALYSIS_PERIOD}"))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!("Time Range: {}", time_range.0.label()))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                let zones = catalogs.burn_zones.len();
                let plural = if zones == 1 { "" } else { "s" };
                ui.label(
                    egui::RichText::new(format!("{zones} burned area{plural} analyzed"))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "Total: {} ha",
                        format::thousands(catalogs.total_burned_ha() as u64)
                    ))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
                );
                if cursor.valid {
                    ui.label(
                        egui::RichText::new(format!(
                            "Cursor: {:.2}, {:.2}",
                            cursor.geo.lat, cursor.geo.lon
                        ))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                    );
                }
            });
        });
}

/// Zoom buttons in the top-right corner of the map viewport.
pub fn zoom_controls_ui(mut contexts: EguiContexts, mut orbit: ResMut<OrbitCamera>) {
    let ctx = contexts.ctx_mut();
    let map_rect = ctx.available_rect();
    let anchor = egui::pos2(map_rect.max.x - 12.0, map_rect.min.y + 12.0);

    egui::Area::new(egui::Id::new("zoom_controls"))
        .fixed_pos(anchor)
        .pivot(egui::Align2::RIGHT_TOP)
        .show(ctx, |ui| {
            overlay_frame().show(ui, |ui| {
                if ui.button(egui::RichText::new("＋").size(14.0)).clicked() {
                    orbit.zoom_in();
                }
                if ui.button(egui::RichText::new("－").size(14.0)).clicked() {
                    orbit.zoom_out();
                }
            });
        });
}
