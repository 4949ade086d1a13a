//! Left sidebar: base map / time range selectors, the layer toggle list,
//! and the context-specific blocks (quick stats and alerts for loss
//! analysis, priority criteria and opportunities for investment).

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::context::AnalysisContext;
use atlas::controls::{
    ActiveContext, ActiveTimeRange, BaseMap, ControlAction, ALL_BASE_MAPS, ALL_TIME_RANGES,
};
use atlas::layers::LayerRegistry;
use atlas::reports::BURNED_LAND_COVER;

use crate::theme;
use crate::widgets;

/// Whether the layer toggle list is expanded.
#[derive(Resource)]
pub struct LayerPanelOpen(pub bool);

impl Default for LayerPanelOpen {
    fn default() -> Self {
        Self(true)
    }
}

/// Session-scoped switches of the investment priority block. Display
/// state only; they do not filter the catalogs.
#[derive(Resource)]
pub struct PriorityCriteria {
    pub land_rights: bool,
    pub indigenous: bool,
    pub vulnerable: bool,
    pub high_impact: bool,
}

impl Default for PriorityCriteria {
    fn default() -> Self {
        Self {
            land_rights: true,
            indigenous: true,
            vulnerable: true,
            high_impact: false,
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn control_panel_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveContext>,
    base_map: Res<BaseMap>,
    time_range: Res<ActiveTimeRange>,
    registry: Res<LayerRegistry>,
    mut panel_open: ResMut<LayerPanelOpen>,
    mut criteria: ResMut<PriorityCriteria>,
    mut actions: EventWriter<ControlAction>,
) {
    egui::SidePanel::left("controls")
        .resizable(false)
        .exact_width(290.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let title = match active.0 {
                    AnalysisContext::LossAnalysis => "Map Controls",
                    AnalysisContext::InvestmentInclusion => "Investment Controls",
                };
                ui.label(
                    egui::RichText::new(title)
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("≡").on_hover_text("Toggle layer list").clicked() {
                        panel_open.0 = !panel_open.0;
                    }
                });
            });
            ui.add_space(6.0);

            selector_block(ui, &base_map, &time_range, active.0, &mut actions);
            ui.separator();

            if panel_open.0 {
                layer_block(ui, &registry, active.0, &mut actions);
                ui.separator();
            }

            match active.0 {
                AnalysisContext::LossAnalysis => {
                    impact_overview_block(ui);
                    ui.separator();
                    alerts_block(ui);
                }
                AnalysisContext::InvestmentInclusion => {
                    criteria_block(ui, &mut criteria);
                    ui.separator();
                    opportunities_block(ui);
                }
            }
        });
}

fn selector_block(
    ui: &mut egui::Ui,
    base_map: &BaseMap,
    time_range: &ActiveTimeRange,
    context: AnalysisContext,
    actions: &mut EventWriter<ControlAction>,
) {
    ui.label(
        egui::RichText::new("Base Map")
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
    egui::ComboBox::from_id_salt("base_map")
        .selected_text(base_map.0.label())
        .width(250.0)
        .show_ui(ui, |ui| {
            for style in ALL_BASE_MAPS {
                if ui
                    .selectable_label(base_map.0 == style, style.label())
                    .clicked()
                {
                    actions.send(ControlAction::SetBaseMap(style));
                }
            }
        });

    if context == AnalysisContext::LossAnalysis {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Time Range")
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        );
        egui::ComboBox::from_id_salt("time_range")
            .selected_text(time_range.0.label())
            .width(250.0)
            .show_ui(ui, |ui| {
                for range in ALL_TIME_RANGES {
                    if ui
                        .selectable_label(time_range.0 == range, range.label())
                        .clicked()
                    {
                        actions.send(ControlAction::SetTimeRange(range));
                    }
                }
            });
    }
    ui.add_space(6.0);
}

fn layer_block(
    ui: &mut egui::Ui,
    registry: &LayerRegistry,
    context: AnalysisContext,
    actions: &mut EventWriter<ControlAction>,
) {
    let title = match context {
        AnalysisContext::LossAnalysis => "Data Layers",
        AnalysisContext::InvestmentInclusion => "Investment Layers",
    };
    ui.label(
        egui::RichText::new(title)
            .size(theme::FONT_BODY)
            .strong()
            .color(theme::TEXT),
    );
    ui.add_space(4.0);

    for layer in registry.all() {
        ui.horizontal(|ui| {
            ui.label(widgets::glyph_text(layer.glyph));
            ui.label(
                egui::RichText::new(layer.name)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut active = layer.active;
                if ui.checkbox(&mut active, "").changed() {
                    actions.send(ControlAction::ToggleLayer(layer.id));
                }
            });
        });
    }
    ui.add_space(4.0);
}

fn impact_overview_block(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Impact Overview")
            .size(theme::FONT_BODY)
            .strong()
            .color(theme::TEXT),
    );
    ui.add_space(4.0);
    for share in BURNED_LAND_COVER {
        widgets::kv_row(
            ui,
            share.class_name,
            &format!("{}%", share.percent),
            theme::rgb(share.color),
        );
    }
    ui.add_space(4.0);
}

fn alerts_block(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Critical Alerts")
            .size(theme::FONT_BODY)
            .strong()
            .color(theme::RED),
    );
    ui.add_space(4.0);

    widgets::inset_card(ui, egui::Color32::from_rgb(254, 242, 242), |ui| {
        ui.label(
            egui::RichText::new("⚠ Indigenous Territory at Risk")
                .size(theme::FONT_SMALL)
                .strong()
                .color(egui::Color32::from_rgb(153, 27, 27)),
        );
        ui.label(
            egui::RichText::new("Chiquitania indigenous lands facing severe food security crisis")
                .size(theme::FONT_SMALL)
                .color(theme::RED),
        );
    });
    ui.add_space(4.0);
    widgets::inset_card(ui, egui::Color32::from_rgb(255, 247, 237), |ui| {
        ui.label(
            egui::RichText::new("🗓 Dry Season Peak")
                .size(theme::FONT_SMALL)
                .strong()
                .color(egui::Color32::from_rgb(154, 52, 18)),
        );
        ui.label(
            egui::RichText::new("Fire risk remains extremely high through September")
                .size(theme::FONT_SMALL)
                .color(theme::ORANGE),
        );
    });
}

fn criteria_block(ui: &mut egui::Ui, criteria: &mut PriorityCriteria) {
    ui.label(
        egui::RichText::new("Priority Criteria")
            .size(theme::FONT_BODY)
            .strong()
            .color(theme::TEXT),
    );
    ui.add_space(4.0);
    ui.checkbox(&mut criteria.land_rights, "Land Rights Secured");
    ui.checkbox(&mut criteria.indigenous, "Indigenous Priority");
    ui.checkbox(&mut criteria.vulnerable, "Vulnerable Groups");
    ui.checkbox(&mut criteria.high_impact, "High Impact Score");
    ui.add_space(4.0);
}

fn opportunities_block(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Investment Opportunities")
            .size(theme::FONT_BODY)
            .strong()
            .color(theme::GREEN),
    );
    ui.add_space(4.0);

    widgets::inset_card(ui, egui::Color32::from_rgb(240, 253, 244), |ui| {
        ui.label(
            egui::RichText::new("✔ New Co-op Formation")
                .size(theme::FONT_SMALL)
                .strong()
                .color(egui::Color32::from_rgb(22, 101, 52)),
        );
        ui.label(
            egui::RichText::new("3 indigenous communities ready for restoration investment")
                .size(theme::FONT_SMALL)
                .color(theme::GREEN),
        );
    });
    ui.add_space(4.0);
    widgets::inset_card(ui, egui::Color32::from_rgb(239, 246, 255), |ui| {
        ui.label(
            egui::RichText::new("🏛 Institutional Interest")
                .size(theme::FONT_SMALL)
                .strong()
                .color(egui::Color32::from_rgb(30, 64, 175)),
        );
        ui.label(
            egui::RichText::new("Development banks seeking blended finance opportunities")
                .size(theme::FONT_SMALL)
                .color(theme::BLUE),
        );
    });
}
