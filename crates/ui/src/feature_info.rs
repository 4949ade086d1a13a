//! Popup window for the feature selected on the map, listing its
//! attributes the way the map popups do: thousands separators for areas
//! and counts, one decimal for monetary figures, credits in kilotonnes.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::compose::RenderPlan;
use atlas::features::{GeoFeature, ProjectStatus};
use atlas::style::burn_colors;

use rendering::picking::SelectedFeature;

use crate::format;
use crate::theme;
use crate::widgets;

pub fn feature_info_ui(
    mut contexts: EguiContexts,
    plan: Res<RenderPlan>,
    mut selected: ResMut<SelectedFeature>,
) {
    let Some(index) = selected.0 else {
        return;
    };
    let Some(styled) = plan.features.get(index) else {
        // The plan shrank under the selection; drop it.
        selected.0 = None;
        return;
    };

    let ctx = contexts.ctx_mut();
    let map_rect = ctx.available_rect();
    let anchor = egui::pos2(map_rect.center().x, map_rect.min.y + 40.0);

    let mut open = true;
    egui::Window::new(styled.feature.name())
        .id(egui::Id::new("feature_popup"))
        .collapsible(false)
        .resizable(false)
        .default_pos(anchor)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_min_width(220.0);
            match &styled.feature {
                GeoFeature::BurnZone(zone) => {
                    widgets::kv_row(
                        ui,
                        "Fire Intensity:",
                        zone.intensity.label(),
                        theme::to_color32(burn_colors(zone.intensity).1),
                    );
                    widgets::kv_row(
                        ui,
                        "Burned Area:",
                        &format!("{} ha", format::thousands(zone.area_ha as u64)),
                        theme::TEXT,
                    );
                    widgets::kv_row(ui, "Vegetation Type:", zone.vegetation, theme::TEXT);
                    widgets::kv_row(
                        ui,
                        "Structures Lost:",
                        &zone.structures_lost.to_string(),
                        theme::RED,
                    );
                }
                GeoFeature::Territory(_) => {
                    ui.label(
                        egui::RichText::new("Indigenous Protected Area")
                            .size(theme::FONT_SMALL)
                            .strong()
                            .color(theme::BLUE),
                    );
                    ui.label(
                        egui::RichText::new("Critical food security risk")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    );
                }
                GeoFeature::InvestmentSite(site) => {
                    widgets::kv_row(ui, "Community:", site.community, theme::TEXT);
                    widgets::kv_row(
                        ui,
                        "Type:",
                        site.community_type.label(),
                        theme::GREEN,
                    );
                    widgets::kv_row(ui, "Funding:", &format::musd(site.funding_musd), theme::GREEN);
                    widgets::kv_row(ui, "Jobs Created:", &site.jobs.to_string(), theme::BLUE);
                    widgets::kv_row(
                        ui,
                        "Carbon Credits:",
                        &format::kilotonnes(site.carbon_credits_t),
                        theme::PURPLE,
                    );
                    widgets::kv_row(
                        ui,
                        "Status:",
                        site.status.label(),
                        match site.status {
                            ProjectStatus::Active => theme::GREEN,
                            ProjectStatus::Planning => theme::ORANGE,
                        },
                    );
                    widgets::kv_row(
                        ui,
                        "Impact Score:",
                        &format::score(site.impact_score),
                        theme::BLUE,
                    );
                    widgets::kv_row(ui, "Land Rights:", site.land_rights.label(), theme::TEXT);
                }
                GeoFeature::InstitutionalZone(zone) => {
                    ui.label(
                        egui::RichText::new(format!(
                            "Deal Size: {}",
                            format::musd(zone.deal_size_musd)
                        ))
                        .size(theme::FONT_SMALL)
                        .strong()
                        .color(theme::PURPLE),
                    );
                    ui.label(
                        egui::RichText::new("Institutional Investment Zone")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    );
                }
            }
        });

    if !open {
        selected.0 = None;
    }
}
