//! Right sidebar for the loss-analysis context: financial impact,
//! sector losses, ecological damage, species impact, and the per-region
//! breakdown.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::context::AnalysisContext;
use atlas::controls::ActiveContext;
use atlas::reports::{
    FoodSecurity, SpeciesStatus, BIODIVERSITY_IMPACT, ECONOMIC_LOSS_BY_SECTOR, SUB_REGIONS,
};
use atlas::stats;

use crate::format;
use crate::theme;
use crate::widgets;

pub fn loss_panel_ui(mut contexts: EguiContexts, active: Res<ActiveContext>) {
    if active.0 != AnalysisContext::LossAnalysis {
        return;
    }

    egui::SidePanel::right("analysis")
        .resizable(false)
        .exact_width(360.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Impact Assessment")
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT),
            );
            ui.label(
                egui::RichText::new("Financial and ecological analysis")
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(6.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                financial_card(ui);
                ui.add_space(8.0);
                sector_chart_card(ui);
                ui.add_space(8.0);
                ecological_card(ui);
                ui.add_space(8.0);
                species_card(ui);
                ui.add_space(8.0);
                regions_card(ui);
                ui.add_space(8.0);
            });
        });
}

fn financial_card(ui: &mut egui::Ui) {
    let totals = stats::loss_totals(SUB_REGIONS);
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "💲 Financial Impact");
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Total Economic Loss")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!("{} USD", format::musd(totals.economic_loss_musd)))
                        .size(14.0)
                        .strong()
                        .color(theme::RED),
                );
            });
            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Insurance Claims")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format::musd(totals.insurance_claims_musd()))
                        .size(14.0)
                        .strong()
                        .color(theme::ORANGE),
                );
            });
        });
        ui.add_space(4.0);
        widgets::kv_row(
            ui,
            "Recovery Cost Est.",
            &format::musd(totals.recovery_cost_musd()),
            theme::TEXT,
        );
        widgets::kv_row(ui, "GDP Impact", "-0.3%", theme::RED);
    });
}

fn sector_chart_card(ui: &mut egui::Ui) {
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "Economic Loss by Sector");
        draw_sector_bars(ui);
    });
}

/// Horizontal bar chart painted directly, one row per sector.
fn draw_sector_bars(ui: &mut egui::Ui) {
    let max_loss = ECONOMIC_LOSS_BY_SECTOR
        .iter()
        .map(|s| s.loss_musd)
        .fold(f32::MIN, f32::max)
        .max(1.0);

    for sector in ECONOMIC_LOSS_BY_SECTOR {
        ui.horizontal(|ui| {
            ui.add_sized(
                egui::vec2(90.0, 14.0),
                egui::Label::new(
                    egui::RichText::new(sector.sector)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                ),
            );

            let bar_max = (ui.available_width() - 48.0).max(20.0);
            let width = bar_max * sector.loss_musd / max_loss;
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(bar_max, 12.0), egui::Sense::hover());
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 3.0, theme::INSET_BG);
            let fill_rect =
                egui::Rect::from_min_size(rect.min, egui::vec2(width, rect.height()));
            painter.rect_filled(fill_rect, 3.0, theme::rgb(sector.color));

            ui.label(
                egui::RichText::new(format!("{:.0}", sector.loss_musd))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT),
            );
        });
    }
    ui.label(
        egui::RichText::new("Million USD")
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
}

fn ecological_card(ui: &mut egui::Ui) {
    let totals = stats::loss_totals(SUB_REGIONS);
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "🌿 Ecological Damage");
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Carbon Released")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format::kilotonnes(totals.carbon_released_t))
                        .size(14.0)
                        .strong()
                        .color(theme::GREEN),
                );
            });
            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Ecosystem Value")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format::musd(totals.ecosystem_value_musd()))
                        .size(14.0)
                        .strong()
                        .color(theme::BLUE),
                );
            });
        });
        ui.add_space(4.0);
        widgets::kv_row(ui, "Biodiversity Loss", "-28%", theme::RED);
        widgets::kv_row(ui, "Soil Degradation", "45,200 ha", theme::ORANGE);
        widgets::kv_row(ui, "Water Quality Impact", "Moderate", theme::YELLOW);
    });
}

fn species_card(ui: &mut egui::Ui) {
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "Species Population Impact");
        for species in BIODIVERSITY_IMPACT {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(species.species)
                        .size(theme::FONT_SMALL)
                        .strong()
                        .color(theme::TEXT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (fill, fg) = species_badge_colors(species.status);
                    widgets::badge(ui, species.status.label(), fill, fg);
                });
            });
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Before: {}", species.before))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!("After: {}", species.after))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "-{}%",
                        stats::decline_percent(species.before, species.after)
                    ))
                    .size(theme::FONT_SMALL)
                    .color(theme::RED),
                );
            });
            widgets::progress(
                ui,
                species.after as f32 / species.before as f32,
                theme::PRIMARY,
            );
            ui.add_space(4.0);
        }
    });
}

fn species_badge_colors(status: SpeciesStatus) -> (egui::Color32, egui::Color32) {
    match status {
        SpeciesStatus::Critical => (theme::RED, egui::Color32::WHITE),
        SpeciesStatus::Vulnerable => (theme::INSET_BG, theme::TEXT),
        SpeciesStatus::Declining | SpeciesStatus::Stable => (theme::CARD_BG, theme::TEXT_MUTED),
    }
}

fn regions_card(ui: &mut egui::Ui) {
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "Regional Impact Details");
        for region in SUB_REGIONS {
            widgets::inset_card(ui, theme::INSET_BG, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(region.name)
                            .size(theme::FONT_SMALL)
                            .strong()
                            .color(theme::TEXT),
                    );
                    if region.indigenous {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                widgets::badge(
                                    ui,
                                    "Indigenous",
                                    egui::Color32::from_rgb(239, 246, 255),
                                    theme::BLUE,
                                );
                            },
                        );
                    }
                });
                widgets::kv_row(
                    ui,
                    "Area Burned:",
                    &format!("{} ha", format::thousands(region.forest_loss_ha as u64)),
                    theme::RED,
                );
                widgets::kv_row(
                    ui,
                    "Population:",
                    &format::thousands(region.population as u64),
                    theme::TEXT,
                );
                widgets::kv_row(
                    ui,
                    "Economic Loss:",
                    &format::musd(region.economic_loss_musd),
                    theme::RED,
                );
                widgets::kv_row(ui, "Structures:", &region.structures.to_string(), theme::TEXT);
                widgets::kv_row(
                    ui,
                    "Carbon Loss:",
                    &format::kilotonnes(region.carbon_loss_t),
                    theme::GREEN,
                );
                widgets::kv_row(
                    ui,
                    "Food Security:",
                    region.food_security.label(),
                    food_security_color(region.food_security),
                );
            });
            ui.add_space(4.0);
        }
    });
}

fn food_security_color(tier: FoodSecurity) -> egui::Color32 {
    match tier {
        FoodSecurity::Critical => theme::RED,
        FoodSecurity::Severe => theme::ORANGE,
        FoodSecurity::Moderate => theme::YELLOW,
    }
}
