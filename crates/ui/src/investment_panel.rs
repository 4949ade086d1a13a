//! Right sidebar for the investment context: community projects, the
//! institutional pipeline, impact tracking, blended finance, and
//! inclusion metrics.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::catalog::FeatureCatalogs;
use atlas::context::AnalysisContext;
use atlas::controls::ActiveContext;
use atlas::features::{CommunityType, LandRights, ProjectStatus};
use atlas::reports::{
    PipelineStatus, BLENDED_FINANCE_STACK, IMPACT_METRICS, INCLUSION_RATES,
    INSTITUTIONAL_PIPELINE, TOTAL_CAPITAL_MOBILIZED_MUSD,
};
use atlas::stats;

use crate::format;
use crate::theme;
use crate::widgets;

pub fn investment_panel_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveContext>,
    catalogs: Res<FeatureCatalogs>,
) {
    if active.0 != AnalysisContext::InvestmentInclusion {
        return;
    }

    egui::SidePanel::right("analysis")
        .resizable(false)
        .exact_width(360.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Investment & Inclusion")
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT),
            );
            ui.label(
                egui::RichText::new("Community-centered finance & impact tracking")
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(6.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                projects_card(ui, &catalogs);
                ui.add_space(8.0);
                pipeline_card(ui);
                ui.add_space(8.0);
                impact_tracking_card(ui);
                ui.add_space(8.0);
                blended_finance_card(ui);
                ui.add_space(8.0);
                inclusion_card(ui);
                ui.add_space(8.0);
            });
        });
}

fn projects_card(ui: &mut egui::Ui, catalogs: &FeatureCatalogs) {
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "👥 Community Projects");
        for site in &catalogs.sites {
            widgets::inset_card(ui, theme::INSET_BG, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(site.name)
                            .size(theme::FONT_SMALL)
                            .strong()
                            .color(theme::TEXT),
                    );
                });
                ui.horizontal(|ui| {
                    let (fill, fg) = community_badge_colors(site.community_type);
                    widgets::badge(ui, site.community_type.label(), fill, fg);
                });
                widgets::kv_row(ui, "Funding:", &format::musd(site.funding_musd), theme::GREEN);
                widgets::kv_row(ui, "Jobs:", &site.jobs.to_string(), theme::TEXT);
                widgets::kv_row(
                    ui,
                    "Impact Score:",
                    &format::score(site.impact_score),
                    theme::BLUE,
                );
                widgets::kv_row(
                    ui,
                    "Carbon:",
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
                    "Land Rights:",
                    site.land_rights.label(),
                    match site.land_rights {
                        LandRights::Secured => theme::GREEN,
                        LandRights::InProcess => theme::ORANGE,
                    },
                );
            });
            ui.add_space(4.0);
        }
    });
}

fn community_badge_colors(community_type: CommunityType) -> (egui::Color32, egui::Color32) {
    match community_type {
        CommunityType::Indigenous => (theme::GREEN, egui::Color32::WHITE),
        CommunityType::Vulnerable => (theme::INSET_BG, theme::ORANGE),
        CommunityType::MultiStakeholder => (theme::INSET_BG, theme::BLUE),
    }
}

fn pipeline_card(ui: &mut egui::Ui) {
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "🏛 Institutional Pipeline");
        for deal in INSTITUTIONAL_PIPELINE {
            widgets::inset_card(ui, theme::INSET_BG, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(deal.institution)
                            .size(theme::FONT_SMALL)
                            .strong()
                            .color(theme::TEXT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::badge(ui, deal.esg_compliance, theme::CARD_BG, theme::TEXT_MUTED);
                    });
                });
                widgets::kv_row(ui, "Deal Size:", &format::musd(deal.deal_size_musd), theme::GREEN);
                widgets::kv_row(ui, "Type:", deal.deal_type, theme::TEXT);
                widgets::kv_row(
                    ui,
                    "Credits:",
                    &format::kilotonnes(deal.credit_volume_t),
                    theme::PURPLE,
                );
                widgets::kv_row(
                    ui,
                    "Status:",
                    deal.status.label(),
                    match deal.status {
                        PipelineStatus::Active => theme::GREEN,
                        PipelineStatus::Negotiating | PipelineStatus::DueDiligence => {
                            theme::TEXT_MUTED
                        }
                    },
                );
            });
            ui.add_space(4.0);
        }
    });
}

fn impact_tracking_card(ui: &mut egui::Ui) {
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "🎯 Impact Tracking");
        for metric in IMPACT_METRICS {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(metric.category)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}/{} {}",
                            format::thousands(metric.value as u64),
                            format::thousands(metric.target as u64),
                            metric.unit
                        ))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                    );
                });
            });
            widgets::progress(
                ui,
                stats::progress_fraction(metric.value, metric.target),
                theme::PRIMARY,
            );
            ui.add_space(4.0);
        }
    });
}

fn blended_finance_card(ui: &mut egui::Ui) {
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "🌐 Blended Finance");
        let share_colors = [theme::GREEN, theme::BLUE, theme::PURPLE];
        for (share, color) in BLENDED_FINANCE_STACK.iter().zip(share_colors) {
            widgets::kv_row(ui, share.source, &format!("{}%", share.percent), color);
        }
        ui.separator();
        widgets::kv_row(
            ui,
            "Total Capital Mobilized",
            &format::musd(TOTAL_CAPITAL_MOBILIZED_MUSD),
            theme::GREEN,
        );
    });
}

fn inclusion_card(ui: &mut egui::Ui) {
    widgets::card(ui, |ui| {
        widgets::card_title(ui, "💚 Inclusion Metrics");
        let rate_colors = [theme::BLUE, theme::PURPLE, theme::GREEN, theme::ORANGE];
        for (rate, color) in INCLUSION_RATES.iter().zip(rate_colors) {
            widgets::kv_row(ui, rate.group, &format!("{}%", rate.percent), color);
        }
    });
}
