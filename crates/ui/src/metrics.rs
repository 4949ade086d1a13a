//! Headline metrics bar under the tab strip; four stat cards per context.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::catalog::FeatureCatalogs;
use atlas::context::AnalysisContext;
use atlas::controls::ActiveContext;
use atlas::reports::{self, INCLUSION_RATES};
use atlas::stats;

use crate::format;
use crate::theme;
use crate::widgets;

pub fn metrics_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveContext>,
    catalogs: Res<FeatureCatalogs>,
) {
    egui::TopBottomPanel::top("metrics")
        .frame(
            egui::Frame::new()
                .fill(theme::PAGE_BG)
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| match active.0 {
                AnalysisContext::LossAnalysis => loss_metrics(ui),
                AnalysisContext::InvestmentInclusion => investment_metrics(ui, &catalogs),
            });
        });
}

fn loss_metrics(ui: &mut egui::Ui) {
    let totals = stats::loss_totals(reports::SUB_REGIONS);
    widgets::stat_card(
        ui,
        &format::musd(totals.economic_loss_musd),
        "Economic Loss",
        theme::RED,
    );
    widgets::stat_card(
        ui,
        &format!("{} ha", format::thousands(totals.area_burned_ha as u64)),
        "Area Burned",
        theme::ORANGE,
    );
    widgets::stat_card(
        ui,
        &format::thousands(totals.population_affected as u64),
        "People Affected",
        theme::PURPLE,
    );
    widgets::stat_card(
        ui,
        &format::kilotonnes(totals.carbon_released_t),
        "Carbon Released",
        theme::GREEN,
    );
}

fn investment_metrics(ui: &mut egui::Ui, catalogs: &FeatureCatalogs) {
    let totals = stats::investment_totals_for(catalogs);
    widgets::stat_card(
        ui,
        &format::musd(totals.funding_musd),
        "Community Investment",
        theme::GREEN,
    );
    widgets::stat_card(ui, &totals.jobs.to_string(), "Jobs Created", theme::BLUE);
    widgets::stat_card(
        ui,
        &format::kilotonnes(totals.carbon_credits_t),
        "Carbon Credits",
        theme::PURPLE,
    );
    // Headline inclusion rate: indigenous participation.
    let indigenous = INCLUSION_RATES[0];
    widgets::stat_card(
        ui,
        &format!("{}%", indigenous.percent),
        "Indigenous Participation",
        theme::ORANGE,
    );
}
