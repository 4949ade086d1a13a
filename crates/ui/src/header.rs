//! Header bar (title, crisis badge, export, status line) and the context
//! tab strip below it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use atlas::context::{AnalysisContext, ALL_CONTEXTS};
use atlas::controls::{ActiveContext, ControlAction, StatusLine};

use crate::theme;
use crate::widgets;

pub fn header_ui(
    mut contexts: EguiContexts,
    status: Res<StatusLine>,
    mut actions: EventWriter<ControlAction>,
) {
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(theme::CARD_BG)
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                // Crisis glyph in a red disc.
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                painter.circle_filled(rect.center(), 14.0, theme::RED);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "⚠",
                    egui::FontId::proportional(14.0),
                    egui::Color32::WHITE,
                );

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Brazil-Bolivia Wildfires")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT),
                    );
                    ui.label(
                        egui::RichText::new("Loss Analysis & Recovery Investment Platform")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    );
                });

                ui.add_space(8.0);
                widgets::badge(ui, "Active Crisis", theme::RED, egui::Color32::WHITE);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Export").clicked() {
                        actions.send(ControlAction::Export);
                    }
                    if !status.message.is_empty() {
                        let color = if status.is_error {
                            theme::RED
                        } else {
                            theme::TEXT_MUTED
                        };
                        ui.label(
                            egui::RichText::new(&status.message)
                                .size(theme::FONT_SMALL)
                                .color(color),
                        );
                    }
                });
            });
        });
}

pub fn tabs_ui(
    mut contexts: EguiContexts,
    active: Res<ActiveContext>,
    mut actions: EventWriter<ControlAction>,
) {
    egui::TopBottomPanel::top("tabs")
        .frame(
            egui::Frame::new()
                .fill(theme::CARD_BG)
                .inner_margin(egui::Margin::symmetric(12, 4)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                for context in ALL_CONTEXTS {
                    let selected = active.0 == context;
                    let text = egui::RichText::new(tab_label(context))
                        .size(theme::FONT_HEADING)
                        .color(if selected { theme::PRIMARY } else { theme::TEXT_MUTED });
                    if ui.selectable_label(selected, text).clicked() {
                        // The controls system ignores a reselect of the
                        // current tab, preserving manual toggles.
                        actions.send(ControlAction::SetContext(context));
                    }
                }
            });
        });
}

fn tab_label(context: AnalysisContext) -> &'static str {
    match context {
        AnalysisContext::LossAnalysis => "⚠ Loss Analysis",
        AnalysisContext::InvestmentInclusion => "📈 Investment & Inclusion",
    }
}
