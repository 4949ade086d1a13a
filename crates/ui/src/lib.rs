//! egui dashboard chrome: header, tabs, metric cards, the layer control
//! sidebar, the analysis sidebars, on-map overlays, and the feature
//! popup. Panels read the `atlas` resources and emit
//! [`atlas::controls::ControlAction`] events; they never write core state
//! directly.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod control_panel;
pub mod feature_info;
pub mod format;
pub mod header;
pub mod investment_panel;
pub mod legend;
pub mod loss_panel;
pub mod metrics;
pub mod theme;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<control_panel::LayerPanelOpen>()
            .init_resource::<control_panel::PriorityCriteria>()
            .add_systems(Startup, theme::apply_dashboard_theme)
            // One chain so panel layout order is stable frame to frame:
            // top bars, side panels, then overlays in the remaining map
            // viewport.
            .add_systems(
                Update,
                (
                    header::header_ui,
                    header::tabs_ui,
                    metrics::metrics_ui,
                    control_panel::control_panel_ui,
                    loss_panel::loss_panel_ui,
                    investment_panel::investment_panel_ui,
                    legend::legend_ui,
                    legend::map_info_ui,
                    legend::zoom_controls_ui,
                    feature_info::feature_info_ui,
                )
                    .chain(),
            );
    }
}
