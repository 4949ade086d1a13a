//! Session controls: the single write path into dashboard state.
//!
//! UI panels never mutate the registry or context directly; they emit
//! [`ControlAction`] events, and [`apply_control_actions`] — the one writer —
//! applies them between frames. Composition ([`crate::compose`]) and export
//! run strictly after it in the schedule, so a context switch's layer
//! overwrite is never interleaved with a recomputation.

use bevy::prelude::*;

use crate::context::AnalysisContext;
use crate::layers::{LayerId, LayerRegistry};

/// The currently selected analytical context (tab).
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveContext(pub AnalysisContext);

/// Base-map tile styles. Selecting one swaps the background surface only;
/// feature composition is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseMapStyle {
    #[default]
    Satellite,
    Vegetation,
    Terrain,
    Osm,
}

/// All base-map styles, in selector order.
pub const ALL_BASE_MAPS: [BaseMapStyle; 4] = [
    BaseMapStyle::Satellite,
    BaseMapStyle::Vegetation,
    BaseMapStyle::Terrain,
    BaseMapStyle::Osm,
];

impl BaseMapStyle {
    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Satellite => "Satellite Imagery",
            Self::Vegetation => "Vegetation Index (NDVI)",
            Self::Terrain => "Terrain",
            Self::Osm => "OpenStreetMap",
        }
    }

    /// Short name for the map info box.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Satellite => "Satellite",
            Self::Vegetation => "Vegetation",
            Self::Terrain => "Terrain",
            Self::Osm => "OpenStreetMap",
        }
    }
}

/// The currently selected base-map style.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseMap(pub BaseMapStyle);

/// Analysis time window selector. The fixed catalogs describe the 2024
/// season; the selector is session state surfaced in the map info box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Y2024,
    Y2023,
    All,
}

pub const ALL_TIME_RANGES: [TimeRange; 3] = [TimeRange::Y2024, TimeRange::Y2023, TimeRange::All];

impl TimeRange {
    pub fn label(self) -> &'static str {
        match self {
            Self::Y2024 => "2024",
            Self::Y2023 => "2023",
            Self::All => "All Time",
        }
    }
}

/// The currently selected time range.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveTimeRange(pub TimeRange);

/// One-line status readout shown in the header (export results, etc.).
#[derive(Resource, Debug, Clone, Default)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn set(&mut self, message: impl Into<String>, is_error: bool) {
        self.message = message.into();
        self.is_error = is_error;
    }
}

/// Deferred export request; consumed by [`crate::export::perform_export`]
/// after recomposition so the written snapshot reflects this frame's plan.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ExportRequested(pub bool);

/// A user control event. Emitted by the UI, consumed exclusively by
/// [`apply_control_actions`].
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    ToggleLayer(LayerId),
    SetContext(AnalysisContext),
    SetBaseMap(BaseMapStyle),
    SetTimeRange(TimeRange),
    Export,
}

/// Apply queued control actions. The sole writer of [`LayerRegistry`],
/// [`ActiveContext`], [`BaseMap`], and [`ActiveTimeRange`].
pub fn apply_control_actions(
    mut actions: EventReader<ControlAction>,
    mut registry: ResMut<LayerRegistry>,
    mut context: ResMut<ActiveContext>,
    mut base_map: ResMut<BaseMap>,
    mut time_range: ResMut<ActiveTimeRange>,
    mut export: ResMut<ExportRequested>,
) {
    for &action in actions.read() {
        match action {
            ControlAction::ToggleLayer(id) => registry.toggle(id),
            ControlAction::SetContext(new_context) => {
                if context.0 != new_context {
                    context.0 = new_context;
                    // Reset-on-switch: the canonical set replaces whatever
                    // manual toggles the previous context accumulated.
                    registry.apply_context(new_context);
                }
            }
            ControlAction::SetBaseMap(style) => base_map.0 = style,
            ControlAction::SetTimeRange(range) => time_range.0 = range,
            ControlAction::Export => export.0 = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_map_labels_are_distinct() {
        let mut labels: Vec<&str> = ALL_BASE_MAPS.iter().map(|s| s.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ALL_BASE_MAPS.len());
    }

    #[test]
    fn status_line_set_replaces_message() {
        let mut status = StatusLine::default();
        status.set("exported", false);
        assert_eq!(status.message, "exported");
        assert!(!status.is_error);

        status.set("disk full", true);
        assert_eq!(status.message, "disk full");
        assert!(status.is_error);
    }

    #[test]
    fn default_session_state() {
        assert_eq!(ActiveContext::default().0, AnalysisContext::LossAnalysis);
        assert_eq!(BaseMap::default().0, BaseMapStyle::Satellite);
        assert_eq!(ActiveTimeRange::default().0, TimeRange::Y2024);
    }
}
