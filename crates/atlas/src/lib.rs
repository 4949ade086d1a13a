//! Domain core of the wildfire loss & recovery investment atlas.
//!
//! Holds the fixed feature catalogs, the thematic layer registry, the
//! context-layer policy, the style resolver, and the composition engine
//! that turns them into a [`compose::RenderPlan`]. The rendering and ui
//! crates only read the resources registered here; all mutation funnels
//! through [`controls::ControlAction`] events.

use bevy::prelude::*;

pub mod catalog;
pub mod compose;
pub mod config;
pub mod context;
pub mod controls;
pub mod export;
pub mod features;
pub mod geo;
pub mod layers;
pub mod reports;
pub mod stats;
pub mod style;
pub mod test_harness;

#[cfg(test)]
mod integration_tests;

pub struct AtlasPlugin;

impl Plugin for AtlasPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<controls::ControlAction>()
            .init_resource::<catalog::FeatureCatalogs>()
            .init_resource::<layers::LayerRegistry>()
            .init_resource::<controls::ActiveContext>()
            .init_resource::<controls::BaseMap>()
            .init_resource::<controls::ActiveTimeRange>()
            .init_resource::<controls::StatusLine>()
            .init_resource::<controls::ExportRequested>()
            .init_resource::<compose::RenderPlan>()
            // Strict order: controls mutate, composition derives, export
            // snapshots — all within one frame.
            .add_systems(
                Update,
                (
                    controls::apply_control_actions,
                    compose::recompose_plan,
                    export::perform_export,
                )
                    .chain(),
            );
    }
}
