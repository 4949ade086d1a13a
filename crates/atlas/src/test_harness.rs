//! # TestAtlas — headless integration test harness
//!
//! Wraps `bevy::app::App` + [`AtlasPlugin`](crate::AtlasPlugin) for
//! exercising the event-driven control flow without a window or renderer.
//! Send control actions, tick the app, then assert on the resulting
//! resources.

use bevy::app::App;
use bevy::prelude::*;

use crate::catalog::FeatureCatalogs;
use crate::compose::RenderPlan;
use crate::context::AnalysisContext;
use crate::controls::{ActiveContext, BaseMap, ControlAction, StatusLine};
use crate::layers::{LayerId, LayerRegistry};
use crate::AtlasPlugin;

/// A headless Bevy App wrapping `AtlasPlugin` for integration testing.
pub struct TestAtlas {
    app: App,
}

impl Default for TestAtlas {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAtlas {
    /// Build a session with the default catalogs and run one update so
    /// startup composition has happened.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(AtlasPlugin);
        app.update();
        Self { app }
    }

    /// Build a session over empty catalogs.
    pub fn with_empty_catalogs() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(AtlasPlugin);
        app.insert_resource(FeatureCatalogs::empty());
        app.update();
        Self { app }
    }

    /// Queue a control action for the next tick.
    pub fn send(&mut self, action: ControlAction) -> &mut Self {
        self.app.world_mut().send_event(action);
        self
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    /// Queue an action and advance one frame.
    pub fn act(&mut self, action: ControlAction) -> &mut Self {
        self.send(action).tick()
    }

    // -----------------------------------------------------------------------
    // State accessors
    // -----------------------------------------------------------------------

    pub fn plan(&self) -> &RenderPlan {
        self.app.world().resource::<RenderPlan>()
    }

    pub fn registry(&self) -> &LayerRegistry {
        self.app.world().resource::<LayerRegistry>()
    }

    pub fn context(&self) -> AnalysisContext {
        self.app.world().resource::<ActiveContext>().0
    }

    pub fn base_map(&self) -> BaseMap {
        *self.app.world().resource::<BaseMap>()
    }

    pub fn status(&self) -> &StatusLine {
        self.app.world().resource::<StatusLine>()
    }

    pub fn is_layer_active(&self, id: LayerId) -> bool {
        self.registry().is_active(id)
    }
}
