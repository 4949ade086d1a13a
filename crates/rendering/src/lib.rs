//! Render surface adapter: draws the composed plan on a flat map plane.
//!
//! Consumes the `atlas` resources ([`atlas::compose::RenderPlan`],
//! [`atlas::controls::BaseMap`]) and owns the camera, the base-map
//! surface, the feature meshes/outlines, and cursor picking. Nothing here
//! writes dashboard state except [`picking::SelectedFeature`], which is
//! render-side UI state.

use bevy::prelude::*;

pub mod basemap;
pub mod camera;
pub mod feature_render;
pub mod picking;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<camera::CameraDrag>()
            .init_resource::<camera::CameraOrbitDrag>()
            .init_resource::<camera::LeftClickDrag>()
            .init_resource::<basemap::BaseSurface>()
            .init_resource::<picking::CursorMapPos>()
            .init_resource::<picking::SelectedFeature>()
            .insert_resource(ClearColor(Color::srgb(0.086, 0.106, 0.133)))
            .add_systems(
                Startup,
                (camera::setup_camera, basemap::spawn_base_surface),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan_keyboard,
                    camera::camera_pan_drag,
                    camera::camera_left_drag,
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::camera_zoom_keyboard,
                    camera::apply_orbit_camera,
                ),
            )
            .add_systems(
                Update,
                (
                    basemap::rebuild_base_texture,
                    feature_render::rebuild_feature_meshes,
                    feature_render::scale_markers,
                    feature_render::draw_feature_outlines,
                ),
            )
            .add_systems(
                Update,
                (
                    picking::update_cursor_map_pos,
                    picking::clear_selection_on_plan_change,
                    picking::handle_feature_click,
                )
                    .chain(),
            );
    }
}
