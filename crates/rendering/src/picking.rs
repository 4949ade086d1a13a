//! Cursor picking: ray-casts the cursor onto the map plane and hit-tests
//! the composed features so a click opens the info popup for the feature
//! under the pointer.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use atlas::compose::RenderPlan;
use atlas::geo::{self, GeoPoint};
use atlas::style::FeatureStyle;

use crate::camera::{LeftClickDrag, OrbitCamera};
use crate::feature_render::marker_world_radius;

/// Where the cursor ray meets the map plane.
#[derive(Resource)]
pub struct CursorMapPos {
    pub world: Vec2,
    pub geo: GeoPoint,
    pub valid: bool,
}

impl Default for CursorMapPos {
    fn default() -> Self {
        Self {
            world: Vec2::ZERO,
            geo: geo::unproject(Vec2::ZERO),
            valid: false,
        }
    }
}

/// Index into `RenderPlan::features` of the feature whose popup is open.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedFeature(pub Option<usize>);

/// Returns `true` when egui wants the pointer — the cursor is over a
/// panel or egui is mid-drag. World picking skips those frames.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Ray-plane intersection against the Y=0 map plane.
pub fn update_cursor_map_pos(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut cursor: ResMut<CursorMapPos>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    if let Some(screen_pos) = window.cursor_position() {
        if let Ok(ray) = camera.viewport_to_world(cam_transform, screen_pos) {
            if ray.direction.y.abs() > 0.001 {
                let t = -ray.origin.y / ray.direction.y;
                if t > 0.0 {
                    let hit = ray.origin + ray.direction * t;
                    cursor.world = Vec2::new(hit.x, hit.z);
                    cursor.geo = geo::unproject(cursor.world);
                    cursor.valid = true;
                    return;
                }
            }
        }
    }
    cursor.valid = false;
}

/// Hit-test the plan under `world`, topmost drawn feature first. Markers
/// sit above fills, and later plan entries above earlier ones, so a
/// reverse scan gives the visually-correct winner.
pub fn feature_at(plan: &RenderPlan, world: Vec2, camera_distance: f32) -> Option<usize> {
    for (index, styled) in plan.features.iter().enumerate().rev() {
        match &styled.style {
            FeatureStyle::Marker(marker) => {
                if let Some(position) = styled.feature.position() {
                    let center = geo::project(position);
                    let radius = marker_world_radius(marker.radius, camera_distance);
                    if center.distance(world) <= radius {
                        return Some(index);
                    }
                }
            }
            FeatureStyle::Area(_) => {
                if let Some(ring) = styled.feature.ring() {
                    if geo::point_in_ring(world, &geo::project_ring(ring)) {
                        return Some(index);
                    }
                }
            }
        }
    }
    None
}

/// Left click selects the feature under the cursor; clicking empty map or
/// pressing Escape clears the popup.
pub fn handle_feature_click(
    mut contexts: EguiContexts,
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    cursor: Res<CursorMapPos>,
    plan: Res<RenderPlan>,
    orbit: Res<OrbitCamera>,
    left_drag: Res<LeftClickDrag>,
    mut selected: ResMut<SelectedFeature>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        selected.0 = None;
        return;
    }

    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    // Suppress picking while the pointer is over UI or panning the camera.
    if egui_wants_pointer(&mut contexts) || left_drag.is_dragging {
        return;
    }
    if !cursor.valid {
        return;
    }

    selected.0 = feature_at(&plan, cursor.world, orbit.distance);
}

/// Selection indices point into the plan; drop them when it is rebuilt.
pub fn clear_selection_on_plan_change(
    plan: Res<RenderPlan>,
    mut selected: ResMut<SelectedFeature>,
) {
    if plan.is_changed() && selected.0.is_some() {
        selected.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas::catalog::FeatureCatalogs;
    use atlas::compose::compose;
    use atlas::context::AnalysisContext;
    use atlas::layers::LayerRegistry;

    fn investment_plan() -> RenderPlan {
        let mut registry = LayerRegistry::default();
        registry.apply_context(AnalysisContext::InvestmentInclusion);
        compose(
            AnalysisContext::InvestmentInclusion,
            &registry,
            &FeatureCatalogs::default(),
        )
    }

    #[test]
    fn click_on_marker_selects_the_site() {
        let plan = investment_plan();
        let catalogs = FeatureCatalogs::default();
        let center = geo::project(catalogs.sites[0].position);

        let hit = feature_at(&plan, center, 2800.0);
        let index = hit.expect("marker center must hit");
        assert_eq!(plan.features[index].feature.name(), catalogs.sites[0].name);
    }

    #[test]
    fn click_outside_everything_selects_nothing() {
        let plan = investment_plan();
        // The far north-west world corner holds no features.
        assert_eq!(feature_at(&plan, Vec2::new(1.0, 1.0), 2800.0), None);
    }

    #[test]
    fn burn_zone_interior_hits_under_loss_context() {
        let registry = LayerRegistry::default();
        let catalogs = FeatureCatalogs::default();
        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);

        // Amazon Border zone: the one burn polygon no territory overlaps,
        // so the zone itself must win. (Pantanal Norte lies under the
        // Pantanal Indigenous Area, which is drawn above it.)
        let zone = &catalogs.burn_zones[3];
        let ring = geo::project_ring(zone.ring);
        let centroid = ring.iter().copied().sum::<Vec2>() / ring.len() as f32;

        let hit = feature_at(&plan, centroid, 2800.0);
        let index = hit.expect("burn zone centroid must hit");
        assert_eq!(plan.features[index].feature.name(), zone.name);
    }

    #[test]
    fn territory_wins_over_underlying_burn_zone() {
        let registry = LayerRegistry::default();
        let catalogs = FeatureCatalogs::default();
        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);

        // The Pantanal Indigenous Area sits on top of the Pantanal Norte
        // burn zone; a click inside both picks the territory.
        let ring = geo::project_ring(catalogs.territories[1].ring);
        let centroid = ring.iter().copied().sum::<Vec2>() / ring.len() as f32;

        let index = feature_at(&plan, centroid, 2800.0).unwrap();
        assert_eq!(
            plan.features[index].feature.name(),
            catalogs.territories[1].name
        );
    }

    #[test]
    fn marker_wins_over_underlying_polygon() {
        // Site 0 sits inside the Pantanal Indigenous Area territory; the
        // marker is drawn on top, so it must win the hit test.
        let plan = investment_plan();
        let catalogs = FeatureCatalogs::default();
        let center = geo::project(catalogs.sites[0].position);

        let index = feature_at(&plan, center, 2800.0).unwrap();
        assert!(matches!(
            plan.features[index].style,
            FeatureStyle::Marker(_)
        ));
    }
}
