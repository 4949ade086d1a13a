//! Draws the composed render plan: polygon fills as flat meshes, outlines
//! as gizmo lines (dashed where the style says so), and investment sites
//! as disc markers that keep a readable screen size as the camera zooms.
//!
//! Meshes are rebuilt wholesale whenever the plan changes — the catalogs
//! are small enough that a full respawn is cheaper than diffing.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;

use atlas::compose::RenderPlan;
use atlas::geo;
use atlas::style::FeatureStyle;

use crate::camera::OrbitCamera;

/// Height of the first areal fill above the base plane; subsequent plan
/// entries stack slightly higher so plan order wins where fills overlap.
const FILL_Y_BASE: f32 = 2.0;
const FILL_Y_STEP: f32 = 0.25;
/// Outlines sit just above their fill.
const OUTLINE_LIFT: f32 = 0.15;
/// Markers float above every fill.
const MARKER_Y: f32 = 12.0;

/// World units per style radius unit at the reference camera distance.
const MARKER_WORLD_PER_UNIT: f32 = 3.0;
/// Camera distance at which markers render at their nominal size.
const MARKER_REFERENCE_DISTANCE: f32 = 2800.0;
/// One dash-pattern unit in world units.
const DASH_WORLD_UNIT: f32 = 6.0;

/// Marker component for every spawned feature entity.
#[derive(Component)]
pub struct FeatureShape;

/// Disc entities for point features; scaled against camera distance.
#[derive(Component)]
pub struct MarkerDisc;

/// World radius of a marker for the given camera distance. Shared with
/// the picking hit test so clicks match what is on screen.
pub fn marker_world_radius(style_radius: f32, camera_distance: f32) -> f32 {
    let scale = (camera_distance / MARKER_REFERENCE_DISTANCE).clamp(0.5, 3.0);
    style_radius * MARKER_WORLD_PER_UNIT * scale
}

/// Fan-triangulation indices for a convex-ish ring of `n` vertices.
pub fn fan_indices(n: usize) -> Vec<u32> {
    let mut indices = Vec::new();
    for i in 1..n.saturating_sub(1) {
        indices.extend_from_slice(&[0, i as u32 + 1, i as u32]);
    }
    indices
}

/// Break a closed ring into dash segments of `on` length separated by
/// `off` gaps, carrying the pattern phase across vertices.
pub fn dash_segments(points: &[Vec2], on: f32, off: f32) -> Vec<(Vec2, Vec2)> {
    let mut out = Vec::new();
    if points.len() < 2 || on <= 0.0 {
        return out;
    }
    let period = on + off;
    let mut phase = 0.0_f32;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        let len = a.distance(b);
        if len <= f32::EPSILON {
            continue;
        }
        let dir = (b - a) / len;
        let mut pos = 0.0_f32;
        while pos < len {
            let remaining_in_phase = if phase < on { on - phase } else { period - phase };
            let step = remaining_in_phase.min(len - pos);
            if phase < on {
                out.push((a + dir * pos, a + dir * (pos + step)));
            }
            pos += step;
            phase += step;
            if phase >= period {
                phase -= period;
            }
        }
    }
    out
}

fn flat_polygon_mesh(points: &[Vec2]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| [p.x, 0.0, p.y]).collect();
    let normals: Vec<[f32; 3]> = points.iter().map(|_| [0.0, 1.0, 0.0]).collect();
    let uvs: Vec<[f32; 2]> = points.iter().map(|_| [0.0, 0.0]).collect();

    Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(bevy::render::mesh::Indices::U32(fan_indices(points.len())))
}

fn disc_mesh(radius: f32, segments: usize) -> Mesh {
    let mut positions: Vec<[f32; 3]> = vec![[0.0, 0.0, 0.0]];
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
        positions.push([radius * angle.cos(), 0.0, radius * angle.sin()]);
    }
    let normals: Vec<[f32; 3]> = positions.iter().map(|_| [0.0, 1.0, 0.0]).collect();
    let uvs: Vec<[f32; 2]> = positions.iter().map(|_| [0.0, 0.0]).collect();

    let mut indices = Vec::new();
    for i in 1..=segments as u32 {
        indices.extend_from_slice(&[0, i + 1, i]);
    }

    Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(bevy::render::mesh::Indices::U32(indices))
}

fn unlit_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Despawn and respawn all feature entities from the current plan.
pub fn rebuild_feature_meshes(
    plan: Res<RenderPlan>,
    existing: Query<Entity, With<FeatureShape>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !plan.is_changed() {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }

    for (index, styled) in plan.features.iter().enumerate() {
        match (&styled.style, styled.feature.ring(), styled.feature.position()) {
            (FeatureStyle::Area(area), Some(ring), _) => {
                let world_ring = geo::project_ring(ring);
                let mesh = meshes.add(flat_polygon_mesh(&world_ring));
                let fill = area.fill.to_srgba();
                let material = materials.add(unlit_material(Color::srgba(
                    fill.red,
                    fill.green,
                    fill.blue,
                    area.fill_opacity,
                )));
                commands.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::from_xyz(0.0, FILL_Y_BASE + index as f32 * FILL_Y_STEP, 0.0),
                    FeatureShape,
                ));
            }
            (FeatureStyle::Marker(marker), _, Some(position)) => {
                let center = geo::project(position);
                let radius = marker.radius * MARKER_WORLD_PER_UNIT;

                // White halo behind the colored disc, echoing the map pin
                // border.
                let halo = meshes.add(disc_mesh(radius * 1.25, 32));
                let halo_material = materials.add(unlit_material(Color::WHITE));
                commands.spawn((
                    Mesh3d(halo),
                    MeshMaterial3d(halo_material),
                    Transform::from_xyz(center.x, MARKER_Y - 0.1, center.y),
                    FeatureShape,
                    MarkerDisc,
                ));

                let disc = meshes.add(disc_mesh(radius, 32));
                let material = materials.add(unlit_material(marker.color));
                commands.spawn((
                    Mesh3d(disc),
                    MeshMaterial3d(material),
                    Transform::from_xyz(center.x, MARKER_Y, center.y),
                    FeatureShape,
                    MarkerDisc,
                ));
            }
            // A style/geometry mismatch cannot be produced by the
            // composition engine; skip rather than panic if it ever is.
            _ => {}
        }
    }
}

/// Keep markers readable while zooming by scaling them with camera
/// distance.
pub fn scale_markers(
    orbit: Res<OrbitCamera>,
    mut markers: Query<&mut Transform, With<MarkerDisc>>,
) {
    // Unconditional: also covers discs freshly spawned this frame.
    let scale = (orbit.distance / MARKER_REFERENCE_DISTANCE).clamp(0.5, 3.0);
    for mut transform in markers.iter_mut() {
        if transform.scale.x != scale {
            transform.scale = Vec3::splat(scale);
        }
    }
}

/// Draw polygon outlines each frame with gizmos, honoring dash patterns.
pub fn draw_feature_outlines(plan: Res<RenderPlan>, mut gizmos: Gizmos) {
    for (index, styled) in plan.features.iter().enumerate() {
        let FeatureStyle::Area(area) = &styled.style else {
            continue;
        };
        let Some(ring) = styled.feature.ring() else {
            continue;
        };
        let world_ring = geo::project_ring(ring);
        let y = FILL_Y_BASE + index as f32 * FILL_Y_STEP + OUTLINE_LIFT;
        let lift = |p: Vec2| Vec3::new(p.x, y, p.y);

        match area.dash {
            Some((on, off)) => {
                for (a, b) in
                    dash_segments(&world_ring, on * DASH_WORLD_UNIT, off * DASH_WORLD_UNIT)
                {
                    gizmos.line(lift(a), lift(b), area.stroke);
                }
            }
            None => {
                for i in 0..world_ring.len() {
                    let a = world_ring[i];
                    let b = world_ring[(i + 1) % world_ring.len()];
                    gizmos.line(lift(a), lift(b), area.stroke);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_indices_triangle_count() {
        assert_eq!(fan_indices(3).len(), 3);
        assert_eq!(fan_indices(5).len(), 9); // 3 triangles
        assert!(fan_indices(2).is_empty());
        assert!(fan_indices(0).is_empty());
    }

    #[test]
    fn fan_indices_reference_first_vertex() {
        let indices = fan_indices(5);
        for triangle in indices.chunks(3) {
            assert_eq!(triangle[0], 0);
        }
    }

    #[test]
    fn dash_segments_cover_half_the_perimeter_for_equal_pattern() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let segments = dash_segments(&square, 5.0, 5.0);
        let dashed_length: f32 = segments.iter().map(|(a, b)| a.distance(*b)).sum();
        assert!((dashed_length - 20.0).abs() < 1e-3, "got {dashed_length}");
    }

    #[test]
    fn dash_phase_carries_across_vertices() {
        // on=7, off=3 over a 10-length edge leaves the pattern mid-gap at
        // the corner; the next edge must start inside that gap.
        let path = vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        let segments = dash_segments(&path, 7.0, 3.0);
        // First dash: 0..7 on edge one. Second dash starts at phase 0 again,
        // i.e. at corner distance 10 -> (10,0)..(10,7) then gap.
        assert!(segments.len() >= 2);
        let (start, end) = segments[0];
        assert!(start.distance(Vec2::ZERO) < 1e-4);
        assert!((end.x - 7.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_inputs_yield_no_dashes() {
        assert!(dash_segments(&[], 5.0, 5.0).is_empty());
        assert!(dash_segments(&[Vec2::ZERO], 5.0, 5.0).is_empty());
        let square = vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
        assert!(dash_segments(&square, 0.0, 5.0).is_empty());
    }

    #[test]
    fn marker_radius_scales_with_distance_within_bounds() {
        let near = marker_world_radius(10.0, 100.0);
        let reference = marker_world_radius(10.0, MARKER_REFERENCE_DISTANCE);
        let far = marker_world_radius(10.0, 100_000.0);
        assert!(near < reference && reference < far);
        // Clamped at both ends.
        assert!((near - 10.0 * MARKER_WORLD_PER_UNIT * 0.5).abs() < 1e-4);
        assert!((far - 10.0 * MARKER_WORLD_PER_UNIT * 3.0).abs() < 1e-4);
    }
}
