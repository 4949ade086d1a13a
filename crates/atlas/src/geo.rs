//! Geographic coordinates and the projection onto the world plane.
//!
//! An equirectangular projection maps the region bounding box onto a
//! `WORLD_SIZE` x `WORLD_SIZE` XZ plane: +X runs east, +Z runs south (so
//! north is toward -Z, matching the camera's default heading). Latitude and
//! longitude spans are equal (4 degrees each), so the projection has no
//! aspect distortion at this scale.

use bevy::prelude::*;
use serde::Serialize;

use crate::config::{
    REGION_LAT_MAX, REGION_LAT_MIN, REGION_LON_MAX, REGION_LON_MIN, WORLD_SIZE,
};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    pub const fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }
}

/// Project a geographic point onto the world plane (XZ coordinates).
pub fn project(p: GeoPoint) -> Vec2 {
    let x = (p.lon - REGION_LON_MIN) / (REGION_LON_MAX - REGION_LON_MIN) * WORLD_SIZE;
    let z = (REGION_LAT_MAX - p.lat) / (REGION_LAT_MAX - REGION_LAT_MIN) * WORLD_SIZE;
    Vec2::new(x, z)
}

/// Inverse of [`project`]: recover the geographic point under a world
/// position. Used by the picking path to report cursor coordinates.
pub fn unproject(world: Vec2) -> GeoPoint {
    let lon = REGION_LON_MIN + world.x / WORLD_SIZE * (REGION_LON_MAX - REGION_LON_MIN);
    let lat = REGION_LAT_MAX - world.y / WORLD_SIZE * (REGION_LAT_MAX - REGION_LAT_MIN);
    GeoPoint::new(lat, lon)
}

/// Project a polygon ring into world coordinates.
pub fn project_ring(ring: &[GeoPoint]) -> Vec<Vec2> {
    ring.iter().copied().map(project).collect()
}

/// Ray-casting point-in-polygon test against a projected ring.
///
/// The ring is treated as closed (last vertex connects back to the first).
/// Points exactly on an edge may land on either side; the catalogs never
/// place features edge-to-edge, so the ambiguity is harmless here.
pub fn point_in_ring(p: Vec2, ring: &[Vec2]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            if p.x < a.x + t * (b.x - a.x) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
