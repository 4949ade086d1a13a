//! Region constants shared across the workspace.
//!
//! The study area covers the Brazil–Bolivia border fire corridor. All
//! geographic coordinates in the catalogs fall inside `REGION_*` bounds;
//! [`crate::geo`] maps that bounding box onto a square world plane that the
//! rendering crate draws on.

use crate::geo::GeoPoint;

/// Southern edge of the study area (degrees latitude).
pub const REGION_LAT_MIN: f32 = -18.5;
/// Northern edge of the study area (degrees latitude).
pub const REGION_LAT_MAX: f32 = -14.5;
/// Western edge of the study area (degrees longitude).
pub const REGION_LON_MIN: f32 = -65.5;
/// Eastern edge of the study area (degrees longitude).
pub const REGION_LON_MAX: f32 = -61.5;

/// Default map focus: the Brazil–Bolivia border region.
pub const REGION_CENTER: GeoPoint = GeoPoint::new(-16.5, -63.2);

/// Side length of the square world plane the region projects onto,
/// in world units. One degree spans `WORLD_SIZE / 4` units.
pub const WORLD_SIZE: f32 = 4096.0;

/// Label shown in the map info box; the catalogs describe this window.
pub const ANALYSIS_PERIOD: &str = "Jan-Aug 2024";
