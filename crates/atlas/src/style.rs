//! Style resolution: categorical feature attributes to visual styling.
//!
//! [`resolve`] is a total function — every feature gets a style, and
//! unmapped categorical values fall through to a defined default bucket.
//! Styles are always recomputed from the record, never stored on it, so a
//! feature's appearance can never drift from its attributes.
//!
//! Colors are the dashboard's fixed palette, written as sRGB component
//! triples with the source hex value alongside.

use bevy::prelude::*;

use crate::features::{CommunityType, FireIntensity, GeoFeature, ProjectStatus};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

pub const BURN_CRITICAL_STROKE: Color = Color::srgb(0.600, 0.106, 0.106); // #991b1b
pub const BURN_CRITICAL_FILL: Color = Color::srgb(0.863, 0.149, 0.149); // #dc2626
pub const BURN_SEVERE_STROKE: Color = Color::srgb(0.761, 0.255, 0.047); // #c2410c
pub const BURN_SEVERE_FILL: Color = Color::srgb(0.918, 0.345, 0.047); // #ea580c
pub const BURN_HIGH_STROKE: Color = Color::srgb(0.918, 0.345, 0.047); // #ea580c
pub const BURN_HIGH_FILL: Color = Color::srgb(0.976, 0.451, 0.086); // #f97316
pub const BURN_MODERATE_STROKE: Color = Color::srgb(0.961, 0.620, 0.043); // #f59e0b
pub const BURN_MODERATE_FILL: Color = Color::srgb(0.984, 0.749, 0.141); // #fbbf24

pub const TERRITORY_BLUE: Color = Color::srgb(0.231, 0.510, 0.965); // #3b82f6
pub const INSTITUTIONAL_VIOLET: Color = Color::srgb(0.545, 0.361, 0.965); // #8b5cf6

pub const SITE_INDIGENOUS: Color = Color::srgb(0.133, 0.773, 0.369); // #22c55e
pub const SITE_VULNERABLE: Color = Color::srgb(0.961, 0.620, 0.043); // #f59e0b
pub const SITE_DEFAULT: Color = Color::srgb(0.231, 0.510, 0.965); // #3b82f6
pub const SITE_PLANNING: Color = Color::srgb(0.420, 0.447, 0.502); // #6b7280

const BURN_FILL_OPACITY: f32 = 0.6;
const ZONE_FILL_OPACITY: f32 = 0.2;
const STROKE_WEIGHT: f32 = 2.0;
const MARKER_RADIUS: f32 = 10.0;

/// Dash pattern as (on, off) lengths in outline units.
pub type DashPattern = (f32, f32);

const TERRITORY_DASH: DashPattern = (5.0, 5.0);
const INSTITUTIONAL_DASH: DashPattern = (10.0, 5.0);

// ---------------------------------------------------------------------------
// Style specs
// ---------------------------------------------------------------------------

/// Visual styling for polygon features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaStyle {
    pub stroke: Color,
    pub fill: Color,
    pub fill_opacity: f32,
    pub stroke_weight: f32,
    /// `None` draws a solid outline.
    pub dash: Option<DashPattern>,
}

/// Visual styling for point features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    pub radius: f32,
}

/// Resolved style for any feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureStyle {
    Area(AreaStyle),
    Marker(MarkerStyle),
}

impl FeatureStyle {
    pub fn as_area(&self) -> Option<&AreaStyle> {
        match self {
            Self::Area(style) => Some(style),
            Self::Marker(_) => None,
        }
    }

    pub fn as_marker(&self) -> Option<&MarkerStyle> {
        match self {
            Self::Marker(style) => Some(style),
            Self::Area(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Stroke/fill pair for a burn severity bucket. Unclassified severities
/// share the Moderate pair.
pub fn burn_colors(intensity: FireIntensity) -> (Color, Color) {
    match intensity.bucket() {
        FireIntensity::Critical => (BURN_CRITICAL_STROKE, BURN_CRITICAL_FILL),
        FireIntensity::Severe => (BURN_SEVERE_STROKE, BURN_SEVERE_FILL),
        FireIntensity::High => (BURN_HIGH_STROKE, BURN_HIGH_FILL),
        FireIntensity::Moderate | FireIntensity::Unclassified => {
            (BURN_MODERATE_STROKE, BURN_MODERATE_FILL)
        }
    }
}

/// Marker color for an investment site. Community type picks the base
/// color; a Planning status then overrides it unconditionally — a site in
/// planning always reads gray regardless of who carries it.
pub fn site_color(community_type: CommunityType, status: ProjectStatus) -> Color {
    if status == ProjectStatus::Planning {
        return SITE_PLANNING;
    }
    match community_type {
        CommunityType::Indigenous => SITE_INDIGENOUS,
        CommunityType::Vulnerable => SITE_VULNERABLE,
        CommunityType::MultiStakeholder => SITE_DEFAULT,
    }
}

/// Resolve the visual style for a feature. Total: never fails, never
/// panics — every categorical value lands in a defined bucket.
pub fn resolve(feature: &GeoFeature) -> FeatureStyle {
    match feature {
        GeoFeature::BurnZone(zone) => {
            let (stroke, fill) = burn_colors(zone.intensity);
            FeatureStyle::Area(AreaStyle {
                stroke,
                fill,
                fill_opacity: BURN_FILL_OPACITY,
                stroke_weight: STROKE_WEIGHT,
                dash: None,
            })
        }
        GeoFeature::Territory(_) => FeatureStyle::Area(AreaStyle {
            stroke: TERRITORY_BLUE,
            fill: TERRITORY_BLUE,
            fill_opacity: ZONE_FILL_OPACITY,
            stroke_weight: STROKE_WEIGHT,
            dash: Some(TERRITORY_DASH),
        }),
        GeoFeature::InstitutionalZone(_) => FeatureStyle::Area(AreaStyle {
            stroke: INSTITUTIONAL_VIOLET,
            fill: INSTITUTIONAL_VIOLET,
            fill_opacity: ZONE_FILL_OPACITY,
            stroke_weight: STROKE_WEIGHT,
            dash: Some(INSTITUTIONAL_DASH),
        }),
        GeoFeature::InvestmentSite(site) => FeatureStyle::Marker(MarkerStyle {
            color: site_color(site.community_type, site.status),
            radius: MARKER_RADIUS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{BurnZone, InvestmentSite, LandRights};
    use crate::geo::GeoPoint;

    const TEST_RING: &[GeoPoint] = &[
        GeoPoint::new(-16.0, -63.0),
        GeoPoint::new(-16.1, -63.0),
        GeoPoint::new(-16.1, -63.1),
    ];

    fn burn_zone(intensity: FireIntensity) -> GeoFeature {
        GeoFeature::BurnZone(BurnZone {
            name: "Test Zone",
            intensity,
            area_ha: 100,
            structures_lost: 0,
            vegetation: "Test",
            ring: TEST_RING,
        })
    }

    fn site(community_type: CommunityType, status: ProjectStatus) -> GeoFeature {
        GeoFeature::InvestmentSite(InvestmentSite {
            name: "Test Site",
            community: "Test",
            community_type,
            status,
            funding_musd: 1.0,
            carbon_credits_t: 1000,
            jobs: 10,
            impact_score: 50,
            land_rights: LandRights::Secured,
            position: GeoPoint::new(-16.0, -63.0),
        })
    }

    #[test]
    fn burn_intensity_color_table() {
        let cases = [
            (FireIntensity::Critical, BURN_CRITICAL_STROKE, BURN_CRITICAL_FILL),
            (FireIntensity::Severe, BURN_SEVERE_STROKE, BURN_SEVERE_FILL),
            (FireIntensity::High, BURN_HIGH_STROKE, BURN_HIGH_FILL),
            (FireIntensity::Moderate, BURN_MODERATE_STROKE, BURN_MODERATE_FILL),
        ];
        for (intensity, stroke, fill) in cases {
            let style = resolve(&burn_zone(intensity));
            let area = style.as_area().unwrap();
            assert_eq!(area.stroke, stroke, "{intensity:?} stroke");
            assert_eq!(area.fill, fill, "{intensity:?} fill");
            assert!((area.fill_opacity - 0.6).abs() < f32::EPSILON);
            assert!((area.stroke_weight - 2.0).abs() < f32::EPSILON);
            assert!(area.dash.is_none());
        }
    }

    #[test]
    fn unclassified_intensity_resolves_to_moderate_bucket() {
        let unmapped = resolve(&burn_zone(FireIntensity::from_name("Unknown")));
        let moderate = resolve(&burn_zone(FireIntensity::Moderate));
        assert_eq!(unmapped, moderate);
    }

    #[test]
    fn resolve_is_deterministic() {
        let feature = burn_zone(FireIntensity::Severe);
        assert_eq!(resolve(&feature), resolve(&feature));
    }

    #[test]
    fn territory_style_is_dashed_blue() {
        let feature = GeoFeature::Territory(crate::features::Territory {
            name: "Test Territory",
            ring: TEST_RING,
        });
        let style = resolve(&feature);
        let area = style.as_area().unwrap();
        assert_eq!(area.stroke, TERRITORY_BLUE);
        assert_eq!(area.fill, TERRITORY_BLUE);
        assert!((area.fill_opacity - 0.2).abs() < f32::EPSILON);
        assert_eq!(area.dash, Some((5.0, 5.0)));
    }

    #[test]
    fn institutional_dash_differs_from_territory() {
        let feature = GeoFeature::InstitutionalZone(crate::features::InstitutionalZone {
            name: "Test Zone",
            deal_size_musd: 1.0,
            ring: TEST_RING,
        });
        let area = resolve(&feature).as_area().copied().unwrap();
        assert_eq!(area.stroke, INSTITUTIONAL_VIOLET);
        assert_eq!(area.dash, Some((10.0, 5.0)));
        assert_ne!(area.dash, Some(TERRITORY_DASH));
    }

    #[test]
    fn site_colors_follow_community_type() {
        let cases = [
            (CommunityType::Indigenous, SITE_INDIGENOUS),
            (CommunityType::Vulnerable, SITE_VULNERABLE),
            (CommunityType::MultiStakeholder, SITE_DEFAULT),
        ];
        for (community_type, expected) in cases {
            let style = resolve(&site(community_type, ProjectStatus::Active));
            assert_eq!(style.as_marker().unwrap().color, expected);
        }
    }

    #[test]
    fn planning_status_overrides_community_color() {
        // The override must win even for Indigenous, the most specific type.
        for community_type in [
            CommunityType::Indigenous,
            CommunityType::Vulnerable,
            CommunityType::MultiStakeholder,
        ] {
            let style = resolve(&site(community_type, ProjectStatus::Planning));
            assert_eq!(style.as_marker().unwrap().color, SITE_PLANNING);
        }
    }
}
