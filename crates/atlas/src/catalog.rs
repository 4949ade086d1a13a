//! The fixed feature catalogs for the 2024 Brazil–Bolivia fire season.
//!
//! All records are immutable and loaded once at startup; the composition
//! engine filters them but never mutates or extends them. Coordinates are
//! decimal degrees, polygon rings listed clockwise as digitized.

use bevy::prelude::*;

use crate::features::{
    BurnZone, CommunityType, FireIntensity, InstitutionalZone, InvestmentSite, LandRights,
    ProjectStatus, Territory,
};
use crate::geo::GeoPoint;

const PANTANAL_NORTE_RING: &[GeoPoint] = &[
    GeoPoint::new(-16.1, -63.4),
    GeoPoint::new(-16.3, -63.4),
    GeoPoint::new(-16.4, -63.7),
    GeoPoint::new(-16.2, -63.8),
    GeoPoint::new(-16.0, -63.6),
];

const CHIQUITANIA_RING: &[GeoPoint] = &[
    GeoPoint::new(-17.6, -63.0),
    GeoPoint::new(-17.9, -63.1),
    GeoPoint::new(-18.0, -63.4),
    GeoPoint::new(-17.7, -63.5),
    GeoPoint::new(-17.5, -63.2),
];

const CERRADO_SUL_RING: &[GeoPoint] = &[
    GeoPoint::new(-15.3, -62.3),
    GeoPoint::new(-15.6, -62.4),
    GeoPoint::new(-15.7, -62.7),
    GeoPoint::new(-15.4, -62.8),
    GeoPoint::new(-15.2, -62.5),
];

const AMAZON_BORDER_RING: &[GeoPoint] = &[
    GeoPoint::new(-16.6, -64.0),
    GeoPoint::new(-16.9, -64.1),
    GeoPoint::new(-17.0, -64.4),
    GeoPoint::new(-16.7, -64.5),
    GeoPoint::new(-16.5, -64.2),
];

const EASTERN_CHIQUITANIA_RING: &[GeoPoint] = &[
    GeoPoint::new(-17.0, -62.5),
    GeoPoint::new(-17.2, -62.6),
    GeoPoint::new(-17.3, -62.9),
    GeoPoint::new(-17.1, -63.0),
    GeoPoint::new(-16.9, -62.7),
];

const PANTANAL_SOUTH_RING: &[GeoPoint] = &[
    GeoPoint::new(-16.7, -63.5),
    GeoPoint::new(-16.9, -63.6),
    GeoPoint::new(-17.0, -63.9),
    GeoPoint::new(-16.8, -64.0),
    GeoPoint::new(-16.6, -63.7),
];

const CHIQUITANO_TERRITORY_RING: &[GeoPoint] = &[
    GeoPoint::new(-17.5, -62.8),
    GeoPoint::new(-17.8, -62.8),
    GeoPoint::new(-17.8, -63.2),
    GeoPoint::new(-17.5, -63.2),
];

const PANTANAL_INDIGENOUS_RING: &[GeoPoint] = &[
    GeoPoint::new(-16.1, -63.3),
    GeoPoint::new(-16.4, -63.3),
    GeoPoint::new(-16.4, -63.7),
    GeoPoint::new(-16.1, -63.7),
];

const NDB_ZONE_RING: &[GeoPoint] = &[
    GeoPoint::new(-17.2, -62.8),
    GeoPoint::new(-17.5, -62.8),
    GeoPoint::new(-17.5, -63.2),
    GeoPoint::new(-17.2, -63.2),
];

const IFC_ZONE_RING: &[GeoPoint] = &[
    GeoPoint::new(-15.8, -63.0),
    GeoPoint::new(-16.1, -63.0),
    GeoPoint::new(-16.1, -63.4),
    GeoPoint::new(-15.8, -63.4),
];

/// All feature records, grouped by kind in catalog order.
#[derive(Resource, Debug, Clone)]
pub struct FeatureCatalogs {
    pub burn_zones: Vec<BurnZone>,
    pub territories: Vec<Territory>,
    pub sites: Vec<InvestmentSite>,
    pub institutional: Vec<InstitutionalZone>,
}

impl Default for FeatureCatalogs {
    fn default() -> Self {
        Self {
            burn_zones: vec![
                BurnZone {
                    name: "Pantanal Norte Burn Zone",
                    intensity: FireIntensity::Critical,
                    area_ha: 18_500,
                    structures_lost: 145,
                    vegetation: "Primary Forest",
                    ring: PANTANAL_NORTE_RING,
                },
                BurnZone {
                    name: "Chiquitania Severe Burn",
                    intensity: FireIntensity::Severe,
                    area_ha: 24_200,
                    structures_lost: 78,
                    vegetation: "Mixed Forest",
                    ring: CHIQUITANIA_RING,
                },
                BurnZone {
                    name: "Cerrado Sul Moderate Burn",
                    intensity: FireIntensity::Moderate,
                    area_ha: 15_800,
                    structures_lost: 23,
                    vegetation: "Cerrado Savanna",
                    ring: CERRADO_SUL_RING,
                },
                BurnZone {
                    name: "Amazon Border High Intensity",
                    intensity: FireIntensity::High,
                    area_ha: 11_300,
                    structures_lost: 12,
                    vegetation: "Amazon Rainforest",
                    ring: AMAZON_BORDER_RING,
                },
                BurnZone {
                    name: "Eastern Chiquitania Burn",
                    intensity: FireIntensity::High,
                    area_ha: 8_900,
                    structures_lost: 56,
                    vegetation: "Secondary Forest",
                    ring: EASTERN_CHIQUITANIA_RING,
                },
                BurnZone {
                    name: "Pantanal South Moderate",
                    intensity: FireIntensity::Moderate,
                    area_ha: 6_200,
                    structures_lost: 34,
                    vegetation: "Wetland Forest",
                    ring: PANTANAL_SOUTH_RING,
                },
            ],
            territories: vec![
                Territory {
                    name: "Chiquitano Territory",
                    ring: CHIQUITANO_TERRITORY_RING,
                },
                Territory {
                    name: "Pantanal Indigenous Area",
                    ring: PANTANAL_INDIGENOUS_RING,
                },
            ],
            sites: vec![
                InvestmentSite {
                    name: "Pantanal Indigenous Restoration Co-op",
                    community: "Chiquitano Territory",
                    community_type: CommunityType::Indigenous,
                    status: ProjectStatus::Active,
                    funding_musd: 2.8,
                    carbon_credits_t: 45_000,
                    jobs: 120,
                    impact_score: 92,
                    land_rights: LandRights::Secured,
                    position: GeoPoint::new(-16.2, -63.5),
                },
                InvestmentSite {
                    name: "Cerrado Agroforestry Initiative",
                    community: "Small Farmers Collective",
                    community_type: CommunityType::Vulnerable,
                    status: ProjectStatus::Planning,
                    funding_musd: 1.5,
                    carbon_credits_t: 28_000,
                    jobs: 85,
                    impact_score: 87,
                    land_rights: LandRights::InProcess,
                    position: GeoPoint::new(-15.4, -62.6),
                },
                InvestmentSite {
                    name: "Amazon Border Fire Prevention",
                    community: "Mixed Communities",
                    community_type: CommunityType::MultiStakeholder,
                    status: ProjectStatus::Active,
                    funding_musd: 3.2,
                    carbon_credits_t: 52_000,
                    jobs: 200,
                    impact_score: 89,
                    land_rights: LandRights::Secured,
                    position: GeoPoint::new(-16.8, -64.2),
                },
            ],
            institutional: vec![
                InstitutionalZone {
                    name: "New Development Bank Zone",
                    deal_size_musd: 45.0,
                    ring: NDB_ZONE_RING,
                },
                InstitutionalZone {
                    name: "IFC Blended Finance Area",
                    deal_size_musd: 32.0,
                    ring: IFC_ZONE_RING,
                },
            ],
        }
    }
}

impl FeatureCatalogs {
    /// An empty catalog set. Composition over it yields an empty plan;
    /// used by tests exercising the empty-state contract.
    pub fn empty() -> Self {
        Self {
            burn_zones: Vec::new(),
            territories: Vec::new(),
            sites: Vec::new(),
            institutional: Vec::new(),
        }
    }

    /// Total burned area across the catalog, in hectares.
    pub fn total_burned_ha(&self) -> u32 {
        self.burn_zones.iter().map(|z| z.area_ha).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{REGION_LAT_MAX, REGION_LAT_MIN, REGION_LON_MAX, REGION_LON_MIN};

    #[test]
    fn catalog_record_counts() {
        let catalogs = FeatureCatalogs::default();
        assert_eq!(catalogs.burn_zones.len(), 6);
        assert_eq!(catalogs.territories.len(), 2);
        assert_eq!(catalogs.sites.len(), 3);
        assert_eq!(catalogs.institutional.len(), 2);
    }

    #[test]
    fn total_burned_area_matches_records() {
        let catalogs = FeatureCatalogs::default();
        assert_eq!(catalogs.total_burned_ha(), 84_900);
    }

    #[test]
    fn every_coordinate_lies_inside_region_bounds() {
        let catalogs = FeatureCatalogs::default();
        let mut points: Vec<GeoPoint> = Vec::new();
        for zone in &catalogs.burn_zones {
            points.extend_from_slice(zone.ring);
        }
        for territory in &catalogs.territories {
            points.extend_from_slice(territory.ring);
        }
        for zone in &catalogs.institutional {
            points.extend_from_slice(zone.ring);
        }
        points.extend(catalogs.sites.iter().map(|s| s.position));

        for p in points {
            assert!(
                (REGION_LAT_MIN..=REGION_LAT_MAX).contains(&p.lat),
                "latitude {} out of bounds",
                p.lat
            );
            assert!(
                (REGION_LON_MIN..=REGION_LON_MAX).contains(&p.lon),
                "longitude {} out of bounds",
                p.lon
            );
        }
    }

    #[test]
    fn rings_have_at_least_three_vertices() {
        let catalogs = FeatureCatalogs::default();
        for zone in &catalogs.burn_zones {
            assert!(zone.ring.len() >= 3);
        }
        for territory in &catalogs.territories {
            assert!(territory.ring.len() >= 3);
        }
        for zone in &catalogs.institutional {
            assert!(zone.ring.len() >= 3);
        }
    }
}
