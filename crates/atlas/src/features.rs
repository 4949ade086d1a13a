//! Geospatial feature records and their categorical attributes.
//!
//! [`GeoFeature`] is a closed tagged union over the four thematic record
//! kinds the dashboard draws. Keeping it closed means the style resolver,
//! variant eligibility, and the popup renderer are all exhaustive matches:
//! adding a kind forces every dependent site to be updated.

use serde::Serialize;

use crate::geo::GeoPoint;
use crate::layers::LayerId;

// ---------------------------------------------------------------------------
// Categorical attributes
// ---------------------------------------------------------------------------

/// Burn severity classification.
///
/// `Unclassified` is the escape hatch for source data whose severity string
/// matches none of the four known tiers; it styles and legends as the
/// Moderate bucket. The shipped catalog only uses the four named tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FireIntensity {
    Critical,
    Severe,
    High,
    Moderate,
    Unclassified,
}

impl FireIntensity {
    /// Parse a severity string from upstream fire-perimeter data.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Critical" => Self::Critical,
            "Severe" => Self::Severe,
            "High" => Self::High,
            "Moderate" => Self::Moderate,
            _ => Self::Unclassified,
        }
    }

    /// Display label. Unclassified severities read as "Unclassified" in the
    /// popup but share the Moderate legend bucket (see [`Self::bucket`]).
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Severe => "Severe",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Unclassified => "Unclassified",
        }
    }

    /// The legend/style bucket this severity falls into.
    pub fn bucket(self) -> FireIntensity {
        match self {
            Self::Unclassified => Self::Moderate,
            other => other,
        }
    }
}

/// Who carries an investment project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommunityType {
    Indigenous,
    Vulnerable,
    MultiStakeholder,
}

impl CommunityType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Indigenous => "Indigenous Community",
            Self::Vulnerable => "Vulnerable Group",
            Self::MultiStakeholder => "Multi-Stakeholder",
        }
    }
}

/// Lifecycle stage of an investment project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Active,
    Planning,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Planning => "Planning",
        }
    }
}

/// Land-tenure state of the community carrying a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LandRights {
    Secured,
    InProcess,
}

impl LandRights {
    pub fn label(self) -> &'static str {
        match self {
            Self::Secured => "Secured",
            Self::InProcess => "In Process",
        }
    }
}

// ---------------------------------------------------------------------------
// Feature records
// ---------------------------------------------------------------------------

/// A burned-area polygon with loss attributes.
#[derive(Debug, Clone, Serialize)]
pub struct BurnZone {
    pub name: &'static str,
    pub intensity: FireIntensity,
    pub area_ha: u32,
    pub structures_lost: u32,
    pub vegetation: &'static str,
    pub ring: &'static [GeoPoint],
}

/// An indigenous territory polygon. Uniform category: no per-record
/// attributes beyond the name and outline.
#[derive(Debug, Clone, Serialize)]
pub struct Territory {
    pub name: &'static str,
    pub ring: &'static [GeoPoint],
}

/// A community investment project, drawn as a point marker.
#[derive(Debug, Clone, Serialize)]
pub struct InvestmentSite {
    pub name: &'static str,
    pub community: &'static str,
    pub community_type: CommunityType,
    pub status: ProjectStatus,
    pub funding_musd: f32,
    pub carbon_credits_t: u32,
    pub jobs: u32,
    pub impact_score: u8,
    pub land_rights: LandRights,
    pub position: GeoPoint,
}

/// An institutional finance zone polygon.
#[derive(Debug, Clone, Serialize)]
pub struct InstitutionalZone {
    pub name: &'static str,
    pub deal_size_musd: f32,
    pub ring: &'static [GeoPoint],
}

// ---------------------------------------------------------------------------
// The closed feature union
// ---------------------------------------------------------------------------

/// Any feature the composition engine can place on the map.
#[derive(Debug, Clone, Serialize)]
pub enum GeoFeature {
    BurnZone(BurnZone),
    Territory(Territory),
    InvestmentSite(InvestmentSite),
    InstitutionalZone(InstitutionalZone),
}

/// Discriminant of [`GeoFeature`], used for eligibility checks and layer
/// gating without borrowing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureKind {
    BurnZone,
    Territory,
    InvestmentSite,
    InstitutionalZone,
}

impl FeatureKind {
    /// The registry layer that gates visibility of this feature kind.
    pub fn governing_layer(self) -> LayerId {
        match self {
            Self::BurnZone => LayerId::Fires,
            Self::Territory => LayerId::Indigenous,
            Self::InvestmentSite => LayerId::Projects,
            Self::InstitutionalZone => LayerId::Institutional,
        }
    }

    /// Whether features of this kind are drawn as filled polygons
    /// (`true`) or point markers (`false`).
    pub fn is_areal(self) -> bool {
        !matches!(self, Self::InvestmentSite)
    }
}

impl GeoFeature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::BurnZone(_) => FeatureKind::BurnZone,
            Self::Territory(_) => FeatureKind::Territory,
            Self::InvestmentSite(_) => FeatureKind::InvestmentSite,
            Self::InstitutionalZone(_) => FeatureKind::InstitutionalZone,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BurnZone(z) => z.name,
            Self::Territory(t) => t.name,
            Self::InvestmentSite(s) => s.name,
            Self::InstitutionalZone(z) => z.name,
        }
    }

    /// The polygon ring for areal features, `None` for point markers.
    pub fn ring(&self) -> Option<&'static [GeoPoint]> {
        match self {
            Self::BurnZone(z) => Some(z.ring),
            Self::Territory(t) => Some(t.ring),
            Self::InstitutionalZone(z) => Some(z.ring),
            Self::InvestmentSite(_) => None,
        }
    }

    /// The anchor point for point markers, `None` for areal features.
    pub fn position(&self) -> Option<GeoPoint> {
        match self {
            Self::InvestmentSite(s) => Some(s.position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_intensity_parses_to_unclassified() {
        assert_eq!(FireIntensity::from_name("Unknown"), FireIntensity::Unclassified);
        assert_eq!(FireIntensity::from_name(""), FireIntensity::Unclassified);
        assert_eq!(FireIntensity::from_name("Severe"), FireIntensity::Severe);
    }

    #[test]
    fn unclassified_buckets_as_moderate() {
        assert_eq!(FireIntensity::Unclassified.bucket(), FireIntensity::Moderate);
        assert_eq!(FireIntensity::Critical.bucket(), FireIntensity::Critical);
    }

    #[test]
    fn governing_layer_mapping() {
        assert_eq!(FeatureKind::BurnZone.governing_layer(), LayerId::Fires);
        assert_eq!(FeatureKind::Territory.governing_layer(), LayerId::Indigenous);
        assert_eq!(FeatureKind::InvestmentSite.governing_layer(), LayerId::Projects);
        assert_eq!(
            FeatureKind::InstitutionalZone.governing_layer(),
            LayerId::Institutional
        );
    }

    #[test]
    fn only_sites_are_point_features() {
        assert!(FeatureKind::BurnZone.is_areal());
        assert!(FeatureKind::Territory.is_areal());
        assert!(FeatureKind::InstitutionalZone.is_areal());
        assert!(!FeatureKind::InvestmentSite.is_areal());
    }
}
