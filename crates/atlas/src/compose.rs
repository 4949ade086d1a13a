//! The composition engine: context + registry + catalogs -> render plan.
//!
//! [`compose`] is a pure derivation; the [`RenderPlan`] resource caches its
//! result and is rebuilt by [`recompose_plan`] whenever an input resource
//! changes. The rebuild system is scheduled strictly after
//! [`crate::controls::apply_control_actions`], so a context switch's layer
//! overwrite is always visible to composition within the same frame.

use bevy::prelude::*;

use crate::catalog::FeatureCatalogs;
use crate::context::AnalysisContext;
use crate::controls::ActiveContext;
use crate::features::{FeatureKind, FireIntensity, GeoFeature};
use crate::layers::LayerRegistry;
use crate::style::{self, FeatureStyle};

/// A feature paired with its resolved style, ready to draw.
#[derive(Debug, Clone)]
pub struct StyledFeature {
    pub feature: GeoFeature,
    pub style: FeatureStyle,
}

/// One swatch+label row in the legend theme block.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub swatch: Color,
}

/// The ordered draw list and legend for the current frame.
///
/// Areal features come first (in fixed variant order: burn zones,
/// territories, institutional zones), then point markers, so markers are
/// never occluded by polygon fills. Within a variant, catalog order is
/// preserved. An empty plan is a valid state, not an error.
#[derive(Resource, Debug, Clone)]
pub struct RenderPlan {
    pub features: Vec<StyledFeature>,
    pub legend_title: &'static str,
    pub legend: Vec<LegendEntry>,
}

impl Default for RenderPlan {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            legend_title: AnalysisContext::default().legend_title(),
            legend: Vec::new(),
        }
    }
}

impl RenderPlan {
    /// Count of rendered features of one kind.
    pub fn count_of(&self, kind: FeatureKind) -> usize {
        self.features.iter().filter(|f| f.feature.kind() == kind).count()
    }
}

/// Feature kinds eligible under a context, in draw-priority order
/// (areal variants first). Territory is eligible under both contexts:
/// indigenous lands are relevant to loss and to inclusion alike.
pub fn eligible_kinds(context: AnalysisContext) -> &'static [FeatureKind] {
    match context {
        AnalysisContext::LossAnalysis => &[FeatureKind::BurnZone, FeatureKind::Territory],
        AnalysisContext::InvestmentInclusion => &[
            FeatureKind::Territory,
            FeatureKind::InstitutionalZone,
            FeatureKind::InvestmentSite,
        ],
    }
}

/// Derive the render plan for the current inputs.
///
/// A feature is included exactly when its kind is eligible under `context`
/// and its governing layer is active in `registry`.
pub fn compose(
    context: AnalysisContext,
    registry: &LayerRegistry,
    catalogs: &FeatureCatalogs,
) -> RenderPlan {
    let eligible = eligible_kinds(context);
    let included = |kind: FeatureKind| {
        eligible.contains(&kind) && registry.is_active(kind.governing_layer())
    };

    let mut features: Vec<StyledFeature> = Vec::new();
    let mut push = |feature: GeoFeature| {
        let style = style::resolve(&feature);
        features.push(StyledFeature { feature, style });
    };

    // Areal variants in fixed priority order, then markers.
    if included(FeatureKind::BurnZone) {
        for zone in &catalogs.burn_zones {
            push(GeoFeature::BurnZone(zone.clone()));
        }
    }
    if included(FeatureKind::Territory) {
        for territory in &catalogs.territories {
            push(GeoFeature::Territory(territory.clone()));
        }
    }
    if included(FeatureKind::InstitutionalZone) {
        for zone in &catalogs.institutional {
            push(GeoFeature::InstitutionalZone(zone.clone()));
        }
    }
    if included(FeatureKind::InvestmentSite) {
        for site in &catalogs.sites {
            push(GeoFeature::InvestmentSite(site.clone()));
        }
    }

    let legend = build_legend(context, &features);

    RenderPlan {
        features,
        legend_title: context.legend_title(),
        legend,
    }
}

/// Build the legend theme block: one entry per style bucket with at least
/// one rendered feature. A bucket with zero instances is never listed.
fn build_legend(context: AnalysisContext, features: &[StyledFeature]) -> Vec<LegendEntry> {
    match context {
        AnalysisContext::LossAnalysis => {
            // Fire severity buckets in severity order. Unclassified burns
            // count toward the Moderate bucket (they share its style).
            let buckets = [
                FireIntensity::Critical,
                FireIntensity::Severe,
                FireIntensity::High,
                FireIntensity::Moderate,
            ];
            buckets
                .into_iter()
                .filter(|&bucket| {
                    features.iter().any(|f| match &f.feature {
                        GeoFeature::BurnZone(z) => z.intensity.bucket() == bucket,
                        _ => false,
                    })
                })
                .map(|bucket| LegendEntry {
                    label: bucket.label(),
                    swatch: style::burn_colors(bucket).1,
                })
                .collect()
        }
        AnalysisContext::InvestmentInclusion => {
            // Marker color buckets: community types, with Planning-status
            // sites pulled out into their own gray bucket (their markers
            // are gray, whatever community carries them).
            let site_in_bucket = |f: &StyledFeature, want: Color| match &f.feature {
                GeoFeature::InvestmentSite(site) => {
                    style::site_color(site.community_type, site.status) == want
                }
                _ => false,
            };
            let buckets: [(&'static str, Color); 4] = [
                ("Indigenous Community", style::SITE_INDIGENOUS),
                ("Vulnerable Group", style::SITE_VULNERABLE),
                ("Multi-Stakeholder", style::SITE_DEFAULT),
                ("Planning Stage", style::SITE_PLANNING),
            ];
            buckets
                .into_iter()
                .filter(|&(_, swatch)| features.iter().any(|f| site_in_bucket(f, swatch)))
                .map(|(label, swatch)| LegendEntry { label, swatch })
                .collect()
        }
    }
}

/// Rebuild the cached [`RenderPlan`] when any composition input changed.
pub fn recompose_plan(
    context: Res<ActiveContext>,
    registry: Res<LayerRegistry>,
    catalogs: Res<FeatureCatalogs>,
    mut plan: ResMut<RenderPlan>,
) {
    if !(context.is_changed() || registry.is_changed() || catalogs.is_changed()) {
        return;
    }
    *plan = compose(context.0, &registry, &catalogs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{CommunityType, ProjectStatus};
    use crate::layers::LayerId;

    fn loss_defaults() -> (LayerRegistry, FeatureCatalogs) {
        (LayerRegistry::default(), FeatureCatalogs::default())
    }

    fn investment_registry() -> LayerRegistry {
        let mut registry = LayerRegistry::default();
        registry.apply_context(AnalysisContext::InvestmentInclusion);
        registry
    }

    #[test]
    fn loss_context_renders_burns_and_territories_only() {
        let (registry, catalogs) = loss_defaults();
        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);

        assert_eq!(plan.count_of(FeatureKind::BurnZone), 6);
        assert_eq!(plan.count_of(FeatureKind::Territory), 2);
        assert_eq!(plan.count_of(FeatureKind::InvestmentSite), 0);
        assert_eq!(plan.count_of(FeatureKind::InstitutionalZone), 0);
    }

    #[test]
    fn rendered_features_are_eligible_and_layer_gated() {
        let catalogs = FeatureCatalogs::default();
        for context in crate::context::ALL_CONTEXTS {
            let mut registry = LayerRegistry::default();
            registry.apply_context(context);
            let plan = compose(context, &registry, &catalogs);
            for styled in &plan.features {
                let kind = styled.feature.kind();
                assert!(eligible_kinds(context).contains(&kind));
                assert!(registry.is_active(kind.governing_layer()));
            }
        }
    }

    #[test]
    fn areal_features_precede_markers() {
        let catalogs = FeatureCatalogs::default();
        let registry = investment_registry();
        let plan = compose(AnalysisContext::InvestmentInclusion, &registry, &catalogs);

        let first_marker = plan
            .features
            .iter()
            .position(|f| !f.feature.kind().is_areal());
        let last_areal = plan
            .features
            .iter()
            .rposition(|f| f.feature.kind().is_areal());
        if let (Some(marker), Some(areal)) = (first_marker, last_areal) {
            assert!(areal < marker, "markers must come after all areal features");
        }
    }

    #[test]
    fn catalog_order_preserved_within_variant() {
        let (registry, catalogs) = loss_defaults();
        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);

        let rendered: Vec<&str> = plan
            .features
            .iter()
            .filter_map(|f| match &f.feature {
                GeoFeature::BurnZone(z) => Some(z.name),
                _ => None,
            })
            .collect();
        let expected: Vec<&str> = catalogs.burn_zones.iter().map(|z| z.name).collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn toggling_projects_off_drops_only_sites() {
        let catalogs = FeatureCatalogs::default();
        let mut registry = investment_registry();
        registry.toggle(LayerId::Projects);

        let plan = compose(AnalysisContext::InvestmentInclusion, &registry, &catalogs);
        assert_eq!(plan.count_of(FeatureKind::InvestmentSite), 0);
        assert_eq!(plan.count_of(FeatureKind::InstitutionalZone), 2);
        assert_eq!(plan.count_of(FeatureKind::Territory), 2);
    }

    #[test]
    fn institutional_zones_never_render_under_loss_analysis() {
        let catalogs = FeatureCatalogs::default();
        let mut registry = LayerRegistry::default();
        // Even force-activating the layer cannot make an ineligible
        // variant render.
        registry.toggle(LayerId::Institutional);
        registry.toggle(LayerId::Projects);

        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);
        assert_eq!(plan.count_of(FeatureKind::InstitutionalZone), 0);
        assert_eq!(plan.count_of(FeatureKind::InvestmentSite), 0);
    }

    #[test]
    fn empty_catalogs_yield_empty_plan() {
        let registry = LayerRegistry::default();
        let plan = compose(
            AnalysisContext::LossAnalysis,
            &registry,
            &FeatureCatalogs::empty(),
        );
        assert!(plan.features.is_empty());
        assert!(plan.legend.is_empty());
        assert_eq!(plan.legend_title, "Fire Intensity Legend");
    }

    #[test]
    fn all_layers_off_yield_empty_plan() {
        let catalogs = FeatureCatalogs::default();
        let mut registry = LayerRegistry::default();
        for &id in crate::layers::ALL_LAYERS.iter() {
            if registry.is_active(id) {
                registry.toggle(id);
            }
        }
        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);
        assert!(plan.features.is_empty());
        assert!(plan.legend.is_empty());
    }

    #[test]
    fn legend_lists_only_present_fire_buckets() {
        let (registry, mut catalogs) = loss_defaults();
        // Keep only Critical and High burns.
        catalogs.burn_zones.retain(|z| {
            matches!(z.intensity, FireIntensity::Critical | FireIntensity::High)
        });

        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);
        let labels: Vec<&str> = plan.legend.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Critical", "High"]);
    }

    #[test]
    fn full_catalog_legend_has_all_fire_buckets_in_severity_order() {
        let (registry, catalogs) = loss_defaults();
        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);
        let labels: Vec<&str> = plan.legend.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Critical", "Severe", "High", "Moderate"]);
    }

    #[test]
    fn investment_legend_buckets_planning_separately() {
        let catalogs = FeatureCatalogs::default();
        let registry = investment_registry();
        let plan = compose(AnalysisContext::InvestmentInclusion, &registry, &catalogs);

        // Catalog has one Indigenous/Active, one Vulnerable/Planning, one
        // MultiStakeholder/Active site: the Vulnerable bucket is empty
        // because its only site renders gray.
        let labels: Vec<&str> = plan.legend.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Indigenous Community", "Multi-Stakeholder", "Planning Stage"]
        );
        assert_eq!(plan.legend_title, "Investment Legend");
    }

    #[test]
    fn legend_empty_when_projects_hidden() {
        let catalogs = FeatureCatalogs::default();
        let mut registry = investment_registry();
        registry.toggle(LayerId::Projects);

        let plan = compose(AnalysisContext::InvestmentInclusion, &registry, &catalogs);
        assert!(
            plan.legend.is_empty(),
            "no sites rendered, so no investment buckets may appear"
        );
    }

    #[test]
    fn unclassified_burn_appears_in_moderate_bucket() {
        let (registry, mut catalogs) = loss_defaults();
        catalogs.burn_zones.truncate(1);
        catalogs.burn_zones[0].intensity = FireIntensity::from_name("Unknown");

        let plan = compose(AnalysisContext::LossAnalysis, &registry, &catalogs);
        let labels: Vec<&str> = plan.legend.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Moderate"]);
    }

    #[test]
    fn planning_site_counts_only_toward_planning_bucket() {
        let registry = investment_registry();
        let mut catalogs = FeatureCatalogs::empty();
        catalogs.sites.push(crate::features::InvestmentSite {
            name: "Solo Planning Site",
            community: "Test",
            community_type: CommunityType::Indigenous,
            status: ProjectStatus::Planning,
            funding_musd: 1.0,
            carbon_credits_t: 0,
            jobs: 0,
            impact_score: 10,
            land_rights: crate::features::LandRights::InProcess,
            position: crate::geo::GeoPoint::new(-16.0, -63.0),
        });

        let plan = compose(AnalysisContext::InvestmentInclusion, &registry, &catalogs);
        let labels: Vec<&str> = plan.legend.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Planning Stage"]);
    }
}
