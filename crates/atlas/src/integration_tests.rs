//! Integration tests driving the dashboard core through the control-event
//! path on the headless [`TestAtlas`](crate::test_harness::TestAtlas)
//! harness.

use crate::context::AnalysisContext;
use crate::controls::{BaseMapStyle, ControlAction};
use crate::features::FeatureKind;
use crate::layers::{LayerId, ALL_LAYERS};
use crate::test_harness::TestAtlas;

// ===========================================================================
// Startup state
// ===========================================================================

#[test]
fn session_opens_in_loss_analysis() {
    let atlas = TestAtlas::new();
    assert_eq!(atlas.context(), AnalysisContext::LossAnalysis);
    assert_eq!(atlas.base_map().0, BaseMapStyle::Satellite);
}

#[test]
fn startup_plan_shows_all_burns_and_territories() {
    let atlas = TestAtlas::new();
    let plan = atlas.plan();
    assert_eq!(plan.count_of(FeatureKind::BurnZone), 6);
    assert_eq!(plan.count_of(FeatureKind::Territory), 2);
    assert_eq!(plan.count_of(FeatureKind::InvestmentSite), 0);
    assert_eq!(plan.count_of(FeatureKind::InstitutionalZone), 0);
}

#[test]
fn empty_catalogs_are_a_valid_state() {
    let mut atlas = TestAtlas::with_empty_catalogs();
    assert!(atlas.plan().features.is_empty());
    assert!(atlas.plan().legend.is_empty());

    // The session still responds to controls without erroring.
    atlas.act(ControlAction::SetContext(AnalysisContext::InvestmentInclusion));
    assert!(atlas.plan().features.is_empty());
    assert_eq!(atlas.plan().legend_title, "Investment Legend");
}

// ===========================================================================
// Context switching (reset-on-switch policy)
// ===========================================================================

#[test]
fn context_switch_replaces_layer_set() {
    let mut atlas = TestAtlas::new();

    // A manual toggle in the loss context...
    atlas.act(ControlAction::ToggleLayer(LayerId::Settlements));
    assert!(atlas.is_layer_active(LayerId::Settlements));

    // ...is overwritten by the switch to the investment context.
    atlas.act(ControlAction::SetContext(AnalysisContext::InvestmentInclusion));

    let expected_active = [
        LayerId::Satellite,
        LayerId::Indigenous,
        LayerId::Projects,
        LayerId::Institutional,
    ];
    for id in ALL_LAYERS {
        assert_eq!(
            atlas.is_layer_active(id),
            expected_active.contains(&id),
            "{id:?}"
        );
    }
}

#[test]
fn context_switch_recomposes_in_the_same_frame() {
    let mut atlas = TestAtlas::new();
    atlas.act(ControlAction::SetContext(AnalysisContext::InvestmentInclusion));

    let plan = atlas.plan();
    assert_eq!(plan.count_of(FeatureKind::BurnZone), 0);
    assert_eq!(plan.count_of(FeatureKind::InvestmentSite), 3);
    assert_eq!(plan.count_of(FeatureKind::InstitutionalZone), 2);
    assert_eq!(plan.count_of(FeatureKind::Territory), 2);
}

#[test]
fn reselecting_the_current_context_keeps_manual_toggles() {
    let mut atlas = TestAtlas::new();
    atlas.act(ControlAction::ToggleLayer(LayerId::Settlements));

    // Clicking the already-active tab is not a switch, so the manual
    // toggle survives.
    atlas.act(ControlAction::SetContext(AnalysisContext::LossAnalysis));
    assert!(atlas.is_layer_active(LayerId::Settlements));
}

#[test]
fn round_trip_context_switch_discards_toggles_both_ways() {
    let mut atlas = TestAtlas::new();
    atlas.act(ControlAction::SetContext(AnalysisContext::InvestmentInclusion));
    atlas.act(ControlAction::ToggleLayer(LayerId::Fires));
    assert!(atlas.is_layer_active(LayerId::Fires));

    atlas.act(ControlAction::SetContext(AnalysisContext::LossAnalysis));
    atlas.act(ControlAction::SetContext(AnalysisContext::InvestmentInclusion));
    assert!(!atlas.is_layer_active(LayerId::Fires));
}

// ===========================================================================
// Layer toggles within a context
// ===========================================================================

#[test]
fn toggling_projects_off_removes_sites_only() {
    let mut atlas = TestAtlas::new();
    atlas.act(ControlAction::SetContext(AnalysisContext::InvestmentInclusion));
    atlas.act(ControlAction::ToggleLayer(LayerId::Projects));

    let plan = atlas.plan();
    assert_eq!(plan.count_of(FeatureKind::InvestmentSite), 0);
    assert_eq!(plan.count_of(FeatureKind::InstitutionalZone), 2);
    assert_eq!(plan.count_of(FeatureKind::Territory), 2);
}

#[test]
fn toggling_fires_off_empties_the_fire_legend() {
    let mut atlas = TestAtlas::new();
    atlas.act(ControlAction::ToggleLayer(LayerId::Fires));

    let plan = atlas.plan();
    assert_eq!(plan.count_of(FeatureKind::BurnZone), 0);
    assert!(plan.legend.is_empty());
    // Territories are still there; the legend rule is about buckets, not
    // about the plan being empty.
    assert_eq!(plan.count_of(FeatureKind::Territory), 2);
}

// ===========================================================================
// Base map and time range independence
// ===========================================================================

#[test]
fn base_map_change_does_not_affect_composition() {
    let mut atlas = TestAtlas::new();
    let before: Vec<&'static str> =
        atlas.plan().features.iter().map(|f| f.feature.name()).collect();

    atlas.act(ControlAction::SetBaseMap(BaseMapStyle::Terrain));

    assert_eq!(atlas.base_map().0, BaseMapStyle::Terrain);
    let after: Vec<&'static str> =
        atlas.plan().features.iter().map(|f| f.feature.name()).collect();
    assert_eq!(after, before);
}

// ===========================================================================
// Export
// ===========================================================================

#[test]
fn export_reports_on_the_status_line() {
    let mut atlas = TestAtlas::new();
    atlas.act(ControlAction::Export);

    let status = atlas.status();
    assert!(
        !status.message.is_empty(),
        "export must leave a status message"
    );
    if !status.is_error {
        assert!(status.message.contains("fireatlas-export.json"));
        std::fs::remove_file(crate::export::EXPORT_FILE).ok();
    }
}
