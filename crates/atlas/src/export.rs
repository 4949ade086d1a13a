//! JSON export of the current dashboard view.
//!
//! The header's Export action snapshots the active context, headline
//! totals, report datasets, and the composed feature list, and writes them
//! as pretty-printed JSON next to the executable. I/O failures surface on
//! the status line; they never panic.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use bevy::prelude::*;
use serde::Serialize;

use crate::catalog::FeatureCatalogs;
use crate::compose::RenderPlan;
use crate::config::ANALYSIS_PERIOD;
use crate::controls::{ActiveContext, ActiveTimeRange, ExportRequested, StatusLine};
use crate::features::GeoFeature;
use crate::reports;
use crate::stats::{self, InvestmentTotals, LossTotals};

/// Default export file name, written to the working directory.
pub const EXPORT_FILE: &str = "fireatlas-export.json";

/// Everything the Export action writes.
#[derive(Debug, Serialize)]
pub struct ExportSnapshot {
    pub context: &'static str,
    pub time_range: &'static str,
    pub analysis_period: &'static str,
    pub loss_totals: LossTotals,
    pub investment_totals: InvestmentTotals,
    pub rendered_features: Vec<GeoFeature>,
    pub sub_regions: Vec<reports::SubRegion>,
    pub forest_loss_by_month: Vec<reports::MonthlyLoss>,
    pub institutional_pipeline: Vec<reports::InstitutionalDeal>,
    pub impact_metrics: Vec<reports::ImpactMetric>,
}

/// Assemble the snapshot for the current session state.
pub fn build_snapshot(
    context: ActiveContext,
    time_range: ActiveTimeRange,
    plan: &RenderPlan,
    catalogs: &FeatureCatalogs,
) -> ExportSnapshot {
    ExportSnapshot {
        context: context.0.label(),
        time_range: time_range.0.label(),
        analysis_period: ANALYSIS_PERIOD,
        loss_totals: stats::loss_totals(reports::SUB_REGIONS),
        investment_totals: stats::investment_totals_for(catalogs),
        rendered_features: plan.features.iter().map(|f| f.feature.clone()).collect(),
        sub_regions: reports::SUB_REGIONS.to_vec(),
        forest_loss_by_month: reports::FOREST_LOSS_BY_MONTH.to_vec(),
        institutional_pipeline: reports::INSTITUTIONAL_PIPELINE.to_vec(),
        impact_metrics: reports::IMPACT_METRICS.to_vec(),
    }
}

/// Serialize a snapshot to `path`.
pub fn write_snapshot(path: &Path, snapshot: &ExportSnapshot) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, snapshot)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.flush()
}

/// Consume a pending export request. Runs after
/// [`crate::compose::recompose_plan`], so the written plan reflects any
/// control actions applied this frame.
pub fn perform_export(
    mut requested: ResMut<ExportRequested>,
    context: Res<ActiveContext>,
    time_range: Res<ActiveTimeRange>,
    plan: Res<RenderPlan>,
    catalogs: Res<FeatureCatalogs>,
    mut status: ResMut<StatusLine>,
) {
    if !requested.0 {
        return;
    }
    requested.0 = false;

    let snapshot = build_snapshot(*context, *time_range, &plan, &catalogs);
    match write_snapshot(Path::new(EXPORT_FILE), &snapshot) {
        Ok(()) => status.set(format!("Exported {EXPORT_FILE}"), false),
        Err(e) => status.set(format!("Export failed: {e}"), true),
    }
}
