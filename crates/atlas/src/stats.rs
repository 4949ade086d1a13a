//! Derived summary statistics: plain reductions over the fixed records.
//!
//! Everything here is recomputed on demand from the catalogs and report
//! datasets; nothing is cached, so the headline figures can never disagree
//! with the records behind them.

use serde::Serialize;

use crate::catalog::FeatureCatalogs;
use crate::features::InvestmentSite;
use crate::reports::SubRegion;

/// Share of economic losses expected to convert into insurance claims.
pub const INSURANCE_CLAIM_RATE: f32 = 0.65;
/// Estimated recovery cost as a multiple of direct economic loss.
pub const RECOVERY_COST_FACTOR: f32 = 1.8;
/// Estimated ecosystem-services value as a multiple of direct loss.
pub const ECOSYSTEM_VALUE_FACTOR: f32 = 2.3;

/// Headline totals for the loss-analysis context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LossTotals {
    pub economic_loss_musd: f32,
    pub area_burned_ha: u32,
    pub population_affected: u32,
    pub carbon_released_t: u32,
}

impl LossTotals {
    pub fn insurance_claims_musd(&self) -> f32 {
        self.economic_loss_musd * INSURANCE_CLAIM_RATE
    }

    pub fn recovery_cost_musd(&self) -> f32 {
        self.economic_loss_musd * RECOVERY_COST_FACTOR
    }

    pub fn ecosystem_value_musd(&self) -> f32 {
        self.economic_loss_musd * ECOSYSTEM_VALUE_FACTOR
    }
}

/// Sum the per-region loss figures.
pub fn loss_totals(regions: &[SubRegion]) -> LossTotals {
    LossTotals {
        economic_loss_musd: regions.iter().map(|r| r.economic_loss_musd).sum(),
        area_burned_ha: regions.iter().map(|r| r.forest_loss_ha).sum(),
        population_affected: regions.iter().map(|r| r.population).sum(),
        carbon_released_t: regions.iter().map(|r| r.carbon_loss_t).sum(),
    }
}

/// Headline totals for the investment context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentTotals {
    pub funding_musd: f32,
    pub jobs: u32,
    pub carbon_credits_t: u32,
}

/// Sum the community project figures.
pub fn investment_totals(sites: &[InvestmentSite]) -> InvestmentTotals {
    InvestmentTotals {
        funding_musd: sites.iter().map(|s| s.funding_musd).sum(),
        jobs: sites.iter().map(|s| s.jobs).sum(),
        carbon_credits_t: sites.iter().map(|s| s.carbon_credits_t).sum(),
    }
}

/// Investment totals over the live catalog.
pub fn investment_totals_for(catalogs: &FeatureCatalogs) -> InvestmentTotals {
    investment_totals(&catalogs.sites)
}

/// Percentage decline of a before/after population pair, rounded to the
/// nearest whole percent. A zero `before` reads as no decline.
pub fn decline_percent(before: u32, after: u32) -> u32 {
    if before == 0 {
        return 0;
    }
    let lost = before.saturating_sub(after) as f32;
    (lost / before as f32 * 100.0).round() as u32
}

/// Progress toward a target as a fraction in `[0, 1]`.
pub fn progress_fraction(value: u32, target: u32) -> f32 {
    if target == 0 {
        return 0.0;
    }
    (value as f32 / target as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::SUB_REGIONS;

    #[test]
    fn loss_totals_over_fixed_regions() {
        let totals = loss_totals(SUB_REGIONS);
        assert!((totals.economic_loss_musd - 391.8).abs() < 0.01);
        assert_eq!(totals.area_burned_ha, 69_800);
        assert_eq!(totals.population_affected, 29_800);
        assert_eq!(totals.carbon_released_t, 910_000);
    }

    #[test]
    fn derived_financial_figures() {
        let totals = loss_totals(SUB_REGIONS);
        assert!((totals.insurance_claims_musd() - 391.8 * 0.65).abs() < 0.01);
        assert!((totals.recovery_cost_musd() - 391.8 * 1.8).abs() < 0.01);
        assert!((totals.ecosystem_value_musd() - 391.8 * 2.3).abs() < 0.01);
    }

    #[test]
    fn investment_totals_over_catalog() {
        let totals = investment_totals_for(&FeatureCatalogs::default());
        assert!((totals.funding_musd - 7.5).abs() < 0.001);
        assert_eq!(totals.jobs, 405);
        assert_eq!(totals.carbon_credits_t, 125_000);
    }

    #[test]
    fn totals_over_empty_inputs_are_zero() {
        let loss = loss_totals(&[]);
        assert_eq!(loss.area_burned_ha, 0);
        assert!((loss.economic_loss_musd).abs() < f32::EPSILON);

        let invest = investment_totals(&[]);
        assert_eq!(invest.jobs, 0);
        assert_eq!(invest.carbon_credits_t, 0);
    }

    #[test]
    fn decline_percent_rounds_to_nearest() {
        // Jaguar: (45 - 28) / 45 = 37.78% -> 38
        assert_eq!(decline_percent(45, 28), 38);
        // Giant Otter: (120 - 85) / 120 = 29.17% -> 29
        assert_eq!(decline_percent(120, 85), 29);
        assert_eq!(decline_percent(100, 100), 0);
        assert_eq!(decline_percent(0, 10), 0);
    }

    #[test]
    fn progress_fraction_clamps() {
        assert!((progress_fraction(405, 500) - 0.81).abs() < 1e-6);
        assert!((progress_fraction(600, 500) - 1.0).abs() < f32::EPSILON);
        assert!((progress_fraction(10, 0)).abs() < f32::EPSILON);
    }
}
