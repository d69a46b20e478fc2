//! The metric engine: ROI, payback period, TCO, and migration cost.
//!
//! Every function here is pure over its inputs. Metrics are computed
//! independently; an undefined result in one never blocks the others, and
//! "undefined" is `None`, not zero (see `core::MetricResult`).

use serde::Serialize;

use crate::config::{self, MigrationConfig};
use crate::core::{BenefitWarning, Frequency, MetricResult, NormalizedFinancials, ToolProfile};
use crate::normalize::normalize;

/// Metrics for one tool, plus the benefit warnings normalization surfaced.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricReport {
    pub result: MetricResult,
    pub warnings: Vec<BenefitWarning>,
}

/// Compute all four metrics for a profile using the loaded configuration's
/// migration categories.
pub fn compute_metrics(profile: &ToolProfile) -> MetricReport {
    compute_metrics_with(profile, &config::get_config().migration)
}

/// Compute all four metrics with explicit migration settings.
pub fn compute_metrics_with(profile: &ToolProfile, migration: &MigrationConfig) -> MetricReport {
    let normalized = normalize(profile);
    let financials = &normalized.financials;
    let horizon = profile.evaluation_horizon_years as f64;

    MetricReport {
        result: MetricResult {
            tool_id: profile.id.clone(),
            roi_percent: roi_percent(financials, horizon),
            payback_months: payback_months(financials),
            tco: financials.total_cost_over_horizon,
            migration_cost: migration_cost(profile, migration),
        },
        warnings: normalized.warnings,
    }
}

/// ROI over the horizon, as a percentage.
///
/// Undefined when the total cost is zero; division by zero is a normal,
/// renderable outcome here, not an error.
fn roi_percent(financials: &NormalizedFinancials, horizon: f64) -> Option<f64> {
    let total = financials.total_cost_over_horizon;
    if total == 0.0 {
        return None;
    }
    let net = financials.annual_benefit_value * horizon - total;
    Some(net / total * 100.0)
}

/// Months until cumulative benefit covers the one-time cost plus recurring
/// spend, solved analytically.
///
/// `None` when the monthly benefit does not exceed the monthly cost (the
/// tool never pays back).
fn payback_months(financials: &NormalizedFinancials) -> Option<f64> {
    let monthly_net = (financials.annual_benefit_value - financials.annual_cost) / 12.0;
    if monthly_net <= 0.0 {
        return None;
    }
    Some(financials.one_time_cost / monthly_net)
}

/// One-time switching cost: migration-tagged one-time entries plus the
/// productivity-loss term from the scenario inputs.
///
/// `None` when the profile carries no migration scenario — the tagged cost
/// entries alone do not make a "switching from X" evaluation.
fn migration_cost(profile: &ToolProfile, config: &MigrationConfig) -> Option<f64> {
    let scenario = profile.migration?;

    let tagged: f64 = profile
        .costs
        .iter()
        .filter(|cost| {
            cost.frequency == Frequency::OneTime && config.categories.contains(&cost.category)
        })
        .map(|cost| cost.amount)
        .sum();

    Some(tagged + scenario.downtime_days * scenario.daily_team_cost)
}
