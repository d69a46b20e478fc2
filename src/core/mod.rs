pub mod errors;

use serde::{Deserialize, Serialize};

/// Cost category for a single line item.
///
/// The `data_migration`, `training`, and `downtime` categories double as
/// migration costs when a [`MigrationScenario`] is active; which categories
/// count is configurable (see `config::MigrationConfig`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CostCategory {
    License,
    Implementation,
    Training,
    Downtime,
    Support,
    DataMigration,
    Other,
}

/// How often a cost entry recurs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    OneTime,
    Monthly,
    Annual,
}

/// One cost line item for a tool under evaluation.
///
/// `applies_to_years` limits how many horizon years a recurring entry
/// contributes (e.g. one year of extra training). It is ignored for
/// `OneTime` entries.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostEntry {
    pub category: CostCategory,
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applies_to_years: Option<u32>,
}

impl CostEntry {
    pub fn new(category: CostCategory, amount: f64, frequency: Frequency) -> Self {
        Self {
            category,
            amount,
            frequency,
            applies_to_years: None,
        }
    }

    /// Annualized amount for recurring entries; 0 for one-time entries.
    pub fn annualized(&self) -> f64 {
        match self.frequency {
            Frequency::OneTime => 0.0,
            Frequency::Monthly => self.amount * 12.0,
            Frequency::Annual => self.amount,
        }
    }
}

/// Time or money saved by adopting a tool.
///
/// At least one value field must be present (enforced at the validation
/// boundary). Entries with fields present but insufficient to compute a
/// dollar value (hours without a rate, or vice versa) contribute zero and
/// surface as a [`BenefitWarning`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenefitEntry {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_saved_per_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dollar_value_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_savings_per_year: Option<f64>,
}

/// Productivity-loss inputs for a "switching from X to Y" scenario.
///
/// Kept separate from the cost entries because it models lost output
/// rather than a direct expense. Its presence is what activates the
/// migration cost metric.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MigrationScenario {
    pub downtime_days: f64,
    pub daily_team_cost: f64,
}

/// One tool under evaluation: its costs, benefits, and horizon.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolProfile {
    pub id: String,
    pub name: String,
    pub costs: Vec<CostEntry>,
    pub benefits: Vec<BenefitEntry>,
    pub evaluation_horizon_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration: Option<MigrationScenario>,
}

impl ToolProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, horizon_years: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            costs: Vec::new(),
            benefits: Vec::new(),
            evaluation_horizon_years: horizon_years,
            migration: None,
        }
    }
}

/// Costs and benefits reduced to a canonical per-year basis.
///
/// Always recomputed from a [`ToolProfile`]; never mutated in place.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFinancials {
    pub annual_cost: f64,
    pub one_time_cost: f64,
    pub total_cost_over_horizon: f64,
    pub annual_benefit_value: f64,
}

/// Derived metrics for one tool.
///
/// `None` denotes "undefined for these inputs" (division by zero, no
/// payback, no migration scenario) — a normal outcome, not an error, and
/// distinct from zero. Serialized as JSON `null`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricResult {
    pub tool_id: String,
    pub roi_percent: Option<f64>,
    pub payback_months: Option<f64>,
    pub tco: f64,
    pub migration_cost: Option<f64>,
}

/// A benefit entry that could not contribute a dollar value.
///
/// Surfaced alongside results so the UI can prompt for the missing data;
/// computation of the other metrics is never blocked.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenefitWarning {
    /// Position of the entry in the profile's benefit list.
    pub index: usize,
    pub description: String,
    pub reason: String,
}
