//! Boundary validation for raw profile input.
//!
//! Form layers hand over loosely-typed JSON; this module parses it into the
//! strict [`ToolProfile`] shape, rejecting out-of-range values instead of
//! silently coercing them. Every problem is collected into a list of
//! [`FieldError`]s so the caller can report all of them in one pass.

use crate::config::ToolcostConfig;
use crate::core::errors::FieldError;
use crate::core::{BenefitEntry, CostEntry, Frequency, MigrationScenario, ToolProfile};
use serde::Deserialize;

/// Leniently-typed profile as it arrives from the form layer.
///
/// The horizon is signed so a non-positive value reaches validation and
/// produces a field error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub costs: Vec<CostEntry>,
    #[serde(default)]
    pub benefits: Vec<BenefitEntry>,
    #[serde(default)]
    pub evaluation_horizon_years: Option<i64>,
    #[serde(default)]
    pub migration: Option<MigrationScenario>,
}

impl ProfileDraft {
    /// Validate the draft against the data model's invariants.
    ///
    /// Returns the typed profile, or every field error found. A missing
    /// horizon takes the configured default.
    pub fn validate(self, config: &ToolcostConfig) -> Result<ToolProfile, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push(FieldError::new("id", "must not be empty"));
        }

        let horizon = match self.evaluation_horizon_years {
            None => config.defaults.horizon_years,
            Some(h) => match u32::try_from(h) {
                Ok(years) if years >= 1 => years,
                _ => {
                    errors.push(FieldError::new(
                        "evaluationHorizonYears",
                        "must be at least 1",
                    ));
                    config.defaults.horizon_years
                }
            },
        };

        for (i, cost) in self.costs.iter().enumerate() {
            validate_cost(i, cost, &mut errors);
        }

        for (i, benefit) in self.benefits.iter().enumerate() {
            validate_benefit(i, benefit, &mut errors);
        }

        if let Some(migration) = &self.migration {
            validate_amount(
                migration.downtime_days,
                "migration.downtimeDays",
                &mut errors,
            );
            validate_amount(
                migration.daily_team_cost,
                "migration.dailyTeamCost",
                &mut errors,
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ToolProfile {
            id: self.id,
            name: self.name,
            costs: self.costs,
            benefits: self.benefits,
            evaluation_horizon_years: horizon,
            migration: self.migration,
        })
    }
}

fn validate_cost(index: usize, cost: &CostEntry, errors: &mut Vec<FieldError>) {
    validate_amount(cost.amount, &format!("costs[{index}].amount"), errors);

    // appliesToYears is ignored for one-time entries, but zero makes a
    // recurring entry contribute nothing, which is always a mistake.
    if cost.frequency != Frequency::OneTime && cost.applies_to_years == Some(0) {
        errors.push(FieldError::new(
            format!("costs[{index}].appliesToYears"),
            "must be at least 1 when present",
        ));
    }
}

fn validate_benefit(index: usize, benefit: &BenefitEntry, errors: &mut Vec<FieldError>) {
    let fields = [
        (benefit.hours_saved_per_week, "hoursSavedPerWeek"),
        (benefit.dollar_value_per_hour, "dollarValuePerHour"),
        (benefit.direct_savings_per_year, "directSavingsPerYear"),
    ];

    if fields.iter().all(|(value, _)| value.is_none()) {
        errors.push(FieldError::new(
            format!("benefits[{index}]"),
            "at least one of hoursSavedPerWeek, dollarValuePerHour, or directSavingsPerYear is required",
        ));
        return;
    }

    for (value, name) in fields {
        if let Some(v) = value {
            validate_amount(v, &format!("benefits[{index}].{name}"), errors);
        }
    }
}

fn validate_amount(value: f64, field: &str, errors: &mut Vec<FieldError>) {
    if !value.is_finite() {
        errors.push(FieldError::new(field, "must be a finite number"));
    } else if value < 0.0 {
        errors.push(FieldError::new(field, "must be non-negative"));
    }
}
