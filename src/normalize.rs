//! Normalization of heterogeneous cost/benefit inputs to a per-year basis.

use crate::core::{BenefitEntry, BenefitWarning, Frequency, NormalizedFinancials, ToolProfile};

/// Working weeks used to annualize hours-saved benefits.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Normalized financials plus the benefit entries that could not
/// contribute a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalization {
    pub financials: NormalizedFinancials,
    pub warnings: Vec<BenefitWarning>,
}

/// Reduce a profile's costs and benefits to a canonical annual basis.
///
/// Monthly amounts are annualized (× 12); one-time amounts are kept apart
/// from recurring totals. Entries limited by `appliesToYears` contribute
/// for `min(appliesToYears, horizon)` years instead of the full horizon.
/// Pure and deterministic; the profile is never mutated.
pub fn normalize(profile: &ToolProfile) -> Normalization {
    let horizon = profile.evaluation_horizon_years as f64;

    let mut annual_cost = 0.0;
    let mut one_time_cost = 0.0;
    let mut recurring_over_horizon = 0.0;

    for cost in &profile.costs {
        match cost.frequency {
            Frequency::OneTime => one_time_cost += cost.amount,
            Frequency::Monthly | Frequency::Annual => {
                let annualized = cost.annualized();
                annual_cost += annualized;

                let years = match cost.applies_to_years {
                    Some(limit) => (limit as f64).min(horizon),
                    None => horizon,
                };
                recurring_over_horizon += annualized * years;
            }
        }
    }

    let mut annual_benefit_value = 0.0;
    let mut warnings = Vec::new();

    for (index, benefit) in profile.benefits.iter().enumerate() {
        match benefit_value(benefit) {
            Ok(value) => annual_benefit_value += value,
            Err(reason) => warnings.push(BenefitWarning {
                index,
                description: benefit.description.clone(),
                reason,
            }),
        }
    }

    Normalization {
        financials: NormalizedFinancials {
            annual_cost,
            one_time_cost,
            total_cost_over_horizon: one_time_cost + recurring_over_horizon,
            annual_benefit_value,
        },
        warnings,
    }
}

/// Annual dollar value of one benefit entry.
///
/// Direct savings win over the hours × rate product when both are present.
/// An entry without enough fields to compute a value is an `Err` carrying
/// the reason; it contributes zero, never blocks the computation.
fn benefit_value(benefit: &BenefitEntry) -> Result<f64, String> {
    if let Some(direct) = benefit.direct_savings_per_year {
        return Ok(direct);
    }

    match (benefit.hours_saved_per_week, benefit.dollar_value_per_hour) {
        (Some(hours), Some(rate)) => Ok(hours * WEEKS_PER_YEAR * rate),
        (Some(_), None) => Err("dollarValuePerHour is required to value hours saved".to_string()),
        (None, Some(_)) => Err("hoursSavedPerWeek is required to value an hourly rate".to_string()),
        (None, None) => Err("no value fields present".to_string()),
    }
}
