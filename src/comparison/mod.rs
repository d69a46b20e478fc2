//! Side-by-side comparison of metric results across tools.

use serde::Serialize;

use crate::config::{self, MigrationConfig};
use crate::core::errors::Error;
use crate::core::ToolProfile;
use crate::metrics::{compute_metrics_with, MetricReport};

/// The winning tool id per metric.
///
/// Defined metrics beat undefined ones; when every tool is undefined for a
/// metric the pointer falls back to input order. Ties break to the earlier
/// profile, first wins.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BestPicks {
    pub lowest_tco: String,
    pub highest_roi: String,
    pub shortest_payback: String,
    pub lowest_migration_cost: String,
}

/// Comparison table for 1..N tools, rows in input order.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// Tool names, aligned with `rows`.
    pub labels: Vec<String>,
    pub rows: Vec<MetricReport>,
    pub best: BestPicks,
    /// Set when profiles were evaluated over different horizons. The
    /// comparison is still produced; the caller decides how to annotate it.
    pub mixed_horizons: bool,
}

/// One labeled numeric series per metric, for chart consumption.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricSeries {
    pub metric: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ComparisonReport {
    /// Plain numeric series (category labels + values) for each metric.
    /// Undefined values stay `None`; collapsing them to zero here would
    /// corrupt the chart.
    pub fn chart_series(&self) -> Vec<MetricSeries> {
        let series = |metric: &str, values: Vec<Option<f64>>| MetricSeries {
            metric: metric.to_string(),
            labels: self.labels.clone(),
            values,
        };

        vec![
            series(
                "roiPercent",
                self.rows.iter().map(|r| r.result.roi_percent).collect(),
            ),
            series(
                "paybackMonths",
                self.rows.iter().map(|r| r.result.payback_months).collect(),
            ),
            series(
                "tco",
                self.rows.iter().map(|r| Some(r.result.tco)).collect(),
            ),
            series(
                "migrationCost",
                self.rows.iter().map(|r| r.result.migration_cost).collect(),
            ),
        ]
    }
}

/// Compare 1..N profiles using the loaded configuration.
pub fn compare(profiles: &[ToolProfile]) -> Result<ComparisonReport, Error> {
    compare_with(profiles, &config::get_config().migration)
}

/// Compare 1..N profiles with explicit migration settings.
///
/// Each profile's TCO is computed over its own horizon; differing horizons
/// are flagged, never forced equal.
pub fn compare_with(
    profiles: &[ToolProfile],
    migration: &MigrationConfig,
) -> Result<ComparisonReport, Error> {
    if profiles.is_empty() {
        return Err(Error::EmptyComparison);
    }

    let rows: Vec<MetricReport> = profiles
        .iter()
        .map(|p| compute_metrics_with(p, migration))
        .collect();

    let mixed_horizons = profiles
        .iter()
        .any(|p| p.evaluation_horizon_years != profiles[0].evaluation_horizon_years);

    let best = BestPicks {
        lowest_tco: pick_best(&rows, |r| Some(r.result.tco), Direction::Lowest),
        highest_roi: pick_best(&rows, |r| r.result.roi_percent, Direction::Highest),
        shortest_payback: pick_best(&rows, |r| r.result.payback_months, Direction::Lowest),
        lowest_migration_cost: pick_best(&rows, |r| r.result.migration_cost, Direction::Lowest),
    };

    Ok(ComparisonReport {
        labels: profiles.iter().map(|p| p.name.clone()).collect(),
        rows,
        best,
        mixed_horizons,
    })
}

#[derive(Clone, Copy)]
enum Direction {
    Lowest,
    Highest,
}

/// Pick the winning tool id for one metric. Strict inequality keeps the
/// earliest row on ties.
fn pick_best<F>(rows: &[MetricReport], metric: F, direction: Direction) -> String
where
    F: Fn(&MetricReport) -> Option<f64>,
{
    let mut best_index = 0;
    let mut best_value: Option<f64> = metric(&rows[0]);

    for (index, row) in rows.iter().enumerate().skip(1) {
        let candidate = metric(row);
        let wins = match (candidate, best_value) {
            (Some(c), Some(b)) => match direction {
                Direction::Lowest => c < b,
                Direction::Highest => c > b,
            },
            (Some(_), None) => true,
            (None, _) => false,
        };
        if wins {
            best_index = index;
            best_value = candidate;
        }
    }

    rows[best_index].result.tool_id.clone()
}
