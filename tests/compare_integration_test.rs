//! End-to-end tests: raw JSON drafts through validation, metrics, and
//! comparison output.

use pretty_assertions::assert_eq;
use toolcost::config::{MigrationConfig, ToolcostConfig};
use toolcost::comparison::compare_with;
use toolcost::metrics::compute_metrics_with;
use toolcost::validation::ProfileDraft;
use toolcost::{OutputWriter, ToolProfile};

fn profile_from_json(json: &str) -> ToolProfile {
    let draft: ProfileDraft = serde_json::from_str(json).unwrap();
    draft.validate(&ToolcostConfig::default()).unwrap()
}

#[test]
fn one_time_only_profile_pays_back_in_six_months() {
    let profile = profile_from_json(
        r#"{
            "id": "wiki",
            "name": "Wiki",
            "evaluationHorizonYears": 1,
            "costs": [
                { "category": "implementation", "amount": 1200, "frequency": "oneTime" }
            ],
            "benefits": [
                { "description": "less searching", "directSavingsPerYear": 2400 }
            ]
        }"#,
    );

    let report = compute_metrics_with(&profile, &MigrationConfig::default());
    assert_eq!(report.result.tco, 1200.0);
    assert_eq!(report.result.roi_percent, Some(100.0));
    assert_eq!(report.result.payback_months, Some(6.0));
}

#[test]
fn cost_without_benefits_is_minus_100_percent_not_undefined() {
    let profile = profile_from_json(
        r#"{
            "id": "crm",
            "name": "CRM",
            "evaluationHorizonYears": 3,
            "costs": [
                { "category": "license", "amount": 1000, "frequency": "annual" }
            ],
            "benefits": []
        }"#,
    );

    let report = compute_metrics_with(&profile, &MigrationConfig::default());
    assert_eq!(report.result.tco, 3000.0);
    // Benefit of zero against a real cost is a defined -100% ROI; only a
    // zero-cost profile has undefined ROI. The two must never be conflated.
    assert_eq!(report.result.roi_percent, Some(-100.0));
    assert_eq!(report.result.payback_months, None);
}

#[test]
fn migration_scenario_sums_tagged_costs_and_downtime() {
    let profile = profile_from_json(
        r#"{
            "id": "dest",
            "name": "Destination",
            "costs": [
                { "category": "dataMigration", "amount": 500, "frequency": "oneTime" },
                { "category": "training", "amount": 300, "frequency": "oneTime" },
                { "category": "license", "amount": 2000, "frequency": "oneTime" }
            ],
            "benefits": [
                { "description": "fewer outages", "directSavingsPerYear": 5000 }
            ],
            "migration": { "downtimeDays": 2, "dailyTeamCost": 400 }
        }"#,
    );

    let report = compute_metrics_with(&profile, &MigrationConfig::default());
    // 500 + 300 + 2 * 400; the untagged license cost stays out
    assert_eq!(report.result.migration_cost, Some(1600.0));
}

#[test]
fn comparison_flows_from_drafts_to_json_output() {
    let alpha = profile_from_json(
        r#"{
            "id": "alpha",
            "name": "Alpha",
            "costs": [
                { "category": "license", "amount": 100, "frequency": "monthly" }
            ],
            "benefits": [
                { "description": "automation", "hoursSavedPerWeek": 2, "dollarValuePerHour": 40 }
            ]
        }"#,
    );
    let beta = profile_from_json(
        r#"{
            "id": "beta",
            "name": "Beta",
            "costs": [
                { "category": "license", "amount": 3000, "frequency": "annual" }
            ],
            "benefits": [
                { "description": "hours only", "hoursSavedPerWeek": 5 }
            ]
        }"#,
    );

    let report = compare_with(&[alpha, beta], &MigrationConfig::default()).unwrap();

    // Alpha: 1200/yr cost vs 2 * 52 * 40 = 4160/yr benefit
    assert_eq!(report.best.lowest_tco, "alpha");
    assert_eq!(report.best.highest_roi, "alpha");
    // Beta's benefit entry lacks a rate: warned, not dropped
    assert_eq!(report.rows[1].warnings.len(), 1);
    assert_eq!(report.rows[1].result.roi_percent, Some(-100.0));

    let mut buffer = Vec::new();
    toolcost::io::output::JsonWriter::new(&mut buffer)
        .write_comparison(&report)
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(json["best"]["lowestTco"], "alpha");
    assert_eq!(json["rows"][0]["result"]["toolId"], "alpha");
    assert!(json["rows"][0]["result"]["migrationCost"].is_null());
    assert_eq!(json["rows"][1]["warnings"][0]["index"], 0);
}

#[test]
fn chart_series_match_table_rows() {
    let a = profile_from_json(
        r#"{
            "id": "a", "name": "A",
            "costs": [ { "category": "license", "amount": 1000, "frequency": "annual" } ],
            "benefits": [ { "description": "x", "directSavingsPerYear": 2000 } ]
        }"#,
    );
    let report = compare_with(&[a], &MigrationConfig::default()).unwrap();
    let series = report.chart_series();

    assert_eq!(series.len(), 4);
    let tco = series.iter().find(|s| s.metric == "tco").unwrap();
    assert_eq!(tco.labels, vec!["A"]);
    assert_eq!(tco.values, vec![Some(3000.0)]);
}

#[test]
fn invalid_draft_reports_every_field() {
    let draft: ProfileDraft = serde_json::from_str(
        r#"{
            "id": "",
            "name": "Broken",
            "evaluationHorizonYears": -2,
            "costs": [
                { "category": "support", "amount": -10, "frequency": "monthly" }
            ],
            "benefits": [
                { "description": "empty" }
            ]
        }"#,
    )
    .unwrap();

    let errors = draft.validate(&ToolcostConfig::default()).unwrap_err();
    assert_eq!(errors.len(), 4);
}
