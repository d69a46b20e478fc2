use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn write_profile(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

const ALPHA: &str = r#"{
    "id": "alpha",
    "name": "Alpha",
    "evaluationHorizonYears": 1,
    "costs": [
        { "category": "implementation", "amount": 1200, "frequency": "oneTime" }
    ],
    "benefits": [
        { "description": "savings", "directSavingsPerYear": 2400 }
    ]
}"#;

const BETA: &str = r#"{
    "id": "beta",
    "name": "Beta",
    "costs": [
        { "category": "license", "amount": 500, "frequency": "monthly" }
    ],
    "benefits": [
        { "description": "savings", "directSavingsPerYear": 9000 }
    ]
}"#;

#[test]
fn test_analyze_json_output() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir, "alpha.json", ALPHA);

    let output = Command::cargo_bin("toolcost")
        .unwrap()
        .current_dir(dir.path())
        .args(["analyze", profile.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let result = &json["rows"][0]["result"];
    assert_eq!(result["toolId"], "alpha");
    assert_eq!(result["tco"], 1200.0);
    assert_eq!(result["roiPercent"], 100.0);
    assert_eq!(result["paybackMonths"], 6.0);
    assert!(result["migrationCost"].is_null());
}

#[test]
fn test_compare_terminal_output_marks_best() {
    let dir = TempDir::new().unwrap();
    let alpha = write_profile(&dir, "alpha.json", ALPHA);
    let beta = write_profile(&dir, "beta.json", BETA);

    Command::cargo_bin("toolcost")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "compare",
            alpha.to_str().unwrap(),
            beta.to_str().unwrap(),
            "--plain",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Tool Cost Comparison"))
        .stdout(predicates::str::contains("Alpha"))
        .stdout(predicates::str::contains("(best)"));
}

#[test]
fn test_compare_flags_mixed_horizons() {
    let dir = TempDir::new().unwrap();
    let alpha = write_profile(&dir, "alpha.json", ALPHA); // horizon 1
    let beta = write_profile(&dir, "beta.json", BETA); // defaults to 3

    Command::cargo_bin("toolcost")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "compare",
            alpha.to_str().unwrap(),
            beta.to_str().unwrap(),
            "--plain",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("different horizons"));
}

#[test]
fn test_invalid_profile_lists_field_errors() {
    let dir = TempDir::new().unwrap();
    let bad = write_profile(
        &dir,
        "bad.json",
        r#"{
            "id": "",
            "name": "Bad",
            "costs": [
                { "category": "license", "amount": -5, "frequency": "monthly" }
            ],
            "benefits": []
        }"#,
    );

    Command::cargo_bin("toolcost")
        .unwrap()
        .current_dir(dir.path())
        .args(["analyze", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("costs[0].amount"));
}

#[test]
fn test_markdown_output_to_file() {
    let dir = TempDir::new().unwrap();
    let alpha = write_profile(&dir, "alpha.json", ALPHA);
    let out = dir.path().join("report.md");

    Command::cargo_bin("toolcost")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "analyze",
            alpha.to_str().unwrap(),
            "--format",
            "markdown",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("# Tool Cost Report"));
    assert!(report.contains("| Alpha |"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("toolcost")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join("toolcost.toml").exists());

    // Second run without --force refuses to overwrite
    Command::cargo_bin("toolcost")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    Command::cargo_bin("toolcost")
        .unwrap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
