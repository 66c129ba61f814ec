//! End-to-end tests for `dashzones report`.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_report_markdown_default() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "grid.json", &grid_config());

    let output = run(&["report", "--config", config.to_str().unwrap()], temp.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "report should succeed. stderr: {}",
        stderr(&output)
    );

    let markdown = stdout(&output);
    assert!(markdown.starts_with("# Layout Report: grid layout"));
    assert!(markdown.contains("## Zones"));
    assert!(markdown.contains("| 0 | card |"));
    assert!(markdown.contains("| line-chart | Revenue |"));
    assert!(markdown.contains("## Recommendations"));
}

#[test]
fn test_report_json_flags_unlabeled_visuals() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "grid.json", &grid_config());

    let output = run(
        &["report", "--config", config.to_str().unwrap(), "--format", "json"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let report: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(report["metadata"]["generator"], "DashZones");
    assert_eq!(report["metadata"]["layoutMode"], "grid");
    assert_eq!(report["metadata"]["contentCount"], 6);
    assert!(report["metadata"]["generatedAt"].is_string());

    let kinds: Vec<&str> = report["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["kind"].as_str())
        .collect();
    assert_eq!(kinds, vec!["unlabeled-visuals"]);
}

#[test]
fn test_report_too_many_visuals() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "crowded.json", &crowded_config());

    let output = run(
        &["report", "-c", config.to_str().unwrap(), "-f", "json"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["recommendations"][0]["kind"], "too-many-visuals");
}

#[test]
fn test_report_to_file() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "grid.json", &grid_config());
    let target = temp.path().join("docs").join("grid.md");

    let output = run(
        &[
            "report",
            "--config",
            config.to_str().unwrap(),
            "--output",
            target.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("✓ Wrote report"));

    let markdown = fs::read_to_string(&target).expect("report should be written");
    assert!(markdown.contains("- **Mode:** grid"));
}

#[test]
fn test_report_invalid_format() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "grid.json", &grid_config());

    let output = run(
        &["report", "--config", config.to_str().unwrap(), "--format", "pdf"],
        temp.path(),
    );
    assert_ne!(output.status.code(), Some(0));
}
