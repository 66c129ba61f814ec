//! End-to-end tests for `dashzones zones`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Human-Readable Output
// ============================================================================

#[test]
fn test_zones_table_lists_every_zone() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "grid.json", &grid_config());

    let output = run(&["zones", "--config", config.to_str().unwrap()], temp.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "zones should succeed. stderr: {}",
        stderr(&output)
    );

    let stdout = stdout(&output);
    assert!(stdout.contains("Layout: grid (1280x720)"), "stdout: {stdout}");
    assert!(stdout.contains("6 content"));
    assert_eq!(stdout.matches(" card ").count(), 6);
}

#[test]
fn test_zones_mode_override() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "grid.json", &grid_config());

    let output = run(
        &["zones", "--config", config.to_str().unwrap(), "--mode", "mobile", "--json"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(result["layoutMode"], "mobile");
    assert_eq!(result["contentCount"], 4);
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_zones_json_indices_are_contiguous() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "grid.json", &grid_config());

    let output = run(
        &["zones", "--config", config.to_str().unwrap(), "--json"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(result["layoutMode"], "grid");
    assert_eq!(result["width"], 1280);
    assert_eq!(result["clampedCells"], 0);

    let indices: Vec<u64> = result["zones"]
        .as_array()
        .expect("zones should be an array")
        .iter()
        .filter_map(|zone| zone["index"].as_u64())
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);

    for zone in result["zones"].as_array().unwrap() {
        let right = zone["x"].as_f64().unwrap() + zone["w"].as_f64().unwrap();
        let bottom = zone["y"].as_f64().unwrap() + zone["h"].as_f64().unwrap();
        assert!(right <= 1280.0 + 1e-6, "zone exceeds canvas: {zone}");
        assert!(bottom <= 720.0 + 1e-6, "zone exceeds canvas: {zone}");
    }
}

#[test]
fn test_zones_accepts_yaml_and_toml() {
    let temp = temp_dir();
    let yaml = write_file(
        temp.path(),
        "mobile.yaml",
        "layoutMode: mobile\nwidth: 375\nheight: 812\nmobileVisualCount: 3\n",
    );
    let toml = write_file(
        temp.path(),
        "kpi.toml",
        "layoutMode = \"kpi\"\nkpiCount = 2\nkpiVisualCount = 1\n",
    );

    let output = run(&["zones", "-c", yaml.to_str().unwrap(), "--json"], temp.path());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["contentCount"], 3);

    let output = run(&["zones", "-c", toml.to_str().unwrap(), "--json"], temp.path());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["layoutMode"], "kpi");
    assert_eq!(result["contentCount"], 3);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_zones_missing_config_is_io_error() {
    let temp = temp_dir();
    let missing = temp.path().join("absent.json");

    let output = run(&["zones", "--config", missing.to_str().unwrap()], temp.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not found"));
}

#[test]
fn test_zones_unknown_mode_is_validation_error() {
    let temp = temp_dir();
    let config = write_config_json(temp.path(), "grid.json", &grid_config());

    let output = run(
        &["zones", "--config", config.to_str().unwrap(), "--mode", "spiral"],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown layout mode"));
}

#[test]
fn test_zones_malformed_config_is_validation_error() {
    let temp = temp_dir();
    let config = write_file(temp.path(), "broken.json", "{ \"layoutMode\": ");

    let output = run(&["zones", "--config", config.to_str().unwrap()], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
