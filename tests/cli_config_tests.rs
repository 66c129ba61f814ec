//! End-to-end tests for `dashzones config` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show / Path
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let temp = temp_dir();
    let output = run(&["config", "show"], temp.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        stderr(&output)
    );

    let stdout = stdout(&output);
    assert!(stdout.contains("DashZones Configuration"));
    assert!(stdout.contains("Theme: flat"));
    assert!(stdout.contains("Default Mode: federal"));
    assert!(stdout.contains("config init"), "missing file hint: {stdout}");
}

#[test]
fn test_config_show_json_schema() {
    let temp = temp_dir();
    let output = run(&["config", "show", "--json"], temp.path());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert!(result["paths"]["config_file"].is_string());
    assert!(result["paths"].get("output_dir").is_none());
    assert_eq!(result["render"]["theme"], "flat");
    assert_eq!(result["render"]["default_mode"], "federal");
    assert_eq!(result["render"]["warn_too_many_visuals"], true);
    assert_eq!(result["canvas"]["width"], 1280);
    assert_eq!(result["canvas"]["height"], 720);
}

#[test]
fn test_config_path_uses_override_dir() {
    let temp = temp_dir();
    let output = run(&["config", "path"], temp.path());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let expected = temp.path().join("config.toml");
    assert_eq!(stdout(&output).trim(), expected.display().to_string());
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_config_init_writes_defaults_once() {
    let temp = temp_dir();

    let first = run(&["config", "init"], temp.path());
    assert_eq!(first.status.code(), Some(0), "stderr: {}", stderr(&first));
    assert!(temp.path().join("config.toml").exists());

    let second = run(&["config", "init"], temp.path());
    assert_eq!(second.status.code(), Some(1));
    assert!(stderr(&second).contains("already exists"));

    let forced = run(&["config", "init", "--force"], temp.path());
    assert_eq!(forced.status.code(), Some(0), "stderr: {}", stderr(&forced));
}

// ============================================================================
// Set
// ============================================================================

#[test]
fn test_config_set_requires_an_option() {
    let temp = temp_dir();
    let output = run(&["config", "set"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_and_show_round_trip() {
    let temp = temp_dir();
    let set = run(
        &[
            "config",
            "set",
            "--theme",
            "shadow",
            "--default-mode",
            "Three Column",
            "--warn-too-many-visuals",
            "false",
        ],
        temp.path(),
    );
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr(&set));
    assert!(stdout(&set).contains("Configuration updated successfully."));

    let show = run(&["config", "show", "--json"], temp.path());
    let result: serde_json::Value = serde_json::from_str(&stdout(&show)).unwrap();
    assert_eq!(result["render"]["theme"], "shadow");
    assert_eq!(result["render"]["default_mode"], "three-col");
    assert_eq!(result["render"]["warn_too_many_visuals"], false);
}

#[test]
fn test_config_set_output_dir_is_created() {
    let temp = temp_dir();
    let out_dir = temp.path().join("renders").join("svg");

    let output = run(
        &["config", "set", "--output-dir", out_dir.to_str().unwrap()],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out_dir.is_dir());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let temp = temp_dir();

    let theme = run(&["config", "set", "--theme", "neon"], temp.path());
    assert_eq!(theme.status.code(), Some(1));

    let width = run(&["config", "set", "--width", "0"], temp.path());
    assert_eq!(width.status.code(), Some(1));
    assert!(stderr(&width).contains("out of range"));

    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn test_config_corrupt_file_is_validation_error() {
    let temp = temp_dir();
    write_file(temp.path(), "config.toml", "[render\ntheme = ");

    let output = run(&["config", "show"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
