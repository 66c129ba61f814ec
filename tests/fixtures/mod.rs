//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use dashzones::models::{LayoutConfig, LayoutMode, VisualKind};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the dashzones binary built for this test run.
pub fn dashzones_bin() -> &'static str {
    env!("CARGO_BIN_EXE_dashzones")
}

/// Creates a Command whose application settings live in `config_dir`.
///
/// Every command run by the tests is isolated this way so the developer's
/// own settings never leak into assertions.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(dashzones_bin());
    cmd.env("DASHZONES_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in an isolated settings directory and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Creates a temp directory.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A 2×3 grid configuration with two annotated visuals.
pub fn grid_config() -> LayoutConfig {
    let mut config = LayoutConfig::default().with_mode(LayoutMode::Grid);
    config.grid_rows = 2;
    config.grid_columns = 3;
    config.visual_types.insert(0, VisualKind::LineChart);
    config.visual_types.insert(1, VisualKind::BarChart);
    config.visual_labels.insert(0, "Revenue".to_string());
    config.show_labels = true;
    config
}

/// A 4×4 grid configuration; 16 visuals trip the too-many-visuals warning.
pub fn crowded_config() -> LayoutConfig {
    let mut config = LayoutConfig::default().with_mode(LayoutMode::Grid);
    config.grid_rows = 4;
    config.grid_columns = 4;
    config
}

/// Writes a layout configuration as pretty JSON.
pub fn write_config_json(dir: &Path, name: &str, config: &LayoutConfig) -> PathBuf {
    let path = dir.join(name);
    let content = serde_json::to_string_pretty(config).expect("Failed to serialize config");
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// Writes arbitrary text into `dir/name`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// Page-oriented wireframe with two pages.
pub const PAGES_WIREFRAME: &str = "\
# Sales Dashboard Wireframe

Canvas: 1920x1080

Page 1: Executive Overview
Layout Type: KPI
KPI Count: 5
Visuals:
1. KPI Card - \"Total Revenue\"
2. Line Chart - \"Revenue Trend\" (show label: yes)
3. Bar Chart - \"Top Products\"

---

Page 2: Regional Detail
Layout Type: Grid
Grid Configuration:
Rows: 2
Columns: 3
Visuals:
1. Map - \"Sales by Region\"
2. Table - \"Store Ranking\"
";

/// Wireframe that declares layouts without pages.
pub const LEGACY_WIREFRAME: &str = "\
Layout 1: Three Column
3 visuals per column

Layout 2: Grid
Use a 3x4 grid of charts
";
