//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{APP_NAME, CONFIG_DIR_ENV};
use crate::models::{LayoutConfig, LayoutMode, ThemeMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted default canvas dimension.
const MAX_CANVAS_SIZE: u32 = 10_000;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory where rendered files are written when no output path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Rendering defaults applied when the command line does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Markup theme
    #[serde(default)]
    pub theme: ThemeMode,
    /// Layout mode used for configurations that do not pick one
    #[serde(default)]
    pub default_mode: LayoutMode,
    /// Draw the "too many visuals" warning
    #[serde(default = "default_true")]
    pub warn_too_many_visuals: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            default_mode: LayoutMode::default(),
            warn_too_many_visuals: true,
        }
    }
}

/// Default canvas size for new layout configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self {
            width: layout.width,
            height: layout.height,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/DashZones/config.toml`
/// - macOS: `~/Library/Application Support/DashZones/config.toml`
/// - Windows: `%APPDATA%\DashZones\config.toml`
///
/// # Validation
///
/// - canvas width and height must be between 1 and 10000
/// - `output_dir`, if set, must not point at an existing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Rendering defaults
    #[serde(default)]
    pub render: RenderConfig,
    /// Default canvas
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/DashZones/`
    /// - macOS: `~/Library/Application Support/DashZones/`
    /// - Windows: `%APPDATA%\DashZones\`
    ///
    /// `DASHZONES_CONFIG_DIR`, when set and non-empty, replaces the platform path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path, with the same defaults rule.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let CanvasConfig { width, height } = self.canvas;
        if !(1..=MAX_CANVAS_SIZE).contains(&width) || !(1..=MAX_CANVAS_SIZE).contains(&height) {
            anyhow::bail!(
                "Canvas size {width}x{height} is out of range (1-{MAX_CANVAS_SIZE} pixels per side)"
            );
        }

        if let Some(dir) = &self.paths.output_dir {
            if dir.is_file() {
                anyhow::bail!("Output directory is a file: {}", dir.display());
            }
        }

        Ok(())
    }

    /// Starting layout configuration built from these defaults.
    #[must_use]
    pub fn base_layout(&self) -> LayoutConfig {
        LayoutConfig {
            warn_too_many_visuals: self.render.warn_too_many_visuals,
            ..LayoutConfig::default()
        }
        .with_canvas(self.canvas.width, self.canvas.height)
        .with_mode(self.render.default_mode)
    }

    /// Resolves an output file name against the configured output directory.
    #[must_use]
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.paths
            .output_dir
            .as_ref()
            .map_or_else(|| PathBuf::from(file_name), |dir| dir.join(file_name))
    }
}
