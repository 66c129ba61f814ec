//! Layout configuration file I/O service.
//!
//! This module centralizes reading and writing [`LayoutConfig`] files. The
//! file format is chosen by extension; every format shares the same camelCase
//! schema, so a configuration can move between them without loss.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::models::LayoutConfig;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`
    Json,
    /// `.json5`; written back as plain JSON, which is valid JSON5
    Json5,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .with_context(|| {
                format!(
                    "Configuration file has no extension: {}\n\n\
                     Use one of: .json, .json5, .yaml, .yml, .toml",
                    path.display()
                )
            })?;

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "json5" => Ok(Self::Json5),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => anyhow::bail!(
                "Unsupported configuration format '.{other}' for {}\n\n\
                 Use one of: .json, .json5, .yaml, .yml, .toml",
                path.display()
            ),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Json5 => "JSON5",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        })
    }
}

/// Service for loading and saving layout configurations.
pub struct ConfigService;

impl ConfigService {
    /// Loads a layout configuration, choosing the parser by extension.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use dashzones::services::ConfigService;
    ///
    /// let config = ConfigService::load(Path::new("dashboard.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<LayoutConfig> {
        let format = ConfigFormat::from_path(path)?;

        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found: {}\n\n\
                 Please check the file path and try again.",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;

        Self::parse(&content, format)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Parses configuration text in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<LayoutConfig> {
        let config = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Json5 => json5::from_str(content)?,
            ConfigFormat::Yaml => serde_yml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Serializes a configuration in the given format.
    pub fn to_string(config: &LayoutConfig, format: ConfigFormat) -> Result<String> {
        let content = match format {
            ConfigFormat::Json | ConfigFormat::Json5 => serde_json::to_string_pretty(config)?,
            ConfigFormat::Yaml => serde_yml::to_string(config)?,
            ConfigFormat::Toml => toml::to_string_pretty(config)?,
        };
        Ok(content)
    }

    /// Saves a configuration, choosing the serializer by extension.
    ///
    /// This performs an atomic write using a temp file + rename pattern to ensure
    /// the file is never left in a corrupted state.
    pub fn save(config: &LayoutConfig, path: &Path) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        let content = Self::to_string(config, format)
            .with_context(|| format!("Failed to serialize configuration as {format}"))?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to save configuration to {}", path.display()))?;

        tracing::debug!(path = %path.display(), %format, "saved layout configuration");
        Ok(())
    }
}
