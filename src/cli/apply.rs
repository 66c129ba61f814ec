//! Wireframe to layout configuration command.

use crate::cli::common::{load_layout_config, parse_mode, CliError, CliResult};
use crate::cli::parse::load_wireframe;
use crate::config::Config;
use crate::models::{LayoutConfig, WireframeDocument};
use crate::parser::{apply_layout, apply_page};
use crate::services::ConfigService;
use clap::Args;
use std::path::PathBuf;

/// Apply a parsed wireframe page or layout to a layout configuration
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// Wireframe text file
    #[arg(short, long, value_name = "FILE")]
    pub wireframe: PathBuf,

    /// Page number to apply (defaults to the first page)
    #[arg(short, long, value_name = "N", conflicts_with = "layout")]
    pub page: Option<u32>,

    /// Layout declared outside pages to apply
    #[arg(short, long, value_name = "MODE")]
    pub layout: Option<String>,

    /// Base layout configuration (defaults to the application settings)
    #[arg(short, long, value_name = "FILE")]
    pub base: Option<PathBuf>,

    /// Save the result to this file (.json, .json5, .yaml, .toml) instead of printing JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ApplyArgs {
    /// Execute the apply command
    pub fn execute(&self) -> CliResult<()> {
        let doc = load_wireframe(&self.wireframe)?;

        let base = match &self.base {
            Some(path) => load_layout_config(path)?,
            None => Config::load()
                .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?
                .base_layout(),
        };

        let config = self.resolve(&doc, &base)?;

        match &self.output {
            Some(path) => {
                ConfigService::save(&config, path).map_err(|e| {
                    CliError::io(format!("Failed to save configuration: {e:#}"))
                })?;
                println!(
                    "✓ Saved {} layout configuration to {}",
                    config.layout_mode,
                    path.display()
                );
            }
            None => println!(
                "{}",
                serde_json::to_string_pretty(&config)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            ),
        }

        Ok(())
    }

    fn resolve(&self, doc: &WireframeDocument, base: &LayoutConfig) -> CliResult<LayoutConfig> {
        if let Some(number) = self.page {
            let page = doc.page(number).ok_or_else(|| {
                CliError::validation(format!(
                    "Page {number} not found in {}",
                    self.wireframe.display()
                ))
            })?;
            return Ok(apply_page(page, doc, base));
        }

        if let Some(mode) = parse_mode(self.layout.as_deref())? {
            return Ok(apply_layout(mode, doc, base));
        }

        if let Some(page) = doc.pages.first() {
            Ok(apply_page(page, doc, base))
        } else if let Some(mode) = doc.layouts.keys().next() {
            Ok(apply_layout(*mode, doc, base))
        } else {
            Err(CliError::validation(format!(
                "No pages or layouts recognized in {}",
                self.wireframe.display()
            )))
        }
    }
}
