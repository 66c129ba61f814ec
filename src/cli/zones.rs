//! Zone listing command.

use crate::cli::common::{load_layout_config, parse_mode, CliError, CliResult};
use crate::models::{LayoutMode, Zone};
use crate::services::compute_layout_detailed;
use crate::services::geometry::content_zone_count;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Compute and print the zones of a layout configuration
#[derive(Debug, Clone, Args)]
pub struct ZonesArgs {
    /// Layout configuration file (.json, .json5, .yaml, .toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Layout mode overriding the one in the file
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ZonesResponse<'a> {
    layout_mode: LayoutMode,
    width: u32,
    height: u32,
    content_count: usize,
    clamped_cells: usize,
    zones: &'a [Zone],
}

impl ZonesArgs {
    /// Execute the zones command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_layout_config(&self.config)?;
        let mode = parse_mode(self.mode.as_deref())?.unwrap_or(config.layout_mode);

        let outcome = compute_layout_detailed(mode, &config);
        let content_count = content_zone_count(&outcome.zones);

        if self.json {
            let response = ZonesResponse {
                layout_mode: mode,
                width: config.width,
                height: config.height,
                content_count,
                clamped_cells: outcome.clamped_cells,
                zones: &outcome.zones,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!(
            "Layout: {mode} ({}x{}), {} zones, {content_count} content",
            config.width,
            config.height,
            outcome.zones.len()
        );
        println!();
        println!(
            "{:>5}  {:<10}  {:>8}  {:>8}  {:>8}  {:>8}",
            "INDEX", "KIND", "X", "Y", "W", "H"
        );
        for zone in &outcome.zones {
            let index = zone.index.map_or_else(|| "-".to_string(), |i| i.to_string());
            println!(
                "{index:>5}  {:<10}  {:>8.1}  {:>8.1}  {:>8.1}  {:>8.1}",
                zone.kind.as_str(),
                zone.x,
                zone.y,
                zone.w,
                zone.h
            );
        }

        if outcome.clamped_cells > 0 {
            println!();
            println!(
                "⚠ {} cell dimensions were raised to the minimum size",
                outcome.clamped_cells
            );
        }

        Ok(())
    }
}
