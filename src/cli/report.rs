//! Layout report command.

use crate::cli::common::{
    load_layout_config, parse_mode, resolve_output, write_output, CliError, CliResult,
};
use crate::config::Config;
use crate::export::{build_report, render_report_markdown};
use crate::services::compute_layout_detailed;
use chrono::Utc;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ReportFormat {
    /// Markdown document with a zone table
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

/// Produce a layout report: zone coordinates, annotations and recommendations
#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Layout configuration file (.json, .json5, .yaml, .toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Layout mode overriding the one in the file
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Markdown)]
    pub format: ReportFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self) -> CliResult<()> {
        let settings = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        let config = load_layout_config(&self.config)?;
        let mode = parse_mode(self.mode.as_deref())?.unwrap_or(config.layout_mode);

        let outcome = compute_layout_detailed(mode, &config);
        let report = build_report(&config, mode, &outcome, Utc::now());

        let content = match self.format {
            ReportFormat::Markdown => render_report_markdown(&report),
            ReportFormat::Json => serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?,
        };

        let output = self.output.as_deref().map(|p| resolve_output(&settings, p));
        write_output(&content, output.as_deref(), "report")
    }
}
