//! Markup rendering command.

use crate::cli::common::{
    load_layout_config, parse_mode, parse_theme, resolve_output, write_output, CliError, CliResult,
};
use crate::config::Config;
use crate::export::render_markup;
use crate::services::compute_layout;
use clap::Args;
use std::path::PathBuf;

/// Render a layout configuration as SVG
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Layout configuration file (.json, .json5, .yaml, .toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Layout mode overriding the one in the file
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Theme (flat, shadow or frosted); defaults to the application setting
    #[arg(short, long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let settings = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        let config = load_layout_config(&self.config)?;
        let mode = parse_mode(self.mode.as_deref())?.unwrap_or(config.layout_mode);
        let theme = parse_theme(self.theme.as_deref())?.unwrap_or(settings.render.theme);

        let zones = compute_layout(mode, &config);
        tracing::debug!(%mode, %theme, zones = zones.len(), "rendering markup");

        let markup = render_markup(&config, &zones, theme);
        let output = self.output.as_deref().map(|p| resolve_output(&settings, p));
        write_output(&markup, output.as_deref(), "SVG")
    }
}
