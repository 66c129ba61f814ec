//! Configuration management CLI commands.

use crate::cli::common::{parse_mode, parse_theme, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init(ConfigInitArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a configuration file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default theme (flat, shadow or frosted)
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    /// Layout mode for configurations that do not pick one
    #[arg(long, value_name = "MODE")]
    default_mode: Option<String>,

    /// Directory for rendered files given by bare file name
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Default canvas width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Default canvas height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Draw the "too many visuals" warning (true or false)
    #[arg(long, value_name = "BOOL")]
    warn_too_many_visuals: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    render: RenderOutput,
    canvas: CanvasOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    config_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
}

#[derive(Serialize, Debug)]
struct RenderOutput {
    theme: String,
    default_mode: String,
    warn_too_many_visuals: bool,
}

#[derive(Serialize, Debug)]
struct CanvasOutput {
    width: u32,
    height: u32,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                println!("{}", config_file_path()?.display());
                Ok(())
            }
            ConfigCommand::Init(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

fn config_file_path() -> CliResult<PathBuf> {
    Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;
        let path = config_file_path()?;

        if self.json {
            output_json(&config, &path)?;
        } else {
            output_human_readable(&config, &path);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let path = config_file_path()?;
        if Config::exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default()
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("✓ Wrote default configuration to {}", path.display());
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none()
            && self.default_mode.is_none()
            && self.output_dir.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.warn_too_many_visuals.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --default-mode, --output-dir, --width, --height, or --warn-too-many-visuals",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if let Some(theme) = parse_theme(self.theme.as_deref())? {
            config.render.theme = theme;
        }

        if let Some(mode) = parse_mode(self.default_mode.as_deref())? {
            config.render.default_mode = mode;
        }

        if let Some(warn) = self.warn_too_many_visuals {
            config.render.warn_too_many_visuals = warn;
        }

        if let Some(width) = self.width {
            config.canvas.width = width;
        }

        if let Some(height) = self.height {
            config.canvas.height = height;
        }

        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;
            config.paths.output_dir = Some(path.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, path: &std::path::Path) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            config_file: path.to_string_lossy().to_string(),
            output_dir: config
                .paths
                .output_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        render: RenderOutput {
            theme: config.render.theme.to_string(),
            default_mode: config.render.default_mode.to_string(),
            warn_too_many_visuals: config.render.warn_too_many_visuals,
        },
        canvas: CanvasOutput {
            width: config.canvas.width,
            height: config.canvas.height,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &std::path::Path) {
    println!("DashZones Configuration");
    println!("=======================");
    println!();

    println!("Paths:");
    if path.exists() {
        println!("  Config File: {}", path.display());
    } else {
        println!(
            "  Config File: {} (not created, run `{APP_BINARY_NAME} config init`)",
            path.display()
        );
    }
    if let Some(dir) = &config.paths.output_dir {
        println!("  Output Directory: {}", dir.display());
    } else {
        println!("  Output Directory: (current directory)");
    }
    println!();

    println!("Render:");
    println!("  Theme: {}", config.render.theme);
    println!("  Default Mode: {}", config.render.default_mode);
    println!(
        "  Too-Many-Visuals Warning: {}",
        if config.render.warn_too_many_visuals {
            "on"
        } else {
            "off"
        }
    );
    println!();

    println!("Canvas:");
    println!("  Size: {}x{}", config.canvas.width, config.canvas.height);
    println!();
}
