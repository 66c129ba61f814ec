//! DashZones - dashboard zone layout engine
//!
//! Computes dashboard zone rectangles from a layout configuration, renders
//! them as SVG, and converts text wireframes into layout configurations.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashzones::cli::{
    ApplyArgs, CliResult, ConfigArgs, ExitCode, ParseArgs, RenderArgs, ReportArgs, ZonesArgs,
};

/// DashZones - dashboard zone layout engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute and print the zones of a layout configuration
    Zones(ZonesArgs),
    /// Render a layout configuration as SVG
    Render(RenderArgs),
    /// Parse a text wireframe and summarize what was recognized
    Parse(ParseArgs),
    /// Apply a wireframe page or layout to a layout configuration
    Apply(ApplyArgs),
    /// Produce a layout report
    Report(ReportArgs),
    /// Manage application settings
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Zones(args) => args.execute(),
            Self::Render(args) => args.execute(),
            Self::Parse(args) => args.execute(),
            Self::Apply(args) => args.execute(),
            Self::Report(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }

    std::process::exit(ExitCode::Success.code());
}
