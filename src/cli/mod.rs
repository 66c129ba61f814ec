//! CLI command handlers for DashZones.
//!
//! Every command loads its inputs, runs the library, and prints either human
//! readable text or JSON. Failures map to exit codes through [`CliError`].

pub mod apply;
pub mod common;
pub mod config;
pub mod parse;
pub mod render;
pub mod report;
pub mod zones;

// Re-export types used by main.rs and tests
pub use apply::ApplyArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use parse::ParseArgs;
pub use render::RenderArgs;
pub use report::{ReportArgs, ReportFormat};
pub use zones::ZonesArgs;
