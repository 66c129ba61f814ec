//! Shared types for CLI commands.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::models::{LayoutConfig, LayoutMode, ThemeMode};
use crate::services::ConfigService;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown mode, malformed file content, conflicting flags
    Validation = 1,
    /// File system failure: missing input, unwritable output
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid arguments or content
    Validation,
    /// Read or write failure
    Io,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category, determines the exit code
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::Validation,
            CliErrorKind::Io => ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Parses an optional `--mode` value.
pub fn parse_mode(value: Option<&str>) -> CliResult<Option<LayoutMode>> {
    value
        .map(|text| text.parse::<LayoutMode>())
        .transpose()
        .map_err(|e| CliError::validation(e.to_string()))
}

/// Parses an optional `--theme` value.
pub fn parse_theme(value: Option<&str>) -> CliResult<Option<ThemeMode>> {
    value
        .map(|text| text.parse::<ThemeMode>())
        .transpose()
        .map_err(|e| CliError::validation(e.to_string()))
}

/// Loads a layout configuration file for a command.
///
/// A missing file is an I/O error; unreadable content is a validation error.
pub fn load_layout_config(path: &Path) -> CliResult<LayoutConfig> {
    if !path.is_file() {
        return Err(CliError::io(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    ConfigService::load(path)
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Resolves a bare `--output` file name against the configured output directory.
///
/// Paths with a directory component are used as given.
#[must_use]
pub fn resolve_output(settings: &Config, output: &Path) -> PathBuf {
    let bare = output
        .parent()
        .map_or(true, |dir| dir.as_os_str().is_empty());
    match output.file_name().and_then(|n| n.to_str()) {
        Some(name) if bare => settings.output_path(name),
        _ => output.to_path_buf(),
    }
}

/// Writes command output to a file, or prints it when no path is given.
pub fn write_output(content: &str, output: Option<&Path>, what: &str) -> CliResult<()> {
    let Some(path) = output else {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
        return Ok(());
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            CliError::io(format!("Failed to create directory {}: {e}", dir.display()))
        })?;
    }

    std::fs::write(path, content)
        .map_err(|e| CliError::io(format!("Failed to write {what} to {}: {e}", path.display())))?;

    println!("✓ Wrote {what} to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").exit_code().code(), 1);
        assert_eq!(CliError::io("gone").exit_code().code(), 2);
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode(None).unwrap(), None);
        assert_eq!(parse_mode(Some("three-col")).unwrap(), Some(LayoutMode::ThreeCol));
        let err = parse_mode(Some("spiral")).unwrap_err();
        assert_eq!(err.kind, CliErrorKind::Validation);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse_theme(Some("glass")).unwrap(), Some(ThemeMode::Frosted));
        assert!(parse_theme(Some("neon")).is_err());
    }

    #[test]
    fn test_load_layout_config_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = load_layout_config(&temp_dir.path().join("nope.json")).unwrap_err();
        assert_eq!(missing.kind, CliErrorKind::Io);

        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&bad, "[1, 2").unwrap();
        let invalid = load_layout_config(&bad).unwrap_err();
        assert_eq!(invalid.kind, CliErrorKind::Validation);
    }

    #[test]
    fn test_resolve_output() {
        let mut settings = Config::new();
        assert_eq!(resolve_output(&settings, Path::new("a.svg")), PathBuf::from("a.svg"));

        settings.paths.output_dir = Some(PathBuf::from("/srv/out"));
        assert_eq!(
            resolve_output(&settings, Path::new("a.svg")),
            PathBuf::from("/srv/out/a.svg")
        );
        assert_eq!(
            resolve_output(&settings, Path::new("local/a.svg")),
            PathBuf::from("local/a.svg")
        );
    }

    #[test]
    fn test_write_output_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("a.txt");
        write_output("hello", Some(&path), "text").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }
}
