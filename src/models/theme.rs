//! Rendering variants that are independent of the layout topology.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual treatment applied to zones when rendering markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    /// Plain filled rectangles
    #[default]
    Flat,
    /// Drop shadow under content zones
    Shadow,
    /// Semi-transparent card fill
    Frosted,
}

impl ThemeMode {
    /// Canonical kebab-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Shadow => "shadow",
            Self::Frosted => "frosted",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "flat" | "default" | "none" => Ok(Self::Flat),
            "shadow" | "shadows" | "elevated" => Ok(Self::Shadow),
            "frosted" | "glass" => Ok(Self::Frosted),
            other => anyhow::bail!("Unknown theme '{other}'. Expected flat, shadow or frosted"),
        }
    }
}

/// Density preset for the slicer (filter) band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SlicerStyle {
    /// Single dashed top line and an optional label
    Minimal,
    /// Tinted fill, top/bottom rules and a centred label
    #[default]
    Standard,
    /// Standard plus dashed sides, caption line and vertical guides
    Full,
}

impl FromStr for SlicerStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "full" => Ok(Self::Full),
            other => anyhow::bail!("Unknown slicer style '{other}'"),
        }
    }
}
