//! Layout topology selector.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven fixed dashboard topologies.
///
/// Serialized in kebab-case (`"three-col"`), which is also the vocabulary
/// used by wireframe documents after synonym normalization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Government-style page: header band with logo/title, optional sidebar, card grid
    #[default]
    Federal,
    /// Left navigation rail, KPI strip, card grid
    Sidebar,
    /// Plain R×C grid (optionally variable columns per row)
    Grid,
    /// KPI strip over a main chart and a secondary grid
    Kpi,
    /// KPI strip over three independently stacked columns
    ThreeCol,
    /// KPI strip over one large zone and a stack of side cards
    Asymmetric,
    /// Single column phone layout
    Mobile,
}

impl LayoutMode {
    /// All modes in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Federal,
        Self::Sidebar,
        Self::Grid,
        Self::Kpi,
        Self::ThreeCol,
        Self::Asymmetric,
        Self::Mobile,
    ];

    /// Canonical kebab-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::Sidebar => "sidebar",
            Self::Grid => "grid",
            Self::Kpi => "kpi",
            Self::ThreeCol => "three-col",
            Self::Asymmetric => "asymmetric",
            Self::Mobile => "mobile",
        }
    }

    /// Normalizes free text (e.g. "KPI-Top", "Three Column Layout") to a mode.
    ///
    /// Matching is keyword based so descriptive suffixes are tolerated.
    /// Returns `None` when no keyword is recognized.
    #[must_use]
    pub fn from_synonym(text: &str) -> Option<Self> {
        let normalized = text
            .trim()
            .to_lowercase()
            .replace(['_', '–', '—'], "-")
            .replace("**", "");
        let normalized = normalized.trim_matches(|c: char| c == '"' || c == '\'' || c == '.');

        if let Some(mode) = Self::ALL.iter().find(|m| m.as_str() == normalized) {
            return Some(*mode);
        }

        // The first word names the layout: "grid (3 columns)", "kpi with navigation".
        let leading = normalized
            .split(|c: char| c.is_whitespace() || c == '-' || c == '(')
            .next()
            .unwrap_or_default();
        if let Some(mode) = Self::from_keyword(leading) {
            return Some(mode);
        }

        // Order matters: "left three column kpi" is three-col, "top nav grid" is sidebar.
        if normalized.contains("three") || normalized.contains("3-col") || normalized.contains("3 col")
        {
            Some(Self::ThreeCol)
        } else if normalized.contains("asym") || normalized.contains("hero") {
            Some(Self::Asymmetric)
        } else if normalized.contains("mobile") || normalized.contains("phone") {
            Some(Self::Mobile)
        } else if normalized.contains("federal") || normalized.contains("government") {
            Some(Self::Federal)
        } else if normalized.contains("sidebar") || normalized.contains("nav") {
            Some(Self::Sidebar)
        } else if normalized.contains("kpi") {
            Some(Self::Kpi)
        } else if normalized.contains("grid") {
            Some(Self::Grid)
        } else {
            None
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "federal" | "government" => Some(Self::Federal),
            "sidebar" | "nav" | "navigation" => Some(Self::Sidebar),
            "grid" => Some(Self::Grid),
            "kpi" | "kpis" => Some(Self::Kpi),
            "three" => Some(Self::ThreeCol),
            "asymmetric" | "asym" | "hero" => Some(Self::Asymmetric),
            "mobile" | "phone" => Some(Self::Mobile),
            _ => None,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_synonym(s).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown layout mode '{s}'. Expected one of: federal, sidebar, grid, kpi, three-col, asymmetric, mobile"
            )
        })
    }
}
