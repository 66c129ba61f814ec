//! Visual type vocabulary and badge lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of externally authored visual that will sit on top of a content zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VisualKind {
    /// Bar / column chart
    BarChart,
    /// Line or area chart
    LineChart,
    /// Pie or donut chart
    PieChart,
    /// Table or matrix
    Table,
    /// Map visual
    Map,
    /// Single-number KPI
    Kpi,
    /// Generic card
    #[default]
    Card,
    /// Slicer / filter control
    Slicer,
    /// Text box
    Text,
    /// Image
    Image,
}

/// Badge drawn in the corner of a content zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// Single glyph inside the badge circle
    pub glyph: &'static str,
    /// Circle fill color
    pub color: &'static str,
    /// Short caption drawn next to the circle
    pub label: &'static str,
}

impl VisualKind {
    /// Canonical kebab-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BarChart => "bar-chart",
            Self::LineChart => "line-chart",
            Self::PieChart => "pie-chart",
            Self::Table => "table",
            Self::Map => "map",
            Self::Kpi => "kpi",
            Self::Card => "card",
            Self::Slicer => "slicer",
            Self::Text => "text",
            Self::Image => "image",
        }
    }

    /// Badge glyph, color and caption for this kind.
    #[must_use]
    pub const fn badge(&self) -> Badge {
        let (glyph, color, label) = match self {
            Self::BarChart => ("B", "#4C78A8", "Bar"),
            Self::LineChart => ("L", "#F58518", "Line"),
            Self::PieChart => ("P", "#E45756", "Pie"),
            Self::Table => ("T", "#72B7B2", "Table"),
            Self::Map => ("M", "#54A24B", "Map"),
            Self::Kpi => ("K", "#EECA3B", "KPI"),
            Self::Card => ("C", "#B279A2", "Card"),
            Self::Slicer => ("S", "#FF9DA6", "Slicer"),
            Self::Text => ("A", "#9D755D", "Text"),
            Self::Image => ("I", "#79706E", "Image"),
        };
        Badge {
            glyph,
            color,
            label,
        }
    }

    /// Maps a free-text type description to a kind by keyword.
    ///
    /// "Clustered Bar Chart" → `BarChart`, "Matrix table" → `Table`,
    /// anything unrecognized → `Card`.
    #[must_use]
    pub fn from_description(text: &str) -> Self {
        let text = text.to_lowercase();
        let has = |needle: &str| text.contains(needle);

        if has("kpi") || has("metric") || has("scorecard") {
            Self::Kpi
        } else if has("slicer") || has("filter") || has("dropdown") {
            Self::Slicer
        } else if has("pie") || has("donut") || has("doughnut") {
            Self::PieChart
        } else if has("line") || has("area") || has("trend") {
            Self::LineChart
        } else if has("chart") || has("bar") || has("column") || has("histogram") {
            Self::BarChart
        } else if has("table") || has("matrix") || has("grid") {
            Self::Table
        } else if has("map") {
            Self::Map
        } else if has("text") || has("narrative") {
            Self::Text
        } else if has("image") || has("picture") || has("logo") {
            Self::Image
        } else {
            Self::Card
        }
    }
}

impl fmt::Display for VisualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisualKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_description(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_description_keywords() {
        assert_eq!(
            VisualKind::from_description("Clustered Bar Chart"),
            VisualKind::BarChart
        );
        assert_eq!(
            VisualKind::from_description("Line chart - trend"),
            VisualKind::LineChart
        );
        assert_eq!(VisualKind::from_description("Donut"), VisualKind::PieChart);
        assert_eq!(VisualKind::from_description("Matrix"), VisualKind::Table);
        assert_eq!(VisualKind::from_description("Filled map"), VisualKind::Map);
        assert_eq!(VisualKind::from_description("KPI card"), VisualKind::Kpi);
        assert_eq!(
            VisualKind::from_description("Date slicer"),
            VisualKind::Slicer
        );
        assert_eq!(VisualKind::from_description("Text box"), VisualKind::Text);
        assert_eq!(VisualKind::from_description("Image"), VisualKind::Image);
        assert_eq!(VisualKind::from_description("something"), VisualKind::Card);
        assert_eq!(VisualKind::from_description(""), VisualKind::Card);
    }

    #[test]
    fn test_badges_are_distinct() {
        let kinds = [
            VisualKind::BarChart,
            VisualKind::LineChart,
            VisualKind::PieChart,
            VisualKind::Table,
            VisualKind::Map,
            VisualKind::Kpi,
            VisualKind::Card,
            VisualKind::Slicer,
            VisualKind::Text,
            VisualKind::Image,
        ];
        let mut glyphs: Vec<_> = kinds.iter().map(|k| k.badge().glyph).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), kinds.len());
    }
}
