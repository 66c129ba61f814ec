//! Structured representation of a parsed text wireframe.

use crate::models::{LayoutMode, VisualKind};
use crate::services::geometry::MAX_COUNT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One visual listed in a wireframe "Visuals:" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    /// 0-based content index (the source numbers visuals from 1)
    pub index: usize,
    /// Canonical visual kind derived from the free-text type
    pub kind: VisualKind,
    /// Label text; may contain newlines
    pub label: String,
    /// Whether the wireframe asked for the label to be drawn
    pub show_label: bool,
}

/// Grid dimensions captured from a "Grid Configuration:" section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Row count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Uniform column count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Column count per 1-based row number
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub row_columns: BTreeMap<u32, u32>,
}

impl GridSpec {
    /// True if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_none() && self.columns.is_none() && self.row_columns.is_empty()
    }

    /// Per-row column counts in row order, or `None` when no row lines were given.
    ///
    /// Rows missing between explicit entries fall back to the uniform column
    /// count (or 1). The row count, when given, extends or truncates the list.
    /// Row numbers outside `1..=MAX_COUNT` are ignored and the list never
    /// holds more than `MAX_COUNT` rows.
    #[must_use]
    pub fn row_column_list(&self) -> Option<Vec<u32>> {
        let last_row = *self.row_columns.range(1..=MAX_COUNT).next_back()?.0;
        let fill = self.columns.unwrap_or(1);
        let len = self.rows.unwrap_or(last_row).clamp(1, MAX_COUNT);
        Some(
            (1..=len)
                .map(|row| self.row_columns.get(&row).copied().unwrap_or(fill))
                .collect(),
        )
    }
}

/// Free-text settings captured for a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSettings {
    /// Sidebar or nav rail width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_width: Option<u32>,
    /// Sidebar visibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_sidebar: Option<bool>,
    /// KPI cell count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi_count: Option<u32>,
    /// Visuals per column (three-col)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visuals_per_column: Option<u32>,
    /// Side card count (asymmetric)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_card_count: Option<u32>,
    /// Generic visual count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_count: Option<u32>,
}

/// One page of a page-oriented wireframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number as written in the source
    pub number: u32,
    /// Page name
    pub name: String,
    /// Declared layout, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    /// Visuals in declaration order
    #[serde(default)]
    pub visuals: Vec<Visual>,
    /// Grid configuration, if a grid section was present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSpec>,
    /// Captured settings
    #[serde(default)]
    pub settings: PageSettings,
}

impl Page {
    /// Creates an empty page.
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            layout_mode: None,
            visuals: Vec::new(),
            grid: None,
            settings: PageSettings::default(),
        }
    }
}

/// Partial configuration declared for a layout outside any page.
///
/// Explicit values come from count/settings lines; inferred values come from
/// prose heuristics and only apply when no explicit value exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutFragment {
    /// Header height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_height: Option<u32>,
    /// Grid dimensions
    #[serde(default, skip_serializing_if = "GridSpec::is_empty")]
    pub grid: GridSpec,
    /// Settings captured from explicit lines
    #[serde(default)]
    pub settings: PageSettings,
    /// KPI count inferred from repeated "KPI Card" mentions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred_kpi_count: Option<u32>,
    /// Visual count inferred from repeated "Chart N" mentions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred_visual_count: Option<u32>,
    /// Visuals listed for this layout
    #[serde(default)]
    pub visuals: Vec<Visual>,
}

impl LayoutFragment {
    /// KPI count, preferring explicit over inferred.
    #[must_use]
    pub fn kpi_count(&self) -> Option<u32> {
        self.settings.kpi_count.or(self.inferred_kpi_count)
    }

    /// Visual count, preferring explicit over inferred.
    #[must_use]
    pub fn visual_count(&self) -> Option<u32> {
        self.settings.visual_count.or(self.inferred_visual_count)
    }
}

/// Formatting defaults declared at document level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingDefaults {
    /// Canvas width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Canvas height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Outer padding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    /// Zone gap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,
    /// Corner radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
}

/// Whether a document was organized by pages or by layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// At least one page marker was found
    Pages,
    /// No page markers; layouts were declared directly
    Layouts,
    /// Nothing recognizable
    Empty,
}

/// Result of parsing a wireframe.
///
/// `pages` is filled for page-oriented documents. `layouts` holds fragments
/// declared outside any page: the whole content of a legacy document, or
/// per-layout defaults in a page-oriented one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireframeDocument {
    /// Pages in source order
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Layout fragments keyed by mode
    #[serde(default)]
    pub layouts: BTreeMap<LayoutMode, LayoutFragment>,
    /// Document-level formatting
    #[serde(default)]
    pub defaults: FormattingDefaults,
}

impl WireframeDocument {
    /// Classifies the document.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        if !self.pages.is_empty() {
            DocumentKind::Pages
        } else if !self.layouts.is_empty() {
            DocumentKind::Layouts
        } else {
            DocumentKind::Empty
        }
    }

    /// Finds a page by its source number.
    #[must_use]
    pub fn page(&self, number: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_column_list_fills_gaps() {
        let mut grid = GridSpec {
            rows: Some(3),
            columns: Some(2),
            row_columns: BTreeMap::new(),
        };
        assert_eq!(grid.row_column_list(), None);

        grid.row_columns.insert(1, 4);
        grid.row_columns.insert(3, 1);
        assert_eq!(grid.row_column_list(), Some(vec![4, 2, 1]));
    }

    #[test]
    fn test_row_column_list_without_row_count() {
        let mut grid = GridSpec::default();
        grid.row_columns.insert(1, 3);
        grid.row_columns.insert(2, 2);
        assert_eq!(grid.row_column_list(), Some(vec![3, 2]));
    }

    #[test]
    fn test_row_column_list_caps_row_count() {
        let mut grid = GridSpec {
            rows: Some(20_000_000),
            columns: Some(2),
            row_columns: BTreeMap::new(),
        };
        grid.row_columns.insert(1, 3);
        let list = grid.row_column_list().unwrap();
        assert_eq!(list.len(), MAX_COUNT as usize);
        assert_eq!(list[0], 3);
        assert!(list[1..].iter().all(|&c| c == 2));
    }

    #[test]
    fn test_row_column_list_ignores_out_of_range_rows() {
        let mut grid = GridSpec::default();
        grid.row_columns.insert(2, 3);
        grid.row_columns.insert(4_000_000_000, 5);
        assert_eq!(grid.row_column_list(), Some(vec![1, 3]));

        let mut far_only = GridSpec::default();
        far_only.row_columns.insert(4_000_000_000, 5);
        far_only.row_columns.insert(0, 2);
        assert_eq!(far_only.row_column_list(), None);
    }

    #[test]
    fn test_fragment_prefers_explicit_counts() {
        let mut fragment = LayoutFragment {
            inferred_kpi_count: Some(3),
            ..Default::default()
        };
        assert_eq!(fragment.kpi_count(), Some(3));
        fragment.settings.kpi_count = Some(5);
        assert_eq!(fragment.kpi_count(), Some(5));
    }

    #[test]
    fn test_document_kind() {
        let mut doc = WireframeDocument::default();
        assert_eq!(doc.kind(), DocumentKind::Empty);
        doc.layouts.insert(LayoutMode::Grid, LayoutFragment::default());
        assert_eq!(doc.kind(), DocumentKind::Layouts);
        doc.pages.push(Page::new(1, "Overview"));
        assert_eq!(doc.kind(), DocumentKind::Pages);
        assert!(doc.page(1).is_some());
        assert!(doc.page(2).is_none());
    }
}
