//! Projection of a parsed wireframe onto a [`LayoutConfig`].
//!
//! Applying never mutates its inputs. The result is built in layers:
//!
//! 1. the caller's base configuration
//! 2. document-level formatting (canvas, padding, gap, corner radius)
//! 3. mode-specific fields, each resolved from the page settings, then the
//!    document's layout fragment for that mode, then a fixed fallback
//! 4. per-index visual types and labels, overwriting existing entries

use crate::models::{
    GridSpec, LayoutConfig, LayoutFragment, LayoutMode, Page, PageSettings, Visual,
    WireframeDocument,
};
use tracing::debug;

/// Fallback rows and columns for grid-like modes.
const FALLBACK_GRID: (u32, u32) = (2, 3);
/// Fallback rows and columns for the sidebar mode's card grid.
const FALLBACK_SIDEBAR_GRID: (u32, u32) = (2, 2);
const FALLBACK_KPI_COUNT: u32 = 4;
const FALLBACK_KPI_VISUALS: u32 = 3;
const FALLBACK_PER_COLUMN: u32 = 3;
const FALLBACK_SIDE_CARDS: u32 = 3;
const FALLBACK_MOBILE_VISUALS: u32 = 4;

/// Builds the configuration for one page of a page-oriented document.
///
/// A page without a recognized layout keeps the base configuration's mode.
/// The page name becomes the title text.
#[must_use]
pub fn apply_page(page: &Page, doc: &WireframeDocument, base: &LayoutConfig) -> LayoutConfig {
    let mode = page.layout_mode.unwrap_or(base.layout_mode);
    let sources = Sources {
        settings: Some(&page.settings),
        grid: page.grid.as_ref(),
        fragment: doc.layouts.get(&mode),
    };

    debug!(page = page.number, mode = %mode, visuals = page.visuals.len(), "applying wireframe page");

    let mut config = with_document_defaults(base, doc);
    config.layout_mode = mode;
    config.title_text = Some(page.name.clone());
    apply_mode_fields(&mut config, mode, &sources, page.visuals.len());
    merge_visuals(&mut config, &page.visuals);
    config
}

/// Builds the configuration for a layout declared outside any page.
///
/// Works for modes the document never mentions: every mode field then takes
/// its fallback.
#[must_use]
pub fn apply_layout(mode: LayoutMode, doc: &WireframeDocument, base: &LayoutConfig) -> LayoutConfig {
    let fragment = doc.layouts.get(&mode);
    let sources = Sources {
        settings: None,
        grid: None,
        fragment,
    };
    let visuals = fragment.map_or(&[][..], |f| f.visuals.as_slice());

    debug!(mode = %mode, visuals = visuals.len(), "applying wireframe layout");

    let mut config = with_document_defaults(base, doc);
    config.layout_mode = mode;
    apply_mode_fields(&mut config, mode, &sources, visuals.len());
    merge_visuals(&mut config, visuals);
    config
}

fn with_document_defaults(base: &LayoutConfig, doc: &WireframeDocument) -> LayoutConfig {
    let defaults = &doc.defaults;
    let mut config = base.clone();
    if let Some(width) = defaults.width {
        config.width = width;
    }
    if let Some(height) = defaults.height {
        config.height = height;
    }
    if let Some(padding) = defaults.padding {
        config.padding = padding;
    }
    if let Some(gap) = defaults.gap {
        config.gap = gap;
    }
    if let Some(radius) = defaults.corner_radius {
        config.corner_radius = radius;
    }
    config
}

fn apply_mode_fields(
    config: &mut LayoutConfig,
    mode: LayoutMode,
    sources: &Sources<'_>,
    visual_total: usize,
) {
    let visual_total = u32::try_from(visual_total).unwrap_or(u32::MAX);

    match mode {
        LayoutMode::Federal => {
            config.federal_rows = sources.rows().unwrap_or(FALLBACK_GRID.0);
            config.federal_columns = sources.columns().unwrap_or(FALLBACK_GRID.1);
            if let Some(row_columns) = sources.row_columns() {
                config.federal_use_variable_columns = true;
                config.federal_row_columns = row_columns;
            }
            if let Some(width) = sources.setting(|s| s.sidebar_width) {
                config.federal_sidebar_width = width;
            }
            if let Some(show) = sources.show_sidebar() {
                config.show_federal_sidebar = show;
            }
            if let Some(height) = sources.fragment.and_then(|f| f.header_height) {
                config.header_height = height;
            }
        }
        LayoutMode::Grid => {
            config.grid_rows = sources.rows().unwrap_or(FALLBACK_GRID.0);
            config.grid_columns = sources.columns().unwrap_or(FALLBACK_GRID.1);
            if let Some(row_columns) = sources.row_columns() {
                config.grid_use_variable_columns = true;
                config.grid_row_columns = row_columns;
            }
        }
        LayoutMode::Sidebar => {
            if let Some(width) = sources.setting(|s| s.sidebar_width) {
                config.nav_width = width;
            }
            config.kpi_count = sources.kpi_count().unwrap_or(FALLBACK_KPI_COUNT);
            config.sidebar_rows = sources.rows().unwrap_or(FALLBACK_SIDEBAR_GRID.0);
            config.sidebar_columns = sources.columns().unwrap_or(FALLBACK_SIDEBAR_GRID.1);
        }
        LayoutMode::Kpi => {
            config.kpi_count = sources.kpi_count().unwrap_or(FALLBACK_KPI_COUNT);
            // Listed visuals cover the KPI cells first, then the charts below.
            let listed = visual_total.saturating_sub(config.kpi_count);
            config.kpi_visual_count = sources
                .visual_count()
                .or((listed > 0).then_some(listed))
                .unwrap_or(FALLBACK_KPI_VISUALS);
        }
        LayoutMode::ThreeCol => {
            config.visuals_per_column = sources
                .setting(|s| s.visuals_per_column)
                .unwrap_or(FALLBACK_PER_COLUMN);
            if let Some(count) = sources.kpi_count() {
                config.kpi_count = count;
            }
        }
        LayoutMode::Asymmetric => {
            config.side_card_count = sources
                .setting(|s| s.side_card_count)
                .unwrap_or(FALLBACK_SIDE_CARDS);
            if let Some(count) = sources.kpi_count() {
                config.kpi_count = count;
            }
        }
        LayoutMode::Mobile => {
            config.mobile_visual_count = sources
                .visual_count()
                .or((visual_total > 0).then_some(visual_total))
                .unwrap_or(FALLBACK_MOBILE_VISUALS);
        }
    }
}

fn merge_visuals(config: &mut LayoutConfig, visuals: &[Visual]) {
    for visual in visuals {
        config.visual_types.insert(visual.index, visual.kind);
        config.visual_labels.insert(visual.index, visual.label.clone());
    }
    if visuals.iter().any(|v| v.show_label) {
        config.show_labels = true;
    }
}

/// Page-level values layered over the layout fragment's values.
struct Sources<'a> {
    settings: Option<&'a PageSettings>,
    grid: Option<&'a GridSpec>,
    fragment: Option<&'a LayoutFragment>,
}

impl Sources<'_> {
    fn setting(&self, pick: impl Fn(&PageSettings) -> Option<u32>) -> Option<u32> {
        self.settings
            .and_then(&pick)
            .or_else(|| self.fragment.and_then(|f| pick(&f.settings)))
    }

    fn show_sidebar(&self) -> Option<bool> {
        self.settings
            .and_then(|s| s.show_sidebar)
            .or_else(|| self.fragment.and_then(|f| f.settings.show_sidebar))
    }

    fn kpi_count(&self) -> Option<u32> {
        self.settings
            .and_then(|s| s.kpi_count)
            .or_else(|| self.fragment.and_then(LayoutFragment::kpi_count))
    }

    fn visual_count(&self) -> Option<u32> {
        self.settings
            .and_then(|s| s.visual_count)
            .or_else(|| self.fragment.and_then(LayoutFragment::visual_count))
    }

    fn rows(&self) -> Option<u32> {
        self.grid
            .and_then(|g| g.rows)
            .or_else(|| self.fragment.and_then(|f| f.grid.rows))
    }

    fn columns(&self) -> Option<u32> {
        self.grid
            .and_then(|g| g.columns)
            .or_else(|| self.fragment.and_then(|f| f.grid.columns))
    }

    fn row_columns(&self) -> Option<Vec<u32>> {
        self.grid
            .and_then(GridSpec::row_column_list)
            .or_else(|| self.fragment.and_then(|f| f.grid.row_column_list()))
    }
}
