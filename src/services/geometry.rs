//! Layout geometry engine.
//!
//! Maps a [`LayoutConfig`] and a [`LayoutMode`] to an ordered list of
//! [`Zone`]s. The engine is a pure function: it reads a configuration
//! snapshot, allocates a fresh zone list and never fails. Degenerate inputs
//! (too many rows for the available height, oversized bands) are clamped so
//! every computed cell is at least [`MIN_CELL`] pixels in each dimension.
//!
//! All modes share the same outline:
//!
//! 1. Carve the optional trust bar (top) and footer (bottom) off the canvas.
//! 2. Emit the mode's structural zones, each consuming space from the
//!    remaining rectangle.
//! 3. Partition what is left into content zones.
//! 4. Number content zones in reading order (left to right, top to bottom).

// Pixel math mixes integer configuration values with fractional cell sizes
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::models::{LayoutConfig, LayoutMode, Zone, ZoneKind};
use tracing::debug;

/// Smallest width or height a computed cell may have.
pub const MIN_CELL: f64 = 50.0;

/// Upper bound applied to every row, column and visual count.
pub const MAX_COUNT: u32 = 24;

/// Largest logo square inside the federal header.
pub const LOGO_MAX_SIZE: f64 = 60.0;

/// Federal sidebar is capped at this share of the content width.
const FEDERAL_SIDEBAR_MAX_RATIO: f64 = 0.4;

/// Sidebar-mode nav rail is capped at this share of the content width.
const NAV_MAX_RATIO: f64 = 0.35;

/// Share of the remaining height given to the KPI layout's main chart.
const KPI_MAIN_RATIO: f64 = 0.6;

/// Share of the width given to the asymmetric layout's large zone.
const ASYMMETRIC_MAIN_RATIO: f64 = 0.65;

/// Title and slicer bands are scaled by this factor on mobile.
const MOBILE_BAND_SCALE: f64 = 0.8;

/// Zones plus bookkeeping about clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    /// Zones in emission order
    pub zones: Vec<Zone>,
    /// Number of computed cell dimensions raised to [`MIN_CELL`]
    pub clamped_cells: usize,
}

/// Computes the zones of `mode` for `config`.
///
/// The mode argument wins over `config.layout_mode`, so callers can preview a
/// configuration under another topology without cloning it.
///
/// # Examples
///
/// ```
/// use dashzones::models::{LayoutConfig, LayoutMode};
/// use dashzones::services::geometry::compute_layout;
///
/// let config = LayoutConfig {
///     mobile_visual_count: 3,
///     ..LayoutConfig::default()
/// }
/// .with_canvas(375, 812);
///
/// let zones = compute_layout(LayoutMode::Mobile, &config);
/// assert_eq!(zones.iter().filter(|z| z.index.is_some()).count(), 3);
/// ```
#[must_use]
pub fn compute_layout(mode: LayoutMode, config: &LayoutConfig) -> Vec<Zone> {
    compute_layout_detailed(mode, config).zones
}

/// Same as [`compute_layout`] but also reports how many cells were clamped.
#[must_use]
pub fn compute_layout_detailed(mode: LayoutMode, config: &LayoutConfig) -> LayoutOutcome {
    let width = px(config.width.max(1));
    let height = px(config.height.max(1));
    let mut sink = ZoneSink::default();

    // Trust bar and footer are pinned to the canvas edges, outside the padding.
    let mut frame = Rect::new(0.0, 0.0, width, height);
    if config.show_trust_bar && config.trust_bar_height > 0 {
        let band = frame.take_top(px(config.trust_bar_height), 0.0);
        sink.chrome(ZoneKind::Trustbar, band);
    }
    let footer = if config.show_footer && config.footer_height > 0 {
        Some(frame.take_bottom(px(config.footer_height)))
    } else {
        None
    };

    let gap = px(config.gap);
    let padding = px(config.padding);

    match mode {
        LayoutMode::Federal => federal(&mut sink, config, frame, padding, gap),
        LayoutMode::Sidebar => sidebar(&mut sink, config, frame.inset(padding), gap),
        LayoutMode::Grid => grid(&mut sink, config, frame.inset(padding), gap),
        LayoutMode::Kpi => kpi(&mut sink, config, frame.inset(padding), gap),
        LayoutMode::ThreeCol => three_col(&mut sink, config, frame.inset(padding), gap),
        LayoutMode::Asymmetric => asymmetric(&mut sink, config, frame.inset(padding), gap),
        LayoutMode::Mobile => mobile(&mut sink, config, frame.inset(padding), gap),
    }

    if let Some(band) = footer {
        sink.chrome(ZoneKind::Footer, band);
    }

    debug!(
        mode = %mode,
        zones = sink.zones.len(),
        content = sink.next_index,
        clamped = sink.clamped_cells,
        "computed layout"
    );

    LayoutOutcome {
        zones: sink.zones,
        clamped_cells: sink.clamped_cells,
    }
}

/// Number of content (indexed) zones in a zone list.
#[must_use]
pub fn content_zone_count(zones: &[Zone]) -> usize {
    zones.iter().filter(|z| z.kind.is_content()).count()
}

fn federal(sink: &mut ZoneSink, config: &LayoutConfig, frame: Rect, padding: f64, gap: f64) {
    let mut below_header = frame;

    if config.show_header && config.header_height > 0 {
        let header = below_header.take_top(px(config.header_height), 0.0);
        sink.chrome(ZoneKind::Header, header);

        let mut cursor_x = header.x + padding;
        if config.show_logo && config.logo_width > 0 {
            let size = px(config.logo_width).min(LOGO_MAX_SIZE).min(header.h);
            let logo = Rect::new(cursor_x, header.y + (header.h - size) / 2.0, size, size);
            sink.chrome(ZoneKind::Logo, logo);
            cursor_x = logo.right() + gap;
        }

        if config.show_title && config.title_height > 0 {
            let title_h = px(config.title_height).min(header.h);
            let available = (header.right() - padding - cursor_x).max(0.0);
            let title_w = px(config.title_width).min(available);
            if title_w > 0.0 {
                let title = Rect::new(cursor_x, header.y + (header.h - title_h) / 2.0, title_w, title_h);
                sink.chrome(ZoneKind::Title, title);
            }
        }
    }

    let mut area = below_header.inset(padding);

    if config.show_slicer_zone && config.slicer_zone_height > 0 {
        let band = area.take_top(px(config.slicer_zone_height), gap);
        sink.chrome(ZoneKind::SlicerZone, band);
    }

    if config.show_federal_sidebar && config.federal_sidebar_width > 0 {
        let sidebar_w = px(config.federal_sidebar_width).min(area.w * FEDERAL_SIDEBAR_MAX_RATIO);
        let band = area.take_left(sidebar_w, gap);
        sink.chrome(ZoneKind::Sidebar, band);
    }

    let rows = if config.federal_use_variable_columns {
        config.federal_row_columns.clone()
    } else {
        uniform_rows(config.federal_rows, config.federal_columns)
    };
    place_rows(sink, area, &rows, gap, ZoneKind::Card);
}

fn sidebar(sink: &mut ZoneSink, config: &LayoutConfig, mut area: Rect, gap: f64) {
    take_bands(sink, config, &mut area, gap, 1.0);

    if config.nav_width > 0 {
        let nav_w = px(config.nav_width).min(area.w * NAV_MAX_RATIO);
        let rail = area.take_left(nav_w, gap);
        sink.chrome(ZoneKind::Nav, rail);
    }

    take_kpi_strip(sink, config, &mut area, gap, false);

    let rows = uniform_rows(config.sidebar_rows, config.sidebar_columns);
    place_rows(sink, area, &rows, gap, ZoneKind::Card);
}

fn grid(sink: &mut ZoneSink, config: &LayoutConfig, mut area: Rect, gap: f64) {
    take_bands(sink, config, &mut area, gap, 1.0);

    let rows = if config.grid_use_variable_columns {
        config.grid_row_columns.clone()
    } else {
        uniform_rows(config.grid_rows, config.grid_columns)
    };
    place_rows(sink, area, &rows, gap, ZoneKind::Card);
}

fn kpi(sink: &mut ZoneSink, config: &LayoutConfig, mut area: Rect, gap: f64) {
    take_bands(sink, config, &mut area, gap, 1.0);
    take_kpi_strip(sink, config, &mut area, gap, true);

    let count = clamp_count(config.kpi_visual_count);
    if count == 0 {
        return;
    }
    let max_columns = clamp_count(config.kpi_grid_columns).max(1);

    if count > 1 && config.main_chart_full_width {
        let main_h = sink.floor(area.h * KPI_MAIN_RATIO);
        let main = area.take_top(main_h, gap);
        sink.content(ZoneKind::Main, main);
        place_wrapped(sink, area, count - 1, max_columns, gap);
    } else {
        place_wrapped(sink, area, count, max_columns, gap);
    }
}

fn three_col(sink: &mut ZoneSink, config: &LayoutConfig, mut area: Rect, gap: f64) {
    take_bands(sink, config, &mut area, gap, 1.0);
    take_kpi_strip(sink, config, &mut area, gap, false);

    let per_column = clamp_count(config.visuals_per_column);
    if per_column == 0 {
        return;
    }
    // Every column holds the same count, so row-major emission keeps reading order.
    let rows = vec![3; per_column];
    place_rows(sink, area, &rows, gap, ZoneKind::Card);
}

fn asymmetric(sink: &mut ZoneSink, config: &LayoutConfig, mut area: Rect, gap: f64) {
    take_bands(sink, config, &mut area, gap, 1.0);
    take_kpi_strip(sink, config, &mut area, gap, false);

    let side_count = clamp_count(config.side_card_count);
    let main_h = sink.floor(area.h);

    if side_count == 0 {
        let main_w = sink.floor(area.w);
        sink.content(ZoneKind::Main, Rect::new(area.x, area.y, main_w, main_h));
        return;
    }

    let main_w = sink.floor(area.w * ASYMMETRIC_MAIN_RATIO - gap / 2.0);
    sink.content(ZoneKind::Main, Rect::new(area.x, area.y, main_w, main_h));

    let side_x = area.x + main_w + gap;
    let side_w = sink.floor(area.right() - side_x);
    let n = side_count as f64;
    let cell_h = sink.floor((area.h - gap * (n - 1.0)) / n);
    for i in 0..side_count {
        let y = area.y + i as f64 * (cell_h + gap);
        sink.content(ZoneKind::Card, Rect::new(side_x, y, side_w, cell_h));
    }
}

fn mobile(sink: &mut ZoneSink, config: &LayoutConfig, mut area: Rect, gap: f64) {
    take_bands(sink, config, &mut area, gap, MOBILE_BAND_SCALE);

    let count = clamp_count(config.mobile_visual_count);
    if count == 0 {
        return;
    }

    let cell_w = sink.floor(area.w);
    let n = count as f64;
    let cell_h = sink.floor((area.h - gap * (n - 1.0)) / n);
    for i in 0..count {
        let kind = if i == 0 { ZoneKind::Kpi } else { ZoneKind::Card };
        let y = area.y + i as f64 * (cell_h + gap);
        sink.content(kind, Rect::new(area.x, y, cell_w, cell_h));
    }
}

/// Emits the optional title and slicer bands at the top of `area`.
fn take_bands(sink: &mut ZoneSink, config: &LayoutConfig, area: &mut Rect, gap: f64, scale: f64) {
    if config.show_title && config.title_height > 0 {
        let band = area.take_top(px(config.title_height) * scale, gap);
        sink.chrome(ZoneKind::Title, band);
    }
    if config.show_slicer_zone && config.slicer_zone_height > 0 {
        let band = area.take_top(px(config.slicer_zone_height) * scale, gap);
        sink.chrome(ZoneKind::SlicerZone, band);
    }
}

/// Emits the KPI strip: `kpi_count` equal cells, or a single placeholder
/// strip when the count is zero and the strip is optional.
fn take_kpi_strip(
    sink: &mut ZoneSink,
    config: &LayoutConfig,
    area: &mut Rect,
    gap: f64,
    required: bool,
) {
    if config.kpi_height == 0 || !(required || config.show_kpi_strip) {
        return;
    }
    let count = clamp_count(config.kpi_count);
    if count == 0 && required {
        return;
    }

    let strip = area.take_top(px(config.kpi_height), gap);
    if count == 0 {
        sink.chrome(ZoneKind::KpiStrip, strip);
        return;
    }

    let n = count as f64;
    let cell_w = sink.floor((strip.w - gap * (n - 1.0)) / n);
    for i in 0..count {
        let x = strip.x + i as f64 * (cell_w + gap);
        sink.content(ZoneKind::Kpi, Rect::new(x, strip.y, cell_w, strip.h));
    }
}

/// Lays out rows of cells; `row_columns[r]` is the column count of row `r`.
///
/// Row height is uniform; column width is computed per row. Rows with zero
/// columns keep their slot but emit nothing.
fn place_rows(sink: &mut ZoneSink, area: Rect, row_columns: &[u32], gap: f64, kind: ZoneKind) {
    let rows: Vec<usize> = row_columns
        .iter()
        .take(MAX_COUNT as usize)
        .map(|&c| clamp_count(c))
        .collect();
    if rows.is_empty() || rows.iter().all(|&c| c == 0) {
        return;
    }

    let n = rows.len() as f64;
    let cell_h = sink.floor((area.h - gap * (n - 1.0)) / n);

    for (r, &columns) in rows.iter().enumerate() {
        if columns == 0 {
            continue;
        }
        let c = columns as f64;
        let cell_w = sink.floor((area.w - gap * (c - 1.0)) / c);
        let y = area.y + r as f64 * (cell_h + gap);
        for col in 0..columns {
            let x = area.x + col as f64 * (cell_w + gap);
            sink.content(kind, Rect::new(x, y, cell_w, cell_h));
        }
    }
}

/// Lays out `count` equal cells in a grid at most `max_columns` wide; the
/// last row may be partially filled but keeps the common cell width.
fn place_wrapped(sink: &mut ZoneSink, area: Rect, count: usize, max_columns: usize, gap: f64) {
    if count == 0 {
        return;
    }
    let columns = max_columns.min(count);
    let rows = count.div_ceil(columns);

    let c = columns as f64;
    let r = rows as f64;
    let cell_w = sink.floor((area.w - gap * (c - 1.0)) / c);
    let cell_h = sink.floor((area.h - gap * (r - 1.0)) / r);

    for i in 0..count {
        let x = area.x + (i % columns) as f64 * (cell_w + gap);
        let y = area.y + (i / columns) as f64 * (cell_h + gap);
        sink.content(ZoneKind::Card, Rect::new(x, y, cell_w, cell_h));
    }
}

fn uniform_rows(rows: u32, columns: u32) -> Vec<u32> {
    if rows == 0 || columns == 0 {
        return Vec::new();
    }
    vec![columns; clamp_count(rows)]
}

fn clamp_count(count: u32) -> usize {
    count.min(MAX_COUNT) as usize
}

fn px(value: u32) -> f64 {
    f64::from(value)
}

/// Working rectangle that shrinks as bands are carved off it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    fn right(&self) -> f64 {
        self.x + self.w
    }

    fn inset(&self, amount: f64) -> Self {
        let dx = amount.min(self.w / 2.0);
        let dy = amount.min(self.h / 2.0);
        Self::new(self.x + dx, self.y + dy, self.w - 2.0 * dx, self.h - 2.0 * dy)
    }

    /// Cuts a band of `height` off the top, plus `gap` spacing below it.
    fn take_top(&mut self, height: f64, gap: f64) -> Self {
        let band_h = height.clamp(0.0, self.h);
        let band = Self::new(self.x, self.y, self.w, band_h);
        let consumed = (band_h + gap).min(self.h);
        self.y += consumed;
        self.h -= consumed;
        band
    }

    /// Cuts a band of `height` off the bottom.
    fn take_bottom(&mut self, height: f64) -> Self {
        let band_h = height.clamp(0.0, self.h);
        self.h -= band_h;
        Self::new(self.x, self.y + self.h, self.w, band_h)
    }

    /// Cuts a band of `width` off the left, plus `gap` spacing after it.
    fn take_left(&mut self, width: f64, gap: f64) -> Self {
        let band_w = width.clamp(0.0, self.w);
        let band = Self::new(self.x, self.y, band_w, self.h);
        let consumed = (band_w + gap).min(self.w);
        self.x += consumed;
        self.w -= consumed;
        band
    }
}

/// Collects zones and hands out content indices in emission order.
#[derive(Debug, Default)]
struct ZoneSink {
    zones: Vec<Zone>,
    next_index: usize,
    clamped_cells: usize,
}

impl ZoneSink {
    fn chrome(&mut self, kind: ZoneKind, rect: Rect) {
        self.zones.push(Zone::new(kind, rect.x, rect.y, rect.w, rect.h));
    }

    fn content(&mut self, kind: ZoneKind, rect: Rect) {
        let zone = Zone::new(kind, rect.x, rect.y, rect.w, rect.h).with_index(self.next_index);
        self.next_index += 1;
        self.zones.push(zone);
    }

    /// Raises a computed cell dimension to the minimum.
    fn floor(&mut self, value: f64) -> f64 {
        if value < MIN_CELL {
            self.clamped_cells += 1;
            MIN_CELL
        } else {
            value
        }
    }
}
