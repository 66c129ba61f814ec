//! Text wireframe parsing.
//!
//! A wireframe is a loosely formatted, markdown-like description of one or
//! more dashboard pages. Recognition is line based: every line is cleaned of
//! emphasis and heading markers, then tested against a set of independent
//! patterns. Lines that match nothing are skipped.
//!
//! # Document Shapes
//!
//! Page-oriented:
//!
//! ```text
//! Canvas: 1280x720
//!
//! ## Page 1: Executive Overview
//! **Layout Type**: KPI-Top
//! KPI Count: 4
//!
//! Visuals:
//! 1. "Revenue" - KPI card (show label: yes)
//! 2. Line chart "Monthly Trend" (show label: no)
//!
//! ---
//!
//! ## Page 2: Regional Detail
//! Layout Type: Grid
//! Grid Configuration:
//! Rows: 2
//! Columns: 3
//! ```
//!
//! Layout-oriented (legacy, no page markers):
//!
//! ```text
//! ## Federal Layout
//! Header (72px) with logo and title
//! Sidebar 220-260px, 2x3 chart grid
//! ```

// Allow intentional type casts for counting matches
#![allow(clippy::cast_possible_truncation)]

use crate::models::{
    GridSpec, LayoutFragment, LayoutMode, Page, PageSettings, Visual, VisualKind,
    WireframeDocument,
};
use crate::services::geometry::MAX_COUNT;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Parsing state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before the first page marker (document defaults, legacy layouts)
    OutsidePage,
    /// Inside a page body
    InPage,
    /// After a "Visuals:" marker
    InVisualsSection,
    /// After a "Grid Configuration:" marker
    InGridConfigSection,
}

/// Where captured values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// Nothing selected yet
    Nothing,
    /// Index into `WireframeDocument::pages`
    Page(usize),
    /// Key into `WireframeDocument::layouts`
    Layout(LayoutMode),
}

/// Parses wireframe text into a document.
///
/// Returns `None` only when the parser itself fails; unrecognized or
/// malformed text yields a document with empty collections.
///
/// # Examples
///
/// ```
/// use dashzones::models::LayoutMode;
/// use dashzones::parser::parse_wireframe;
///
/// let doc = parse_wireframe("Page 1: Sales\nLayout Type: Grid\nRows: 2\nColumns: 3").unwrap();
/// assert_eq!(doc.pages[0].layout_mode, Some(LayoutMode::Grid));
///
/// let empty = parse_wireframe("nothing to see here").unwrap();
/// assert!(empty.pages.is_empty() && empty.layouts.is_empty());
/// ```
#[must_use]
pub fn parse_wireframe(text: &str) -> Option<WireframeDocument> {
    match try_parse_wireframe(text) {
        Ok(doc) => Some(doc),
        Err(err) => {
            warn!("Wireframe parsing failed: {err:#}");
            None
        }
    }
}

/// Parses wireframe text, surfacing internal failures as errors.
///
/// # Errors
///
/// Returns an error if a recognition pattern fails to compile.
pub fn try_parse_wireframe(text: &str) -> Result<WireframeDocument> {
    let patterns = Patterns::compile()?;
    let mut parser = WireframeParser::new(&patterns);

    for raw in text.lines() {
        parser.feed(raw);
    }

    let doc = parser.finish();
    debug!(
        pages = doc.pages.len(),
        layouts = doc.layouts.len(),
        "parsed wireframe"
    );
    Ok(doc)
}

/// Reads and parses a wireframe file.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or not a regular file
/// - Unreadable content (permissions, invalid UTF-8)
/// - Internal pattern failures
pub fn parse_wireframe_file(path: &Path) -> Result<WireframeDocument> {
    if !path.exists() {
        anyhow::bail!(
            "Wireframe file not found: {}\n\n\
             Please check the file path and try again.",
            path.display()
        );
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read wireframe file: {}", path.display()))?;

    try_parse_wireframe(&content)
        .with_context(|| format!("Failed to parse wireframe file: {}", path.display()))
}

/// Compiled recognition patterns. All are case-insensitive and run against
/// cleaned lines.
struct Patterns {
    rule: Regex,
    page_header: Regex,
    layout_decl: Regex,
    visuals_marker: Regex,
    visual_line: Regex,
    quoted_label: Regex,
    show_label: Regex,
    grid_marker: Regex,
    grid_rows: Regex,
    grid_columns: Regex,
    grid_row_columns: Regex,
    bare_rows: Regex,
    bare_columns: Regex,
    sidebar_width: Regex,
    show_sidebar: Regex,
    explicit_kpi_count: Regex,
    generic_kpi_count: Regex,
    per_column: Regex,
    explicit_side_cards: Regex,
    generic_side_cards: Regex,
    explicit_visual_count: Regex,
    generic_visual_count: Regex,
    header_px: Regex,
    sidebar_px: Regex,
    grid_token: Regex,
    kpi_card: Regex,
    chart_n: Regex,
    canvas: Regex,
    padding: Regex,
    gap: Regex,
    corner_radius: Regex,
}

impl Patterns {
    fn compile() -> Result<Self> {
        let re = |pattern: &str| {
            Regex::new(pattern).with_context(|| format!("Invalid wireframe pattern: {pattern}"))
        };

        Ok(Self {
            rule: re(r"^(?:-{3,}|\*{3,}|_{3,})$")?,
            page_header: re(r"(?i)^page\s+(\d+)\s*[:.\-–]?\s*(.*)$")?,
            layout_decl: re(r"(?i)^layout(?:\s+(?:type|mode|\d+))?\s*[:\-–]\s*(.+)$")?,
            visuals_marker: re(r"(?i)^visuals?\s*(?:\([^)]*\))?\s*:?$")?,
            visual_line: re(r"^(\d+)[.)]\s+(.+)$")?,
            quoted_label: re(r#"["“]([^"”]*)["”]"#)?,
            show_label: re(r"(?i)\(\s*show\s*label\s*:\s*(yes|no|true|false|y|n)\s*\)")?,
            grid_marker: re(r"(?i)^grid\s+config(?:uration)?\s*:?$")?,
            grid_rows: re(r"(?i)^rows?\s*:\s*(\d+)")?,
            grid_columns: re(r"(?i)^columns?\s*:\s*(\d+)")?,
            grid_row_columns: re(r"(?i)^row\s+(\d+)(?:\s+columns?)?\s*:\s*(\d+)")?,
            bare_rows: re(r"(?i)^(\d+)\s+rows?$")?,
            bare_columns: re(r"(?i)^(\d+)\s+columns?$")?,
            sidebar_width: re(r"(?i)(?:sidebar|nav(?:igation)?(?:\s+rail)?)\s+width\s*:?\s*(\d+)")?,
            show_sidebar: re(r"(?i)show\s+sidebar\s*:?\s*(yes|no|true|false|on|off)\b")?,
            explicit_kpi_count: re(r"(?i)(?:kpi\s+count|number\s+of\s+kpis?)\s*:?\s*(\d+)")?,
            generic_kpi_count: re(r"(?i)\b(\d+)\s+kpis?\b")?,
            per_column: re(
                r"(?i)\b(\d+)\s+visuals?\s+per\s+column|visuals?\s+per\s+column\s*:?\s*(\d+)",
            )?,
            explicit_side_cards: re(r"(?i)side\s+cards?(?:\s+count)?\s*:?\s*(\d+)")?,
            generic_side_cards: re(r"(?i)\b(\d+)\s+side\s+cards?")?,
            explicit_visual_count: re(
                r"(?i)(?:visual\s+count|number\s+of\s+visuals)\s*:?\s*(\d+)",
            )?,
            generic_visual_count: re(r"(?i)\b(\d+)\s+visuals?\b")?,
            header_px: re(r"(?i)header.*?(\d+)\s*px")?,
            sidebar_px: re(r"(?i)sidebar.*?(\d+)(?:\s*-\s*\d+)?\s*px")?,
            grid_token: re(r"\b(\d{1,2})\s*[xX×]\s*(\d{1,2})\b")?,
            kpi_card: re(r"(?i)kpi\s+card")?,
            chart_n: re(r"(?i)chart\s*\d+")?,
            canvas: re(
                r"(?i)^(?:canvas(?:\s+size)?|dimensions|resolution)\s*:\s*(\d+)\s*[x×]\s*(\d+)",
            )?,
            padding: re(r"(?i)^padding\s*:\s*(\d+)")?,
            gap: re(r"(?i)^gap\s*:\s*(\d+)")?,
            corner_radius: re(r"(?i)^corner\s+radius\s*:\s*(\d+)")?,
        })
    }
}

/// Single-pass line consumer.
struct WireframeParser<'p> {
    patterns: &'p Patterns,
    state: ParseState,
    target: Target,
    doc: WireframeDocument,
}

impl<'p> WireframeParser<'p> {
    fn new(patterns: &'p Patterns) -> Self {
        Self {
            patterns,
            state: ParseState::OutsidePage,
            target: Target::Nothing,
            doc: WireframeDocument::default(),
        }
    }

    fn finish(self) -> WireframeDocument {
        self.doc
    }

    fn feed(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        if self.patterns.rule.is_match(trimmed) {
            self.close_section();
            return;
        }

        let is_heading = trimmed.starts_with('#');
        let line = clean_line(trimmed);
        if line.is_empty() {
            return;
        }

        match self.state {
            ParseState::OutsidePage => self.handle_outside(&line, is_heading),
            ParseState::InPage => self.handle_page(&line),
            ParseState::InVisualsSection => self.handle_visuals(&line, is_heading),
            ParseState::InGridConfigSection => self.handle_grid(&line, is_heading),
        }
    }

    /// State to return to when a section ends.
    fn enclosing_state(&self) -> ParseState {
        match self.target {
            Target::Page(_) => ParseState::InPage,
            Target::Layout(_) | Target::Nothing => ParseState::OutsidePage,
        }
    }

    fn close_section(&mut self) {
        self.state = self.enclosing_state();
    }

    fn handle_enclosing(&mut self, line: &str, is_heading: bool) {
        match self.enclosing_state() {
            ParseState::InPage => self.handle_page(line),
            _ => self.handle_outside(line, is_heading),
        }
    }

    fn handle_outside(&mut self, line: &str, is_heading: bool) {
        if self.try_open_page(line) {
            return;
        }

        if let Some(caps) = self.patterns.layout_decl.captures(line) {
            if let Some(mode) = LayoutMode::from_synonym(&caps[1]) {
                self.select_layout(mode);
                return;
            }
        }

        if is_heading && line.to_lowercase().contains("layout") {
            if let Some(mode) = LayoutMode::from_synonym(line) {
                self.select_layout(mode);
                return;
            }
        }

        if self.apply_document_defaults(line) {
            return;
        }

        if matches!(self.target, Target::Layout(_)) {
            let consumed = self.handle_body(line);
            let inferred = self.apply_legacy_heuristics(line);
            if consumed || inferred {
                return;
            }
        }

        trace!(line, "skipping unrecognized wireframe line");
    }

    fn handle_page(&mut self, line: &str) {
        if self.try_open_page(line) {
            return;
        }

        if let Some(caps) = self.patterns.layout_decl.captures(line) {
            if let Target::Page(idx) = self.target {
                let mode = LayoutMode::from_synonym(&caps[1]);
                if mode.is_none() {
                    debug!(declared = &caps[1], "unknown layout type on page");
                }
                self.doc.pages[idx].layout_mode = mode;
            }
            return;
        }

        if !self.handle_body(line) {
            trace!(line, "skipping unrecognized wireframe line");
        }
    }

    fn handle_visuals(&mut self, line: &str, is_heading: bool) {
        if let Some(visual) = self.parse_visual(line) {
            if let Some(visuals) = self.visuals_mut() {
                visuals.push(visual);
            }
            return;
        }
        self.handle_enclosing(line, is_heading);
    }

    fn handle_grid(&mut self, line: &str, is_heading: bool) {
        let p = self.patterns;
        if let Some(n) = p.bare_rows.captures(line).and_then(|c| capture_u32(&c)) {
            if let Some(grid) = self.grid_mut() {
                grid.rows = Some(n);
            }
            return;
        }
        if let Some(n) = p.bare_columns.captures(line).and_then(|c| capture_u32(&c)) {
            if let Some(grid) = self.grid_mut() {
                grid.columns = Some(n);
            }
            return;
        }
        self.handle_enclosing(line, is_heading);
    }

    /// Section markers, grid lines and settings shared by pages and legacy
    /// layouts. Returns true if anything matched.
    fn handle_body(&mut self, line: &str) -> bool {
        let p = self.patterns;

        if p.visuals_marker.is_match(line) {
            self.state = ParseState::InVisualsSection;
            return true;
        }
        if p.grid_marker.is_match(line) {
            self.state = ParseState::InGridConfigSection;
            return true;
        }

        if let Some(caps) = p.grid_row_columns.captures(line) {
            let row = caps[1].parse::<u32>().ok();
            let columns = caps[2].parse::<u32>().ok();
            match (row, columns) {
                (Some(row), Some(columns)) if (1..=MAX_COUNT).contains(&row) => {
                    if let Some(grid) = self.grid_mut() {
                        grid.row_columns.insert(row, columns);
                    }
                }
                _ => trace!(line, "ignoring column count for out-of-range row"),
            }
            return true;
        }
        if let Some(n) = p.grid_rows.captures(line).and_then(|c| capture_u32(&c)) {
            if let Some(grid) = self.grid_mut() {
                grid.rows = Some(n);
            }
            return true;
        }
        if let Some(n) = p.grid_columns.captures(line).and_then(|c| capture_u32(&c)) {
            if let Some(grid) = self.grid_mut() {
                grid.columns = Some(n);
            }
            return true;
        }

        self.apply_settings(line)
    }

    /// Independent settings patterns; each applies only if it matched.
    fn apply_settings(&mut self, line: &str) -> bool {
        let p = self.patterns;
        let sidebar_width = p.sidebar_width.captures(line).and_then(|c| capture_u32(&c));
        let show_sidebar = p
            .show_sidebar
            .captures(line)
            .map(|c| matches!(c[1].to_lowercase().as_str(), "yes" | "true" | "on"));
        let explicit_kpis = p.explicit_kpi_count.captures(line).and_then(|c| capture_u32(&c));
        let generic_kpis = p.generic_kpi_count.captures(line).and_then(|c| capture_u32(&c));
        let per_column = p.per_column.captures(line).and_then(|c| capture_u32(&c));
        let explicit_side_cards = p
            .explicit_side_cards
            .captures(line)
            .and_then(|c| capture_u32(&c));
        let generic_side_cards = p
            .generic_side_cards
            .captures(line)
            .and_then(|c| capture_u32(&c));
        let explicit_visuals = p
            .explicit_visual_count
            .captures(line)
            .and_then(|c| capture_u32(&c));
        // "3 visuals per column" must not read as a visual count
        let generic_visuals = if per_column.is_none() {
            p.generic_visual_count.captures(line).and_then(|c| capture_u32(&c))
        } else {
            None
        };

        let Some(settings) = self.settings_mut() else {
            return false;
        };

        let mut matched = false;
        if let Some(width) = sidebar_width {
            settings.sidebar_width = Some(width);
            matched = true;
        }
        if let Some(show) = show_sidebar {
            settings.show_sidebar = Some(show);
            matched = true;
        }
        if let Some(count) = per_column {
            settings.visuals_per_column = Some(count);
            matched = true;
        }
        matched |= set_count(&mut settings.kpi_count, explicit_kpis, generic_kpis);
        matched |= set_count(
            &mut settings.side_card_count,
            explicit_side_cards,
            generic_side_cards,
        );
        matched |= set_count(&mut settings.visual_count, explicit_visuals, generic_visuals);
        matched
    }

    /// Prose heuristics for legacy layouts. Each only fills an unset field.
    fn apply_legacy_heuristics(&mut self, line: &str) -> bool {
        let p = self.patterns;
        let header = p.header_px.captures(line).and_then(|c| capture_u32(&c));
        let sidebar = p.sidebar_px.captures(line).and_then(|c| capture_u32(&c));
        let grid = p.grid_token.captures(line).and_then(|c| {
            let rows = c[1].parse::<u32>().ok()?;
            let columns = c[2].parse::<u32>().ok()?;
            Some((rows, columns))
        });
        let kpi_cards = p.kpi_card.find_iter(line).count() as u32;
        let charts = p.chart_n.find_iter(line).count() as u32;

        let Target::Layout(mode) = self.target else {
            return false;
        };
        let fragment = self.fragment_mut(mode);

        let mut matched = false;
        if let Some(height) = header {
            fragment.header_height.get_or_insert(height);
            matched = true;
        }
        if let Some(width) = sidebar {
            fragment.settings.sidebar_width.get_or_insert(width);
            matched = true;
        }
        if let Some((rows, columns)) = grid {
            fragment.grid.rows.get_or_insert(rows);
            fragment.grid.columns.get_or_insert(columns);
            matched = true;
        }
        if kpi_cards > 0 {
            fragment.inferred_kpi_count.get_or_insert(kpi_cards);
            matched = true;
        }
        if charts > 0 {
            fragment.inferred_visual_count.get_or_insert(charts);
            matched = true;
        }
        matched
    }

    fn apply_document_defaults(&mut self, line: &str) -> bool {
        let p = self.patterns;
        let defaults = &mut self.doc.defaults;

        if let Some(caps) = p.canvas.captures(line) {
            defaults.width = caps[1].parse().ok();
            defaults.height = caps[2].parse().ok();
            return true;
        }
        if let Some(n) = p.padding.captures(line).and_then(|c| capture_u32(&c)) {
            defaults.padding = Some(n);
            return true;
        }
        if let Some(n) = p.gap.captures(line).and_then(|c| capture_u32(&c)) {
            defaults.gap = Some(n);
            return true;
        }
        if let Some(n) = p.corner_radius.captures(line).and_then(|c| capture_u32(&c)) {
            defaults.corner_radius = Some(n);
            return true;
        }
        false
    }

    fn try_open_page(&mut self, line: &str) -> bool {
        let Some(caps) = self.patterns.page_header.captures(line) else {
            return false;
        };
        let Ok(number) = caps[1].parse::<u32>() else {
            return false;
        };

        let name = caps[2].trim().trim_end_matches(':').trim();
        let name = if name.is_empty() {
            format!("Page {number}")
        } else {
            name.to_string()
        };

        debug!(number, name = %name, "opening wireframe page");
        self.doc.pages.push(Page::new(number, name));
        self.target = Target::Page(self.doc.pages.len() - 1);
        self.state = ParseState::InPage;
        true
    }

    fn select_layout(&mut self, mode: LayoutMode) {
        debug!(mode = %mode, "selecting wireframe layout");
        self.doc.layouts.entry(mode).or_default();
        self.target = Target::Layout(mode);
        self.state = ParseState::OutsidePage;
    }

    /// Parses `N. [type] "Label" [- type] (show label: yes|no)`.
    fn parse_visual(&self, line: &str) -> Option<Visual> {
        let p = self.patterns;
        let caps = p.visual_line.captures(line)?;
        let number = caps[1].parse::<usize>().ok()?;
        let rest = caps.get(2).map_or("", |m| m.as_str());

        let show_label = p
            .show_label
            .captures(rest)
            .is_some_and(|c| matches!(c[1].to_lowercase().as_str(), "yes" | "true" | "y"));
        let rest = p.show_label.replace_all(rest, "");
        let rest = rest.trim();

        let (label, description) = if let Some(quoted) = p.quoted_label.captures(rest) {
            let whole = quoted.get(0)?;
            let before = &rest[..whole.start()];
            let after = &rest[whole.end()..];
            (quoted[1].to_string(), format!("{before} {after}"))
        } else if let Some((label, kind)) = rest.split_once(" - ") {
            (label.to_string(), kind.to_string())
        } else {
            (rest.to_string(), rest.to_string())
        };

        let description = description
            .trim()
            .trim_matches(|c: char| c == '-' || c == '–' || c == ':' || c == '|' || c.is_whitespace());
        let kind = if description.is_empty() {
            VisualKind::default()
        } else {
            VisualKind::from_description(description)
        };

        Some(Visual {
            index: number.saturating_sub(1),
            kind,
            label: label.trim().replace("\\n", "\n"),
            show_label,
        })
    }

    fn settings_mut(&mut self) -> Option<&mut PageSettings> {
        match self.target {
            Target::Page(idx) => self.doc.pages.get_mut(idx).map(|p| &mut p.settings),
            Target::Layout(mode) => Some(&mut self.fragment_mut(mode).settings),
            Target::Nothing => None,
        }
    }

    fn grid_mut(&mut self) -> Option<&mut GridSpec> {
        match self.target {
            Target::Page(idx) => self
                .doc
                .pages
                .get_mut(idx)
                .map(|p| p.grid.get_or_insert_with(GridSpec::default)),
            Target::Layout(mode) => Some(&mut self.fragment_mut(mode).grid),
            Target::Nothing => None,
        }
    }

    fn visuals_mut(&mut self) -> Option<&mut Vec<Visual>> {
        match self.target {
            Target::Page(idx) => self.doc.pages.get_mut(idx).map(|p| &mut p.visuals),
            Target::Layout(mode) => Some(&mut self.fragment_mut(mode).visuals),
            Target::Nothing => None,
        }
    }

    fn fragment_mut(&mut self, mode: LayoutMode) -> &mut LayoutFragment {
        self.doc.layouts.entry(mode).or_default()
    }
}

/// Strips heading markers, emphasis and list bullets.
fn clean_line(line: &str) -> String {
    let text = line.trim().trim_start_matches('#').replace("**", "");
    let text = text.trim();
    let text = text
        .strip_prefix("- ")
        .or_else(|| text.strip_prefix("* "))
        .or_else(|| text.strip_prefix("+ "))
        .unwrap_or(text);
    text.trim().to_string()
}

/// First participating capture group parsed as a number.
/// Explicit counts always apply; generic prose only fills an unset field.
fn set_count(field: &mut Option<u32>, explicit: Option<u32>, generic: Option<u32>) -> bool {
    if let Some(count) = explicit {
        *field = Some(count);
        true
    } else if let Some(count) = generic {
        field.get_or_insert(count);
        true
    } else {
        false
    }
}

fn capture_u32(caps: &Captures<'_>) -> Option<u32> {
    caps.iter()
        .skip(1)
        .flatten()
        .find_map(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> WireframeDocument {
        parse_wireframe(text).expect("parser should not fail")
    }

    const PAGED: &str = r#"
# Sales Dashboard Wireframe

Canvas: 1920x1080
Padding: 24
Gap: 12

## Page 1: Executive Overview
**Layout Type**: KPI-Top
KPI Count: 4

Visuals:
1. "Total Revenue" - KPI card (show label: yes)
2. Line chart "Monthly\nTrend" (show label: no)
3. "Top Products" - table

---

## Page 2: Regional Detail
Layout Type: three-column
3 visuals per column

## Page 3: Breakdown
Layout: GRID
Grid Configuration:
- Rows: 2
- Columns: 3
- Row 2 Columns: 2
"#;

    #[test]
    fn test_page_oriented_document() {
        let doc = parse(PAGED);
        assert_eq!(doc.pages.len(), 3);
        assert!(doc.layouts.is_empty());

        let overview = &doc.pages[0];
        assert_eq!(overview.number, 1);
        assert_eq!(overview.name, "Executive Overview");
        assert_eq!(overview.layout_mode, Some(LayoutMode::Kpi));
        assert_eq!(overview.settings.kpi_count, Some(4));
        assert_eq!(overview.visuals.len(), 3);

        assert_eq!(doc.pages[1].layout_mode, Some(LayoutMode::ThreeCol));
        assert_eq!(doc.pages[2].layout_mode, Some(LayoutMode::Grid));
    }

    #[test]
    fn test_visual_lines() {
        let doc = parse(PAGED);
        let visuals = &doc.pages[0].visuals;

        assert_eq!(visuals[0].index, 0);
        assert_eq!(visuals[0].label, "Total Revenue");
        assert_eq!(visuals[0].kind, VisualKind::Kpi);
        assert!(visuals[0].show_label);

        assert_eq!(visuals[1].index, 1);
        assert_eq!(visuals[1].label, "Monthly\nTrend");
        assert_eq!(visuals[1].kind, VisualKind::LineChart);
        assert!(!visuals[1].show_label);

        assert_eq!(visuals[2].kind, VisualKind::Table);
        assert!(!visuals[2].show_label);
    }

    #[test]
    fn test_visual_without_type_defaults_to_card() {
        let doc = parse("Page 1: A\nVisuals:\n1. \"Something\"\n2) \"Other\" (show label: yes)");
        let visuals = &doc.pages[0].visuals;
        assert_eq!(visuals.len(), 2);
        assert_eq!(visuals[0].kind, VisualKind::Card);
        assert!(visuals[1].show_label);
    }

    #[test]
    fn test_grid_configuration_section() {
        let doc = parse(PAGED);
        let grid = doc.pages[2].grid.as_ref().unwrap();
        assert_eq!(grid.rows, Some(2));
        assert_eq!(grid.columns, Some(3));
        assert_eq!(grid.row_columns.get(&2), Some(&2));
    }

    #[test]
    fn test_grid_lines_without_marker() {
        let doc = parse("Page 1: Sales\nLayout Type: GRID\nRows: 2\nColumns: 3");
        let grid = doc.pages[0].grid.as_ref().unwrap();
        assert_eq!((grid.rows, grid.columns), (Some(2), Some(3)));
    }

    #[test]
    fn test_per_column_not_overridden_by_generic_count() {
        let doc = parse(PAGED);
        let settings = &doc.pages[1].settings;
        assert_eq!(settings.visuals_per_column, Some(3));
        assert_eq!(settings.visual_count, None);
    }

    #[test]
    fn test_generic_count_does_not_override_explicit() {
        let doc = parse("Page 1: Phone\nLayout: Mobile\nVisual count: 5\nShows 2 visuals above the fold");
        assert_eq!(doc.pages[0].settings.visual_count, Some(5));

        let text = "Page 1: Overview\nLayout: asymmetric\nKPI Count: 4\n\
                    The strip shows 6 KPIs side by side\nSide cards: 2\nStack 5 side cards on small screens";
        let settings = &parse(text).pages[0].settings;
        assert_eq!(settings.kpi_count, Some(4));
        assert_eq!(settings.side_card_count, Some(2));
    }

    #[test]
    fn test_explicit_count_overrides_earlier_prose() {
        let text = "Page 1: Overview\nLayout: asymmetric\nAbout 6 KPIs and 5 side cards\n\
                    KPI Count: 4\nSide card count: 2";
        let settings = &parse(text).pages[0].settings;
        assert_eq!(settings.kpi_count, Some(4));
        assert_eq!(settings.side_card_count, Some(2));
    }

    #[test]
    fn test_first_generic_count_wins() {
        let text = "Page 1: Overview\nLayout: kpi\nShow 5 KPIs\nUp to 8 KPIs on wide screens";
        assert_eq!(parse(text).pages[0].settings.kpi_count, Some(5));
    }

    #[test]
    fn test_row_zero_column_count_is_ignored() {
        let doc = parse("Page 1: Sales\nLayout: grid\nGrid Configuration:\nRow 0 Columns: 4\nRow 1 Columns: 2\nRow 99 Columns: 5");
        let grid = doc.pages[0].grid.as_ref().unwrap();
        assert_eq!(grid.row_columns.keys().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(grid.row_column_list(), Some(vec![2]));
    }

    #[test]
    fn test_settings_lines() {
        let text = "Page 1: Nav\nLayout: sidebar\nSidebar width: 260\nShow sidebar: no\n4 side cards";
        let doc = parse(text);
        let settings = &doc.pages[0].settings;
        assert_eq!(settings.sidebar_width, Some(260));
        assert_eq!(settings.show_sidebar, Some(false));
        assert_eq!(settings.side_card_count, Some(4));
    }

    #[test]
    fn test_document_defaults() {
        let doc = parse(PAGED);
        assert_eq!(doc.defaults.width, Some(1920));
        assert_eq!(doc.defaults.height, Some(1080));
        assert_eq!(doc.defaults.padding, Some(24));
        assert_eq!(doc.defaults.gap, Some(12));
        assert_eq!(doc.defaults.corner_radius, None);
    }

    #[test]
    fn test_horizontal_rule_closes_visuals_section() {
        let text = "Page 1: A\nVisuals:\n1. \"One\"\n---\n2. \"Not a visual\"";
        let doc = parse(text);
        assert_eq!(doc.pages[0].visuals.len(), 1);
    }

    #[test]
    fn test_new_page_resets_section() {
        let text = "Page 1: A\nVisuals:\n1. \"One\"\nPage 2: B\n1. \"Stray\"";
        let doc = parse(text);
        assert_eq!(doc.pages[0].visuals.len(), 1);
        assert!(doc.pages[1].visuals.is_empty());
    }

    #[test]
    fn test_legacy_layout_heuristics() {
        let text = "\
## Federal Layout
Header (80px) with agency logo
Sidebar 220-260px with filters
2x3 chart grid
KPI Card, KPI Card, KPI Card

## Sidebar Layout
Nav rail on the left
Chart 1, Chart 2, Chart 3, Chart 4
";
        let doc = parse(text);
        assert!(doc.pages.is_empty());
        assert_eq!(doc.layouts.len(), 2);

        let federal = &doc.layouts[&LayoutMode::Federal];
        assert_eq!(federal.header_height, Some(80));
        assert_eq!(federal.settings.sidebar_width, Some(220));
        assert_eq!(federal.grid.rows, Some(2));
        assert_eq!(federal.grid.columns, Some(3));
        assert_eq!(federal.kpi_count(), Some(3));

        let sidebar = &doc.layouts[&LayoutMode::Sidebar];
        assert_eq!(sidebar.visual_count(), Some(4));
    }

    #[test]
    fn test_legacy_first_inference_wins() {
        let text = "Layout: kpi\nKPI Card, KPI Card\nKPI Card, KPI Card, KPI Card";
        let doc = parse(text);
        assert_eq!(doc.layouts[&LayoutMode::Kpi].inferred_kpi_count, Some(2));
    }

    #[test]
    fn test_legacy_visuals_section() {
        let text = "Layout: mobile\nVisuals:\n1. \"Users\" - metric\n2. \"Map\" - map";
        let doc = parse(text);
        let fragment = &doc.layouts[&LayoutMode::Mobile];
        assert_eq!(fragment.visuals.len(), 2);
        assert_eq!(fragment.visuals[0].kind, VisualKind::Kpi);
        assert_eq!(fragment.visuals[1].kind, VisualKind::Map);
    }

    #[test]
    fn test_layout_defaults_alongside_pages() {
        let text = "Layout: federal\nSidebar width: 300\n\nPage 1: Home\nLayout: federal";
        let doc = parse(text);
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(
            doc.layouts[&LayoutMode::Federal].settings.sidebar_width,
            Some(300)
        );
        assert_eq!(doc.pages[0].settings.sidebar_width, None);
    }

    #[test]
    fn test_unknown_page_layout_is_none() {
        let doc = parse("Page 1: Odd\nLayout Type: spiral");
        assert_eq!(doc.pages[0].layout_mode, None);
    }

    #[test]
    fn test_empty_and_malformed_input() {
        for text in ["", "   \n\n", "random prose\n1. \"orphan\"\nRows: 9", "###\n***\n"] {
            let doc = parse(text);
            assert!(doc.pages.is_empty(), "{text:?}");
            assert!(doc.layouts.is_empty(), "{text:?}");
        }
    }

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line("## **Page 1**: Home"), "Page 1: Home");
        assert_eq!(clean_line("- **Rows:** 2"), "Rows: 2");
        assert_eq!(clean_line("* Columns: 3"), "Columns: 3");
    }

    #[test]
    fn test_parse_wireframe_file_missing() {
        let err = parse_wireframe_file(Path::new("/nonexistent/wireframe.md")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
