//! Layout report generation.
//!
//! A report summarizes one computed layout: where every zone sits, which
//! visual is annotated for each content zone, and a few recommendations
//! about the configuration. Reports serialize to JSON with serde and render
//! to Markdown for documentation.

use crate::constants::{APP_NAME, APP_VERSION};
use crate::export::svg::MAX_RECOMMENDED_VISUALS;
use crate::models::{LayoutConfig, LayoutMode, VisualKind, ZoneKind};
use crate::services::geometry::{content_zone_count, LayoutOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Complete report for one layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    /// Where and when the report was produced
    pub metadata: ReportMetadata,
    /// One row per zone in emission order
    pub zones: Vec<ZoneRow>,
    /// Suggestions about the configuration
    pub recommendations: Vec<Recommendation>,
}

/// Report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Producing application
    pub generator: String,
    /// Producing application version
    pub version: String,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Optional title (page name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Layout mode the zones were computed for
    pub layout_mode: LayoutMode,
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Total zones
    pub zone_count: usize,
    /// Content (indexed) zones
    pub content_count: usize,
}

/// Coordinates and annotations for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRow {
    /// Content index, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Zone role
    pub kind: ZoneKind,
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
    /// Annotated visual kind (content zones only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_type: Option<VisualKind>,
    /// Annotated label (content zones only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Recommendation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    /// More content zones than a dashboard page comfortably holds
    TooManyVisuals,
    /// Some computed cells hit the minimum size
    ClampedCells,
    /// Labels are enabled but some content zones have none
    UnlabeledVisuals,
    /// No content zones at all
    EmptyLayout,
}

impl RecommendationKind {
    /// Stable identifier used in JSON and Markdown.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TooManyVisuals => "too-many-visuals",
            Self::ClampedCells => "clamped-cells",
            Self::UnlabeledVisuals => "unlabeled-visuals",
            Self::EmptyLayout => "empty-layout",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Category
    pub kind: RecommendationKind,
    /// Human-readable explanation
    pub message: String,
}

/// Builds a report from a computed layout.
///
/// `generated_at` is passed in so identical inputs give identical reports.
#[must_use]
pub fn build_report(
    config: &LayoutConfig,
    mode: LayoutMode,
    outcome: &LayoutOutcome,
    generated_at: DateTime<Utc>,
) -> LayoutReport {
    let zones: Vec<ZoneRow> = outcome
        .zones
        .iter()
        .map(|zone| {
            let (visual_type, label) = match zone.index {
                Some(index) => (
                    Some(config.visual_type_for(index)),
                    config.label_for(index).map(str::to_string),
                ),
                None => (None, None),
            };
            ZoneRow {
                index: zone.index,
                kind: zone.kind,
                x: zone.x,
                y: zone.y,
                w: zone.w,
                h: zone.h,
                visual_type,
                label,
            }
        })
        .collect();

    let content_count = content_zone_count(&outcome.zones);
    let mut recommendations = Vec::new();

    if content_count == 0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::EmptyLayout,
            message: format!("The {mode} layout has no content zones; check row, column and visual counts."),
        });
    }

    if content_count > MAX_RECOMMENDED_VISUALS {
        recommendations.push(Recommendation {
            kind: RecommendationKind::TooManyVisuals,
            message: format!(
                "{content_count} visuals on one page; consider at most {MAX_RECOMMENDED_VISUALS} or splitting into pages."
            ),
        });
    }

    if outcome.clamped_cells > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::ClampedCells,
            message: format!(
                "{} cell dimensions were raised to the minimum size; reduce counts, gap or padding.",
                outcome.clamped_cells
            ),
        });
    }

    if config.show_labels {
        let unlabeled: Vec<String> = zones
            .iter()
            .filter(|row| row.index.is_some() && row.label.is_none())
            .filter_map(|row| row.index.map(|i| i.to_string()))
            .collect();
        if !unlabeled.is_empty() {
            recommendations.push(Recommendation {
                kind: RecommendationKind::UnlabeledVisuals,
                message: format!("Labels are enabled but visuals {} have none.", unlabeled.join(", ")),
            });
        }
    }

    LayoutReport {
        metadata: ReportMetadata {
            generator: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            generated_at,
            title: config.title_text.clone(),
            layout_mode: mode,
            width: config.width,
            height: config.height,
            zone_count: outcome.zones.len(),
            content_count,
        },
        zones,
        recommendations,
    }
}

/// Renders a report as Markdown.
#[must_use]
pub fn render_report_markdown(report: &LayoutReport) -> String {
    let mut output = String::new();
    let meta = &report.metadata;

    let title = meta
        .title
        .clone()
        .unwrap_or_else(|| format!("{} layout", meta.layout_mode));
    let _ = writeln!(output, "# Layout Report: {title}\n");
    let _ = writeln!(
        output,
        "*Generated by {} {} on {}*\n",
        meta.generator,
        meta.version,
        meta.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    output.push_str("## Summary\n\n");
    let _ = writeln!(output, "- **Mode:** {}", meta.layout_mode);
    let _ = writeln!(output, "- **Canvas:** {} × {}", meta.width, meta.height);
    let _ = writeln!(
        output,
        "- **Zones:** {} ({} content)",
        meta.zone_count, meta.content_count
    );
    output.push('\n');

    output.push_str("## Zones\n\n");
    output.push_str("| # | Kind | X | Y | Width | Height | Visual | Label |\n");
    output.push_str("|---|------|---|---|-------|--------|--------|-------|\n");
    for row in &report.zones {
        let index = row.index.map_or_else(|| "-".to_string(), |i| i.to_string());
        let visual = row.visual_type.map_or_else(|| "-".to_string(), |v| v.to_string());
        let label = row
            .label
            .as_deref()
            .map_or_else(|| "-".to_string(), |l| l.replace('\n', " ").replace('|', "\\|"));
        let _ = writeln!(
            output,
            "| {index} | {} | {:.1} | {:.1} | {:.1} | {:.1} | {visual} | {label} |",
            row.kind, row.x, row.y, row.w, row.h
        );
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    if report.recommendations.is_empty() {
        output.push_str("No issues found.\n");
    } else {
        for rec in &report.recommendations {
            let _ = writeln!(output, "- **{}**: {}", rec.kind, rec.message);
        }
    }

    output
}
