//! Export functionality for computed layouts.
//!
//! This module turns zone lists into artifacts: SVG background markup for
//! dashboards, and reports (JSON or Markdown) documenting zone coordinates
//! and configuration recommendations.

pub mod report;
pub mod svg;

pub use report::{
    build_report, render_report_markdown, LayoutReport, Recommendation, RecommendationKind,
};
pub use svg::render_markup;
