//! Computed layout rectangles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag describing the role of a zone in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneKind {
    /// Top bar of the federal layout
    Header,
    /// Bottom-pinned band
    Footer,
    /// Top-pinned thin band above everything else
    Trustbar,
    /// Square logo placeholder inside the header
    Logo,
    /// Title placeholder (header slot or title band)
    Title,
    /// Filter/slicer band
    #[serde(rename = "slicerzone")]
    SlicerZone,
    /// Left sidebar of the federal layout
    Sidebar,
    /// Navigation rail of the sidebar layout
    Nav,
    /// KPI strip placeholder when no KPI cells are requested
    KpiStrip,
    /// KPI cell
    Kpi,
    /// Generic content card
    Card,
    /// Large primary visual
    Main,
}

impl ZoneKind {
    /// Canonical name used in markup and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Trustbar => "trustbar",
            Self::Logo => "logo",
            Self::Title => "title",
            Self::SlicerZone => "slicerzone",
            Self::Sidebar => "sidebar",
            Self::Nav => "nav",
            Self::KpiStrip => "kpi-strip",
            Self::Kpi => "kpi",
            Self::Card => "card",
            Self::Main => "main",
        }
    }

    /// Placeholder for an externally authored visual, addressable by index.
    #[must_use]
    pub const fn is_content(&self) -> bool {
        matches!(self, Self::Kpi | Self::Card | Self::Main)
    }

    /// Structural or branding zone that is never annotated.
    #[must_use]
    pub const fn is_chrome(&self) -> bool {
        !self.is_content()
    }

    /// Page frame kinds: square-cornered, never bordered or shadowed.
    #[must_use]
    pub const fn is_frame(&self) -> bool {
        matches!(
            self,
            Self::Header | Self::Footer | Self::Trustbar | Self::Logo | Self::Title
        )
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One positioned rectangle of the computed layout.
///
/// Coordinates are canvas pixels with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
    /// Role of the zone
    pub kind: ZoneKind,
    /// Ordinal among content zones (present only for content kinds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Explicit fill color overriding the kind default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl Zone {
    /// Creates an unindexed zone.
    #[must_use]
    pub fn new(kind: ZoneKind, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            kind,
            index: None,
            fill: None,
        }
    }

    /// Sets the content index.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets an explicit fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Horizontal centre.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Vertical centre.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// True if the two rectangles share interior area.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-6;
        self.x < other.right() - EPS
            && other.x < self.right() - EPS
            && self.y < other.bottom() - EPS
            && other.y < self.bottom() - EPS
    }
}
