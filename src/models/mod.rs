//! Data models for layout configuration, computed zones and parsed wireframes.
//!
//! This module contains the plain data structures shared by the parser, the
//! geometry engine and the exporters. Models carry no I/O.

pub mod layout_config;
pub mod layout_mode;
pub mod theme;
pub mod visual_kind;
pub mod wireframe;
pub mod zone;

// Re-export all model types
pub use layout_config::LayoutConfig;
pub use layout_mode::LayoutMode;
pub use theme::{SlicerStyle, ThemeMode};
pub use visual_kind::{Badge, VisualKind};
pub use wireframe::{
    DocumentKind, FormattingDefaults, GridSpec, LayoutFragment, Page, PageSettings, Visual,
    WireframeDocument,
};
pub use zone::{Zone, ZoneKind};
