//! Wireframe parsing and projection onto layout configurations.
//!
//! [`wireframe`] turns loosely formatted text into a
//! [`WireframeDocument`](crate::models::WireframeDocument); [`apply`] merges a
//! page or legacy layout of that document into a
//! [`LayoutConfig`](crate::models::LayoutConfig).

pub mod apply;
pub mod wireframe;

// Re-export commonly used functions
pub use apply::{apply_layout, apply_page};
pub use wireframe::{parse_wireframe, parse_wireframe_file, try_parse_wireframe};
