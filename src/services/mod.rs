//! Service layer for business logic.
//!
//! This module contains services that encapsulate complex business logic
//! and coordinate between different parts of the application.

pub mod configs;
pub mod geometry;

// Re-export commonly used types and functions
pub use configs::{ConfigFormat, ConfigService};
pub use geometry::{compute_layout, compute_layout_detailed, LayoutOutcome};
