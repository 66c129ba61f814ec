//! DashZones Library
//!
//! This library computes dashboard zone layouts for seven fixed topologies,
//! renders them as SVG wireframes, and parses free-form text wireframes into
//! layout configurations.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
