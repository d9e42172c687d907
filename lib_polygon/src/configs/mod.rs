//! # Configuration Modules
//!
//! Layered configuration for the Polygon API client.

/// Defaults, JSON file, environment and CLI layering for the client settings.
pub mod config_polygon;
