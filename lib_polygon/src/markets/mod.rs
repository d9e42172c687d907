//! # Financial Market APIs Module
//!
//! Groups the client implementations for specific market data providers.
//!
//! ## Contained Modules:
//!
//! - **`polygon`**: URI construction and endpoint façades for the Polygon
//!   stock market REST API.

/// Façades for the Polygon stock market REST API.
pub mod polygon;
