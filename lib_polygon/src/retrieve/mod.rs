//! # Data Retrieval Module
//!
//! Generic HTTP retrieval built on `reqwest` and `reqwest-middleware`.
//!
//! ## Contained Modules:
//!
//! - **`ky_http`**: `ApiClient`, featuring bearer authentication and automatic
//!   retries with exponential backoff. It implements the `JsonHttpClient`
//!   trait the Polygon façades consume, so the façades never see `reqwest`.

/// Generic HTTP API client with retry middleware for resilient network requests.
pub mod ky_http;
