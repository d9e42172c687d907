//! # lib_polygon
//!
//! URI construction and thin async façades for the Polygon stock market REST
//! API. The façades depend only on the [`markets::polygon::JsonHttpClient`]
//! trait; a reqwest-based implementation ships behind the `retrieve` feature.
//!
//! Folders are feature gated:
//!
//! - `markets` (always on): query building and endpoint façades.
//! - `retrieve`: `ApiClient`, the HTTP collaborator with retries.
//! - `configs`: layered client configuration.
//! - `loggers`: tracing subscriber setup and log rotation.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications)]

pub mod markets;

#[cfg(feature = "configs")]
pub mod configs;
#[cfg(feature = "loggers")]
pub mod loggers;
#[cfg(feature = "retrieve")]
pub mod retrieve;

pub use markets::polygon::{build_uri, ApiCallPolygon, JsonHttpClient, QueryParams, QueryValue, RequestError};
