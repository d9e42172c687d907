//! # Polygon REST API Integration Module
//!
//! Stateless façades over the Polygon stock market REST API. Every endpoint
//! method assembles a path from its positional arguments, forwards an explicit
//! allow-list of named parameters to [`uri::build_uri`], and hands the result
//! to an injected [`apicall::JsonHttpClient`].
//!
//! ## Contained Modules:
//!
//! - **`uri`**: Ordered, absent-aware query parameters and URI construction.
//! - **`params`**: Timespans, ordering, series types and range filters.
//! - **`apicall`**: The client trait, its error type and the `ApiCallPolygon` root.
//! - **`aggregates`**, **`indicators`**, **`ticks`**, **`snapshots`**,
//!   **`reference`**: the endpoint groups.
//!
//! Path segments (tickers, dates) are not percent-encoded; callers pass
//! values that are already URL safe.

/// Aggregate bars, previous close and daily open/close.
pub mod aggregates;
/// Client trait, request errors and the façade root.
pub mod apicall;
/// SMA, EMA, RSI and MACD.
pub mod indicators;
/// Shared parameter vocabulary.
pub mod params;
/// Splits, dividends, ticker details and market status.
pub mod reference;
/// Ticker, full-market and top-mover snapshots.
pub mod snapshots;
/// Trades, quotes and their latest values.
pub mod ticks;
/// Query string construction.
pub mod uri;

pub use aggregates::{AggregatesParams, GroupedDailyParams};
pub use apicall::{ApiCallPolygon, JsonHttpClient, RequestError};
pub use indicators::{IndicatorParams, MacdParams};
pub use params::{Filter, Order, SeriesType, Timespan};
pub use reference::{DividendsParams, SplitsParams};
pub use snapshots::SnapshotAllParams;
pub use ticks::TickParams;
pub use uri::{build_uri, InvalidArgument, QueryParams, QueryValue};
