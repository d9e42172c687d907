//! # Trades and Quotes
//!
//! Tick-level history (`/v3/trades`, `/v3/quotes`) and the most recent
//! trade or NBBO quote for a ticker.

use super::apicall::{ApiCallPolygon, RequestError};
use super::params::{Filter, Order};
use super::uri::{build_uri, QueryParams};
use serde_json::Value;

/// Named parameters shared by [`ApiCallPolygon::trades`] and [`ApiCallPolygon::quotes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickParams {
    /// Date or nanosecond timestamp filter.
    pub timestamp: Filter<String>,
    pub order: Option<Order>,
    /// Results per page.
    pub limit: Option<u32>,
    /// Field used for ordering, usually `timestamp`.
    pub sort: Option<String>,
}

impl TickParams {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.timestamp.push_into("timestamp", &mut params);
        params
            .push("order", self.order)
            .push("limit", self.limit)
            .push("sort", self.sort.as_deref());
        params
    }
}

impl ApiCallPolygon {
    /// Most recent NBBO quote.
    pub async fn last_quote(&self, ticker: &str) -> Result<Value, RequestError> {
        self.fetch_polygon(&format!("/v2/last/nbbo/{}", ticker)).await
    }

    /// Most recent trade.
    pub async fn last_trade(&self, ticker: &str) -> Result<Value, RequestError> {
        self.fetch_polygon(&format!("/v2/last/trade/{}", ticker)).await
    }

    /// Quotes for a ticker within a time range.
    pub async fn quotes(&self, ticker: &str, options: &TickParams) -> Result<Value, RequestError> {
        let path = format!("/v3/quotes/{}", ticker);
        self.fetch_polygon(&build_uri(&path, &options.to_query())).await
    }

    /// Trades for a ticker within a time range.
    pub async fn trades(&self, ticker: &str, options: &TickParams) -> Result<Value, RequestError> {
        let path = format!("/v3/trades/{}", ticker);
        self.fetch_polygon(&build_uri(&path, &options.to_query())).await
    }
}
