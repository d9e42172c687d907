//! # Aggregate Bars
//!
//! Previous close, custom range bars, grouped daily bars and daily
//! open/close. Ticker symbols and dates are placed into the path verbatim.

use super::apicall::{ApiCallPolygon, RequestError};
use super::params::{Order, Timespan};
use super::uri::{build_uri, QueryParams};
use serde_json::Value;

/// Named parameters for [`ApiCallPolygon::aggregates`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatesParams {
    /// Whether results are adjusted for splits.
    pub adjusted: Option<bool>,
    /// Sort by timestamp.
    pub sort: Option<Order>,
    /// Maximum number of base aggregates queried to build the result.
    pub limit: Option<u32>,
}

/// Named parameters for [`ApiCallPolygon::grouped_daily`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedDailyParams {
    pub adjusted: Option<bool>,
    /// Include OTC securities.
    pub include_otc: Option<bool>,
}

impl ApiCallPolygon {
    /// Previous day's OHLC for a ticker.
    pub async fn previous_close(&self, ticker: &str, adjusted: Option<bool>) -> Result<Value, RequestError> {
        let path = format!("/v2/aggs/ticker/{}/prev", ticker);
        let params = QueryParams::new().with("adjusted", adjusted);
        self.fetch_polygon(&build_uri(&path, &params)).await
    }

    /// Aggregate bars over a date range in custom time window sizes.
    ///
    /// `from` and `to` are either `YYYY-MM-DD` dates or millisecond timestamps.
    pub async fn aggregates(
        &self,
        ticker: &str,
        multiplier: u32,
        timespan: Timespan,
        from: &str,
        to: &str,
        options: &AggregatesParams,
    ) -> Result<Value, RequestError> {
        let path = format!(
            "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            ticker, multiplier, timespan, from, to
        );
        let params = QueryParams::new()
            .with("adjusted", options.adjusted)
            .with("sort", options.sort)
            .with("limit", options.limit);
        self.fetch_polygon(&build_uri(&path, &params)).await
    }

    /// Daily bars for the entire market on one date.
    pub async fn grouped_daily(&self, date: &str, options: &GroupedDailyParams) -> Result<Value, RequestError> {
        let path = format!("/v2/aggs/grouped/locale/us/market/stocks/{}", date);
        let params = QueryParams::new()
            .with("adjusted", options.adjusted)
            .with("include_otc", options.include_otc);
        self.fetch_polygon(&build_uri(&path, &params)).await
    }

    /// Open, close and after-hours prices of a ticker on a date.
    pub async fn daily_open_close(&self, ticker: &str, date: &str, adjusted: Option<bool>) -> Result<Value, RequestError> {
        let path = format!("/v1/open-close/{}/{}", ticker, date);
        let params = QueryParams::new().with("adjusted", adjusted);
        self.fetch_polygon(&build_uri(&path, &params)).await
    }
}
