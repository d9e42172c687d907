//! # Technical Indicators
//!
//! SMA, EMA, RSI and MACD. The three single-window indicators share one
//! parameter struct and differ only in the path segment.

use super::apicall::{ApiCallPolygon, RequestError};
use super::params::{Filter, Order, SeriesType, Timespan};
use super::uri::{build_uri, QueryParams};
use serde_json::Value;

/// Named parameters for [`ApiCallPolygon::sma`], [`ApiCallPolygon::ema`] and [`ApiCallPolygon::rsi`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorParams {
    /// Date (`YYYY-MM-DD`) or millisecond timestamp filter.
    pub timestamp: Filter<String>,
    /// Aggregate window the indicator is computed over.
    pub timespan: Option<Timespan>,
    pub adjusted: Option<bool>,
    /// Number of aggregates in the indicator window.
    pub window: Option<u32>,
    pub series_type: Option<SeriesType>,
    /// Include the aggregates used to compute the values.
    pub expand_underlying: Option<bool>,
    pub order: Option<Order>,
    pub limit: Option<u32>,
}

/// Named parameters for [`ApiCallPolygon::macd`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacdParams {
    pub timestamp: Filter<String>,
    pub timespan: Option<Timespan>,
    pub adjusted: Option<bool>,
    pub short_window: Option<u32>,
    pub long_window: Option<u32>,
    pub signal_window: Option<u32>,
    pub series_type: Option<SeriesType>,
    pub expand_underlying: Option<bool>,
    pub order: Option<Order>,
    pub limit: Option<u32>,
}

impl IndicatorParams {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.timestamp.push_into("timestamp", &mut params);
        params
            .push("timespan", self.timespan)
            .push("adjusted", self.adjusted)
            .push("window", self.window)
            .push("series_type", self.series_type)
            .push("expand_underlying", self.expand_underlying)
            .push("order", self.order)
            .push("limit", self.limit);
        params
    }
}

impl MacdParams {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.timestamp.push_into("timestamp", &mut params);
        params
            .push("timespan", self.timespan)
            .push("adjusted", self.adjusted)
            .push("short_window", self.short_window)
            .push("long_window", self.long_window)
            .push("signal_window", self.signal_window)
            .push("series_type", self.series_type)
            .push("expand_underlying", self.expand_underlying)
            .push("order", self.order)
            .push("limit", self.limit);
        params
    }
}

impl ApiCallPolygon {
    /// Simple moving average.
    pub async fn sma(&self, ticker: &str, options: &IndicatorParams) -> Result<Value, RequestError> {
        self.single_window_indicator("sma", ticker, options).await
    }

    /// Exponential moving average.
    pub async fn ema(&self, ticker: &str, options: &IndicatorParams) -> Result<Value, RequestError> {
        self.single_window_indicator("ema", ticker, options).await
    }

    /// Relative strength index.
    pub async fn rsi(&self, ticker: &str, options: &IndicatorParams) -> Result<Value, RequestError> {
        self.single_window_indicator("rsi", ticker, options).await
    }

    /// Moving average convergence/divergence.
    pub async fn macd(&self, ticker: &str, options: &MacdParams) -> Result<Value, RequestError> {
        let path = format!("/v1/indicators/macd/{}", ticker);
        self.fetch_polygon(&build_uri(&path, &options.to_query())).await
    }

    async fn single_window_indicator(
        &self,
        indicator: &str,
        ticker: &str,
        options: &IndicatorParams,
    ) -> Result<Value, RequestError> {
        let path = format!("/v1/indicators/{}/{}", indicator, ticker);
        self.fetch_polygon(&build_uri(&path, &options.to_query())).await
    }
}
