//! # Reference Data
//!
//! Stock splits, dividends, ticker details and the current market status.

use super::apicall::{ApiCallPolygon, RequestError};
use super::params::{Filter, Order};
use super::uri::{build_uri, QueryParams};
use serde_json::Value;

/// Named parameters for [`ApiCallPolygon::splits`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitsParams {
    pub ticker: Filter<String>,
    /// `YYYY-MM-DD`.
    pub execution_date: Filter<String>,
    /// Only reverse splits (`true`) or only forward splits (`false`).
    pub reverse_split: Option<bool>,
    pub order: Option<Order>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

/// Named parameters for [`ApiCallPolygon::dividends`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DividendsParams {
    pub ticker: Filter<String>,
    pub ex_dividend_date: Filter<String>,
    pub record_date: Filter<String>,
    pub declaration_date: Filter<String>,
    pub pay_date: Filter<String>,
    /// Payments per year: 0, 1, 2, 4, 12, 24 or 52.
    pub frequency: Option<u32>,
    /// `CD`, `SC`, `LT` or `ST`.
    pub dividend_type: Option<String>,
    pub order: Option<Order>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

impl ApiCallPolygon {
    /// Historical stock splits.
    pub async fn splits(&self, options: &SplitsParams) -> Result<Value, RequestError> {
        let mut params = QueryParams::new();
        options.ticker.push_into("ticker", &mut params);
        options.execution_date.push_into("execution_date", &mut params);
        params
            .push("reverse_split", options.reverse_split)
            .push("order", options.order)
            .push("limit", options.limit)
            .push("sort", options.sort.as_deref());
        self.fetch_polygon(&build_uri("/v3/reference/splits", &params)).await
    }

    /// Historical cash dividends.
    pub async fn dividends(&self, options: &DividendsParams) -> Result<Value, RequestError> {
        let mut params = QueryParams::new();
        options.ticker.push_into("ticker", &mut params);
        options.ex_dividend_date.push_into("ex_dividend_date", &mut params);
        options.record_date.push_into("record_date", &mut params);
        options.declaration_date.push_into("declaration_date", &mut params);
        options.pay_date.push_into("pay_date", &mut params);
        params
            .push("frequency", options.frequency)
            .push("dividend_type", options.dividend_type.as_deref())
            .push("order", options.order)
            .push("limit", options.limit)
            .push("sort", options.sort.as_deref());
        self.fetch_polygon(&build_uri("/v3/reference/dividends", &params)).await
    }

    /// Company and listing details for a ticker, optionally as of a past date.
    pub async fn ticker_details(&self, ticker: &str, date: Option<&str>) -> Result<Value, RequestError> {
        let path = format!("/v3/reference/tickers/{}", ticker);
        let params = QueryParams::new().with("date", date);
        self.fetch_polygon(&build_uri(&path, &params)).await
    }

    /// Current trading status of the exchanges and overall market.
    pub async fn market_status(&self) -> Result<Value, RequestError> {
        self.fetch_polygon("/v1/marketstatus/now").await
    }
}
