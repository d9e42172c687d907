//! # Snapshots
//!
//! Current-day snapshots for one ticker, for a list of tickers, and for the
//! top movers in either direction.

use super::apicall::{ApiCallPolygon, RequestError};
use super::uri::{build_uri, QueryParams};
use serde_json::Value;

const SNAPSHOT_ROOT: &str = "/v2/snapshot/locale/us/markets/stocks";

/// Named parameters for [`ApiCallPolygon::snapshot_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotAllParams {
    /// Restrict to these tickers. Sent comma separated; empty means all.
    pub tickers: Option<Vec<String>>,
    pub include_otc: Option<bool>,
}

impl ApiCallPolygon {
    /// Snapshot of a single ticker.
    pub async fn snapshot(&self, ticker: &str) -> Result<Value, RequestError> {
        self.fetch_polygon(&format!("{}/tickers/{}", SNAPSHOT_ROOT, ticker)).await
    }

    /// Snapshot of every ticker, or of the listed ones.
    pub async fn snapshot_all(&self, options: &SnapshotAllParams) -> Result<Value, RequestError> {
        let tickers = options
            .tickers
            .as_ref()
            .filter(|list| !list.is_empty())
            .map(|list| list.join(","));
        let params = QueryParams::new()
            .with("tickers", tickers)
            .with("include_otc", options.include_otc);
        self.fetch_polygon(&build_uri(&format!("{}/tickers", SNAPSHOT_ROOT), &params)).await
    }

    /// Top 20 gainers of the day.
    pub async fn gainers(&self, include_otc: Option<bool>) -> Result<Value, RequestError> {
        self.movers("gainers", include_otc).await
    }

    /// Top 20 losers of the day.
    pub async fn losers(&self, include_otc: Option<bool>) -> Result<Value, RequestError> {
        self.movers("losers", include_otc).await
    }

    async fn movers(&self, direction: &str, include_otc: Option<bool>) -> Result<Value, RequestError> {
        let path = format!("{}/{}", SNAPSHOT_ROOT, direction);
        let params = QueryParams::new().with("include_otc", include_otc);
        self.fetch_polygon(&build_uri(&path, &params)).await
    }
}
