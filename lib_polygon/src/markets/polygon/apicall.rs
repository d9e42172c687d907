//! # Polygon API Call Client
//!
//! The seam between the endpoint façades and whatever performs HTTP. The
//! façades build a relative URI and hand it to a [`JsonHttpClient`]; transport,
//! authentication headers, retries and rate limiting all live behind that
//! trait. The decoded JSON comes back untouched.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by a [`JsonHttpClient`].
///
/// Façades pass these through unchanged.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The relative URI could not be joined onto the client's base URL.
    #[error("invalid request URL `{uri}`: {reason}")]
    Url { uri: String, reason: String },

    /// Connection, TLS, timeout or retry-exhaustion failures.
    #[error("transport error for {uri}: {reason}")]
    Transport { uri: String, reason: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP request failed for {uri}: status {status}: {body}")]
    Status { status: u16, uri: String, body: String },

    /// The body of a 2xx response was not valid JSON.
    #[error("failed to decode JSON from {uri}: {reason}")]
    Decode { uri: String, reason: String },
}

impl RequestError {
    /// HTTP status code, when the failure came from the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Anything able to `GET` a relative URI and decode the JSON body.
#[async_trait]
pub trait JsonHttpClient: Send + Sync {
    /// Fetches `uri` (path plus query, relative to the client's base URL).
    async fn get_json(&self, uri: &str) -> Result<Value, RequestError>;
}

/// Entry point for every Polygon endpoint.
///
/// Endpoint methods are spread over the sibling modules (`aggregates`,
/// `indicators`, `ticks`, `snapshots`, `reference`).
#[derive(Clone)]
pub struct ApiCallPolygon {
    client: Arc<dyn JsonHttpClient>,
}

impl ApiCallPolygon {
    /// Wraps an injected HTTP client.
    pub fn new(client: Arc<dyn JsonHttpClient>) -> Self {
        Self { client }
    }

    /// Performs the GET for an already built URI.
    pub async fn fetch_polygon(&self, uri: &str) -> Result<Value, RequestError> {
        debug!(uri, "polygon request");
        self.client.get_json(uri).await
    }
}

impl std::fmt::Debug for ApiCallPolygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCallPolygon").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Failing;

    #[async_trait]
    impl JsonHttpClient for Failing {
        async fn get_json(&self, uri: &str) -> Result<Value, RequestError> {
            Err(RequestError::Status { status: 429, uri: uri.to_string(), body: "slow down".into() })
        }
    }

    struct Echo;

    #[async_trait]
    impl JsonHttpClient for Echo {
        async fn get_json(&self, uri: &str) -> Result<Value, RequestError> {
            Ok(json!({ "uri": uri }))
        }
    }

    #[tokio::test]
    async fn errors_pass_through_unchanged() {
        let api = ApiCallPolygon::new(Arc::new(Failing));
        let err = api.fetch_polygon("/v2/last/trade/AAPL").await.unwrap_err();

        assert_eq!(err.status(), Some(429));
        assert_eq!(
            err.to_string(),
            "HTTP request failed for /v2/last/trade/AAPL: status 429: slow down"
        );
    }

    #[tokio::test]
    async fn responses_pass_through_unchanged() {
        let api = ApiCallPolygon::new(Arc::new(Echo));
        let body = api.fetch_polygon("/v1/marketstatus/now").await.unwrap();
        assert_eq!(body, json!({ "uri": "/v1/marketstatus/now" }));
    }
}
