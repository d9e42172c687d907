//! # HTTP Retrieval Utilities
//!
//! An asynchronous API client wrapper around `reqwest`, with middleware-based
//! exponential backoff for transient failures and bearer authentication. It is
//! the stock implementation of [`JsonHttpClient`].

use crate::markets::polygon::apicall::{JsonHttpClient, RequestError};
use async_trait::async_trait;
use reqwest::{header::{HeaderMap, AUTHORIZATION}, Method, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, warn};

/// A standardized container for API responses.
///
/// Wraps the deserialized data along with metadata about the HTTP transaction.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// The successfully deserialized response body, if any.
    pub data: Option<T>,
    /// The raw error body returned by the server if the request failed.
    pub error_body: Option<String>,
    /// The numeric HTTP status code.
    pub status: u16,
    /// Indicates if the status code was in the 2xx range.
    pub success: bool,
    /// The headers returned by the server.
    pub headers: HeaderMap,
}

/// Retry and timeout settings for [`ApiClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientPolicy {
    /// Retries after the first attempt for transient failures (5xx, 429, connect errors).
    pub max_retries: u32,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for ClientPolicy {
    fn default() -> Self {
        Self { max_retries: 3, timeout: Duration::from_secs(30) }
    }
}

/// A flexible asynchronous HTTP client.
///
/// Built on top of `reqwest_middleware`, it handles base URLs,
/// authentication tokens, and automatic retries.
pub struct ApiClient {
    /// The underlying middleware-enabled client.
    inner: ClientWithMiddleware,
    /// The base URL to which all relative paths are joined.
    base_url: Url,
    /// An optional Bearer token used for authorization.
    auth_token: Option<String>,
}

impl ApiClient {
    /// Creates a new `ApiClient` with the default retry policy.
    ///
    /// # Arguments
    /// * `base_url` - The absolute base URL for the API (e.g., "https://api.polygon.io/").
    /// * `auth_token` - An optional string for the Authorization header.
    ///
    /// # Errors
    /// Returns [`RequestError::Url`] if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str, auth_token: Option<String>) -> Result<Self, RequestError> {
        Self::with_policy(base_url, auth_token, ClientPolicy::default())
    }

    /// Creates a new `ApiClient` with explicit retry and timeout settings.
    pub fn with_policy(base_url: &str, auth_token: Option<String>, policy: ClientPolicy) -> Result<Self, RequestError> {
        // Parse the base URL to ensure it is valid and absolute
        let url = Url::parse(base_url).map_err(|e| RequestError::Url {
            uri: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .timeout(policy.timeout)
            .build()
            .map_err(|e| RequestError::Transport { uri: base_url.to_string(), reason: e.to_string() })?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(policy.max_retries);

        let client = ClientBuilder::new(http)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            inner: client,
            base_url: url,
            auth_token,
        })
    }

    /// The base URL relative paths are joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Performs an HTTP request and captures the response.
    ///
    /// Non-2xx responses are not errors here: they come back with
    /// `success == false` and the body text in `error_body`.
    ///
    /// # Arguments
    /// * `method` - The HTTP verb.
    /// * `path` - The path (and query) to join onto the base URL.
    /// * `headers` - Optional additional headers for this specific request.
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse<T>, RequestError>
    where
        T: DeserializeOwned,
    {
        // 1. Construct the full absolute URL
        let full_url = self.base_url.join(path).map_err(|e| RequestError::Url {
            uri: path.to_string(),
            reason: e.to_string(),
        })?;
        let mut req = self.inner.request(method, full_url);

        // 2. Add Custom Headers if provided
        if let Some(h) = headers {
            req = req.headers(h);
        }

        // 3. Inject Bearer Authentication if a token is present
        if let Some(token) = &self.auth_token {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        // 4. Execute the request and capture response metadata
        let response = req.send().await.map_err(|e| {
            error!(path, error = %e, "HTTP transport failure");
            RequestError::Transport { uri: path.to_string(), reason: e.to_string() }
        })?;
        let status = response.status();
        let resp_headers = response.headers().clone();

        // 5. Decode on success, keep the body text otherwise
        if status.is_success() {
            let data = response.json::<T>().await.map_err(|e| RequestError::Decode {
                uri: path.to_string(),
                reason: e.to_string(),
            })?;
            Ok(ApiResponse {
                data: Some(data),
                error_body: None,
                status: status.as_u16(),
                success: true,
                headers: resp_headers,
            })
        } else {
            let error_text = response.text().await.ok();
            Ok(ApiResponse {
                data: None,
                error_body: error_text,
                status: status.as_u16(),
                success: false,
                headers: resp_headers,
            })
        }
    }
}

#[async_trait]
impl JsonHttpClient for ApiClient {
    async fn get_json(&self, uri: &str) -> Result<Value, RequestError> {
        let response = self.request::<Value>(Method::GET, uri, None).await?;

        if response.success {
            return Ok(response.data.unwrap_or(Value::Null));
        }

        warn!(uri, status = response.status, "HTTP request failed");
        Err(RequestError::Status {
            status: response.status,
            uri: uri.to_string(),
            body: response.error_body.unwrap_or_default(),
        })
    }
}
