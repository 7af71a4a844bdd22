//! HTTP fetching with retry on rate limiting.

#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};

use crate::config::CrawlConfig;
use crate::errors::{CrawlError, Result};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a single request and hands back whatever the server answered.
/// Status handling is left to the [`Fetcher`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: &Method, url: &str, headers: &HeaderMap) -> Result<RawResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, method: &Method, url: &str, headers: &HeaderMap) -> Result<RawResponse> {
        let response = self
            .client
            .request(method.clone(), url)
            .headers(headers.clone())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

/// Issues requests with the configured headers, retrying HTTP 429 responses
/// after a fixed delay until the retry budget is spent.
pub struct Fetcher<T = ReqwestTransport> {
    transport: T,
    headers: HeaderMap,
    max_retries: u32,
    retry_delay: Duration,
}

impl Fetcher<ReqwestTransport> {
    /// Fetcher over a fresh `reqwest` client.
    pub fn from_config(config: &CrawlConfig) -> Result<Self> {
        Self::with_transport(ReqwestTransport::new()?, config)
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn with_transport(transport: T, config: &CrawlConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        Ok(Self {
            transport,
            headers,
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends the request and returns the first 200 response.
    ///
    /// # Errors
    ///
    /// - [`CrawlError::RateLimitExceeded`] if the server still answers 429 after `max_retries` retries
    /// - [`CrawlError::HttpError`] on any other non-200 status, without retrying
    /// - [`CrawlError::Transport`] if the request itself fails
    pub async fn fetch(&self, method: Method, url: &str) -> Result<RawResponse> {
        let mut retries_left = self.max_retries;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let response = self.transport.send(&method, url, &self.headers).await?;

            match response.status {
                StatusCode::OK => return Ok(response),
                StatusCode::TOO_MANY_REQUESTS if retries_left > 0 => {
                    tracing::warn!(
                        "Request rate limited ({} retries left). Sending another request to {} in {:?}.",
                        retries_left,
                        url,
                        self.retry_delay
                    );
                    tokio::time::sleep(self.retry_delay).await;
                    retries_left -= 1;
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    return Err(CrawlError::RateLimitExceeded {
                        url: url.to_string(),
                        attempts,
                    });
                }
                status => {
                    return Err(CrawlError::HttpError {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
            }
        }
    }

    /// GETs the URL and returns the response body.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.fetch(Method::GET, url).await?;
        Ok(response.body)
    }
}
