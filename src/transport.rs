//! HTTP fetch capability the client depends on.
//!
//! The client only needs "perform GET, receive the body text". Keeping that
//! behind a trait lets tests substitute a recording mock for the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("google-geocode/", env!("CARGO_PKG_VERSION"));

/// Transport-level failure (DNS, connect, timeout, body read).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Performs one HTTP GET and returns the response body.
///
/// The HTTP status line is not interpreted here: the geocoding service
/// reports its failures through the in-body `status` field, which the
/// client inspects after parsing.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// Default transport backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let http_client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { http_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))
    }
}
