//! The geocoding client: URL construction, request execution, and the two
//! lookup operations.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::config::GeocodeConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::GeocodeError;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{status, Coordinate, GeocodeResponse, Location};

const GEOCODE_ENDPOINT: &str = "https://maps.google.com/maps/api/geocode/json";

/// Async client for the Google Maps Geocoding API.
///
/// Holds the request configuration plus two injectable capabilities: the
/// HTTP transport and the debug diagnostic sink. Each operation is a single
/// linear request/response cycle; the client keeps no per-call state.
pub struct GeocodeClient {
    config: GeocodeConfig,
    transport: Arc<dyn HttpTransport>,
    sink: Arc<dyn DiagnosticSink>,
}

impl GeocodeClient {
    /// Create a client with default configuration and the `reqwest`-backed
    /// transport.
    pub fn new() -> Self {
        Self::with_config(GeocodeConfig::default())
    }

    /// Create a client from an existing configuration.
    pub fn with_config(config: GeocodeConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(ReqwestTransport::new()),
            Arc::new(TracingSink),
        )
    }

    /// Create a client with caller-supplied transport and diagnostic sink.
    pub fn with_parts(
        config: GeocodeConfig,
        transport: Arc<dyn HttpTransport>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            config,
            transport,
            sink,
        }
    }

    pub fn config(&self) -> &GeocodeConfig {
        &self.config
    }

    /// Overwrite the API key used for subsequent calls.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.config.api_key = Some(api_key.into());
    }

    /// Overwrite the response language. An empty string omits the
    /// `language` parameter entirely.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.config.language = language.into();
    }

    /// Overwrite the region bias used for subsequent calls.
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.config.region = Some(region.into());
    }

    /// Toggle mirroring of failures and payloads to the diagnostic sink.
    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    /// Reverse geocode: resolve a coordinate pair to address results.
    ///
    /// Returns the full decoded response; callers pick the results they
    /// need. Invalid coordinates fail without issuing a request.
    pub async fn from_latlng(
        &self,
        coordinate: &Coordinate,
    ) -> Result<GeocodeResponse, GeocodeError> {
        if let Err(e) = coordinate.validate() {
            self.warn(&e.to_string());
            return Err(e);
        }
        let url = self.build_url("latlng", &coordinate.as_query_value());
        self.handle_url(&url).await
    }

    /// Forward geocode: resolve an address string to a coordinate location.
    ///
    /// Returns the first result's location, or `None` when the service
    /// matched nothing. An empty address fails without issuing a request.
    pub async fn from_address(&self, address: &str) -> Result<Option<Location>, GeocodeError> {
        if address.is_empty() {
            let e = GeocodeError::invalid_address();
            self.warn(&e.to_string());
            return Err(e);
        }
        let url = self.build_url("address", address);
        let response = self.handle_url(&url).await?;
        Ok(response
            .results
            .first()
            .map(|result| result.geometry.location))
    }

    /// Build the full request URL for one operation parameter. Pure
    /// function of the current configuration.
    fn build_url(&self, param: &str, value: &str) -> String {
        let mut url = format!("{GEOCODE_ENDPOINT}?{param}={}", percent_encode(value));
        if let Some(api_key) = &self.config.api_key {
            let _ = write!(url, "&key={api_key}");
        }
        if !self.config.language.is_empty() {
            let _ = write!(url, "&language={}", self.config.language);
        }
        if let Some(region) = &self.config.region {
            let _ = write!(url, "&region={}", percent_encode(region));
        }
        url
    }

    /// Execute one request: GET, parse, then interpret the `status` field.
    async fn handle_url(&self, url: &str) -> Result<GeocodeResponse, GeocodeError> {
        let body = self.transport.get(url).await.map_err(|e| {
            self.warn("Error fetching data");
            GeocodeError::Fetch(e.to_string())
        })?;

        let response: GeocodeResponse = serde_json::from_str(&body).map_err(|e| {
            self.warn("Error parsing server response");
            GeocodeError::ServerParse(e.to_string())
        })?;

        if response.status == status::OK {
            if self.config.debug {
                let payload = serde_json::to_string(&response).unwrap_or_default();
                self.sink.message(&payload);
            }
            return Ok(response);
        }

        self.warn(&format!(
            "Server returned status code {}.",
            response.status
        ));
        Err(GeocodeError::ServiceStatus {
            status: response.status,
            message: response.error_message,
        })
    }

    fn warn(&self, text: &str) {
        if self.config.debug {
            self.sink.warning(text);
        }
    }
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-encode a query parameter value. Keeps the RFC 3986 unreserved
/// set literal and escapes everything else, comma and space included.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 2);
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
