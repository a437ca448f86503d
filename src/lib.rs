//! Minimal async client for the Google Maps Geocoding API.
//!
//! Two operations are exposed: reverse geocoding (coordinate pair to
//! address results) and forward geocoding (address text to a coordinate
//! location). The client builds the request URL from its configuration,
//! performs one GET, and interprets the JSON response by its `status`
//! field. No retries, caching, or rate limiting.
//!
//! ```no_run
//! use google_geocode::{Coordinate, GeocodeClient, GeocodeConfig};
//!
//! # async fn run() -> Result<(), google_geocode::GeocodeError> {
//! let client = GeocodeClient::with_config(GeocodeConfig::new().with_api_key("YOUR_KEY"));
//!
//! // Forward: first matching location, or None for zero results.
//! let location = client.from_address("1600 Amphitheatre Pkwy").await?;
//!
//! // Reverse: the full multi-result response.
//! let response = client.from_latlng(&Coordinate::new(40.714224, -73.961452)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod transport;
pub mod types;

pub use client::GeocodeClient;
pub use config::GeocodeConfig;
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::GeocodeError;
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
pub use types::{Coordinate, GeocodeResponse, GeocodeResult, Geometry, Location};
