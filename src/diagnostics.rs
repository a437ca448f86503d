//! Debug diagnostics as an injectable capability.
//!
//! The client mirrors failures and successful payloads to a sink when its
//! debug flag is set. Embedders can supply their own sink; the default
//! forwards to the `tracing` subscriber. Diagnostics never alter control
//! flow.

/// Receives diagnostic output from a [`GeocodeClient`](crate::GeocodeClient).
pub trait DiagnosticSink: Send + Sync {
    /// An informational message, such as a successful response payload.
    fn message(&self, text: &str);

    /// A warning, such as a validation or request failure.
    fn warning(&self, text: &str);
}

/// Default sink that forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn message(&self, text: &str) {
        tracing::debug!(target: "google_geocode", "{text}");
    }

    fn warning(&self, text: &str) {
        tracing::warn!(target: "google_geocode", "{text}");
    }
}
