/// Geocoding error types
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// Caller-supplied coordinates or address failed validation. No request
    /// was issued.
    #[error("{0}")]
    InvalidInput(String),
    /// The GET request itself failed (DNS, connect, timeout, ...).
    #[error("Error fetching data: {0}")]
    Fetch(String),
    /// The response body was not valid JSON for the expected shape.
    #[error("Error parsing server response: {0}")]
    ServerParse(String),
    /// The service answered, but with a non-OK status field.
    #[error("Server returned status code {status}")]
    ServiceStatus {
        status: String,
        message: Option<String>,
    },
}

impl GeocodeError {
    pub(crate) fn invalid_coordinates() -> Self {
        Self::InvalidInput("Provided coordinates are invalid".to_string())
    }

    pub(crate) fn invalid_address() -> Self {
        Self::InvalidInput("Provided address is invalid".to_string())
    }

    /// The service status string carried by a `ServiceStatus` error, if any.
    pub fn service_status(&self) -> Option<&str> {
        match self {
            Self::ServiceStatus { status, .. } => Some(status),
            _ => None,
        }
    }
}
