/// Per-client configuration for the geocoding service.
///
/// All fields can be overwritten for the lifetime of one client instance
/// through the setters on [`GeocodeClient`](crate::GeocodeClient); none are
/// validated for format.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key sent as the `key` query parameter when present.
    pub api_key: Option<String>,
    /// Preferred response language, sent as `language` when non-empty.
    pub language: String,
    /// Region bias, sent percent-encoded as `region` when present.
    pub region: Option<String>,
    /// Mirror failures and successful payloads to the diagnostic sink.
    pub debug: bool,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: "en".to_string(),
            region: None,
            debug: false,
        }
    }
}

impl GeocodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        let config = GeocodeConfig::new();
        assert_eq!(config.language, "en");
        assert!(config.api_key.is_none());
        assert!(config.region.is_none());
        assert!(!config.debug);
    }

    #[test]
    fn builders_layer_over_defaults() {
        let config = GeocodeConfig::new()
            .with_api_key("K")
            .with_language("fr")
            .with_region("uk")
            .with_debug(true);
        assert_eq!(config.api_key.as_deref(), Some("K"));
        assert_eq!(config.language, "fr");
        assert_eq!(config.region.as_deref(), Some("uk"));
        assert!(config.debug);
    }
}
