//! Public configuration for the SWAPI client.
//!
//! This module provides a stable public API for configuring the catalog
//! client. The internal config is derived from this.

use std::time::Duration;

/// Configuration for the SWAPI film-catalog client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use planetary_swapi::SwapiClientConfig;
/// use std::time::Duration;
///
/// let config = SwapiClientConfig::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct SwapiClientConfig {
    /// Base URL for the planets endpoint
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout; every lookup is bounded by this
    pub(crate) timeout: Duration,
}

impl Default for SwapiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://swapi.dev/api/planets/".to_string(),
            user_agent: concat!("planetary-swapi/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl SwapiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the planets endpoint.
    ///
    /// Defaults to `https://swapi.dev/api/planets/`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
