//! Internal error types for catalog operations.
//!
//! These errors are internal to `planetary-swapi` and are mapped to the
//! core port error at the boundary (`port.rs`).

use thiserror::Error;

/// Result type alias for catalog operations.
pub type SwapiResult<T> = Result<T, SwapiError>;

/// Errors related to film-catalog API operations.
#[derive(Debug, Error)]
pub enum SwapiError {
    /// API request failed with an HTTP error status.
    #[error("SWAPI request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error (includes timeouts).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message() {
        let error = SwapiError::RequestFailed {
            status: 503,
            url: "https://swapi.dev/api/planets/?search=Hoth".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("swapi.dev"));
    }

    #[test]
    fn test_invalid_url_error_message() {
        let error: SwapiError = url::ParseError::EmptyHost.into();
        assert!(error.to_string().contains("Invalid URL"));
    }
}
