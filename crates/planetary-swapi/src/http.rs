//! HTTP backend abstraction for the film-catalog API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with a bounded per-request timeout.
//!
//! Unlike a generic API client, this backend makes exactly one attempt
//! per call: enrichment is supplementary, the caller degrades on failure,
//! and a retry loop would only delay record creation.

use crate::error::{SwapiError, SwapiResult};
use crate::models::SwapiConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `FilmCatalog` port.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SwapiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &SwapiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SwapiResult<T> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SwapiError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// A fake HTTP backend that returns canned JSON responses.
    ///
    /// URLs without a matching pattern produce a 404-style error, which
    /// conveniently doubles as the failure path in tests.
    pub struct FakeBackend {
        responses: Arc<Mutex<HashMap<String, serde_json::Value>>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self {
                responses: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        /// Add a canned response for a URL pattern.
        pub fn with_response(self, url_contains: &str, json: serde_json::Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), json);
            self
        }

        fn find_response(&self, url: &str) -> Option<serde_json::Value> {
            let responses = self.responses.lock().unwrap();
            for (pattern, response) in responses.iter() {
                if url.contains(pattern) {
                    return Some(response.clone());
                }
            }
            None
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SwapiResult<T> {
            let response =
                self.find_response(url.as_str())
                    .ok_or_else(|| SwapiError::RequestFailed {
                        status: 404,
                        url: url.to_string(),
                    })?;

            serde_json::from_value(response).map_err(Into::into)
        }
    }
}
