//! HTTP client for the contact API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client posts one submission per call and
//! maps every outcome other than `201 Created` to a [`ContactApiError`].

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, AsyncContactClientImpl};

use crate::config::Config;
use crate::error::{ContactApiError, ContactApiResult};
use crate::metrics::Metrics;
use crate::models::ContactSubmission;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Status the API answers with when it stored the submission.
pub const STATUS_CREATED: u16 = 201;

/// Error body the API may send back. Everything in it is optional.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the contact API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactClient {
    /// Absolute submission URL
    endpoint: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactClient {
    /// Create a new ContactClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(
            config.contact_api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a ContactClient for an explicit endpoint (useful for testing).
    pub fn with_endpoint(endpoint: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            endpoint,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a submission.
    ///
    /// Succeeds only when the API answers `201 Created`; the response body is
    /// not inspected in that case.
    pub fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<()> {
        let body = serde_json::to_value(submission)?;
        let start = Instant::now();

        tracing::debug!("POST {}", self.endpoint);

        let result = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_json(&body);

        self.metrics.record_http_request(start.elapsed());

        match result {
            Ok(response) if response.status() == STATUS_CREATED => {
                tracing::debug!("POST {} - Created", self.endpoint);
                Ok(())
            }
            Ok(response) => {
                tracing::warn!(
                    "POST {} - Unexpected status: {}",
                    self.endpoint,
                    response.status()
                );
                Err(ContactApiError::UnexpectedStatus(response.status()))
            }
            Err(e) => {
                let error = Self::map_error(e);
                tracing::error!("POST {} - Error: {:?}", self.endpoint, error);
                Err(error)
            }
        }
    }

    /// Map a ureq error to a ContactApiError.
    fn map_error(error: ureq::Error) -> ContactApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .ok()
                    .and_then(|body| Self::parse_error_message(&body));
                ContactApiError::ApiError { status, message }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ContactApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ContactApiError::Timeout
                } else {
                    ContactApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Pull the optional `message` out of an error body.
    ///
    /// Bodies that are not JSON objects, or whose `message` is not a string,
    /// yield `None`.
    fn parse_error_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
    }
}

impl std::fmt::Debug for ContactClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            ContactClient::parse_error_message(r#"{"message": "Duplicate email"}"#),
            Some("Duplicate email".to_string())
        );
        assert_eq!(
            ContactClient::parse_error_message(r#"{"detail": "nope"}"#),
            None
        );
        assert_eq!(ContactClient::parse_error_message(r#"{"message": 42}"#), None);
        assert_eq!(ContactClient::parse_error_message("Internal Server Error"), None);
        assert_eq!(ContactClient::parse_error_message(""), None);
    }

    #[test]
    fn test_client_from_config() {
        let config = Config::default();
        let client = ContactClient::new(&config);
        assert_eq!(client.endpoint(), config.contact_api_url);
        assert!(format!("{:?}", client).contains("ContactClient"));
    }
}
