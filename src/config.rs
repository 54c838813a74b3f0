//! Configuration management for the site controllers.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded silently when present; every variable has a default.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Endpoint that receives contact form submissions.
pub const DEFAULT_CONTACT_API_URL: &str = "https://vernanbackend.ezlab.in/api/contact-us/";

/// Configuration for the site controllers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute URL the contact form posts to
    pub contact_api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// How long a toast stays visible, in milliseconds (default: 3000)
    pub toast_duration_ms: u64,

    /// Vertical scroll offset past which the header counts as scrolled (default: 50)
    pub scroll_threshold: f64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_API_URL`: Submission endpoint (default: the production API)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `TOAST_DURATION_MS`: Toast lifetime in milliseconds (default: 3000)
    /// - `SCROLL_THRESHOLD`: Scrolled-header threshold (default: 50)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy does not print to stdout
        let _ = dotenvy::dotenv();

        let contact_api_url =
            env::var("CONTACT_API_URL").unwrap_or_else(|_| DEFAULT_CONTACT_API_URL.to_string());

        if !contact_api_url.starts_with("http://") && !contact_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let toast_duration_ms = Self::parse_env_u64("TOAST_DURATION_MS", 3000)?;

        if toast_duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "TOAST_DURATION_MS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let scroll_threshold = Self::parse_env_f64("SCROLL_THRESHOLD", 50.0)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contact_api_url,
            request_timeout,
            toast_duration_ms,
            scroll_threshold,
            log_level,
        })
    }

    /// Toast lifetime as a `Duration`.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a finite, non-negative f64 with a default value.
    fn parse_env_f64(var_name: &str, default: f64) -> ConfigResult<f64> {
        match env::var(var_name) {
            Ok(val) => match val.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => Ok(parsed),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a non-negative number, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contact_api_url: DEFAULT_CONTACT_API_URL.to_string(),
            request_timeout: 10,
            toast_duration_ms: 3000,
            scroll_threshold: 50.0,
            log_level: "error".to_string(),
        }
    }
}
