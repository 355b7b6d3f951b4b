/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "UPTIME_API_BASE_URL";
/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "UPTIME_API_TIMEOUT";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Uptime API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every request path is resolved against
    pub base_url: String,
    /// Timeout in seconds for REST API requests (0 = transport default)
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default(BASE_URL_ENV, String::from(DEFAULT_BASE_URL));
        if std::env::var(BASE_URL_ENV).is_err() {
            error!(
                "{} not found in environment variables or .env file, using {}",
                BASE_URL_ENV, DEFAULT_BASE_URL
            );
        }

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default(TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration pointing at `base_url`, ignoring the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Overrides the request timeout
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.rest_api.timeout = seconds;
        self
    }
}
