//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_NOTIFICATION_CAPACITY, DEFAULT_NOTIFICATION_LIFE_MS,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub notification_life_ms: u64,
    pub notification_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first when one is present. Unset or unparsable
    /// values fall back to the defaults in [`crate::config`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("EMPLOYEE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            notification_life_ms: env::var("NOTIFICATION_LIFE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NOTIFICATION_LIFE_MS),
            notification_capacity: env::var("NOTIFICATION_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|capacity: &usize| *capacity > 0)
                .unwrap_or(DEFAULT_NOTIFICATION_CAPACITY),
        }
    }

    /// Override the API base URL (e.g. from a CLI flag).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Display lifetime of a single notification.
    pub fn notification_life(&self) -> Duration {
        Duration::from_millis(self.notification_life_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notification_life_ms: DEFAULT_NOTIFICATION_LIFE_MS,
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
        }
    }
}
