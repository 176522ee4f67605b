//! Widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BOOKING_API_BASE_URL` - Booking backend base URL (default: `http://127.0.0.1:8000/`)
//! - `BOOKING_SLOT_PLACEHOLDER` - Label of the empty hour option (default: `Select`)

use thiserror::Error;
use url::Url;

/// Default backend location, matching the backend's development server.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Default label of the placeholder option in the hour select.
pub const DEFAULT_SLOT_PLACEHOLDER: &str = "Select";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Booking widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Backend base URL, always ending in `/`
    pub api_base_url: Url,
    /// Placeholder label shown in the hour select
    pub slot_placeholder: String,
}

impl WidgetConfig {
    /// Configuration for a backend at `api_base_url` with the default hour
    /// placeholder.
    #[must_use]
    pub fn new(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            slot_placeholder: DEFAULT_SLOT_PLACEHOLDER.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = parse_base_url(&get_env_or_default(
            "BOOKING_API_BASE_URL",
            DEFAULT_API_BASE_URL,
        ))
        .map_err(|e| ConfigError::InvalidEnvVar("BOOKING_API_BASE_URL".to_string(), e))?;

        let slot_placeholder = parse_placeholder(get_env_or_default(
            "BOOKING_SLOT_PLACEHOLDER",
            DEFAULT_SLOT_PLACEHOLDER,
        ))
        .map_err(|e| ConfigError::InvalidEnvVar("BOOKING_SLOT_PLACEHOLDER".to_string(), e))?;

        Ok(Self {
            api_base_url,
            slot_placeholder,
        })
    }

    /// Override the backend base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL cannot be used as a base.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = parse_base_url(base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("BOOKING_API_BASE_URL".to_string(), e))?;
        Ok(self)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Accept any placeholder label that is not blank.
fn parse_placeholder(raw: String) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("must not be blank".to_string());
    }
    Ok(raw)
}

/// Parse a base URL and make sure relative joins land beneath it.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw).map_err(|e| e.to_string())?;
    if url.cannot_be_a_base() {
        return Err(format!("{raw} cannot be used as a base URL"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
