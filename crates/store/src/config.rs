//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CAPRA_STRICT_TRANSITIONS` - When `true`, status updates are validated
//!   against the workflow transition table instead of accepting any move
//!   (default: `false`, preserving the platform's historical behavior)

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is present but unparseable.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CAPRA store configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapraConfig {
    /// Enforce the status transition table on `update_status`.
    ///
    /// Off by default: the admin panel historically allows any status to
    /// move to any other, including out of terminal states.
    pub strict_transitions: bool,
}

impl CapraConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let strict_transitions =
            parse_bool_var("CAPRA_STRICT_TRANSITIONS", get_env_or_default("CAPRA_STRICT_TRANSITIONS", "false"))?;

        Ok(Self { strict_transitions })
    }

    /// A configuration with the transition table enforced.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_transitions: true,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a boolean environment value, reporting the variable on failure.
fn parse_bool_var(key: &str, value: String) -> Result<bool, ConfigError> {
    value
        .parse::<bool>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}
