//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Values are read once at process start and remain constant for the process
/// lifetime; handlers receive them through [`crate::api::AppState`] rather
/// than reading the environment per request.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Network port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment label returned in responses (e.g. "blue", "green").
    #[serde(default = "default_version")]
    pub version: String,

    /// Opaque build identifier returned in responses.
    #[serde(default = "default_build_number")]
    pub build_number: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    3000
}

fn default_version() -> String {
    "blue".to_string()
}

fn default_build_number() -> String {
    "1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.version.is_empty() {
            return Err("VERSION must not be empty".to_string());
        }

        if self.build_number.is_empty() {
            return Err("BUILD_NUMBER must not be empty".to_string());
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            version: default_version(),
            build_number: default_build_number(),
            rust_log: default_log_level(),
        }
    }
}
