//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::error::ServiceError;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable configuration captured at startup.
    pub config: Arc<Config>,
    /// Reference point for uptime reporting.
    started_at: Instant,
}

impl AppState {
    /// Create app state from startup configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Seconds the service has been running.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

/// Root greeting response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Greeting naming the active deployment.
    pub message: String,
    /// Deployment label.
    pub version: String,
    /// Build identifier.
    pub build: String,
    /// ISO-8601 UTC time at request handling.
    pub timestamp: String,
    /// Machine network hostname.
    pub hostname: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Deployment label.
    pub version: String,
    /// Seconds the process has been running.
    pub uptime: f64,
}

/// Version response.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    /// Deployment label.
    pub version: String,
    /// Build identifier.
    pub build: String,
}

/// Root handler - greeting plus live process metadata.
///
/// Hostname resolution is the only fallible step; failure surfaces as a 500.
pub async fn root(State(state): State<AppState>) -> Result<Json<RootResponse>, ServiceError> {
    let hostname = resolve_hostname()?;

    Ok(Json(RootResponse {
        message: format!("Hello from {} environment!", state.config.version),
        version: state.config.version.clone(),
        build: state.config.build_number.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        hostname,
    }))
}

/// Health check handler - liveness only, always returns 200.
///
/// No dependency checks are performed; "healthy" means the process is up.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: state.config.version.clone(),
        uptime: state.uptime_seconds(),
    })
}

/// Version handler - deployment label and build identifier.
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: state.config.version.clone(),
        build: state.config.build_number.clone(),
    })
}

/// Resolve the machine hostname, fresh on each call.
fn resolve_hostname() -> Result<String, ServiceError> {
    gethostname::gethostname()
        .into_string()
        .map_err(|raw| ServiceError::Hostname(format!("not valid UTF-8: {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_is_non_negative_and_non_decreasing() {
        let state = AppState::new(Config::default());

        let first = state.uptime_seconds();
        assert!(first >= 0.0);

        std::thread::sleep(std::time::Duration::from_millis(10));

        let second = state.uptime_seconds();
        assert!(second >= first);
    }

    #[test]
    fn resolve_hostname_returns_non_empty() {
        let hostname = resolve_hostname().expect("hostname should resolve");
        assert!(!hostname.is_empty());
    }

    #[tokio::test]
    async fn root_message_names_the_deployment() {
        let config = Config {
            version: "green".to_string(),
            ..Config::default()
        };
        let state = AppState::new(config);

        let Json(body) = root(State(state)).await.expect("root should succeed");
        assert_eq!(body.message, "Hello from green environment!");
        assert_eq!(body.version, "green");
    }
}
