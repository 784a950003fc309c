//! Blue/green deployment info service.
//!
//! A minimal HTTP service exposing three informational endpoints used to
//! identify which deployment variant answered a request:
//!
//! - `GET /` - greeting naming the active deployment, plus live process
//!   metadata (timestamp, hostname)
//! - `GET /health` - liveness signal with process uptime
//! - `GET /version` - deployment label and build identifier
//!
//! The deployment label and build identifier come from the `VERSION` and
//! `BUILD_NUMBER` environment variables, read once at startup. This is the
//! typical companion service for blue/green rollouts: point a load balancer
//! at two instances and `/version` tells you which color served you.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes and handlers

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Result, ServiceError};
