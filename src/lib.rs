//! DevOps info service.
//!
//! A small HTTP service that reports what it is, where it runs and how long it
//! has been up:
//!
//! ```text
//! GET /        service, system, runtime and request metadata
//! GET /health  liveness: {"status": "healthy", "timestamp", "uptime_seconds"}
//! ```
//!
//! Everything is recomputed per request from the process start time and
//! read-only host queries. Nothing is cached or persisted.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`system`]: Uptime and host introspection
//! - [`api`]: HTTP handlers and router
//! - [`server`]: Listener binding and serving
//! - [`metrics`]: Request metrics
//! - [`utils`]: Logging setup and shutdown signals

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod system;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
