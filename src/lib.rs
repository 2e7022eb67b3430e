//! # deadlink_web
//!
//! A minimal "dead link beacon" service: every inbound HTTP request is
//! answered with `404 Not Found`, and requests that carry a `Referer`
//! header additionally produce a structured not-found event that is
//! emitted, fire-and-forget, to a streaming ingestion service.
//!
//! This crate provides:
//! - The catch-all 404 handler and router (`web`)
//! - The event emission pipeline and its ingestion port (`stream`)
//! - Configuration loaded from environment variables (`config`)
//!
//! ## Example usage (in the binary)
//!
//! ```rust,no_run
//! use deadlink_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! assert!(cfg.http.port > 0);
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use chrono;
pub use dotenvy;
pub use rand;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod stream;
pub mod time;
pub mod web;
