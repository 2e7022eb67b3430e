//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for application settings:
//! the HTTP listener and the stream ingestion target.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is initialized once at application startup and
//! shared throughout the process lifetime.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `HTTP_PORT` | Listener port (all interfaces) | `80` |
//! | `KINESIS_STREAM_NAME` | Target stream for emitted events | *empty* |
//! | `AWS_REGION` | Region of the ingestion service | *empty* |
//!
//! # Example
//! ```rust,no_run
//! use deadlink_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! if !cfg.stream.is_valid() {
//!     eprintln!("events will not be deliverable");
//! }
//! ```

use std::env;

use crate::config::{http::HttpConfig, stream::StreamConfig};

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP listener configuration.
    pub http: HttpConfig,
    /// Stream ingestion configuration.
    pub stream: StreamConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    ///
    /// Missing stream settings are not an error; see
    /// [`StreamConfig`](crate::config::stream::StreamConfig).
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        AppConfig {
            http: HttpConfig::from_env(),
            stream: StreamConfig::from_env(),
        }
    }
}
