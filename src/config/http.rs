//! # HTTP Listener Configuration
//!
//! Defines the configuration for the HTTP listener. The service binds to
//! all interfaces; only the port is configurable.
//!
//! # Examples
//! ```rust
//! use deadlink_web::config::http::HttpConfig;
//!
//! let cfg = HttpConfig { port: 80 };
//! assert_eq!(cfg.bind_addr(), "0.0.0.0:80");
//! ```

use crate::config::env::read_u16;

/// HTTP listener configuration.
///
/// Reads from environment variables:
/// - `HTTP_PORT` — listener port (default `80`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    pub port: u16,
}

impl HttpConfig {
    /// Builds an [`HttpConfig`] from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: read_u16("HTTP_PORT", 80),
        }
    }

    /// Returns the socket address string to bind, on all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env;

    #[test]
    fn from_env_defaults_to_port_80() {
        temp_env::with_vars(vec![("HTTP_PORT", None::<&str>)], || {
            let cfg = HttpConfig::from_env();
            assert_eq!(cfg.port, 80);
        });
    }

    #[test]
    fn from_env_reads_port_override() {
        temp_env::with_vars(vec![("HTTP_PORT", Some("8080"))], || {
            let cfg = HttpConfig::from_env();
            assert_eq!(cfg.port, 8080);
        });
    }

    #[test]
    fn from_env_falls_back_on_invalid_port() {
        temp_env::with_vars(vec![("HTTP_PORT", Some("eighty"))], || {
            let cfg = HttpConfig::from_env();
            assert_eq!(cfg.port, 80);
        });
    }

    #[test]
    fn bind_addr_targets_all_interfaces() {
        let cfg = HttpConfig { port: 8088 };
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8088");
    }
}
