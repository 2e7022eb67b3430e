//! # Environment Variable Utilities
//!
//! Provides helpers for reading environment variables with common type
//! conversions and fallback defaults.
//!
//! These functions are typically used in configuration loading (e.g. `AppConfig`).
//!
//! # Examples
//! ```rust,no_run
//! use deadlink_web::config::env::read_u16;
//!
//! let port = read_u16("HTTP_PORT", 80);
//! ```

/// Reads an unsigned 16-bit integer from an environment variable,
/// returning the provided default if the variable is missing or does
/// not parse.
///
/// # Example
/// ```rust,no_run
/// use deadlink_web::config::env::read_u16;
///
/// let port = read_u16("HTTP_PORT", 80);
/// ```
pub fn read_u16(name: &str, default: u16) -> u16 {
    read_u16_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u16` using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use deadlink_web::config::env::read_u16_from;
///
/// let port = read_u16_from(|_| Some("8080".into()), "HTTP_PORT", 80);
/// assert_eq!(port, 8080);
/// ```
pub fn read_u16_from<F>(provider: F, name: &str, default: u16) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16_valid_number() {
        let got = read_u16_from(|_| Some("8080".into()), "PORT", 80);
        assert_eq!(got, 8080);
    }

    #[test]
    fn test_read_u16_trims_whitespace() {
        let got = read_u16_from(|_| Some("  443 ".into()), "PORT", 80);
        assert_eq!(got, 443);
    }

    #[test]
    fn test_read_u16_invalid_or_missing() {
        let got = read_u16_from(|_| Some("not_a_number".into()), "PORT", 99);
        assert_eq!(got, 99);

        let got = read_u16_from(|_| None, "PORT", 77);
        assert_eq!(got, 77);
    }

    #[test]
    fn test_read_u16_out_of_range_falls_back() {
        let got = read_u16_from(|_| Some("70000".into()), "PORT", 80);
        assert_eq!(got, 80);

        let got = read_u16_from(|_| Some("-1".into()), "PORT", 80);
        assert_eq!(got, 80);
    }
}
