//! Configuration loaded from environment variables.

pub mod app;
pub mod env;
pub mod http;
pub mod stream;
