//! Domain events.

pub mod not_found;
