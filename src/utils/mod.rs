//! Utility functions shared across modules.

mod sanitize;

pub use sanitize::{redact_url, sanitize_candidate};
