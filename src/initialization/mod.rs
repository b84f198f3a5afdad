//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - the logger
//! - the HTTP client behind the TikTok probe
//! - the domain table (defaults plus optional override file)

mod client;
mod logger;

use std::path::Path;

use log::info;

use crate::config::load_domain_overrides;
use crate::error_handling::ConfigError;
use crate::table::DomainTable;

// Re-export public API
pub use client::init_probe_client;
pub use logger::init_logger_with;

/// Builds the domain table for a run.
///
/// Starts from the built-in table and merges the override file when one is
/// given. Pairing problems (a replacement without a rule) are logged at error
/// severity but do not fail startup; affected URLs are dropped at mapping time.
///
/// # Errors
///
/// Returns a `ConfigError` if the override file cannot be read or parsed.
pub fn init_domain_table(overrides: Option<&Path>) -> Result<DomainTable, ConfigError> {
    let mut table = DomainTable::with_defaults();
    if let Some(path) = overrides {
        let overrides = load_domain_overrides(path)?;
        info!(
            "Loaded {} replacement(s) and {} rule(s) from {}",
            overrides.replacements.len(),
            overrides.rules.len(),
            path.display()
        );
        table = table.merged_with(overrides);
    }
    table.validate();
    Ok(table)
}
