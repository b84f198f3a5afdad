//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON lines for structured logging. Each record is tagged
/// with the stage that emitted it (`extract`, `mapper`, `probe`, ...), and
/// mapper drops name their `DropReason`. Logs go to stderr so that stdout
/// carries only the fixed URLs.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug embed_fixer message.txt
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=embed_fixer::mapper=debug,reqwest=info embed_fixer message.txt
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("embed_fixer", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "ts": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                    "level": record.level().as_str(),
                    "component": component(record.target()),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.as_str().red(),
                    log::Level::Warn => level.as_str().yellow(),
                    log::Level::Info => level.as_str().green(),
                    log::Level::Debug => level.as_str().blue(),
                    log::Level::Trace => level.as_str().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    component(record.target()).cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init so tests that initialize more than once get an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Short name of the pipeline stage that emitted a record.
///
/// `embed_fixer::mapper` becomes `mapper`; records from other crates keep
/// their crate name.
fn component(target: &str) -> &str {
    match target.strip_prefix("embed_fixer::") {
        Some(rest) => rest.split("::").next().unwrap_or(rest),
        None => target.split("::").next().unwrap_or(target),
    }
}
