//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `embed_fixer` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use embed_fixer::initialization::init_logger_with;
use embed_fixer::{run_fixer, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let inline = config.inline;

    match run_fixer(config).await {
        Ok(report) => {
            // stdout carries only the fixed URLs, ready to be posted as a reply
            if inline {
                if !report.fixed.is_empty() {
                    println!("{}", report.fixed.join(" "));
                }
            } else {
                for url in &report.fixed {
                    println!("{url}");
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("embed_fixer error: {:#}", e);
            process::exit(1);
        }
    }
}
