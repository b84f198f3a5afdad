//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BATCH_TIMEOUT, DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT, PROBE_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How TikTok links are classified.
///
/// TikTok URL shapes vary too much to classify by path, so the choice is
/// between trusting every link and asking the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ProbePolicy {
    /// Accept every TikTok link without any network traffic.
    Accept,
    /// Request the original link and accept only on a successful answer.
    #[default]
    Live,
}

/// Command-line options and configuration.
///
/// This struct is generated by `clap` from the field attributes and is also the
/// library configuration for [`crate::run_fixer`].
///
/// # Examples
///
/// ```bash
/// # Fix links in a saved message
/// embed_fixer message.txt
///
/// # Read from stdin, never touch the network
/// echo "https://x.com/user/123" | embed_fixer - --tiktok-policy accept
///
/// # Extra mirror domains
/// embed_fixer message.txt --domains ./domains.json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "embed_fixer",
    about = "Rewrites social-media post links in text to embed-friendly mirror domains."
)]
pub struct Config {
    /// File to read text from ("-" for stdin)
    #[arg(value_parser, default_value = "-")]
    pub file: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// TikTok classification: accept|live
    #[arg(long, value_enum, default_value_t = ProbePolicy::Live)]
    pub tiktok_policy: ProbePolicy,

    /// Per-probe timeout in seconds
    #[arg(long, default_value_t = PROBE_TIMEOUT_SECS)]
    pub probe_timeout_seconds: u64,

    /// HTTP User-Agent header value sent with probes
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum candidates classified concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Deadline for the whole batch in seconds; unfinished URLs are omitted.
    /// Defaults to 30 seconds; 0 disables the deadline
    #[arg(long)]
    pub batch_timeout_seconds: Option<u64>,

    /// JSON file with extra replacement domains and rules
    #[arg(long)]
    pub domains: Option<PathBuf>,

    /// Print fixed URLs on one line separated by spaces
    #[arg(long)]
    pub inline: bool,

    /// Log drop statistics at the end of the run
    #[arg(long)]
    pub show_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            tiktok_policy: ProbePolicy::Live,
            probe_timeout_seconds: PROBE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            batch_timeout_seconds: None,
            domains: None,
            inline: false,
            show_stats: false,
        }
    }
}

impl Config {
    /// Deadline applied to the whole mapping batch, if any.
    pub fn batch_deadline(&self) -> Option<Duration> {
        match self.batch_timeout_seconds {
            None => Some(DEFAULT_BATCH_TIMEOUT),
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }

    /// Per-request timeout of the TikTok probe.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }
}
