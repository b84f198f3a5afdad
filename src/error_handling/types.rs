//! Error type definitions.
//!
//! This module defines the startup error types and the reasons a candidate URL
//! can be dropped by the mapper.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client used for probes.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for loading the domain override file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The override file could not be read.
    #[error("Failed to read domain file {path}: {source}")]
    Read {
        /// Path of the override file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The override file is not a valid override document.
    #[error("Failed to parse domain file {path}: {source}")]
    Parse {
        /// Path of the override file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Error types for registrable-domain resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The URL has no host component.
    #[error("URL has no host component")]
    MissingHost,

    /// IP literals have no registrable domain.
    #[error("IP addresses do not have registrable domains: {0}")]
    IpAddress(String),

    /// The host has no recognizable public suffix plus one label.
    #[error("No registrable domain found for host: {0}")]
    NoRegistrableDomain(String),
}

/// Reasons a candidate URL is left out of the mapper's output.
///
/// None of these abort a batch; each is counted and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DropReason {
    /// The candidate (or its rewritten form) is not a parseable URL.
    ParseError,
    /// No registrable domain could be derived from the host.
    DomainError,
    /// The registrable domain has no replacement configured.
    UnknownDomain,
    /// A replacement exists but no content rule is registered for it.
    MissingRule,
    /// The content rule decided the URL is not a single post.
    Rejected,
    /// The live probe failed, timed out, or answered unsuccessfully.
    ProbeFailed,
    /// Rewriting did not change the URL.
    Unchanged,
    /// The batch was cancelled before this URL was classified.
    Cancelled,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DropReason {
    /// Human-readable label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::ParseError => "URL parse error",
            DropReason::DomainError => "Domain resolution error",
            DropReason::UnknownDomain => "Unknown domain",
            DropReason::MissingRule => "Missing content rule",
            DropReason::Rejected => "Rejected by content rule",
            DropReason::ProbeFailed => "Probe failed",
            DropReason::Unchanged => "Rewrite was a no-op",
            DropReason::Cancelled => "Cancelled",
        }
    }

    /// Whether this drop points at a broken table/registry pairing rather than
    /// at bad input.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, DropReason::MissingRule)
    }
}
