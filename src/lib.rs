//! embed_fixer library: rewrites social-media post links to embed-friendly mirrors
//!
//! This library finds `http(s)` links in free text, maps the ones that point to
//! a single post on a supported site (X/Twitter, Instagram, Reddit, TikTok) to
//! a mirror domain that renders a proper chat embed, and drops everything else.
//!
//! # Example
//!
//! ```no_run
//! use embed_fixer::{fix_message, DomainTable, MapOptions, ProbePolicy, StaticProbe};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let table = DomainTable::with_defaults();
//! let options = MapOptions {
//!     probe_policy: ProbePolicy::Accept,
//!     ..Default::default()
//! };
//! let fixed = fix_message(
//!     &table,
//!     &StaticProbe(true),
//!     options,
//!     "look https://x.com/user/status/123",
//! )
//! .await;
//! assert_eq!(fixed, vec!["https://fxtwitter.com/user/status/123"]);
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod domain;
mod error_handling;
mod extract;
pub mod initialization;
mod mapper;
mod probe;
mod rules;
mod run;
mod table;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ProbePolicy};
pub use domain::registrable_domain;
pub use error_handling::{ConfigError, DomainError, DropReason, InitializationError, MappingStats};
pub use extract::extract_candidate_urls;
pub use mapper::{map_urls, MapOptions, MappedBatch, MappingContext, Outcome};
pub use probe::{ContentProbe, HttpProbe, StaticProbe};
pub use rules::{ContentRule, Verdict};
pub use run::{fix_message, read_input, run_fixer, FixReport};
pub use table::DomainTable;
