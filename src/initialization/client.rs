//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by the TikTok probe.
///
/// Creates a `reqwest::Client` configured with:
/// - the given User-Agent header
/// - a hard per-request timeout covering connect, headers, and body
/// - redirects disabled, so a 3xx answer reaches the probe as-is
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_probe_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(Arc::new(client))
}
