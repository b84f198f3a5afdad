//! Live content-existence probe.
//!
//! Used for TikTok links when the probe policy is `live`: the original link is
//! requested and only a successful answer lets the rewritten link through.
//! Transport errors and timeouts are never propagated; they reject the link.

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;
use url::Url;

use crate::utils::redact_url;

/// Answers whether a URL refers to content that exists.
///
/// Implementations must not fail: any error is a `false`.
pub trait ContentProbe: Send + Sync {
    /// Checks the given URL.
    fn probe(&self, url: &Url) -> impl Future<Output = bool> + Send;
}

/// Probe that answers without any network traffic.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe(pub bool);

impl ContentProbe for StaticProbe {
    async fn probe(&self, _url: &Url) -> bool {
        self.0
    }
}

/// Body shape of a probe response; only the success flag matters.
#[derive(Debug, Deserialize)]
struct ProbeResponse {
    #[serde(default)]
    success: bool,
}

/// Probe backed by a `reqwest::Client`.
///
/// The client should carry the request timeout and User-Agent and must not
/// follow redirects (see [`crate::initialization::init_probe_client`]), since a
/// 3xx answer is itself a sign that the content exists.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Arc<reqwest::Client>,
}

impl HttpProbe {
    /// Wraps a client built by [`crate::initialization::init_probe_client`].
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl ContentProbe for HttpProbe {
    async fn probe(&self, url: &Url) -> bool {
        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(
                    "[tiktok] probe request failed for {}: {}",
                    redact_url(url),
                    e
                );
                return false;
            }
        };

        let status = response.status();
        // only OK (2xx) and REDIRECT (3xx) status codes are allowed
        if !(status.is_success() || status.is_redirection()) {
            debug!(
                "[tiktok] probe returned status {} for {}",
                status.as_u16(),
                redact_url(url)
            );
            return false;
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                debug!(
                    "[tiktok] failed to read probe body for {}: {}",
                    redact_url(url),
                    e
                );
                return false;
            }
        };

        body_reports_success(&body)
    }
}

/// Interprets a probe body that arrived with a 2xx/3xx status.
///
/// A JSON object must carry `"success": true`. Anything that is not JSON
/// (an empty redirect body, an HTML page) is accepted on the status alone.
pub(crate) fn body_reports_success(body: &[u8]) -> bool {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => return true,
    };
    match serde_json::from_value::<ProbeResponse>(value) {
        Ok(parsed) => parsed.success,
        Err(_) => false,
    }
}
