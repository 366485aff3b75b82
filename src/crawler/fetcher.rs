//! HTTP fetcher implementation
//!
//! This module handles all outbound requests for the crawler:
//! - Building the HTTP client with the identifying user-agent string
//! - GET requests for page content
//! - Error classification into an explicit tagged result

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
///
/// Consumed via explicit branching in the coordinator; no error kind here
/// aborts the crawl.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the resource (2xx status)
    Success {
        /// HTTP status code
        status: u16,
        /// Declared Content-Type header value, empty if absent
        content_type: String,
        /// Raw body bytes
        body: Vec<u8>,
    },

    /// Server responded with a non-success status
    HttpError {
        /// The HTTP status code
        status: u16,
    },

    /// Transport-level failure (connection refused, DNS, timeout, ...)
    NetworkError {
        /// Error description
        error: String,
        /// True if the failure was a timeout
        timed_out: bool,
    },
}

/// Builds the HTTP client used for every fetch in a crawl run
///
/// The client carries the identifying user-agent string, a per-fetch
/// timeout, and transparent gzip/brotli decompression. Redirects follow
/// reqwest's default policy.
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the result
///
/// Any non-2xx status is an `HttpError`; transport failures become
/// `NetworkError` with timeouts flagged separately so the caller can
/// report them as a distinct kind.
pub async fn fetch_url(client: &Client, url: &Url) -> FetchOutcome {
    let response = match client.get(url.as_str()).send().await {
        Ok(r) => r,
        Err(e) => {
            return FetchOutcome::NetworkError {
                timed_out: e.is_timeout(),
                error: if e.is_timeout() {
                    "request timeout".to_string()
                } else if e.is_connect() {
                    "connection failed".to_string()
                } else {
                    e.to_string()
                },
            }
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::HttpError {
            status: status.as_u16(),
        };
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    match response.bytes().await {
        Ok(body) => FetchOutcome::Success {
            status: status.as_u16(),
            content_type,
            body: body.to_vec(),
        },
        Err(e) => FetchOutcome::NetworkError {
            timed_out: e.is_timeout(),
            error: format!("failed to read body: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let ua = UserAgentConfig::default();
        assert!(build_http_client(&ua, 30).is_ok());
    }

    // Fetch behavior is covered by the wiremock integration tests.
}
