// ============================================================
// Layer 6 — HTTP Page Fetcher
// ============================================================
// Blocking reqwest client implementing the PageFetcher trait.
//
//   - one request per call, no retries
//   - whole-request timeout (connect + body)
//   - at most 5 redirects
//   - non-2xx statuses are errors, the body is not read
//
// Many article sites reject requests without a browser-like
// User-Agent, so one is always sent.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

use crate::domain::{error::FetchError, traits::PageFetcher};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) article-sentiment/0.1";

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url:    url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| transport_error(url, e))
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout { url: url.to_string() }
    } else {
        FetchError::Http {
            url:     url.to_string(),
            message: e.to_string(),
        }
    }
}
