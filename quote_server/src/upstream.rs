//! Client for the upstream quote API.
//!
//! Wraps a `reqwest::Client` whose total timeout is the upstream budget, so a
//! slow upstream surfaces as a transport error instead of stalling the request.
use std::time::Duration;

use log::debug;
use quote_common::{Quote, QuoteEnvelope, QuoteError, Result};

/// Fetches the latest quote from a fixed upstream URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Build a client for `url` that gives up after `timeout`.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// GET the upstream endpoint and decode its quote.
    ///
    /// A non-2xx answer is mapped to `QuoteError::UpstreamStatus` before any
    /// decoding is attempted.
    pub async fn fetch_quote(&self) -> Result<Quote> {
        debug!("Requesting quote from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let quote = QuoteEnvelope::from_json_bytes(&body)?.into_quote();
        debug!("Upstream quote decoded: {:?}", quote);
        Ok(quote)
    }
}
