//! Fetching the bid from the quote server.
//!
//! One GET, bounded by the client budget. The response must be `200 OK` with a
//! non-empty body holding a JSON string; anything else is an error.
use std::time::Duration;

use log::debug;
use quote_common::{QuoteError, Result};
use reqwest::StatusCode;

/// Helper type for requesting the current bid from the server.
pub struct BidFetcher {
    client: reqwest::Client,
    url: String,
}

impl BidFetcher {
    /// Build a fetcher for `url` that gives up after `timeout`.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// GET the server route and decode the bid it returns as a JSON string.
    pub async fn fetch_bid(&self) -> Result<String> {
        debug!("Requesting bid from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(QuoteError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(QuoteError::EmptyBody);
        }

        let bid: String = serde_json::from_slice(&body)?;
        Ok(bid)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) async fn create_server_mock(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(response)
            .mount(&mock_server)
            .await;
        mock_server
    }

    pub(crate) fn quote_url(mock_server: &MockServer) -> String {
        format!("{}/cotacao", mock_server.uri())
    }

    async fn fetch(response: ResponseTemplate) -> Result<String> {
        let mock_server = create_server_mock(response).await;
        let fetcher = BidFetcher::new(&quote_url(&mock_server), Duration::from_millis(300))?;
        fetcher.fetch_bid().await
    }

    #[tokio::test]
    async fn test_successful_fetch() {
        let bid = fetch(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("\"5.3910\"\n"),
        )
        .await
        .unwrap();
        assert_eq!(bid, "5.3910");
    }

    #[tokio::test]
    async fn test_empty_body() {
        let err = fetch(ResponseTemplate::new(200)).await.unwrap_err();
        assert!(matches!(err, QuoteError::EmptyBody));
    }

    #[tokio::test]
    async fn test_non_ok_status() {
        let err = fetch(ResponseTemplate::new(502).set_body_string("\"5.3910\""))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::UnexpectedStatus(502)));
    }

    #[tokio::test]
    async fn test_body_is_not_a_json_string() {
        let err = fetch(ResponseTemplate::new(200).set_body_string("5.3910"))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::SerdeJson(_)));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let err = fetch(
            ResponseTemplate::new(200)
                .set_body_string("\"5.3910\"")
                .set_delay(Duration::from_millis(600)),
        )
        .await
        .unwrap_err();
        match err {
            QuoteError::Http(e) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let fetcher =
            BidFetcher::new("http://127.0.0.1:9/cotacao", Duration::from_millis(300)).unwrap();
        let err = fetcher.fetch_bid().await.unwrap_err();
        assert!(matches!(err, QuoteError::Http(_)));
    }
}
