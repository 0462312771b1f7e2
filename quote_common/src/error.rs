//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of both binaries: I/O on the
//! output file, HTTP transport, JSON decoding, SQLite persistence, and the
//! protocol checks layered on top (status codes, empty bodies, deadlines).
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Request construction, transport, or timeout failure reported by `reqwest`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Failure reported by the SQLite driver.
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The upstream quote API answered with a non-2xx status.
    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    /// The quote server answered with something other than `200 OK`.
    #[error("Unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// The response carried no body.
    #[error("Empty response body")]
    EmptyBody,

    /// A deadline expired before the named operation finished.
    #[error("Timed out while {0}")]
    Timeout(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(QuoteError::EmptyBody.to_string(), "Empty response body");
        assert_eq!(
            QuoteError::UpstreamStatus(503).to_string(),
            "Upstream returned status 503"
        );
        assert_eq!(
            QuoteError::Timeout("persisting quote").to_string(),
            "Timed out while persisting quote"
        );
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn sqlx_errors_convert_to_database() {
        let err: QuoteError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, QuoteError::Database(_)));
    }
}
