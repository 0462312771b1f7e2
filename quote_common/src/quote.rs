//! Quote data model and JSON encoding helpers.
//!
//! A `Quote` is one snapshot of a currency pair as published by the upstream
//! API. Every field is kept as text, exactly as the upstream sends it, including
//! the numeric-looking ones: the API may format numbers in ways a float parser
//! would not round-trip.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Market quote for a single currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Base currency code (e.g., `USD`).
    pub code: String,
    /// Quote currency code (e.g., `BRL`).
    pub codein: String,
    /// Human-readable pair name.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Bid variation.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percentage change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Buyer price, the only value relayed to clients.
    pub bid: String,
    /// Seller price.
    pub ask: String,
    /// Unix timestamp in seconds, as text.
    pub timestamp: String,
    /// Upstream creation date, as text.
    pub create_date: String,
}

impl Quote {
    /// Encode the bid as a JSON string (`"5.3910"`).
    pub fn bid_json(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(&self.bid)?;
        Ok(json)
    }

    /// Upstream timestamp as a UTC instant, when it parses as unix seconds.
    pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

/// Upstream payload wrapping the USD/BRL quote under its pair key.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteEnvelope {
    /// The quote itself.
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quote,
}

impl QuoteEnvelope {
    /// Decode the upstream JSON payload.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Unwrap the quote.
    pub fn into_quote(self) -> Quote {
        self.usdbrl
    }
}
