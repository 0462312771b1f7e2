//! HTTP surface of the quote server.
//!
//! `GET /cotacao` fetches a fresh quote, stores it, and answers with the bid as
//! a JSON string. An upstream failure ends the request with an empty body;
//! a storage failure is only logged.
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use log::{error, info};
use quote_common::net::QUOTE_PATH;

use crate::store::QuoteStore;
use crate::upstream::UpstreamClient;

/// Dependencies shared by every request.
pub struct AppState {
    /// Upstream quote source.
    pub upstream: UpstreamClient,
    /// Quote persistence.
    pub store: QuoteStore,
    /// Budget for a single insert.
    pub db_timeout: Duration,
}

/// Build the router serving `GET /cotacao`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(get_quote))
        .with_state(state)
}

async fn get_quote(State(state): State<Arc<AppState>>) -> Response {
    let quote = match state.upstream.fetch_quote().await {
        Ok(quote) => quote,
        Err(e) => {
            error!("Failed to fetch quote: {}", e);
            return ().into_response();
        }
    };

    match state.store.insert(&quote, state.db_timeout).await {
        Ok(id) => info!(
            "Stored quote {} (bid={}, quoted_at={:?})",
            id,
            quote.bid,
            quote.quoted_at()
        ),
        Err(e) => error!("Failed to store quote: {}", e),
    }

    match quote.bid_json() {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!("Failed to encode bid to JSON: {}", e);
            ().into_response()
        }
    }
}
