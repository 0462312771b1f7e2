//! Quote HTTP server.
//!
//! Serves `GET /cotacao`. Each request fetches the latest USD/BRL quote from the
//! upstream API, appends it to the local SQLite store, and answers with the bid
//! as a JSON string. The building blocks:
//!
//! - `UpstreamClient` — bounded GET against the upstream API with status checking.
//! - `QuoteStore` — SQLite pool opened once at startup and shared with every request.
//! - `handler::router` — the axum router wiring both into the single route.
//!
//! Startup is fail-fast: if the store cannot be opened or its table cannot be
//! created the process exits with the error. Once running, request failures are
//! logged and never stop the server.
#![warn(missing_docs)]
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use quote_common::Result;
use tokio::net::TcpListener;

use crate::args::Args;
use crate::handler::AppState;
use crate::store::QuoteStore;
use crate::upstream::UpstreamClient;

mod args;
mod handler;
mod store;
mod upstream;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let store = QuoteStore::open(&args.database).await?;
    info!("{} quotes already stored", store.count().await?);

    let upstream = UpstreamClient::new(&args.upstream_url, args.upstream_timeout())?;
    let state = Arc::new(AppState {
        upstream,
        store: store.clone(),
        db_timeout: args.db_timeout(),
    });

    let listener = TcpListener::bind(&args.bind).await?;
    info!("Quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, handler::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
