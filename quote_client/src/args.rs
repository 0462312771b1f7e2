//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{CLIENT_TIMEOUT, OUTPUT_FILE, SERVER_PORT, quote_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL of the quote server's `/cotacao` route.
    #[clap(long, default_value_t = quote_url("localhost", SERVER_PORT))]
    pub server_url: String,

    /// File overwritten with the fetched bid.
    #[clap(long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,

    /// Request budget in milliseconds.
    #[clap(long, default_value_t = CLIENT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
