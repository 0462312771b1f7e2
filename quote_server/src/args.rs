//! Command-line arguments for the Quote Server.
//!
//! This module defines the CLI interface using `clap`. Every flag defaults to
//! the value the client and the upstream contract expect.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{DB_FILE, DB_TIMEOUT, SERVER_PORT, UPSTREAM_TIMEOUT, UPSTREAM_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to bind the HTTP listener to.
    #[clap(long, default_value_t = format!("0.0.0.0:{}", SERVER_PORT))]
    pub bind: String,

    /// SQLite file receiving every fetched quote.
    #[clap(long, default_value = DB_FILE)]
    pub database: PathBuf,

    /// Upstream endpoint returning the USD/BRL quote.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// Upstream call budget in milliseconds.
    #[clap(long, default_value_t = UPSTREAM_TIMEOUT.as_millis() as u64)]
    pub upstream_timeout_ms: u64,

    /// Insert budget in milliseconds.
    #[clap(long, default_value_t = DB_TIMEOUT.as_millis() as u64)]
    pub db_timeout_ms: u64,
}

impl Args {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    pub fn db_timeout(&self) -> Duration {
        Duration::from_millis(self.db_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_contract() {
        let args = Args::parse_from(["quote_server"]);
        assert_eq!(args.bind, "0.0.0.0:8080");
        assert_eq!(args.database, PathBuf::from("cotacoes.db"));
        assert_eq!(args.upstream_url, UPSTREAM_URL);
        assert_eq!(args.upstream_timeout(), Duration::from_millis(300));
        assert_eq!(args.db_timeout(), Duration::from_millis(10));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "quote_server",
            "--bind",
            "127.0.0.1:9000",
            "--database",
            "/tmp/q.db",
            "--db-timeout-ms",
            "50",
        ]);
        assert_eq!(args.bind, "127.0.0.1:9000");
        assert_eq!(args.database, PathBuf::from("/tmp/q.db"));
        assert_eq!(args.db_timeout(), Duration::from_millis(50));
    }
}
