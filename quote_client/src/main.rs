//! Quote Client — asks the quote server for the current USD/BRL bid, writes it
//! to a text file and prints it to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080/cotacao --output cotacao.txt
//! ```
//!
//! Any failure (timeout, non-200 status, empty body, malformed JSON) is
//! reported on stderr and leaves the output file untouched. The process still
//! exits normally.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod output;

use crate::args::Args;
use crate::fetcher::BidFetcher;
use clap::Parser;
use log::{Level, error, info, log_enabled};
use quote_common::{QuoteError, Result};

/// Fetch the bid, persist it to `args.output`, and return it.
async fn run(args: &Args) -> Result<String> {
    let fetcher = BidFetcher::new(&args.server_url, args.timeout())?;
    let bid = fetcher.fetch_bid().await?;
    output::write_bid(&args.output, &bid)?;
    info!("Bid written to {}", args.output.display());
    Ok(bid)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    match run(&args).await {
        Ok(bid) => println!("{}", output::stdout_line(&bid)),
        Err(e) => report_failure(&e),
    }
    Ok(())
}

/// Report a failed run on stderr, even when `RUST_LOG` filters out errors.
fn report_failure(e: &QuoteError) {
    let message = failure_message(e);
    if log_enabled!(Level::Error) {
        error!("{}", message);
    } else {
        eprintln!("{}", message);
    }
}

fn failure_message(e: &QuoteError) -> String {
    format!("Failed to fetch quote: {}", e)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
