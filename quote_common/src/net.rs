//! Shared networking constants and helpers used by client and server.
use std::time::Duration;

/// HTTP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Route serving the current bid.
pub const QUOTE_PATH: &str = "/cotacao";
/// Upstream endpoint returning the latest USD/BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Budget for the upstream call made by the server.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_millis(300);
/// Budget for persisting one quote.
pub const DB_TIMEOUT: Duration = Duration::from_millis(10);
/// Budget for the client's call to the server.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

/// SQLite file the server writes quotes into.
pub const DB_FILE: &str = "cotacoes.db";
/// Text file the client overwrites with the latest bid.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Full URL of the quote route on a server reachable at `host`.
pub fn quote_url(host: &str, port: u16) -> String {
    format!("http://{}{}", addr(host, port), QUOTE_PATH)
}
