//! SQLite persistence for fetched quotes.
//!
//! The store owns a `sqlx` pool opened once at startup and handed to the HTTP
//! handler through router state. Rows are only ever appended.
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use quote_common::{Quote, QuoteError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cotacoes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    code TEXT,
    codein TEXT,
    name TEXT,
    high TEXT,
    low TEXT,
    varBid TEXT,
    pctChange TEXT,
    bid TEXT,
    ask TEXT,
    timestamp TEXT,
    create_date TEXT
)"#;

const INSERT_QUOTE: &str = r#"
INSERT INTO cotacoes
    (code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, create_date)
VALUES
    (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#;

/// Append-only quote table backed by a SQLite file.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    pool: SqlitePool,
}

impl QuoteStore {
    /// Open (creating if missing) the database at `path` and ensure the
    /// `cotacoes` table exists. Safe to call against an existing file.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        info!("Quote store ready at {}", path.display());

        Ok(Self { pool })
    }

    /// Insert one quote, giving up once `budget` has elapsed.
    ///
    /// Returns the surrogate id of the new row.
    pub async fn insert(&self, quote: &Quote, budget: Duration) -> Result<i64> {
        let query = sqlx::query(INSERT_QUOTE)
            .bind(quote.code.as_str())
            .bind(quote.codein.as_str())
            .bind(quote.name.as_str())
            .bind(quote.high.as_str())
            .bind(quote.low.as_str())
            .bind(quote.var_bid.as_str())
            .bind(quote.pct_change.as_str())
            .bind(quote.bid.as_str())
            .bind(quote.ask.as_str())
            .bind(quote.timestamp.as_str())
            .bind(quote.create_date.as_str());

        // The statement runs inside a transaction that only commits when it
        // finished within the budget; on expiry the dropped transaction rolls back.
        let insert = async {
            let mut tx = self.pool.begin().await?;
            let result = query.execute(&mut *tx).await?;
            Ok::<_, sqlx::Error>((tx, result))
        };
        let (tx, result) = tokio::time::timeout(budget, insert)
            .await
            .map_err(|_| QuoteError::Timeout("persisting quote"))??;
        tx.commit().await?;

        let id = result.last_insert_rowid();
        debug!("Quote stored with id {}", id);
        Ok(id)
    }

    /// Number of quotes stored so far.
    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cotacoes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Close every pooled connection. Later calls fail with `QuoteError::Database`.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
