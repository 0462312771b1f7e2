//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the upstream quote record and its JSON envelope.
//! - `net` — endpoints, file names and time budgets.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::{Quote, QuoteEnvelope};
pub use result::Result;
