//! Currency exchange-rate fetcher
//!
//! Fetches historical exchange-rate timeseries from a REST provider, reshapes
//! the date-keyed response into a flat per-date rate table, and writes the
//! result to JSON and CSV files.

pub mod client;
pub mod config;
pub mod reshape;
pub mod types;
pub mod writer;

pub use config::ApiConfig;
pub use types::*;
