//! Core data types used across the fetch pipeline

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced anywhere in the fetch pipeline
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A validated 3-letter currency code (e.g. "USD", "EUR")
///
/// Only request-side inputs are validated. Currency keys coming back from the
/// API are passed through as plain strings without re-validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn parse(s: &str) -> Result<Self, FetchError> {
        if s.len() == 3 && s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Currency(s.to_string()))
        } else {
            Err(FetchError::InvalidArgument(format!(
                "invalid currency code: {}",
                s
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a comma-separated destination currency list ("EUR,GBP")
pub fn parse_currency_list(s: &str) -> Result<Vec<Currency>, FetchError> {
    if s.is_empty() {
        return Err(FetchError::InvalidArgument(
            "destination currency list is empty".to_string(),
        ));
    }
    s.split(',').map(Currency::parse).collect()
}

/// Parse a date argument in YYYY-MM-DD format
pub fn parse_date(s: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        FetchError::InvalidArgument(format!("invalid date: {} (expected YYYY-MM-DD)", s))
    })
}

/// Rates for a single date, keyed by currency code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub date: NaiveDate,
    pub rates: BTreeMap<String, f64>,
}

/// Per-date exchange rates relative to one base currency
///
/// Keyed by date so iteration is always in ascending date order, with one
/// entry per distinct date in the source response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    by_date: BTreeMap<NaiveDate, BTreeMap<String, f64>>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the rates for one date, replacing any previous entry
    pub fn insert(&mut self, date: NaiveDate, rates: BTreeMap<String, f64>) {
        self.by_date.insert(date, rates);
    }

    /// Number of dates in the table
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Rates for a single date, if present
    pub fn get(&self, date: &NaiveDate) -> Option<&BTreeMap<String, f64>> {
        self.by_date.get(date)
    }

    /// Iterate dates and their rates in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &BTreeMap<String, f64>)> {
        self.by_date.iter()
    }

    /// Materialize the table as a sequence of records, ascending by date
    pub fn records(&self) -> Vec<RateRecord> {
        self.by_date
            .iter()
            .map(|(date, rates)| RateRecord {
                date: *date,
                rates: rates.clone(),
            })
            .collect()
    }
}
