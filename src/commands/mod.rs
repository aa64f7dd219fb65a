//! CLI subcommand implementations

pub mod csv;
pub mod json;

use anyhow::Result;
use currency_rates::client::{RatesClient, TimeseriesRequest};
use currency_rates::reshape::format_data;
use currency_rates::types::{parse_currency_list, parse_date, Currency, RateTable};
use currency_rates::ApiConfig;
use tracing::info;

/// Positional fetch arguments shared by both subcommands
#[derive(Debug, clap::Args)]
pub struct FetchArgs {
    /// Base currency code (e.g. USD)
    pub base: String,

    /// Comma-separated destination currency codes (e.g. EUR,GBP)
    pub symbols: String,

    /// Start date (YYYY-MM-DD)
    pub start_date: String,

    /// End date (YYYY-MM-DD)
    pub end_date: String,

    /// API key (falls back to the API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,

    /// API base endpoint (falls back to the API_ENDPOINT environment variable)
    #[arg(long)]
    pub api_endpoint: Option<String>,
}

/// Validate arguments, call the API, and reshape the response
///
/// Returns the rate table together with the requested destination list (the
/// CSV writer needs the original request order).
pub fn fetch(args: &FetchArgs) -> Result<(RateTable, Vec<Currency>)> {
    let base = Currency::parse(&args.base)?;
    let symbols = parse_currency_list(&args.symbols)?;
    let start_date = parse_date(&args.start_date)?;
    let end_date = parse_date(&args.end_date)?;

    let request = TimeseriesRequest::new(base, symbols.clone(), start_date, end_date)?;
    let config = ApiConfig::resolve(args.api_key.clone(), args.api_endpoint.clone())?;

    let client = RatesClient::new(config)?;
    let body = client.fetch_timeseries(&request)?;
    let table = format_data(&body)?;

    info!("Fetched rates for {} dates", table.len());
    Ok((table, symbols))
}
