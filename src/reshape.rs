//! Response reshaping
//!
//! Converts the provider's date-keyed `response` mapping into a `RateTable`.
//! Rates are copied through verbatim; no rounding or unit conversion.

use std::collections::BTreeMap;

use tracing::debug;

use crate::types::{parse_date, FetchError, RateTable};

/// Reshape a raw timeseries payload into a per-date rate table
///
/// Expects `{meta: {code, disclaimer}, response: {<date>: {<currency>:
/// <rate>, ...}, ...}}`. `meta` is optional; a missing or non-object
/// `response` is a `MalformedResponse` error. Currency keys are passed
/// through exactly as the API returned them.
pub fn format_data(body: &serde_json::Value) -> Result<RateTable, FetchError> {
    if let Some(disclaimer) = body
        .get("meta")
        .and_then(|m| m.get("disclaimer"))
        .and_then(|d| d.as_str())
    {
        debug!("API disclaimer: {}", disclaimer);
    }

    let response = body
        .get("response")
        .ok_or_else(|| FetchError::MalformedResponse("missing 'response' key".to_string()))?
        .as_object()
        .ok_or_else(|| FetchError::MalformedResponse("'response' is not a mapping".to_string()))?;

    let mut table = RateTable::new();

    for (date_key, rates_value) in response {
        let date = parse_date(date_key).map_err(|_| {
            FetchError::MalformedResponse(format!("invalid date key: {}", date_key))
        })?;

        let rates_obj = rates_value.as_object().ok_or_else(|| {
            FetchError::MalformedResponse(format!("rates for {} are not a mapping", date_key))
        })?;

        let mut rates = BTreeMap::new();
        for (currency, rate) in rates_obj {
            let rate = rate.as_f64().ok_or_else(|| {
                FetchError::MalformedResponse(format!(
                    "rate for {}/{} is not a number",
                    date_key, currency
                ))
            })?;
            rates.insert(currency.clone(), rate);
        }

        table.insert(date, rates);
    }

    Ok(table)
}
