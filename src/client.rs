//! Exchange-rate API client
//!
//! Builds the `timeseries` endpoint URL and performs the blocking GET against
//! the provider. Non-2xx statuses are mapped to the provider's documented
//! error meanings; nothing is retried.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Url;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::{Currency, FetchError};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Parameters for one `timeseries` request
#[derive(Debug, Clone)]
pub struct TimeseriesRequest {
    pub base: Currency,
    pub symbols: Vec<Currency>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TimeseriesRequest {
    /// Build a request, enforcing start <= end
    pub fn new(
        base: Currency,
        symbols: Vec<Currency>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, FetchError> {
        if start_date > end_date {
            return Err(FetchError::InvalidArgument(format!(
                "start date {} is after end date {}",
                start_date, end_date
            )));
        }
        if symbols.is_empty() {
            return Err(FetchError::InvalidArgument(
                "no destination currencies requested".to_string(),
            ));
        }
        Ok(TimeseriesRequest {
            base,
            symbols,
            start_date,
            end_date,
        })
    }

    /// Destination codes joined for the `symbols` query parameter
    pub fn symbols_param(&self) -> String {
        self.symbols
            .iter()
            .map(Currency::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Assemble the fully-qualified `timeseries` URL with the provider's
/// query-parameter auth convention
pub fn timeseries_url(
    endpoint: &str,
    api_key: &str,
    request: &TimeseriesRequest,
) -> Result<Url, FetchError> {
    let base_url = format!("{}/timeseries", endpoint.trim_end_matches('/'));
    Url::parse_with_params(
        &base_url,
        &[
            ("base", request.base.as_str()),
            ("start_date", &request.start_date.to_string()),
            ("end_date", &request.end_date.to_string()),
            ("symbols", &request.symbols_param()),
            ("api_key", api_key),
        ],
    )
    .map_err(|e| FetchError::InvalidArgument(format!("invalid API endpoint {}: {}", endpoint, e)))
}

/// Blocking HTTP client for the exchange-rate provider
pub struct RatesClient {
    client: reqwest::blocking::Client,
    config: ApiConfig,
}

impl RatesClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(RatesClient { client, config })
    }

    /// Fetch the raw timeseries payload for the requested range
    ///
    /// Returns the parsed JSON body on 200. Non-2xx statuses map to
    /// `FetchError::Http` with the provider's documented meaning.
    pub fn fetch_timeseries(
        &self,
        request: &TimeseriesRequest,
    ) -> Result<serde_json::Value, FetchError> {
        let url = timeseries_url(&self.config.endpoint, &self.config.api_key, request)?;

        info!(
            "Fetching {} -> {} rates from {} to {}",
            request.base,
            request.symbols_param(),
            request.start_date,
            request.end_date
        );

        let response = self.client.get(url).send()?;
        let status = response.status();
        debug!("Upstream responded with status {}", status);

        if status.is_success() {
            let body: serde_json::Value = response.json()?;
            return Ok(body);
        }

        let message = match status_message(status.as_u16()) {
            Some(known) => known.to_string(),
            None => {
                let text = response.text().unwrap_or_default();
                format!("Unexpected error: {}", text)
            }
        };

        Err(FetchError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

/// Map a status code to the provider's documented error message
pub fn status_message(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("Unauthorized - API key missing or incorrect."),
        422 => Some("Unprocessable Entity - Check your parameters."),
        429 => Some("Too many requests - API limits reached."),
        500 => Some("Internal Server Error."),
        503 => Some("Service Unavailable - Try again later."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{parse_currency_list, parse_date};

    fn request() -> TimeseriesRequest {
        TimeseriesRequest::new(
            Currency::parse("USD").unwrap(),
            parse_currency_list("HTG,XOF,CAD,EUR").unwrap(),
            parse_date("2025-03-01").unwrap(),
            parse_date("2025-05-31").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_timeseries_url() {
        let url = timeseries_url("https://api.example.com/v1", "secret", &request()).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.path(), "/v1/timeseries");

        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(params.contains(&("base".to_string(), "USD".to_string())));
        assert!(params.contains(&("symbols".to_string(), "HTG,XOF,CAD,EUR".to_string())));
        assert!(params.contains(&("start_date".to_string(), "2025-03-01".to_string())));
        assert!(params.contains(&("end_date".to_string(), "2025-05-31".to_string())));
        assert!(params.contains(&("api_key".to_string(), "secret".to_string())));
    }

    #[test]
    fn test_timeseries_url_trailing_slash() {
        let url = timeseries_url("https://api.example.com/v1/", "secret", &request()).unwrap();
        assert_eq!(url.path(), "/v1/timeseries");
    }

    #[test]
    fn test_request_rejects_inverted_range() {
        let result = TimeseriesRequest::new(
            Currency::parse("USD").unwrap(),
            parse_currency_list("EUR").unwrap(),
            parse_date("2025-05-31").unwrap(),
            parse_date("2025-03-01").unwrap(),
        );
        assert!(matches!(result, Err(FetchError::InvalidArgument(_))));
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            status_message(401),
            Some("Unauthorized - API key missing or incorrect.")
        );
        assert_eq!(
            status_message(422),
            Some("Unprocessable Entity - Check your parameters.")
        );
        assert_eq!(
            status_message(429),
            Some("Too many requests - API limits reached.")
        );
        assert_eq!(status_message(500), Some("Internal Server Error."));
        assert_eq!(
            status_message(503),
            Some("Service Unavailable - Try again later.")
        );
        assert_eq!(status_message(404), None);
    }
}
