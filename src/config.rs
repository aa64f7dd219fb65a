//! Configuration management
//!
//! Resolves API credentials and the provider endpoint from CLI flags with
//! environment variable fallback (`API_KEY`, `API_ENDPOINT`). A `.env` file is
//! honored when present.

use crate::FetchError;

pub const API_KEY_VAR: &str = "API_KEY";
pub const API_ENDPOINT_VAR: &str = "API_ENDPOINT";

/// Resolved API credentials and endpoint
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl ApiConfig {
    /// Resolve the config from optional CLI overrides, falling back to the
    /// `API_KEY` and `API_ENDPOINT` environment variables
    pub fn resolve(
        api_key: Option<String>,
        endpoint: Option<String>,
    ) -> Result<Self, FetchError> {
        let api_key = match api_key {
            Some(key) => key,
            None => std::env::var(API_KEY_VAR).map_err(|_| {
                FetchError::InvalidArgument(format!(
                    "API key not provided (use --api-key or set {})",
                    API_KEY_VAR
                ))
            })?,
        };

        let endpoint = match endpoint {
            Some(endpoint) => endpoint,
            None => std::env::var(API_ENDPOINT_VAR).map_err(|_| {
                FetchError::InvalidArgument(format!(
                    "API endpoint not provided (use --api-endpoint or set {})",
                    API_ENDPOINT_VAR
                ))
            })?,
        };

        if api_key.is_empty() {
            return Err(FetchError::InvalidArgument("API key is empty".to_string()));
        }
        if endpoint.is_empty() {
            return Err(FetchError::InvalidArgument(
                "API endpoint is empty".to_string(),
            ));
        }

        Ok(ApiConfig { api_key, endpoint })
    }
}
