use serde::de::DeserializeOwned;
use tracing::debug;

use super::query_params::QueryParams;
use crate::services::geocoding_error::GeocodingError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issues single GET requests and decodes their JSON bodies. No retries.
#[derive(Clone)]
pub struct JsonClient {
    client: reqwest::Client,
}

impl JsonClient {
    pub fn new() -> Result<Self, GeocodingError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(transport)?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        JsonClient { client }
    }

    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &QueryParams,
    ) -> Result<T, GeocodingError> {
        let url = if params.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, params.to_query_string())
        };

        debug!("GET {}", redact(&url));

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(transport)?
            .json::<T>()
            .await
            .map_err(transport)?;

        Ok(body)
    }
}

/// Drops the request URL from the error, it may carry an API key.
fn transport(e: reqwest::Error) -> GeocodingError {
    GeocodingError::Transport(e.without_url())
}

/// Joins a service base URL and an endpoint path, tolerating a missing trailing slash.
pub fn endpoint(base: &str, path: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Hides the value of `api-key` so credentials never reach the logs.
fn redact(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("api-key", _)) => "api-key=***",
            _ => pair,
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}
