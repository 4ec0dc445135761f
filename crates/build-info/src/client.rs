//! Typed client for the build-info endpoint.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::model::BuildInfo;

/// Default request timeout, matching the other API clients in this workspace.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for fetching build metadata from a configured endpoint.
#[derive(Debug, Clone)]
pub struct BuildInfoClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl BuildInfoClient {
    /// Create a client for the given endpoint with the default 10-second
    /// request timeout.
    pub fn new(endpoint: Url) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { endpoint, http }
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch build metadata from the endpoint.
    ///
    /// Sends a single GET with no body and no extra headers. Any 2xx response
    /// with a JSON body deserializes into [`BuildInfo`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] for network errors, non-2xx responses, or a
    /// body that does not parse as build metadata.
    #[tracing::instrument(skip(self), fields(url = %self.endpoint))]
    pub async fn fetch(&self) -> Result<BuildInfo, FetchError> {
        tracing::debug!("sending GET request for build info");

        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| FetchError::Network {
                url: self.endpoint.to_string(),
                source: err,
            })?;

        let status = response.status();
        tracing::debug!(status = %status, "received build info response");

        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Failed to read response body"));
            return Err(FetchError::UnexpectedResponse {
                status: status.as_u16(),
                message: text,
            });
        }

        let info = response
            .json()
            .await
            .map_err(|err| FetchError::UnexpectedResponse {
                status: status.as_u16(),
                message: format!("Failed to parse response: {err}"),
            })?;

        Ok(info)
    }
}

/// Errors that can occur when fetching build metadata.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or connection error
    #[error("network error connecting to {url}")]
    Network { url: String, source: reqwest::Error },

    /// Non-2xx response, or a 2xx body that could not be parsed
    #[error("unexpected response (status {status}): {message}")]
    UnexpectedResponse { status: u16, message: String },
}
