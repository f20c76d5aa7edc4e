//! # HTTP Provider Adapters
//!
//! reqwest-backed implementations of the provider ports.
//!
//! This module provides a small JSON-over-HTTP client wrapper with timeout
//! configuration and status-code mapping, plus [`HttpMortgageProvider`] and
//! [`HttpHomeInsuranceProvider`], which POST the wire request to a
//! configured quotes endpoint and parse the offer list from the response.
//!
//! The request timeout lives here, on the outbound call, not in the quote
//! core: the orchestrator joins on whatever its legs return.

use crate::config::ProviderEndpoint;
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::traits::{
    HomeInsuranceProvider, HomeInsuranceProviderRequest, MortgageProvider,
    MortgageProviderRequest, ProviderOffer,
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// JSON-over-HTTP client shared by the provider adapters.
#[derive(Debug, Clone)]
pub struct ProviderHttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl ProviderHttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                ProviderError::internal(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a POST request with a JSON body and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Timeout`/`ProviderError::Connection` if the
    /// request fails, and `ProviderError::Protocol` if the response cannot
    /// be parsed.
    pub async fn post_json<T, B>(&self, url: &str, body: &B) -> ProviderResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Handles the HTTP response, checking status and deserializing JSON.
async fn handle_response<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::protocol(format!("failed to parse response: {}", e)))
    } else {
        let error_body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &error_body))
    }
}

/// Maps a reqwest error to a ProviderError.
fn map_reqwest_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::timeout("request timed out")
    } else if error.is_connect() {
        ProviderError::connection(format!("connection failed: {}", error))
    } else {
        ProviderError::connection(format!("HTTP request failed: {}", error))
    }
}

/// Maps an HTTP status code to a ProviderError.
fn map_status_error(status: StatusCode, body: &str) -> ProviderError {
    match status {
        StatusCode::BAD_REQUEST => {
            ProviderError::invalid_request(format!("bad request: {}", body))
        }
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            ProviderError::connection(format!("server error ({}): {}", status, body))
        }
        _ => ProviderError::protocol(format!("HTTP error ({}): {}", status, body)),
    }
}

/// Mortgage provider adapter over a JSON quotes endpoint.
#[derive(Debug, Clone)]
pub struct HttpMortgageProvider {
    http: ProviderHttpClient,
    url: String,
}

impl HttpMortgageProvider {
    /// Creates an adapter for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(endpoint: &ProviderEndpoint) -> ProviderResult<Self> {
        Ok(Self {
            http: ProviderHttpClient::new(endpoint.timeout_ms())?,
            url: endpoint.url().to_string(),
        })
    }
}

#[async_trait]
impl MortgageProvider for HttpMortgageProvider {
    async fn get_quotes(
        &self,
        request: &MortgageProviderRequest,
    ) -> ProviderResult<Vec<ProviderOffer>> {
        self.http.post_json(&self.url, request).await
    }
}

/// Home-insurance provider adapter over a JSON quotes endpoint.
#[derive(Debug, Clone)]
pub struct HttpHomeInsuranceProvider {
    http: ProviderHttpClient,
    url: String,
}

impl HttpHomeInsuranceProvider {
    /// Creates an adapter for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(endpoint: &ProviderEndpoint) -> ProviderResult<Self> {
        Ok(Self {
            http: ProviderHttpClient::new(endpoint.timeout_ms())?,
            url: endpoint.url().to_string(),
        })
    }
}

#[async_trait]
impl HomeInsuranceProvider for HttpHomeInsuranceProvider {
    async fn get_quotes(
        &self,
        request: &HomeInsuranceProviderRequest,
    ) -> ProviderResult<Vec<ProviderOffer>> {
        self.http.post_json(&self.url, request).await
    }
}
