//! # HTTP Client Utilities
//!
//! Shared HTTP wrapper for the orderbook client and token list fetch.
//!
//! Provides JSON GET/POST with timeout configuration and mapping of
//! transport failures onto the [`ApiError`] taxonomy. No retries; the core
//! surfaces every failure to the caller.

use crate::infrastructure::error::{ApiError, ApiResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for external API calls.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if the underlying client cannot be
    /// built.
    pub fn new(timeout_ms: u64) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ApiError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// GETs a URL and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Timeout`] or [`ApiError::Connection`] on
    /// transport failure, [`ApiError::Status`] for non-2xx responses, and
    /// [`ApiError::Decode`] if the body cannot be deserialized.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// POSTs a JSON body and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`HttpClient::get`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> ApiResult<T> {
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

async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(format!("failed to parse response: {e}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout("request timed out")
    } else if error.is_connect() {
        ApiError::connection(format!("connection failed: {error}"))
    } else {
        ApiError::connection(format!("HTTP request failed: {error}"))
    }
}

fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::BAD_REQUEST => ApiError::invalid_request(format!("bad request: {body}")),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ApiError::authentication(format!("authentication failed: {body}"))
        }
        _ => ApiError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        },
    }
}
