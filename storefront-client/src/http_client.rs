//! Generic HTTP client tools
//!
//! Shared request/response handling for the catalog and cart calls: sending,
//! logging, reading the body and JSON decoding. Neither call is retried.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Endpoint};
use crate::utils::log_sanitizer::truncate_for_log;

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Create the HTTP client.
///
/// A whole-request timeout is only applied when `request_timeout` is set.
pub fn create_http_client(request_timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder =
        Client::builder().connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
    if let Some(timeout) = request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers)
    /// * `endpoint` - which remote resource is addressed (for logs and errors)
    /// * `method_name` - request method name, used for logs
    /// * `url` - request URL, used for logs
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - for any HTTP status
    /// * `Err(ClientError::Timeout | ClientError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: Endpoint,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[{endpoint}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    endpoint,
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    endpoint,
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{endpoint}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                endpoint,
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{endpoint}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: Endpoint) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{endpoint}] JSON parse failed: {e}");
            log::error!(
                "[{endpoint}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ClientError::ParseError {
                endpoint,
                detail: e.to_string(),
            }
        })
    }
}
