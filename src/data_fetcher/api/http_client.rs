//! HTTP client creation and configuration utilities

use crate::constants::FORM_CONTENT_TYPE;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::warn;

/// Creates the HTTP client shared by every request of a [`crate::DelClient`].
///
/// # Features
/// * Request timeout from configuration (default: 30 seconds)
/// * `Content-Type: application/x-www-form-urlencoded` on every request, as
///   both backends expect it even on GET
/// * Certificate validation stays on unless `accept_invalid_certs` is set
pub fn create_http_client_with_timeout(
    timeout_seconds: u64,
    accept_invalid_certs: bool,
) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

    let mut builder = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .default_headers(headers);

    if accept_invalid_certs {
        warn!("TLS certificate validation is disabled for this client");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS, false)
        .expect("Failed to create test HTTP client")
}
