//! Single-shot GET and form-POST helpers with JSON decoding and error mapping

use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` with GET and decodes the JSON body.
///
/// One request, no retries. Transport failures, non-success statuses and
/// unusable bodies all come back as distinct [`AppError`] variants.
#[instrument(skip(client))]
pub async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| map_request_error(e, url))?;

    parse_response(response, url).await
}

/// Posts `fields` form-encoded to `url` and decodes the JSON body.
#[instrument(skip(client, fields))]
pub async fn post_form<T, F>(client: &Client, url: &str, fields: &F) -> Result<T, AppError>
where
    T: DeserializeOwned,
    F: Serialize + std::fmt::Debug + ?Sized,
{
    info!("Posting form to URL: {url}");
    debug!("Form fields: {:?}", fields);

    let response = client
        .post(url)
        .form(fields)
        .send()
        .await
        .map_err(|e| map_request_error(e, url))?;

    parse_response(response, url).await
}

fn map_request_error(e: reqwest::Error, url: &str) -> AppError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, AppError> {
    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    decode_body(&response_text, url)
}

/// Decodes a response body in two steps so that invalid JSON and valid JSON
/// of the wrong shape map to different errors.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str, url: &str) -> Result<T, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    let value: Value = serde_json::from_str(text).map_err(|e| {
        error!("Response from {} is not valid JSON: {}", url, e);
        error!(
            "Response text (first 200 chars): {}",
            &text.chars().take(200).collect::<String>()
        );
        AppError::api_malformed_json(e.to_string(), url)
    })?;

    serde_json::from_value(value).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        AppError::api_unexpected_structure(e.to_string(), url)
    })
}
