//! Request dispatch and status classification.
//!
//! Sends a prepared request once and turns non-success responses into the
//! matching `ClientError` variant. There is no retry: a failed request fails
//! the operation.

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Marker GitLab uses when a key already exists in the requested scope.
const DUPLICATE_KEY_MARKER: &str = "has already been taken";

/// Send a request and map error statuses.
///
/// # Errors
///
/// - `ClientError::Http` on transport failure.
/// - `ClientError::Unauthorized` on 401/403.
/// - `ClientError::NotFound` on 404.
/// - `ClientError::Conflict` on 409, or a 400 reporting a duplicate key.
/// - `ClientError::Validation` on other 400/422 responses.
/// - `ClientError::ApiError` for everything else.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = error_message(status, &body);

    debug!(status = status.as_u16(), %url, "Request failed");

    Err(classify(status, url, message))
}

/// Readable message for an error body, falling back to the raw text.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Some(summary) = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.summary())
    {
        return summary;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.to_string()
    }
}

fn classify(status: StatusCode, url: String, message: String) -> ClientError {
    match status.as_u16() {
        401 | 403 => ClientError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        404 => ClientError::NotFound(message),
        409 => ClientError::Conflict(message),
        400 if message.contains(DUPLICATE_KEY_MARKER) => ClientError::Conflict(message),
        400 | 422 => ClientError::Validation {
            status: status.as_u16(),
            message,
        },
        code => ClientError::ApiError {
            status: code,
            url,
            message,
        },
    }
}
