//! Response validation.
//!
//! ClickSign signals failure with a small fixed set of status codes. Anything
//! else, including unexpected codes, is handed back to the caller.

use crate::error::{ClickSignError, Result};
use reqwest::{Response, StatusCode};
use serde_json::Value;

/// Maps a failure status that needs no body to its error.
///
/// 422 is not handled here since its error carries the response body.
pub(crate) fn error_for_status(status: StatusCode) -> Option<ClickSignError> {
    match status.as_u16() {
        400 => Some(ClickSignError::InvalidRequest),
        401 => Some(ClickSignError::Unauthorized),
        403 => Some(ClickSignError::Forbidden),
        404 => Some(ClickSignError::NotFound),
        500 => Some(ClickSignError::ServerError),
        _ => None,
    }
}

/// Extracts the `errors` field of a 422 body. Non-JSON bodies yield `null`.
pub(crate) fn unprocessable_errors(body: &[u8]) -> Value {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|mut v| v.get_mut("errors").map(Value::take))
        .unwrap_or(Value::Null)
}

/// Checks a response's status, failing with the matching error kind or
/// returning the response untouched.
pub async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "received ClickSign response");

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        let body = response.bytes().await?;
        let errors = unprocessable_errors(&body);
        tracing::warn!(status = 422, %errors, "ClickSign rejected the request");
        return Err(ClickSignError::UnprocessableEntity { errors });
    }

    match error_for_status(status) {
        Some(err) => {
            tracing::warn!(status = status.as_u16(), error = %err, "ClickSign request failed");
            Err(err)
        }
        None => Ok(response),
    }
}
