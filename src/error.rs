//! Error types for the ClickSign client.
//!
//! Every failure status the service uses has its own variant, so callers can
//! match on the failure class instead of inspecting status codes.

use thiserror::Error;

/// Result type for ClickSign operations.
pub type Result<T> = std::result::Result<T, ClickSignError>;

/// Errors that can occur when talking to ClickSign.
#[derive(Error, Debug)]
pub enum ClickSignError {
    /// HTTP 400.
    #[error("ClickSign API error: bad request, the request sent is not valid")]
    InvalidRequest,

    /// HTTP 401.
    #[error("ClickSign API error: unauthorized, invalid access token")]
    Unauthorized,

    /// HTTP 403.
    #[error(
        "ClickSign API error: forbidden, check that the token is valid and that you are in the right environment"
    )]
    Forbidden,

    /// HTTP 404.
    #[error("ClickSign API error: not found, the requested resource does not exist")]
    NotFound,

    /// HTTP 422.
    #[error("ClickSign API error: unprocessable entity, the service rejected the request: {errors}")]
    UnprocessableEntity {
        /// The `errors` field of the response body, or `null` if absent.
        errors: serde_json::Value,
    },

    /// HTTP 500.
    #[error("ClickSign API error: internal server error")]
    ServerError,

    /// The response body was not JSON or lacked the expected wrapper key.
    #[error("Malformed response: expected {expected}")]
    MalformedResponse {
        /// What the body should have held, e.g. a `document` object.
        expected: String,
    },

    /// The wrapper was present but its contents had the wrong shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// HTTP transport error. The request URL is stripped, since it carries
    /// the access token.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for ClickSignError {
    fn from(e: reqwest::Error) -> Self {
        ClickSignError::Http(e.without_url())
    }
}

impl ClickSignError {
    /// A missing or non-object wrapper key.
    pub(crate) fn malformed(wrapper: &str) -> Self {
        ClickSignError::MalformedResponse {
            expected: format!("a `{}` object", wrapper),
        }
    }

    /// A success response whose body is not JSON.
    pub(crate) fn not_json() -> Self {
        ClickSignError::MalformedResponse {
            expected: "a JSON body".to_string(),
        }
    }

    /// Returns true if the request may succeed when retried.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClickSignError::ServerError | ClickSignError::Http(_))
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ClickSignError::Unauthorized | ClickSignError::Forbidden
        )
    }

    /// Returns the HTTP status code this error was classified from.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClickSignError::InvalidRequest => Some(400),
            ClickSignError::Unauthorized => Some(401),
            ClickSignError::Forbidden => Some(403),
            ClickSignError::NotFound => Some(404),
            ClickSignError::UnprocessableEntity { .. } => Some(422),
            ClickSignError::ServerError => Some(500),
            ClickSignError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
