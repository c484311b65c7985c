//! Error types for the anytype client.
//!
//! Every fallible operation returns the unified [`Error`]. Failures that come
//! back from an API call are [`ApiError`]s; callers branch on their
//! [`ApiErrorKind`] instead of matching on messages.

use std::fmt;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use thiserror::Error;

/// Retry-after hint (in seconds) used when a 429 response carries none.
pub const DEFAULT_RETRY_AFTER: u64 = 60;

/// The unified error type for anytype operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No API key could be found when the client was constructed.
    #[error("authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// The client configuration is unusable (bad base URL, bad key bytes).
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A request reached the transport and failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response whose body is not valid JSON.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the API error kind, if this is an API error.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.as_api().map(|err| err.kind)
    }

    /// Returns the HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => err.status,
            Error::Parse(err) => Some(err.response.status()),
            _ => None,
        }
    }

    /// Returns the raw response snapshot associated with this error, if any.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::Api(err) => err.response.as_ref(),
            Error::Parse(err) => Some(&err.response),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(ApiError::from(err))
    }
}

/// Credential setup errors, raised before any request is made.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// No API key was given and the environment fallback is unset.
    #[error("API key is required: pass one explicitly or set the {var} environment variable")]
    MissingApiKey { var: &'static str },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// The API key cannot be carried in an HTTP header.
    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,

    /// The HTTP transport or runtime could not be built.
    #[error("failed to build HTTP transport: {message}")]
    Transport { message: String },
}

/// The kind of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// HTTP 400.
    BadRequest,
    /// HTTP 401: the server rejected the presented key.
    Unauthorized,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 409.
    Conflict,
    /// HTTP 429, with the server's retry-after hint in seconds.
    TooManyRequests { retry_after: u64 },
    /// HTTP 5xx.
    Server,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The response body did not match the expected schema.
    Validation,
    /// Any other failure: unexpected status codes and transport errors.
    Other,
}

/// An error returned by an API call.
#[derive(Debug)]
pub struct ApiError {
    /// What went wrong.
    pub kind: ApiErrorKind,
    /// Human-readable message.
    pub message: String,
    /// HTTP status code, when a response was received.
    pub status: Option<u16>,
    /// Snapshot of the response, when one was received.
    pub response: Option<RawResponse>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create an API error without an attached response.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            response: None,
        }
    }

    /// Map a non-success response to a typed error.
    ///
    /// This is a pure function of the response: every status code maps to
    /// exactly one kind.
    pub fn from_response(response: RawResponse) -> Self {
        let status = response.status();
        let (kind, message) = match status {
            400 => (ApiErrorKind::BadRequest, bad_request_message(&response)),
            401 => (ApiErrorKind::Unauthorized, "Unauthorized".to_string()),
            403 => (ApiErrorKind::Forbidden, "Forbidden".to_string()),
            404 => (ApiErrorKind::NotFound, "Not Found".to_string()),
            409 => (ApiErrorKind::Conflict, "Conflict".to_string()),
            429 => (
                ApiErrorKind::TooManyRequests {
                    retry_after: retry_after(response.headers()),
                },
                "Too Many Requests".to_string(),
            ),
            500..=599 => (ApiErrorKind::Server, format!("Server Error: {}", status)),
            _ => (
                ApiErrorKind::Other,
                format!("Unexpected status code: {}", status),
            ),
        };

        Self {
            kind,
            message,
            status: Some(status),
            response: Some(response),
        }
    }

    /// A response body that parsed as JSON but did not fit the expected type.
    pub(crate) fn validation(err: serde_json::Error, response: &RawResponse) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            message: format!("Failed to validate response data: {}", err),
            status: Some(response.status()),
            response: Some(response.clone()),
        }
    }

    /// Returns the retry-after hint for rate-limited requests.
    pub fn retry_after(&self) -> Option<u64> {
        match self.kind {
            ApiErrorKind::TooManyRequests { retry_after } => Some(retry_after),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == ApiErrorKind::Timeout
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind, ApiErrorKind::TooManyRequests { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::new(ApiErrorKind::Timeout, "Request timed out")
        } else {
            ApiError::new(ApiErrorKind::Other, format!("Request failed: {}", err))
        }
    }
}

fn bad_request_message(response: &RawResponse) -> String {
    let Some(body) = response.json() else {
        return "Bad Request".to_string();
    };

    ["error", "message"]
        .iter()
        .find_map(|field| body.get(field).and_then(|v| v.as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| "Bad Request".to_string())
}

fn retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER)
}

/// A successful response whose body is not valid JSON.
#[derive(Debug, Error)]
#[error("failed to parse response as JSON: {source}")]
pub struct ParseError {
    pub source: serde_json::Error,
    pub response: RawResponse,
}

/// Snapshot of an HTTP response, kept on errors for caller-side inspection.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl RawResponse {
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Response body as text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Response body parsed as JSON, if it is JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
