//! Error types for the Moneybird client
//!
//! All public APIs return `Result<T, Error>` where `Error` is defined here.
//! The variants are deliberately coarse so callers can branch on the three
//! outcomes that matter: the body could not be read, the body could not be
//! decoded, or the API itself reported a failure.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// The main error type for the Moneybird client
#[derive(Error, Debug)]
pub enum Error {
    /// The response body could not be read from the transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON for the expected shape.
    ///
    /// Also returned when a failure response carries an unparseable body;
    /// in that case the response context (status, headers) is lost and
    /// only the parse error surfaces.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API reported a failure with a decodable JSON payload
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A configured URL did not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required configuration field was not set
    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Check if this error is a structured API failure
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// Get the structured API failure, if that is what this error is
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for the Moneybird client
pub type Result<T> = std::result::Result<T, Error>;

/// A failure reported by the Moneybird API
///
/// Carries the failed response's status, status line, and headers together
/// with the decoded JSON error payload so callers can inspect what the API
/// actually returned.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    status_line: String,
    headers: HeaderMap,
    data: Map<String, Value>,
}

impl ApiError {
    /// Create an API error from a failed response's parts
    pub fn new(status: StatusCode, headers: HeaderMap, data: Map<String, Value>) -> Self {
        Self {
            status,
            status_line: status_line(status),
            headers,
            data,
        }
    }

    /// HTTP status code of the failed response
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Headers of the failed response
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The decoded JSON error payload
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Error text: the payload's `"error"` string if present, otherwise the
    /// HTTP status line
    pub fn message(&self) -> &str {
        match self.data.get("error") {
            Some(Value::String(s)) => s,
            _ => &self.status_line,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "moneybird: {}", self.message())
    }
}

impl std::error::Error for ApiError {}

/// Status line in the `"422 Unprocessable Entity"` form
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}
