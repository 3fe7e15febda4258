/*
[INPUT]:  Error sources (request building, transport, JSON codec, Swyftx error envelope)
[OUTPUT]: Structured error types tagged by the stage that failed
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;

use reqwest::StatusCode;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error envelope returned by Swyftx for any status code >= 400
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Short summary code, sent as `error` on the wire
    #[serde(rename = "error", default)]
    pub summary: String,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.summary, self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Decode an error envelope from a buffered response body.
    ///
    /// Accepts `{"error": {"error", "message"}}` and the flat `{"error", "message"}` form.
    /// Anything that is not an object carrying at least one of those keys is rejected.
    pub fn from_body(body: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        let envelope = if value.get("error").is_some_and(Value::is_object) {
            value["error"].clone()
        } else {
            value
        };

        let has_fields = envelope
            .as_object()
            .is_some_and(|fields| fields.contains_key("error") || fields.contains_key("message"));
        if !has_fields {
            return Err(serde_json::Error::custom("body is not a Swyftx error envelope"));
        }

        serde_json::from_value(envelope)
    }
}

/// Main error type for the Swyftx client
#[derive(Error, Debug)]
pub enum SwyftxError {
    /// A scoping identifier the endpoint needs was empty
    #[error("{name} was not set")]
    MissingIdentifier { name: &'static str },

    /// Client configuration could not be applied
    #[error("Configuration error: {0}")]
    Config(String),

    /// Base URL or joined path is not a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request body could not be serialized
    #[error("could not encode body of request: {0}")]
    Encode(#[source] serde_json::Error),

    /// reqwest refused to build the request
    #[error("could not create request: {0}")]
    CreateRequest(#[source] reqwest::Error),

    /// Connection, TLS or protocol failure
    #[error("could not do request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body could not be read into memory
    #[error("could not copy response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The request scope was cancelled before a response arrived
    #[error("request cancelled")]
    Cancelled,

    /// The request scope deadline elapsed before a response arrived
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// A success body did not match the expected shape
    #[error("could not decode response: {0}")]
    DecodeResponse(#[source] serde_json::Error),

    /// An error body did not match the error envelope
    #[error("could not decode error (status {status}): {source}")]
    DecodeError {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// Swyftx returned an error envelope
    #[error("API error (status {status}): {error}")]
    Api {
        status: StatusCode,
        #[source]
        error: ApiError,
    },

    /// A response that must carry at least one element was empty
    #[error("empty response from {endpoint}")]
    EmptyResponse { endpoint: String },

    /// Exchanging the API key for an access token failed during construction
    #[error("could not generate a token: {0}")]
    TokenRefresh(#[source] Box<SwyftxError>),
}

impl SwyftxError {
    /// Error envelope, if Swyftx answered with one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            SwyftxError::Api { error, .. } => Some(error),
            SwyftxError::TokenRefresh(inner) => inner.api_error(),
            _ => None,
        }
    }

    /// HTTP status of a failed response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SwyftxError::Api { status, .. } | SwyftxError::DecodeError { status, .. } => {
                Some(*status)
            }
            SwyftxError::TokenRefresh(inner) => inner.status(),
            _ => None,
        }
    }

    /// Check if error indicates a rejected or expired credential
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    pub(crate) fn missing(name: &'static str) -> Self {
        SwyftxError::MissingIdentifier { name }
    }
}

/// Result type alias for Swyftx operations
pub type Result<T> = std::result::Result<T, SwyftxError>;
