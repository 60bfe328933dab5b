//! Vercel API error types

use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Machine-readable error codes returned in Vercel's error envelope
///
/// See <https://vercel.com/docs/rest-api#errors>. Only the codes callers
/// branch on get their own variant; everything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `not_found`: the addressed object does not exist
    NotFound,
    /// `forbidden`: the token may not access the object
    Forbidden,
    /// Any other non-empty code
    Other(String),
    /// The error body carried no code or could not be decoded
    Unspecified,
}

impl ErrorCode {
    /// Parse a wire code
    pub fn parse(code: &str) -> Self {
        match code {
            "not_found" => Self::NotFound,
            "forbidden" => Self::Forbidden,
            "" => Self::Unspecified,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire representation of this code
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotFound => "not_found",
            Self::Forbidden => "forbidden",
            Self::Other(code) => code,
            Self::Unspecified => "",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => f.write_str("unspecified"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Errors that can occur when talking to the Vercel API
#[derive(Error, Debug)]
pub enum VercelError {
    /// Client could not be built from its configuration
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Request body could not be encoded as JSON
    #[error("Failed to encode request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network or connection error
    #[error("Unable to perform request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Caller cancelled while waiting for the rate limiter
    #[error("Request cancelled before it was sent")]
    Cancelled,

    /// Non-2xx response from the API
    #[error("Vercel API error ({status}, {code}): {message}")]
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Code from the error envelope
        code: ErrorCode,
        /// Human-readable message from the error envelope
        message: String,
    },

    /// 2xx response whose body did not match the expected shape
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl VercelError {
    /// Build an API error that was not produced by an HTTP exchange
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Api {
            status: StatusCode::NOT_FOUND,
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Code of an API error, `None` for every other kind
    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns true if this is an API error carrying `code`
    pub fn is(&self, code: &ErrorCode) -> bool {
        self.code() == Some(code)
    }

    /// Returns true if the API reported the object as missing
    pub fn is_not_found(&self) -> bool {
        self.is(&ErrorCode::NotFound)
    }

    /// Returns true if the API refused access to the object
    pub fn is_forbidden(&self) -> bool {
        self.is(&ErrorCode::Forbidden)
    }
}

/// `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: ErrorBody,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ErrorEnvelope {
    /// Decode an error body, degrading to an empty envelope
    pub fn decode(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}
