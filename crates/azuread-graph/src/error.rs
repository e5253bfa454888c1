//! Error types for Microsoft Graph calls.

use reqwest::StatusCode;
use serde::Deserialize;

/// Result type alias using `GraphError`.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur when talking to Microsoft Graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Graph answered with a non-success status.
    #[error("Graph API error (HTTP {status}): {code} - {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },

    /// Acquiring an access token failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The client could not be built from the supplied options.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request could not be built from the supplied arguments.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    #[must_use]
    pub fn api(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// HTTP status of the failed call, when the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Returns `true` if Graph reported the object as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Builds an error from a failed response body, preferring the OData error envelope.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ODataError>(body) {
            Ok(odata) => Self::api(status, odata.error.code, odata.error.message),
            Err(_) => Self::api(status, status.to_string(), body),
        }
    }
}

/// `OData` error response from Microsoft Graph.
#[derive(Debug, Deserialize)]
pub(crate) struct ODataError {
    pub error: ODataErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ODataErrorBody {
    pub code: String,
    pub message: String,
}
