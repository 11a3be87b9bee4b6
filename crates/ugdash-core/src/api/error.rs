//! Typed failures of the CRM API.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Categories of API failure. Derived from the HTTP status only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// 401
    Unauthorized,
    /// 404
    NotFound,
    /// 5xx, or the request never completed (connect, timeout, body read)
    Network,
    /// Any other non-success status, or an undecodable body
    Api,
}

impl ApiErrorKind {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiErrorKind::Unauthorized,
            404 => ApiErrorKind::NotFound,
            s if s >= 500 => ApiErrorKind::Network,
            _ => ApiErrorKind::Api,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Unauthorized => write!(f, "unauthorized"),
            ApiErrorKind::NotFound => write!(f, "not_found"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Api => write!(f, "api_error"),
        }
    }
}

/// Structured API error with kind and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// HTTP status, when a response was received
    pub status: Option<u16>,
    /// One-line summary suitable for logs
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error from a non-success status and its body.
    ///
    /// Pulls a cleaner message out of `{"error": "..."}`, `{"message": "..."}`
    /// or `{"error": {"message": "..."}}` bodies when present.
    pub fn http_status(status: u16, body: &str) -> Self {
        let kind = ApiErrorKind::from_status(status);
        let details = (!body.is_empty()).then(|| body.to_string());
        let message = match extract_message(body) {
            Some(msg) => format!("HTTP {status}: {msg}"),
            None => format!("HTTP {status}"),
        };
        Self {
            kind,
            status: Some(status),
            message,
            details,
        }
    }

    /// Creates a transport-level error (no response received).
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Creates an error for a success response whose body did not decode.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Api, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }

    /// Fixed, user-facing sentence for this error's kind.
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Unauthorized => "Your session has expired. Please sign in again.",
            ApiErrorKind::NotFound => "The requested record was not found.",
            ApiErrorKind::Network => "Unable to reach the server. Please try again later.",
            ApiErrorKind::Api => "Something went wrong. Please try again.",
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;
    let candidate = match json.get("error") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(obj @ Value::Object(_)) => obj.get("message").and_then(Value::as_str),
        _ => None,
    }
    .or_else(|| json.get("message").and_then(Value::as_str))?;
    let trimmed = candidate.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
