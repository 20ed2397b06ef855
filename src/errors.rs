//! Centralized error handling.
//!
//! Provides a unified error type for the entire client, and the mapping
//! from a failed request to the single message shown to the user.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message for a request that never reached the server
pub const MSG_CONNECTION: &str =
    "Unable to connect to the server. Please check your internet connection.";
pub const MSG_NOT_FOUND: &str = "The requested resource was not found.";
pub const MSG_FORBIDDEN: &str = "You do not have permission to perform this action.";
pub const MSG_UNAUTHORIZED: &str = "You are not authorized to perform this action.";
pub const MSG_INVALID_REQUEST: &str = "Invalid request data.";
pub const MSG_SERVER_ERROR: &str = "A server error occurred. Please try again later.";
pub const MSG_UNKNOWN: &str = "An unknown error occurred";

/// Keys of a 400 error envelope that never carry a field-level message
const ENVELOPE_KEYS: &[&str] = &["message", "error", "status", "timestamp", "path"];

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Transport
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Failure on our side of the wire (bad URL, undecodable response body)
    #[error("{0}")]
    Client(String),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}")]
    Api {
        status: StatusCode,
        payload: Option<Value>,
    },

    // Local
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build an API error from a status and an optional response payload
    pub fn api(status: StatusCode, payload: Option<Value>) -> Self {
        AppError::Api { status, payload }
    }

    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported that the resource does not exist
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Get the user-facing message for this error.
    ///
    /// Remote failures follow the fixed status table; local failures show
    /// their own text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Connection(_) => MSG_CONNECTION.to_string(),
            AppError::Client(detail) => format!("Error: {}", detail),
            AppError::Api { status, payload } => describe_failure(*status, payload.as_ref()),
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidInput(_) | AppError::Internal(_) => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() || err.is_builder() {
            AppError::Client(err.to_string())
        } else {
            AppError::Connection(err.to_string())
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Map a failed response to the one message shown to the user.
pub fn describe_failure(status: StatusCode, payload: Option<&Value>) -> String {
    match status {
        StatusCode::NOT_FOUND => MSG_NOT_FOUND.to_string(),
        StatusCode::FORBIDDEN => MSG_FORBIDDEN.to_string(),
        StatusCode::UNAUTHORIZED => MSG_UNAUTHORIZED.to_string(),
        StatusCode::BAD_REQUEST => describe_bad_request(payload),
        StatusCode::INTERNAL_SERVER_ERROR => MSG_SERVER_ERROR.to_string(),
        _ => MSG_UNKNOWN.to_string(),
    }
}

fn describe_bad_request(payload: Option<&Value>) -> String {
    let Some(payload) = payload.filter(|p| p.is_object() || p.is_array()) else {
        return MSG_INVALID_REQUEST.to_string();
    };

    let messages = field_messages(payload);
    if !messages.is_empty() {
        return messages.join(". ");
    }

    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(MSG_INVALID_REQUEST)
        .to_string()
}

/// Collect the field-level messages of a 400 payload.
fn field_messages(payload: &Value) -> Vec<String> {
    match payload {
        Value::Array(items) => items.iter().filter_map(item_message).collect(),
        Value::Object(map) => {
            if let Some(errors) = map.get("errors").filter(|e| e.is_object() || e.is_array()) {
                return field_messages(errors);
            }
            if map.contains_key("field") {
                return map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(|m| vec![m.to_string()])
                    .unwrap_or_default();
            }
            map.iter()
                .filter(|(key, _)| !ENVELOPE_KEYS.contains(&key.as_str()))
                .flat_map(|(_, value)| match value {
                    Value::Array(items) => items.iter().filter_map(item_message).collect::<Vec<_>>(),
                    other => item_message(other).into_iter().collect(),
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

/// A bare string, or the `message` of an object
fn item_message(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => item.get("message").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}
