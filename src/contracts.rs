//! Request/response contracts for the hosted functions the planner calls.
//!
//! The canvas never performs these calls itself. The host page sends the
//! request, then hands the raw status and body to [`parse_response`], which
//! yields either the typed payload or a [`FunctionError`] with a message fit
//! for an alert. Nothing here retries; the layout is untouched on failure so
//! the user can try again.

#[cfg(test)]
#[path = "contracts_test.rs"]
mod contracts_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Which planner an AI suggestion is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignType {
    Room,
    Tent,
    Outdoor,
    Videowall,
}

/// Body for the AI suggestion function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub design_type: DesignType,
    /// Free-form planner parameters, passed through untouched.
    #[serde(default)]
    pub parameters: serde_json::Value,
}

/// Successful reply from the AI suggestion function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub success: bool,
    pub suggestions: String,
    pub design_type: DesignType,
}

/// Body for the subscription check function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCheckRequest {
    pub email: String,
}

/// Reply from the subscription check function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCheckResponse {
    pub is_active: bool,
    #[serde(default)]
    pub subscription: Option<serde_json::Value>,
}

/// Failure body shared by every function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by [`parse_response`].
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    /// 400: bad input or signature.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 405: wrong HTTP method.
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    /// 500: the function failed.
    #[error("server error: {0}")]
    Server(String),
    /// Any other non-2xx status.
    #[error("unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },
    /// A 2xx body that doesn't match the contract.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FunctionError {
    /// HTTP status this error came from, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::MethodNotAllowed(_) => Some(405),
            Self::Server(_) => Some(500),
            Self::Unexpected { status, .. } => Some(*status),
            Self::Decode(_) => None,
        }
    }

    /// Text to show the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) | Self::MethodNotAllowed(msg) | Self::Server(msg) | Self::Unexpected { message: msg, .. }
                if !msg.is_empty() =>
            {
                msg.clone()
            }
            Self::Decode(_) => "The service returned an unexpected response. Please try again.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Turn a function's raw status and body into its typed payload.
///
/// # Errors
///
/// Non-2xx statuses map to the matching [`FunctionError`] variant carrying the
/// body's `error` text (or the raw body if it isn't an error object). A 2xx
/// body that doesn't decode yields [`FunctionError::Decode`].
pub fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FunctionError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => b.error,
        Err(_) => body.trim().to_string(),
    };
    tracing::warn!(status, %message, "function call failed");
    Err(match status {
        400 => FunctionError::BadRequest(message),
        405 => FunctionError::MethodNotAllowed(message),
        500 => FunctionError::Server(message),
        _ => FunctionError::Unexpected { status, message },
    })
}
