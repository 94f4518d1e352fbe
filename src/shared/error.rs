//! Shared Error Types
//!
//! This module defines the error taxonomy for the authentication flow.
//! Every failure that can cross a module boundary is an `AuthError`.
//!
//! # Error Categories
//!
//! - `Validation` - Client-side form validation failures (never reach the network)
//! - `InvalidRole` - An unsupported role was supplied before any request was issued
//! - `InvalidResponse` - The server responded without a usable token payload
//! - `Rejected` - The server rejected the request (non-success HTTP status)
//! - `Network` - Transport-level failure (connection refused, DNS, TLS)
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Errors produced by the authentication client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Client-side validation error for a single form field
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The login role is not one of the supported values
    #[error("Invalid role: {role}")]
    InvalidRole {
        /// The role string that was rejected
        role: String,
    },

    /// The server response carried no access token under any known shape
    #[error("{message}")]
    InvalidResponse {
        /// Server-provided message if present, fixed fallback otherwise
        message: String,
    },

    /// The server rejected the request with a non-success status
    #[error("Request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Server-provided message or status text
        message: String,
    },

    /// Transport-level failure before a response was received
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },
}

impl AuthError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid-role error
    pub fn invalid_role(role: impl Into<String>) -> Self {
        Self::InvalidRole { role: role.into() }
    }

    /// Create a new invalid-response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a new rejected error
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Whether this error means the session was rejected by the server (401)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401, .. })
    }

    /// The message a view should surface to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::InvalidResponse { message }
            | Self::Rejected { message, .. }
            | Self::Network { message } => message.clone(),
            Self::InvalidRole { .. } => "Invalid role".to_string(),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_response(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = AuthError::validation("email", "Invalid email format");
        match error {
            AuthError::Validation { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_invalid_role_error() {
        let error = AuthError::invalid_role("manager");
        assert_eq!(format!("{}", error), "Invalid role: manager");
    }

    #[test]
    fn test_rejected_is_unauthorized() {
        assert!(AuthError::rejected(401, "expired").is_unauthorized());
        assert!(!AuthError::rejected(403, "forbidden").is_unauthorized());
        assert!(!AuthError::network("down").is_unauthorized());
    }

    #[test]
    fn test_user_message_passes_server_text_through() {
        let error = AuthError::rejected(400, "Email or password is incorrect.");
        assert_eq!(error.user_message(), "Email or password is incorrect.");
    }

    #[test]
    fn test_error_display() {
        let error = AuthError::invalid_response("Invalid server response");
        assert_eq!(format!("{}", error), "Invalid server response");
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let auth_error: AuthError = result.unwrap_err().into();
        match auth_error {
            AuthError::InvalidResponse { .. } => {}
            _ => panic!("Expected InvalidResponse from serde error"),
        }
    }

    #[test]
    fn test_error_clone() {
        let error = AuthError::validation("password", "Please enter your password");
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
