//! Transport error type for the Apito client.
//!
//! [`HttpError`] covers everything that goes wrong before a GraphQL envelope
//! is available: connection failures, timeouts and non-2xx responses.
//!
//! # Example
//!
//! ```rust
//! use apito_client::clients::HttpError;
//!
//! let error = HttpError {
//!     message: "Unauthorized".to_string(),
//!     status: Some(401),
//!     body: Some(serde_json::json!({ "message": "Unauthorized" })),
//! };
//!
//! assert_eq!(error.to_string(), "Unauthorized");
//! ```

use thiserror::Error;

/// A transport-level failure.
///
/// `message` comes from the response body's `message` field when the server
/// sent one, and from the transport otherwise.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct HttpError {
    /// Human-readable description of the failure.
    pub message: String,
    /// HTTP status code, absent for network errors and timeouts.
    pub status: Option<u16>,
    /// Parsed response body, when one was received.
    pub body: Option<serde_json::Value>,
}

impl HttpError {
    /// Code reported by [`ApitoError::code`](crate::ApitoError::code) for this kind.
    pub const CODE: &'static str = "HTTP_ERROR";

    /// Builds an error for a non-2xx response.
    ///
    /// Prefers the body's `message` field over the generic status message.
    #[must_use]
    pub fn from_response(status: u16, body: Option<serde_json::Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(
                || format!("request failed with status code {status}"),
                String::from,
            );

        Self {
            message,
            status: Some(status),
            body,
        }
    }

    /// Returns `true` if the failure was a timeout or a network error.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        self.status.is_none()
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            message: error.to_string(),
            status: error.status().map(|s| s.as_u16()),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_body_message() {
        let error = HttpError::from_response(
            403,
            Some(serde_json::json!({ "message": "invalid api key" })),
        );
        assert_eq!(error.to_string(), "invalid api key");
        assert_eq!(error.status, Some(403));
        assert!(!error.is_network());
    }

    #[test]
    fn test_from_response_falls_back_to_status_message() {
        let error = HttpError::from_response(500, None);
        assert_eq!(error.to_string(), "request failed with status code 500");
        assert!(error.body.is_none());
    }

    #[test]
    fn test_from_response_ignores_non_string_message() {
        let error = HttpError::from_response(400, Some(serde_json::json!({ "message": 42 })));
        assert_eq!(error.message, "request failed with status code 400");
        assert_eq!(error.body, Some(serde_json::json!({ "message": 42 })));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &HttpError::from_response(502, None);
        let _ = error;
    }
}
