//! Error types for the Apito client.
//!
//! Every fallible operation in the crate returns [`ApitoError`], a single
//! rooted error type whose variants classify the failure:
//!
//! - [`ApitoError::Http`]: the transport failed (network error, timeout,
//!   non-2xx status). Code `HTTP_ERROR`.
//! - [`ApitoError::Graphql`]: the backend answered with a non-empty GraphQL
//!   `errors` list. Code `GRAPHQL_ERROR`.
//! - [`ApitoError::Validation`]: a required argument was missing, or the
//!   response did not contain the expected field. Code `VALIDATION_ERROR`.
//! - [`ApitoError::Config`]: the configuration could not be turned into a
//!   working client.
//! - [`ApitoError::Decode`]: the response could not be decoded. This is not
//!   classified and carries no code.
//!
//! # Example
//!
//! ```rust
//! use apito_client::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::graphql::GraphqlError;
use crate::clients::HttpError;

/// Errors that can occur while building an [`ApitoConfig`](crate::ApitoConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Apito API key.")]
    EmptyApiKey,

    /// Tenant id cannot be empty.
    #[error("Tenant id cannot be empty. Omit the tenant id instead of passing an empty one.")]
    EmptyTenantId,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an http(s) URL such as 'https://api.apito.io/secured/graphql'.")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A transport option could not be applied.
    #[error("Invalid transport option: {reason}")]
    InvalidTransportOption {
        /// Why the option was rejected.
        reason: String,
    },
}

/// A caller-supplied argument was missing or invalid, or the response did
/// not contain the field the operation unwraps.
///
/// # Example
///
/// ```rust
/// use apito_client::ValidationError;
///
/// let error = ValidationError::missing_field("model");
/// assert_eq!(error.to_string(), "model is required");
/// assert_eq!(error.field(), Some("model"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable description.
    pub message: String,
    /// Optional structured details, e.g. `{"field": "model"}`.
    pub details: Option<serde_json::Value>,
}

impl ValidationError {
    /// Creates a validation error with a message and no details.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a validation error naming a missing required field.
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self {
            message: format!("{field} is required"),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    /// Returns the field this error is about, if one was recorded.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|details| details.get("field"))
            .and_then(serde_json::Value::as_str)
    }
}

/// Root error type for all client operations.
///
/// The accessors [`code`](Self::code), [`status_code`](Self::status_code)
/// and [`details`](Self::details) expose the fields shared by every error
/// kind, so callers can handle errors generically or match on the variant.
///
/// # Example
///
/// ```rust,ignore
/// match client.get_single_resource("todos", "123", false).await {
///     Ok(doc) => println!("{}", doc.id),
///     Err(ApitoError::Graphql(e)) => eprintln!("{} graphql errors", e.errors.len()),
///     Err(ApitoError::Validation(e)) => eprintln!("invalid: {e}"),
///     Err(e) => eprintln!("{:?}: {e}", e.code()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApitoError {
    /// Transport-level failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The GraphQL response carried a non-empty `errors` list.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// Missing arguments or an unexpected response shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configuration could not be turned into a client.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The response body could not be decoded.
    #[error("Failed to decode Apito response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApitoError {
    /// Machine-readable code: `HTTP_ERROR`, `GRAPHQL_ERROR` or
    /// `VALIDATION_ERROR`. Configuration and decode errors have none.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Http(_) => Some(HttpError::CODE),
            Self::Graphql(_) => Some(GraphqlError::CODE),
            Self::Validation(_) => Some(ValidationError::CODE),
            Self::Config(_) | Self::Decode(_) => None,
        }
    }

    /// HTTP status code, when the failure came with one.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status,
            _ => None,
        }
    }

    /// Structured details: the response body for transport errors, the raw
    /// envelope for GraphQL errors, the recorded details for validation errors.
    #[must_use]
    pub const fn details(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http(e) => e.body.as_ref(),
            Self::Graphql(e) => Some(&e.response),
            Self::Validation(e) => e.details.as_ref(),
            Self::Config(_) | Self::Decode(_) => None,
        }
    }
}

impl ValidationError {
    /// Code reported by [`ApitoError::code`] for this kind.
    pub const CODE: &'static str = "VALIDATION_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let message = error.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_validation_error_missing_field_records_field() {
        let error = ValidationError::missing_field("payload");
        assert_eq!(error.message, "payload is required");
        assert_eq!(error.field(), Some("payload"));
    }

    #[test]
    fn test_validation_error_without_field() {
        let error = ValidationError::new("Resource not found");
        assert_eq!(error.to_string(), "Resource not found");
        assert!(error.field().is_none());
    }

    #[test]
    fn test_codes_per_kind() {
        let validation = ApitoError::from(ValidationError::new("x"));
        assert_eq!(validation.code(), Some("VALIDATION_ERROR"));
        assert!(validation.status_code().is_none());

        let http = ApitoError::from(HttpError {
            message: "Bad Gateway".to_string(),
            status: Some(502),
            body: Some(serde_json::json!({ "message": "Bad Gateway" })),
        });
        assert_eq!(http.code(), Some("HTTP_ERROR"));
        assert_eq!(http.status_code(), Some(502));
        assert_eq!(http.details().unwrap()["message"], "Bad Gateway");

        let config = ApitoError::from(ConfigError::EmptyApiKey);
        assert!(config.code().is_none());
    }

    #[test]
    fn test_decode_error_is_unclassified() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = ApitoError::from(err);
        assert!(error.code().is_none());
        assert!(error.to_string().contains("Failed to decode"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ApitoError::from(ConfigError::EmptyApiKey);
        let _: &dyn std::error::Error = &error;
    }
}
