//! GraphQL-level error type.
//!
//! A [`GraphqlError`] is produced whenever the endpoint answers with a
//! non-empty `errors` list, even if `data` is populated as well. The full
//! list and the raw envelope are kept so callers can inspect partial data.
//!
//! # Example
//!
//! ```rust,ignore
//! use apito_client::{ApitoError, clients::graphql::GraphqlError};
//!
//! match client.search_resources("todos", None).await {
//!     Err(ApitoError::Graphql(GraphqlError { errors, response, .. })) => {
//!         for error in &errors {
//!             eprintln!("{}", error.message);
//!         }
//!         eprintln!("partial data: {}", response["data"]);
//!     }
//!     other => { /* ... */ }
//! }
//! ```

use thiserror::Error;

use crate::clients::graphql::GraphqlErrorEntry;

/// The GraphQL response carried a non-empty `errors` list.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct GraphqlError {
    /// Message of the first error, or a generic message if it was blank.
    pub message: String,
    /// The full `errors` list, in server order.
    pub errors: Vec<GraphqlErrorEntry>,
    /// The raw response envelope.
    pub response: serde_json::Value,
}

impl GraphqlError {
    /// Code reported by [`ApitoError::code`](crate::ApitoError::code) for this kind.
    pub const CODE: &'static str = "GRAPHQL_ERROR";

    /// Builds the error from an errors list and the raw envelope.
    #[must_use]
    pub fn new(errors: Vec<GraphqlErrorEntry>, response: serde_json::Value) -> Self {
        let message = errors
            .first()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or("GraphQL Error")
            .to_string();

        Self {
            message,
            errors,
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> GraphqlErrorEntry {
        GraphqlErrorEntry {
            message: message.to_string(),
            locations: None,
            path: None,
            extensions: None,
        }
    }

    #[test]
    fn test_message_is_first_error_message() {
        let error = GraphqlError::new(
            vec![entry("first"), entry("second")],
            serde_json::json!({}),
        );
        assert_eq!(error.to_string(), "first");
        assert_eq!(error.errors.len(), 2);
    }

    #[test]
    fn test_blank_message_falls_back() {
        let error = GraphqlError::new(vec![entry("")], serde_json::json!({}));
        assert_eq!(error.message, "GraphQL Error");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error =
            &GraphqlError::new(vec![entry("x")], serde_json::Value::Null);
        let _ = error;
    }
}
