//! GraphQL response envelope types.

use serde::{Deserialize, Serialize};

/// A source location attached to a GraphQL error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphqlLocation {
    /// 1-based line in the query document.
    pub line: u32,
    /// 1-based column in the query document.
    pub column: u32,
}

/// One entry of a GraphQL `errors` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphqlErrorEntry {
    /// Error message from the server.
    pub message: String,
    /// Locations in the query the error refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<GraphqlLocation>>,
    /// Path to the response field that failed. Segments are field names or
    /// list indices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    /// Server-specific extra information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

/// The `{data, errors}` envelope returned by the Apito endpoint.
///
/// # Example
///
/// ```rust
/// use apito_client::clients::graphql::GraphqlResponse;
///
/// let envelope: GraphqlResponse = serde_json::from_value(serde_json::json!({
///     "data": { "debug": "ok" },
///     "errors": [{ "message": "partial failure" }]
/// })).unwrap();
///
/// assert!(envelope.has_errors());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphqlResponse {
    /// The query result. `None` when the server sent no `data` or `null`.
    #[serde(default)]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
    /// GraphQL errors. `None` when the server sent no `errors` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
    /// Server-specific extra information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl GraphqlResponse {
    /// Returns `true` if the envelope carries at least one error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_full_error_entry() {
        let envelope: GraphqlResponse = serde_json::from_value(serde_json::json!({
            "data": null,
            "errors": [{
                "message": "model not found",
                "locations": [{ "line": 2, "column": 3 }],
                "path": ["getSingleData", 0],
                "extensions": { "code": "NOT_FOUND" }
            }]
        }))
        .unwrap();

        assert!(envelope.data.is_none());
        assert!(envelope.has_errors());
        let error = &envelope.errors.as_ref().unwrap()[0];
        assert_eq!(error.message, "model not found");
        assert_eq!(
            error.locations.as_deref(),
            Some(&[GraphqlLocation { line: 2, column: 3 }][..])
        );
        assert_eq!(
            error.path,
            Some(vec![serde_json::json!("getSingleData"), serde_json::json!(0)])
        );
        assert_eq!(error.extensions.as_ref().unwrap()["code"], "NOT_FOUND");
    }

    #[test]
    fn test_empty_errors_list_is_not_an_error() {
        let envelope: GraphqlResponse =
            serde_json::from_value(serde_json::json!({ "data": {}, "errors": [] })).unwrap();
        assert!(!envelope.has_errors());
    }

    #[test]
    fn test_missing_keys_default() {
        let envelope: GraphqlResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(envelope, GraphqlResponse::default());
    }
}
