//! HTTP response type for the Apito client.

use std::collections::HashMap;

/// A raw response received from the Apito endpoint.
///
/// The body is parsed as JSON when possible. Non-JSON bodies are kept as
/// `{"raw_body": "..."}` so they can still be attached to an error.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased names, every value kept.
    pub headers: HashMap<String, Vec<String>>,
    /// Response body as received.
    pub text: String,
    /// Parsed response body. `None` when the body was empty.
    pub body: Option<serde_json::Value>,
}

impl HttpResponse {
    /// Creates a new response from the received body text.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, text: String) -> Self {
        let body = Self::parse_body(&text);
        Self {
            code,
            headers,
            text,
            body,
        }
    }

    /// Parses a response body, keeping non-JSON text under `raw_body`.
    #[must_use]
    pub fn parse_body(text: &str) -> Option<serde_json::Value> {
        if text.trim().is_empty() {
            return None;
        }
        Some(
            serde_json::from_str(text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": text })),
        )
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
