//! Document and request types exchanged with the Apito backend.
//!
//! The backend owns schema validation, so document payloads are opaque by
//! default ([`Payload`]). [`Document`] and [`SearchResult`] are generic over
//! the payload type so callers can decode straight into their own structs,
//! see [`TypedApitoClient`](crate::TypedApitoClient).
//!
//! # Example
//!
//! ```rust
//! use apito_client::{CreateAndUpdateRequest, Payload};
//! use serde_json::json;
//!
//! let mut payload = Payload::new();
//! payload.insert("title".to_string(), json!("Write docs"));
//!
//! let request = CreateAndUpdateRequest::new("todos", payload);
//! assert!(request.id.is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque document payload.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Bookkeeping fields the backend attaches to every document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentMeta {
    /// When the document was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the document was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Publication status, e.g. `published` or `draft`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Whether this document is a revision of another one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<bool>,
    /// When the revision was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_at: Option<DateTime<Utc>>,
    /// Id of the document this revision belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_revision_id: Option<String>,
}

/// A stored record of a model.
///
/// `T` is the payload type; it defaults to the opaque [`Payload`] map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document<T = Payload> {
    /// Document identifier.
    pub id: String,
    /// Storage key, when the backend exposes it.
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The document payload.
    pub data: T,
    /// Timestamps, status and revision markers.
    #[serde(default)]
    pub meta: DocumentMeta,
    /// When the document expires, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
    /// Id of the relation document when fetched through a connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_doc_id: Option<String>,
    /// Type tag.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A page of documents plus the logical total.
///
/// `count` may exceed `results.len()` when the caller paginated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult<T = Payload> {
    /// Documents in backend order.
    #[serde(default = "Vec::new")]
    pub results: Vec<Document<T>>,
    /// Total number of matching documents.
    #[serde(default)]
    pub count: u64,
}

/// Optional filter for [`search_resources`](crate::ApitoClient::search_resources).
///
/// Only the fields that are set are sent as variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Backend filter expression.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_: Option<serde_json::Value>,
    /// Full-text search string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl SearchParams {
    /// Returns the set fields as a variables map.
    #[must_use]
    pub fn to_variables(&self) -> Payload {
        let mut vars = Payload::new();
        if let Some(page) = self.page {
            vars.insert("page".to_string(), page.into());
        }
        if let Some(limit) = self.limit {
            vars.insert("limit".to_string(), limit.into());
        }
        if let Some(where_) = &self.where_ {
            vars.insert("where".to_string(), where_.clone());
        }
        if let Some(search) = &self.search {
            vars.insert("search".to_string(), search.clone().into());
        }
        vars
    }
}

/// Input for [`create_new_resource`](crate::ApitoClient::create_new_resource)
/// and [`update_resource`](crate::ApitoClient::update_resource).
///
/// `model` and `payload` are always required; `id` is required for updates.
/// Missing values are reported as a
/// [`ValidationError`](crate::ValidationError) before any request is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAndUpdateRequest {
    /// Model name, e.g. `todos`.
    pub model: String,
    /// Document id. Required for updates, ignored for creates when `None`.
    pub id: Option<String>,
    /// Document payload.
    pub payload: Option<Payload>,
    /// Relations to connect.
    pub connect: Option<Payload>,
    /// Relations to disconnect.
    pub disconnect: Option<Payload>,
    /// Render the document as single-page data.
    pub single_page_data: bool,
    /// Force the update even when the backend would reject it.
    pub force_update: bool,
}

impl CreateAndUpdateRequest {
    /// Creates a request for `model` with `payload`.
    pub fn new(model: impl Into<String>, payload: Payload) -> Self {
        Self {
            model: model.into(),
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Sets the document id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the relations to connect.
    #[must_use]
    pub fn connect(mut self, connect: Payload) -> Self {
        self.connect = Some(connect);
        self
    }

    /// Sets the relations to disconnect.
    #[must_use]
    pub fn disconnect(mut self, disconnect: Payload) -> Self {
        self.disconnect = Some(disconnect);
        self
    }

    /// Sets the single-page rendering flag.
    #[must_use]
    pub const fn single_page_data(mut self, single_page_data: bool) -> Self {
        self.single_page_data = single_page_data;
        self
    }

    /// Sets the forced-update flag.
    #[must_use]
    pub const fn force_update(mut self, force_update: bool) -> Self {
        self.force_update = force_update;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_decodes_minimal_shape() {
        let doc: Document = serde_json::from_value(json!({
            "id": "123",
            "data": { "title": "Test Todo", "status": "todo" }
        }))
        .unwrap();

        assert_eq!(doc.id, "123");
        assert_eq!(doc.data["title"], "Test Todo");
        assert_eq!(doc.meta, DocumentMeta::default());
        assert!(doc.kind.is_none());
    }

    #[test]
    fn test_document_decodes_full_shape() {
        let doc: Document = serde_json::from_value(json!({
            "id": "123",
            "_key": "k-123",
            "data": {},
            "meta": {
                "created_at": "2024-01-15T10:30:00Z",
                "updated_at": "2024-01-16T08:00:00Z",
                "status": "published",
                "revision": false
            },
            "expire_at": "2025-01-01T00:00:00Z",
            "relation_doc_id": "rel-9",
            "type": "todos"
        }))
        .unwrap();

        assert_eq!(doc.key.as_deref(), Some("k-123"));
        assert_eq!(doc.meta.status.as_deref(), Some("published"));
        assert_eq!(doc.meta.revision, Some(false));
        assert_eq!(
            doc.meta.created_at.unwrap().to_rfc3339(),
            "2024-01-15T10:30:00+00:00"
        );
        assert!(doc.expire_at.is_some());
        assert_eq!(doc.relation_doc_id.as_deref(), Some("rel-9"));
        assert_eq!(doc.kind.as_deref(), Some("todos"));
    }

    #[test]
    fn test_document_narrows_payload_type() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Todo {
            title: String,
        }

        let doc: Document<Todo> = serde_json::from_value(json!({
            "id": "1",
            "data": { "title": "typed", "extra": true }
        }))
        .unwrap();

        assert_eq!(doc.data, Todo { title: "typed".to_string() });
    }

    #[test]
    fn test_search_result_count_may_exceed_results() {
        let result: SearchResult = serde_json::from_value(json!({
            "results": [{ "id": "1", "data": {} }],
            "count": 42
        }))
        .unwrap();

        assert_eq!(result.results.len(), 1);
        assert_eq!(result.count, 42);
    }

    #[test]
    fn test_search_params_only_forward_set_fields() {
        let params = SearchParams {
            limit: Some(10),
            where_: Some(json!({ "status": "todo" })),
            ..SearchParams::default()
        };

        let vars = params.to_variables();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["limit"], 10);
        assert_eq!(vars["where"], json!({ "status": "todo" }));
        assert!(SearchParams::default().to_variables().is_empty());
    }

    #[test]
    fn test_create_and_update_request_builder() {
        let request = CreateAndUpdateRequest::new("todos", Payload::new())
            .with_id("abc")
            .single_page_data(true)
            .force_update(true);

        assert_eq!(request.model, "todos");
        assert_eq!(request.id.as_deref(), Some("abc"));
        assert!(request.payload.is_some());
        assert!(request.single_page_data);
        assert!(request.force_update);
        assert!(request.connect.is_none());
    }
}
