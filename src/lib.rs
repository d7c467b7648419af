//! # Apito Rust Client
//!
//! A typed async client for the Apito GraphQL API. Each method builds a fixed
//! GraphQL document, sends one HTTP request and unwraps one field of the
//! response into a typed document.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApitoConfig`] and [`ApitoConfigBuilder`]
//! - Validated newtypes for the endpoint, API key and tenant id
//! - Resource operations via [`ApitoClient`]: get, search, relations, create,
//!   update, delete, tenant tokens and debug
//! - Caller-declared payload types via [`TypedApitoClient`]
//! - A single error type, [`ApitoError`], classifying transport, GraphQL and
//!   validation failures
//!
//! ## Quick Start
//!
//! ```rust
//! use apito_client::{ApitoClient, ApitoConfig, ApiKey, EndpointUrl};
//!
//! let config = ApitoConfig::builder()
//!     .endpoint(EndpointUrl::new("https://api.apito.io/secured/graphql").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ApitoClient::new(config).unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use apito_client::{CreateAndUpdateRequest, Payload, SearchParams};
//! use serde_json::json;
//!
//! let todo = client.get_single_resource("todos", "123", false).await?;
//!
//! let page = client
//!     .search_resources("todos", Some(SearchParams { limit: Some(10), ..Default::default() }))
//!     .await?;
//!
//! let mut payload = Payload::new();
//! payload.insert("title".to_string(), json!("Ship it"));
//! let created = client
//!     .create_new_resource(&CreateAndUpdateRequest::new("todos", payload))
//!     .await?;
//!
//! client.delete_resource("todos", &created.id).await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use apito_client::ApitoError;
//!
//! match client.get_single_resource("todos", "123", false).await {
//!     Ok(todo) => println!("{}", todo.data["title"]),
//!     Err(ApitoError::Http(e)) => eprintln!("transport failed ({:?}): {e}", e.status),
//!     Err(ApitoError::Graphql(e)) => eprintln!("{} GraphQL errors", e.errors.len()),
//!     Err(ApitoError::Validation(e)) => eprintln!("invalid: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and immutable
//! - **Fail-fast validation**: required inputs are checked before sending
//! - **Thread-safe**: all clients are `Send + Sync` and keep no per-call state
//! - **Async-first**: built on reqwest and the Tokio runtime
//! - **No retries**: one call, one request

pub mod clients;
pub mod config;
pub mod documents;
pub mod error;
pub mod queries;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, ApitoConfig, ApitoConfigBuilder, EndpointUrl, TenantId, TransportOptions,
};
pub use documents::{
    CreateAndUpdateRequest, Document, DocumentMeta, Payload, SearchParams, SearchResult,
};
pub use error::{ApitoError, ConfigError, ValidationError};

// Re-export client types
pub use clients::{
    ApitoClient, GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse,
    TypedApitoClient,
};
