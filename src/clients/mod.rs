//! Client types for Apito API communication.
//!
//! # Overview
//!
//! The layers, from the bottom up:
//!
//! - [`HttpClient`]: sends one JSON POST to the endpoint with the API key
//!   and tenant headers, and turns transport failures into [`HttpError`]
//! - [`graphql::GraphqlClient`]: wraps a document and variables into a
//!   request, unwraps the `{data, errors}` envelope and raises
//!   [`graphql::GraphqlError`] on a non-empty `errors` list
//! - [`apito::ApitoClient`]: the resource operations
//! - [`apito::TypedApitoClient`]: the resource operations with typed payloads
//!
//! # No Retries
//!
//! Every call is a single request. Timeouts come from
//! [`ApitoConfig::timeout`](crate::ApitoConfig::timeout) and fail the call
//! with an [`HttpError`] that has no status code.

pub mod apito;
mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::HttpError;
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION, TENANT_ID_HEADER};
pub use http_response::HttpResponse;

pub use apito::{ApitoClient, TypedApitoClient};
pub use graphql::{GraphqlClient, GraphqlError};
