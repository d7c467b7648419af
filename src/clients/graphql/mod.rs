//! GraphQL executor for the Apito API.
//!
//! This module sits between the HTTP transport and the resource operations:
//!
//! - [`GraphqlClient`]: posts a document with variables and unwraps `data`
//! - [`GraphqlResponse`], [`GraphqlErrorEntry`], [`GraphqlLocation`]: the
//!   `{data, errors}` envelope
//! - [`GraphqlError`]: raised when the `errors` list is non-empty
//!
//! # Response Structure
//!
//! - `data`: the query result
//! - `errors`: GraphQL errors. Any entry fails the call, even alongside `data`
//! - `extensions`: server-specific information, ignored by the executor

mod client;
mod errors;
mod response;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use response::{GraphqlErrorEntry, GraphqlLocation, GraphqlResponse};
