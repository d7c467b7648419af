//! Resource operations for the Apito API.
//!
//! - [`ApitoClient`]: get, search, relations, create, update, delete, tenant
//!   tokens and debug, with opaque [`Payload`](crate::Payload) documents
//! - [`TypedApitoClient`]: the same operations with payloads decoded into a
//!   caller-declared type
//!
//! # Validation
//!
//! Required inputs are checked before anything is sent. A missing field in
//! the response is reported as [`ValidationError`](crate::ValidationError)
//! too; the library never turns an absent result into an empty one.

mod client;
mod typed;

pub use client::ApitoClient;
pub use typed::TypedApitoClient;
