//! GraphQL query executor for the Apito API.
//!
//! This module provides the [`GraphqlClient`] type, which posts a query with
//! its variables and unwraps the `{data, errors}` envelope.

use crate::clients::graphql::{GraphqlError, GraphqlResponse};
use crate::clients::HttpClient;
use crate::config::ApitoConfig;
use crate::error::{ApitoError, ConfigError};

/// GraphQL executor for the Apito endpoint.
///
/// Each call to [`execute`](Self::execute) is a single stateless round trip:
/// one POST, no retries.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use apito_client::clients::graphql::GraphqlClient;
/// use serde_json::json;
///
/// let client = GraphqlClient::new(&config)?;
/// let data = client
///     .execute("query { debug(stage: \"ping\") }", json!({}), None)
///     .await?;
/// println!("{}", data["debug"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL executor from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the transport cannot be built from the
    /// configured options.
    pub fn new(config: &ApitoConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Executes a GraphQL document and returns the `data` map.
    ///
    /// # Arguments
    ///
    /// * `query` - The GraphQL document
    /// * `variables` - Variables for the document
    /// * `tenant_override` - Tenant id for this call only, replacing the
    ///   configured default
    ///
    /// # Errors
    ///
    /// - [`ApitoError::Http`] on network errors, timeouts and non-2xx responses
    /// - [`ApitoError::Graphql`] when the envelope's `errors` list is non-empty,
    ///   regardless of `data`
    /// - [`ApitoError::Decode`] when the body is not a GraphQL envelope
    pub async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
        tenant_override: Option<&str>,
    ) -> Result<serde_json::Map<String, serde_json::Value>, ApitoError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self.http_client.post_json(&body, tenant_override).await?;
        let raw: serde_json::Value = serde_json::from_str(&response.text)?;
        let envelope: GraphqlResponse = serde_json::from_value(raw.clone())?;

        if envelope.has_errors() {
            let errors = envelope.errors.unwrap_or_default();
            tracing::warn!(
                count = errors.len(),
                "Apito returned GraphQL errors: {}",
                errors[0].message
            );
            return Err(GraphqlError::new(errors, raw).into());
        }

        Ok(envelope.data.unwrap_or_default())
    }
}
