//! Configuration types for the Apito client.
//!
//! # Overview
//!
//! - [`ApitoConfig`]: immutable settings captured when a client is built
//! - [`ApitoConfigBuilder`]: fluent builder for [`ApitoConfig`]
//! - [`TransportOptions`]: HTTP-level overrides handed to the transport
//! - [`ApiKey`], [`EndpointUrl`], [`TenantId`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use apito_client::{ApitoConfig, ApiKey, EndpointUrl, TenantId};
//!
//! let config = ApitoConfig::builder()
//!     .endpoint(EndpointUrl::new("https://api.apito.io/secured/graphql").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .tenant_id(TenantId::new("tenant-1").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod newtypes;

pub use newtypes::{ApiKey, EndpointUrl, TenantId};

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout (30 000 ms).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Transport-level overrides passed through to the HTTP client.
///
/// Every field is optional; unset fields keep the HTTP library's defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Maximum number of redirects to follow. `Some(0)` disables redirects.
    pub max_redirects: Option<usize>,
    /// Timeout for establishing the connection only.
    pub connect_timeout: Option<Duration>,
    /// Prefix prepended to the `User-Agent` header.
    pub user_agent_prefix: Option<String>,
    /// Extra headers added to every request. Entries naming a header the
    /// client sets itself (`User-Agent`, `Accept`, `Content-Type`, the API
    /// key or tenant header) are ignored, whatever their case.
    pub headers: HashMap<String, String>,
}

/// Configuration for an Apito client.
///
/// Immutable once built. `Clone + Send + Sync`, so a single configuration can
/// back any number of clients.
#[derive(Clone, Debug)]
pub struct ApitoConfig {
    endpoint: EndpointUrl,
    api_key: ApiKey,
    tenant_id: Option<TenantId>,
    timeout: Duration,
    transport: TransportOptions,
}

impl ApitoConfig {
    /// Creates a new builder for constructing an `ApitoConfig`.
    #[must_use]
    pub fn builder() -> ApitoConfigBuilder {
        ApitoConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the default tenant id, if configured.
    #[must_use]
    pub const fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the transport overrides.
    #[must_use]
    pub const fn transport(&self) -> &TransportOptions {
        &self.transport
    }
}

// Verify ApitoConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApitoConfig>();
};

/// Builder for constructing [`ApitoConfig`] instances.
///
/// `endpoint` and `api_key` are required.
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `tenant_id`: `None`
/// - `transport`: [`TransportOptions::default`]
#[derive(Debug, Default)]
pub struct ApitoConfigBuilder {
    endpoint: Option<EndpointUrl>,
    api_key: Option<ApiKey>,
    tenant_id: Option<TenantId>,
    timeout: Option<Duration>,
    transport: Option<TransportOptions>,
}

impl ApitoConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the default tenant id sent with every request.
    #[must_use]
    pub fn tenant_id(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets transport-level overrides.
    #[must_use]
    pub fn transport(mut self, transport: TransportOptions) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the [`ApitoConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<ApitoConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(ApitoConfig {
            endpoint,
            api_key,
            tenant_id: self.tenant_id,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            transport: self.transport.unwrap_or_default(),
        })
    }
}
