//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction, so an
//! [`ApitoConfig`](crate::ApitoConfig) can only ever hold usable values.

use crate::error::ConfigError;
use std::fmt;

/// A validated Apito API key.
///
/// The key is sent on every request, so its `Debug` output is masked to keep
/// it out of logs.
///
/// # Example
///
/// ```rust
/// use apito_client::ApiKey;
///
/// let key = ApiKey::new("ak_live_123").unwrap();
/// assert_eq!(key.as_ref(), "ak_live_123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or blank.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A tenant identifier sent in the tenant header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a new tenant id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTenantId`] if the id is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyTenantId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated GraphQL endpoint URL.
///
/// Only `http` and `https` URLs with a non-empty host are accepted. The URL
/// is used verbatim as the POST target.
///
/// # Example
///
/// ```rust
/// use apito_client::EndpointUrl;
///
/// let url = EndpointUrl::new("https://api.apito.io/secured/graphql").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.apito.io");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_tenant_id_rejects_blank() {
        assert!(matches!(TenantId::new(""), Err(ConfigError::EmptyTenantId)));
        assert_eq!(TenantId::new("tenant-1").unwrap().as_ref(), "tenant-1");
    }

    #[test]
    fn test_endpoint_url_accepts_http_and_https() {
        let url = EndpointUrl::new("https://api.apito.io/secured/graphql").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.apito.io");
        assert_eq!(url.as_ref(), "https://api.apito.io/secured/graphql");

        let url = EndpointUrl::new("http://127.0.0.1:5050/graphql").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_endpoint_url_trims_whitespace() {
        let url = EndpointUrl::new("  https://api.apito.io/graphql ").unwrap();
        assert_eq!(url.to_string(), "https://api.apito.io/graphql");
    }

    #[test]
    fn test_endpoint_url_rejects_invalid() {
        assert!(EndpointUrl::new("api.apito.io/graphql").is_err());
        assert!(EndpointUrl::new("https://").is_err());
        assert!(EndpointUrl::new("ftp://api.apito.io").is_err());
        assert!(EndpointUrl::new("https:///graphql").is_err());
    }
}
