//! HTTP transport for Apito API communication.
//!
//! This module provides the [`HttpClient`] type, which sends a single JSON
//! POST per call to the configured endpoint with the authentication headers
//! attached.

use std::collections::HashMap;

use reqwest::header::{HeaderName, HeaderValue};

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::ApitoConfig;
use crate::error::ConfigError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-APITO-KEY";

/// Header carrying the tenant id.
pub const TENANT_ID_HEADER: &str = "X-Apito-Tenant-ID";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Apito endpoint.
///
/// The client handles:
/// - Default headers (`Content-Type`, `Accept`, `User-Agent`, API key, tenant)
/// - Per-call tenant override
/// - Timeout and redirect settings from [`ApitoConfig`]
/// - Classification of transport failures into [`HttpError`]
///
/// There is no retry loop: every call sends exactly one request.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no per-call state, so concurrent
/// calls through a shared reference do not interfere.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The endpoint every request is posted to.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTransportOption`] if an extra header is
    /// not a valid HTTP header or the underlying client cannot be built.
    pub fn new(config: &ApitoConfig) -> Result<Self, ConfigError> {
        let transport = config.transport();

        let user_agent_prefix = transport
            .user_agent_prefix
            .as_deref()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Apito Rust Client v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        for (name, value) in &transport.headers {
            validate_header(name, value)?;
            if is_reserved_header(name) {
                tracing::warn!("Ignoring extra header '{name}': it is set by the client");
                continue;
            }
            default_headers.insert(name.clone(), value.clone());
        }
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );
        if let Some(tenant_id) = config.tenant_id() {
            default_headers.insert(TENANT_ID_HEADER.to_string(), tenant_id.to_string());
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout());
        if let Some(connect_timeout) = transport.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(max_redirects) = transport.max_redirects {
            let policy = if max_redirects == 0 {
                reqwest::redirect::Policy::none()
            } else {
                reqwest::redirect::Policy::limited(max_redirects)
            };
            builder = builder.redirect(policy);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigError::InvalidTransportOption {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            default_headers,
        })
    }

    /// Returns the endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the headers for one request, with the tenant override applied.
    ///
    /// A per-call tenant id replaces the configured default.
    #[must_use]
    pub fn request_headers(&self, tenant_override: Option<&str>) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(tenant_id) = tenant_override {
            headers.insert(TENANT_ID_HEADER.to_string(), tenant_id.to_string());
        }
        headers
    }

    /// POSTs a JSON body to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request could not be sent, timed out, or
    /// the response status was not 2xx.
    pub async fn post_json(
        &self,
        body: &serde_json::Value,
        tenant_override: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let headers = self.request_headers(tenant_override);

        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        let req_builder = req_builder.body(body.to_string());

        tracing::debug!(
            endpoint = %self.endpoint,
            tenant = headers.contains_key(TENANT_ID_HEADER),
            "Sending Apito GraphQL request"
        );

        let res = req_builder.send().await.map_err(|e| {
            tracing::warn!("Apito request failed before a response was received: {e}");
            HttpError::from(e)
        })?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let response = HttpResponse::new(code, res_headers, body_text);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            status = code,
            request_id = response.request_id().unwrap_or_default(),
            "Apito responded with a non-success status"
        );
        Err(HttpError::from_response(code, response.body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Headers the client always sets itself, compared case-insensitively.
const RESERVED_HEADERS: [&str; 5] = [
    "User-Agent",
    "Accept",
    "Content-Type",
    API_KEY_HEADER,
    TENANT_ID_HEADER,
];

fn is_reserved_header(name: &str) -> bool {
    RESERVED_HEADERS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

fn validate_header(name: &str, value: &str) -> Result<(), ConfigError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| ConfigError::InvalidTransportOption {
        reason: format!("'{name}' is not a valid header name"),
    })?;
    HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidTransportOption {
        reason: format!("value of header '{name}' is not a valid header value"),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, EndpointUrl, TenantId, TransportOptions};

    fn config_builder() -> crate::config::ApitoConfigBuilder {
        ApitoConfig::builder()
            .endpoint(EndpointUrl::new("https://api.apito.io/secured/graphql").unwrap())
            .api_key(ApiKey::new("test-api-key").unwrap())
    }

    #[test]
    fn test_client_posts_to_configured_endpoint() {
        let client = HttpClient::new(&config_builder().build().unwrap()).unwrap();
        assert_eq!(client.endpoint(), "https://api.apito.io/secured/graphql");
    }

    #[test]
    fn test_api_key_and_content_type_headers() {
        let client = HttpClient::new(&config_builder().build().unwrap()).unwrap();
        let headers = client.default_headers();

        assert_eq!(headers.get(API_KEY_HEADER), Some(&"test-api-key".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert!(headers.get(TENANT_ID_HEADER).is_none());
    }

    #[test]
    fn test_configured_tenant_header() {
        let config = config_builder()
            .tenant_id(TenantId::new("tenant-a").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(
            client.request_headers(None).get(TENANT_ID_HEADER),
            Some(&"tenant-a".to_string())
        );
    }

    #[test]
    fn test_per_call_tenant_overrides_default() {
        let config = config_builder()
            .tenant_id(TenantId::new("tenant-a").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let headers = client.request_headers(Some("tenant-b"));
        assert_eq!(headers.get(TENANT_ID_HEADER), Some(&"tenant-b".to_string()));
        // The default stays untouched for subsequent calls.
        assert_eq!(
            client.default_headers().get(TENANT_ID_HEADER),
            Some(&"tenant-a".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = config_builder()
            .transport(TransportOptions {
                user_agent_prefix: Some("MyApp/1.0".to_string()),
                ..TransportOptions::default()
            })
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Apito Rust Client v"));
    }

    #[test]
    fn test_extra_headers_cannot_override_api_key() {
        let mut headers = HashMap::new();
        headers.insert(API_KEY_HEADER.to_string(), "spoofed".to_string());
        headers.insert("x-apito-key".to_string(), "spoofed".to_string());
        headers.insert("content-type".to_string(), "text/plain".to_string());
        headers.insert("x-apito-tenant-id".to_string(), "other".to_string());
        headers.insert("X-Trace".to_string(), "on".to_string());
        let config = config_builder()
            .transport(TransportOptions {
                headers,
                ..TransportOptions::default()
            })
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(
            client.default_headers().get(API_KEY_HEADER),
            Some(&"test-api-key".to_string())
        );
        assert_eq!(client.default_headers().get("X-Trace"), Some(&"on".to_string()));
        for name in ["x-apito-key", "content-type", "x-apito-tenant-id"] {
            assert!(client.default_headers().get(name).is_none(), "{name}");
        }
        assert!(client.request_headers(None).get(TENANT_ID_HEADER).is_none());
    }

    #[test]
    fn test_reserved_header_match_ignores_case() {
        assert!(is_reserved_header("x-apito-key"));
        assert!(is_reserved_header("CONTENT-TYPE"));
        assert!(is_reserved_header("user-agent"));
        assert!(!is_reserved_header("X-Trace"));
    }

    #[test]
    fn test_non_utf8_response_header_is_kept_lossily() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "x-note",
            HeaderValue::from_bytes(b"caf\xe9").unwrap(),
        );
        headers.insert("x-request-id", HeaderValue::from_static("req-1"));

        let parsed = HttpClient::parse_response_headers(&headers);

        assert_eq!(parsed["x-note"], vec!["caf\u{fffd}".to_string()]);
        assert_eq!(parsed["x-request-id"], vec!["req-1".to_string()]);
    }

    #[test]
    fn test_invalid_extra_header_is_rejected() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "x".to_string());
        let config = config_builder()
            .transport(TransportOptions {
                headers,
                ..TransportOptions::default()
            })
            .build()
            .unwrap();

        assert!(matches!(
            HttpClient::new(&config),
            Err(ConfigError::InvalidTransportOption { .. })
        ));
    }

    #[test]
    fn test_redirect_and_connect_timeout_options_build() {
        let config = config_builder()
            .transport(TransportOptions {
                max_redirects: Some(0),
                connect_timeout: Some(std::time::Duration::from_secs(1)),
                ..TransportOptions::default()
            })
            .build()
            .unwrap();

        assert!(HttpClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
