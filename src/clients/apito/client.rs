//! Resource operations for the Apito API.
//!
//! This module provides [`ApitoClient`], one method per backend operation.
//! Each method validates its inputs, sends one fixed GraphQL document and
//! unwraps a single field of the response.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::apito::TypedApitoClient;
use crate::clients::graphql::GraphqlClient;
use crate::config::ApitoConfig;
use crate::documents::{CreateAndUpdateRequest, Document, Payload, SearchParams, SearchResult};
use crate::error::{ApitoError, ValidationError};
use crate::queries::{self, Operation};

/// Filter keys copied from `connection.filter` into the relation query.
const RELATION_FILTER_KEYS: [&str; 4] = ["page", "limit", "where", "search"];

/// Client for Apito resource operations.
///
/// The client holds only its immutable configuration and the HTTP
/// transport. Every method takes `&self` and keeps no per-call state, so a
/// single client can serve concurrent calls.
///
/// # Thread Safety
///
/// `ApitoClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use apito_client::{ApitoClient, ApitoConfig, ApiKey, EndpointUrl, SearchParams};
/// use serde_json::json;
///
/// let config = ApitoConfig::builder()
///     .endpoint(EndpointUrl::new("https://api.apito.io/secured/graphql")?)
///     .api_key(ApiKey::new("my-api-key")?)
///     .build()?;
/// let client = ApitoClient::new(config)?;
///
/// let todo = client.get_single_resource("todos", "123", false).await?;
/// println!("{}", todo.data["title"]);
///
/// let open = client
///     .search_resources(
///         "todos",
///         Some(SearchParams {
///             where_: Some(json!({ "status": "todo" })),
///             limit: Some(10),
///             ..SearchParams::default()
///         }),
///     )
///     .await?;
/// println!("{} of {}", open.results.len(), open.count);
/// ```
#[derive(Debug)]
pub struct ApitoClient {
    /// The GraphQL executor.
    graphql: GraphqlClient,
    /// The configuration the client was built from.
    config: ApitoConfig,
}

// Verify ApitoClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApitoClient>();
};

impl ApitoClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ApitoError::Config`] if the transport cannot be built from
    /// the configured options.
    pub fn new(config: ApitoConfig) -> Result<Self, ApitoError> {
        let graphql = GraphqlClient::new(&config)?;
        Ok(Self { graphql, config })
    }

    /// Returns the configuration the client was built from.
    #[must_use]
    pub const fn config(&self) -> &ApitoConfig {
        &self.config
    }

    /// Returns the underlying GraphQL executor, for ad-hoc queries.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Returns a view of this client that decodes payloads into `T`.
    #[must_use]
    pub fn typed<T: DeserializeOwned>(&self) -> TypedApitoClient<'_, T> {
        TypedApitoClient::new(self)
    }

    /// Fetches a single document.
    ///
    /// # Errors
    ///
    /// Returns [`ApitoError::Validation`] with `"Resource not found"` if the
    /// response has no `getSingleData`, plus the executor's errors.
    pub async fn get_single_resource(
        &self,
        model: &str,
        id: &str,
        single_page_data: bool,
    ) -> Result<Document, ApitoError> {
        self.fetch_single(model, id, single_page_data).await
    }

    /// Searches documents of `model`.
    ///
    /// The set fields of `params` are merged into the variables.
    ///
    /// # Errors
    ///
    /// Returns [`ApitoError::Validation`] if the response has no
    /// `getModelData`, plus the executor's errors.
    pub async fn search_resources(
        &self,
        model: &str,
        params: Option<SearchParams>,
    ) -> Result<SearchResult, ApitoError> {
        self.fetch_search(model, params.as_ref()).await
    }

    /// Fetches the documents related to `id` through `connection`.
    ///
    /// `connection` must contain a string `model`. Its optional `filter`
    /// sub-map contributes `page`, `limit`, `where` and `search`; other filter
    /// keys are not forwarded.
    ///
    /// # Errors
    ///
    /// Returns [`ApitoError::Validation`] before sending if `connection.model`
    /// is missing, or after the call if the response has no `getModelData`.
    pub async fn get_relation_documents(
        &self,
        id: &str,
        connection: &Payload,
    ) -> Result<SearchResult, ApitoError> {
        self.fetch_relation(id, connection).await
    }

    /// Creates a document.
    ///
    /// # Errors
    ///
    /// Returns [`ApitoError::Validation`] before sending if `model` or
    /// `payload` is missing, or after the call if the response has no
    /// `upsertModelData`.
    pub async fn create_new_resource(
        &self,
        request: &CreateAndUpdateRequest,
    ) -> Result<Document, ApitoError> {
        self.upsert(request, false).await
    }

    /// Updates a document.
    ///
    /// # Errors
    ///
    /// Returns [`ApitoError::Validation`] before sending naming the first of
    /// `id`, `model`, `payload` that is missing, or after the call if the
    /// response has no `upsertModelData`.
    pub async fn update_resource(
        &self,
        request: &CreateAndUpdateRequest,
    ) -> Result<Document, ApitoError> {
        self.upsert(request, true).await
    }

    /// Deletes a document. Success is the absence of an error.
    ///
    /// # Errors
    ///
    /// Returns the executor's errors.
    pub async fn delete_resource(&self, model: &str, id: &str) -> Result<(), ApitoError> {
        let mut vars = Payload::new();
        vars.insert("model_name".to_string(), model.into());
        vars.insert("_id".to_string(), id.into());

        self.run(queries::DELETE_MODEL_DATA, vars, None).await?;
        Ok(())
    }

    /// Exchanges `token` for a token scoped to `tenant_id`.
    ///
    /// `tenant_id` is sent as the tenant header for this call only.
    ///
    /// # Errors
    ///
    /// Returns [`ApitoError::Validation`] with
    /// `"Invalid response format for tenant token"` if the response carries
    /// no token, plus the executor's errors.
    pub async fn generate_tenant_token(
        &self,
        token: &str,
        tenant_id: &str,
    ) -> Result<String, ApitoError> {
        let mut vars = Payload::new();
        vars.insert("token".to_string(), token.into());

        let mut data = self
            .run(queries::GENERATE_TENANT_TOKEN, vars, Some(tenant_id))
            .await?;

        take_field(&mut data, "generateTenantToken")
            .as_ref()
            .and_then(|v| v.get("token"))
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| ValidationError::new("Invalid response format for tenant token").into())
    }

    /// Runs the backend `debug` query and returns its result unvalidated.
    ///
    /// Returns `Value::Null` if the response has no `debug` field.
    ///
    /// # Errors
    ///
    /// Returns the executor's errors.
    pub async fn debug(&self, stage: &str, data: Value) -> Result<Value, ApitoError> {
        let mut vars = Payload::new();
        vars.insert("stage".to_string(), stage.into());
        vars.insert("data".to_string(), data);

        let mut response = self.run(queries::DEBUG, vars, None).await?;
        Ok(response.remove("debug").unwrap_or(Value::Null))
    }

    pub(crate) async fn fetch_single<T: DeserializeOwned>(
        &self,
        model: &str,
        id: &str,
        single_page_data: bool,
    ) -> Result<Document<T>, ApitoError> {
        let mut vars = Payload::new();
        vars.insert("model".to_string(), model.into());
        vars.insert("_id".to_string(), id.into());
        vars.insert("single_page_data".to_string(), single_page_data.into());

        let mut data = self.run(queries::GET_SINGLE_DATA, vars, None).await?;
        decode_field(&mut data, "getSingleData", "Resource not found")
    }

    pub(crate) async fn fetch_search<T: DeserializeOwned>(
        &self,
        model: &str,
        params: Option<&SearchParams>,
    ) -> Result<SearchResult<T>, ApitoError> {
        let mut vars = params.map(SearchParams::to_variables).unwrap_or_default();
        vars.insert("model".to_string(), model.into());

        let mut data = self.run(queries::GET_MODEL_DATA, vars, None).await?;
        decode_field(
            &mut data,
            "getModelData",
            "Invalid response format for search results",
        )
    }

    pub(crate) async fn fetch_relation<T: DeserializeOwned>(
        &self,
        id: &str,
        connection: &Payload,
    ) -> Result<SearchResult<T>, ApitoError> {
        let vars = relation_variables(id, connection)?;

        let mut data = self.run(queries::GET_RELATION_DOCUMENTS, vars, None).await?;
        decode_field(&mut data, "getModelData", "Related documents not found")
    }

    pub(crate) async fn upsert<T: DeserializeOwned>(
        &self,
        request: &CreateAndUpdateRequest,
        is_update: bool,
    ) -> Result<Document<T>, ApitoError> {
        let vars = upsert_variables(request, is_update)?;

        let mut data = self.run(queries::UPSERT_MODEL_DATA, vars, None).await?;
        let missing = if is_update {
            "Invalid response format for updated resource"
        } else {
            "Invalid response format for created resource"
        };
        decode_field(&mut data, "upsertModelData", missing)
    }

    async fn run(
        &self,
        operation: Operation,
        variables: Payload,
        tenant_override: Option<&str>,
    ) -> Result<Payload, ApitoError> {
        let model = variables
            .get("model")
            .or_else(|| variables.get("model_name"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        tracing::debug!(
            operation = operation.name,
            model,
            "Executing Apito operation"
        );

        self.graphql
            .execute(operation.document, Value::Object(variables), tenant_override)
            .await
    }
}

/// Removes `field` from `data`, treating JSON `null` as absent.
fn take_field(data: &mut Payload, field: &str) -> Option<Value> {
    data.remove(field).filter(|v| !v.is_null())
}

/// Removes `field` from `data` and decodes it, or fails with `missing`.
fn decode_field<R: DeserializeOwned>(
    data: &mut Payload,
    field: &str,
    missing: &str,
) -> Result<R, ApitoError> {
    let value = take_field(data, field).ok_or_else(|| ValidationError::new(missing))?;
    Ok(serde_json::from_value(value)?)
}

/// Builds the variables for the relation query.
fn relation_variables(id: &str, connection: &Payload) -> Result<Payload, ValidationError> {
    let model = connection
        .get("model")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ValidationError::new("model is required in connection parameters"))?;

    let mut scoped = connection.clone();
    scoped.remove("filter");
    scoped.insert("_id".to_string(), id.into());

    let mut vars = Payload::new();
    vars.insert("model".to_string(), model.into());
    vars.insert("connection".to_string(), Value::Object(scoped));

    if let Some(Value::Object(filter)) = connection.get("filter") {
        for key in RELATION_FILTER_KEYS {
            if let Some(value) = filter.get(key) {
                vars.insert(key.to_string(), value.clone());
            }
        }
    }

    Ok(vars)
}

/// Validates an upsert request and builds its variables.
///
/// Fields are checked in order `id` (updates only), `model`, `payload`.
fn upsert_variables(
    request: &CreateAndUpdateRequest,
    require_id: bool,
) -> Result<Payload, ValidationError> {
    let id = request.id.as_deref().filter(|id| !id.is_empty());
    if require_id && id.is_none() {
        return Err(ValidationError::missing_field("id"));
    }
    if request.model.is_empty() {
        return Err(ValidationError::missing_field("model"));
    }
    let payload = request
        .payload
        .as_ref()
        .ok_or_else(|| ValidationError::missing_field("payload"))?;

    let mut vars = Payload::new();
    vars.insert("model_name".to_string(), request.model.clone().into());
    vars.insert("payload".to_string(), Value::Object(payload.clone()));
    if let Some(id) = id {
        vars.insert("_id".to_string(), id.into());
    }
    if let Some(connect) = &request.connect {
        vars.insert("connect".to_string(), Value::Object(connect.clone()));
    }
    if let Some(disconnect) = &request.disconnect {
        vars.insert("disconnect".to_string(), Value::Object(disconnect.clone()));
    }
    vars.insert(
        "single_page_data".to_string(),
        request.single_page_data.into(),
    );
    vars.insert("force_update".to_string(), request.force_update.into());

    Ok(vars)
}
