//! Typed view over [`ApitoClient`].

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::apito::ApitoClient;
use crate::documents::{CreateAndUpdateRequest, Document, Payload, SearchParams, SearchResult};
use crate::error::ApitoError;

/// [`ApitoClient`] with document payloads decoded into `T`.
///
/// Every method sends exactly what the corresponding [`ApitoClient`] method
/// sends and fails the same way; only the payload type of the returned
/// documents differs. A payload that does not fit `T` fails with
/// [`ApitoError::Decode`].
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Todo {
///     title: String,
///     status: String,
/// }
///
/// let todos = client.typed::<Todo>();
/// let todo = todos.get_single_resource("todos", "123", false).await?;
/// println!("{} is {}", todo.data.title, todo.data.status);
/// ```
#[derive(Debug)]
pub struct TypedApitoClient<'a, T> {
    client: &'a ApitoClient,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Clone for TypedApitoClient<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedApitoClient<'_, T> {}

impl<'a, T: DeserializeOwned> TypedApitoClient<'a, T> {
    /// Wraps `client`.
    #[must_use]
    pub const fn new(client: &'a ApitoClient) -> Self {
        Self {
            client,
            _payload: PhantomData,
        }
    }

    /// Returns the wrapped client.
    #[must_use]
    pub const fn inner(&self) -> &'a ApitoClient {
        self.client
    }

    /// See [`ApitoClient::get_single_resource`].
    ///
    /// # Errors
    ///
    /// Same as [`ApitoClient::get_single_resource`], plus
    /// [`ApitoError::Decode`] if the payload does not fit `T`.
    pub async fn get_single_resource(
        &self,
        model: &str,
        id: &str,
        single_page_data: bool,
    ) -> Result<Document<T>, ApitoError> {
        self.client.fetch_single(model, id, single_page_data).await
    }

    /// See [`ApitoClient::search_resources`].
    ///
    /// # Errors
    ///
    /// Same as [`ApitoClient::search_resources`], plus
    /// [`ApitoError::Decode`] if a payload does not fit `T`.
    pub async fn search_resources(
        &self,
        model: &str,
        params: Option<SearchParams>,
    ) -> Result<SearchResult<T>, ApitoError> {
        self.client.fetch_search(model, params.as_ref()).await
    }

    /// See [`ApitoClient::get_relation_documents`].
    ///
    /// # Errors
    ///
    /// Same as [`ApitoClient::get_relation_documents`], plus
    /// [`ApitoError::Decode`] if a payload does not fit `T`.
    pub async fn get_relation_documents(
        &self,
        id: &str,
        connection: &Payload,
    ) -> Result<SearchResult<T>, ApitoError> {
        self.client.fetch_relation(id, connection).await
    }

    /// See [`ApitoClient::create_new_resource`].
    ///
    /// # Errors
    ///
    /// Same as [`ApitoClient::create_new_resource`], plus
    /// [`ApitoError::Decode`] if the payload does not fit `T`.
    pub async fn create_new_resource(
        &self,
        request: &CreateAndUpdateRequest,
    ) -> Result<Document<T>, ApitoError> {
        self.client.upsert(request, false).await
    }

    /// See [`ApitoClient::update_resource`].
    ///
    /// # Errors
    ///
    /// Same as [`ApitoClient::update_resource`], plus
    /// [`ApitoError::Decode`] if the payload does not fit `T`.
    pub async fn update_resource(
        &self,
        request: &CreateAndUpdateRequest,
    ) -> Result<Document<T>, ApitoError> {
        self.client.upsert(request, true).await
    }

    /// See [`ApitoClient::delete_resource`].
    ///
    /// # Errors
    ///
    /// Same as [`ApitoClient::delete_resource`].
    pub async fn delete_resource(&self, model: &str, id: &str) -> Result<(), ApitoError> {
        self.client.delete_resource(model, id).await
    }

    /// See [`ApitoClient::generate_tenant_token`].
    ///
    /// # Errors
    ///
    /// Same as [`ApitoClient::generate_tenant_token`].
    pub async fn generate_tenant_token(
        &self,
        token: &str,
        tenant_id: &str,
    ) -> Result<String, ApitoError> {
        self.client.generate_tenant_token(token, tenant_id).await
    }

    /// See [`ApitoClient::debug`].
    ///
    /// # Errors
    ///
    /// Same as [`ApitoClient::debug`].
    pub async fn debug(&self, stage: &str, data: Value) -> Result<Value, ApitoError> {
        self.client.debug(stage, data).await
    }
}

// Verify TypedApitoClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypedApitoClient<'static, Payload>>();
};
