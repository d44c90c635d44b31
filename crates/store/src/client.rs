//! Generic REST client
//!
//! Endpoint contract (one set of verbs for every resource):
//! - `GET    /api/<resource>`        list all
//! - `POST   /api/<resource>`        create (identity absent/ignored)
//! - `PUT    /api/<resource>`        update (identity in body)
//! - `DELETE /api/<resource>/<id>`   delete by identity

use kadmin_core::Config;
use kadmin_model::Resource;

use crate::error::{StoreError, StoreResult};

/// HTTP client bound to one backend base URL, generic over resource type
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client for the configured backend
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// The backend base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource_url<T: Resource>(&self) -> String {
        format!("{}/api/{}", self.base_url, T::PATH)
    }

    /// Fetch the full list of `T`
    pub async fn list<T: Resource>(&self) -> StoreResult<Vec<T>> {
        let url = self.resource_url::<T>();
        tracing::debug!(url = %url, "list {}", T::PATH);
        let response = check(self.http.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Create a record (the server assigns the identity)
    pub async fn create<T: Resource>(&self, record: &T) -> StoreResult<()> {
        let url = self.resource_url::<T>();
        tracing::debug!(url = %url, "create {}", T::PATH);
        check(self.http.post(&url).json(record).send().await?).await?;
        Ok(())
    }

    /// Update a record, identity carried in the body
    pub async fn update<T: Resource>(&self, record: &T) -> StoreResult<()> {
        let url = self.resource_url::<T>();
        tracing::debug!(url = %url, id = ?record.id(), "update {}", T::PATH);
        check(self.http.put(&url).json(record).send().await?).await?;
        Ok(())
    }

    /// Delete a record by identity
    pub async fn delete<T: Resource>(&self, id: i64) -> StoreResult<()> {
        let url = format!("{}/{}", self.resource_url::<T>(), id);
        tracing::debug!(url = %url, "delete {}", T::PATH);
        check(self.http.delete(&url).send().await?).await?;
        Ok(())
    }
}

/// Mutation epilogue shared by create, update, and delete: on success
/// re-fetch and return the full list, on failure pass the error through
/// without issuing any further request.
pub async fn complete_mutation<T: Resource>(
    client: &ApiClient,
    result: StoreResult<()>,
) -> StoreResult<Vec<T>> {
    result?;
    client.list::<T>().await
}

/// Map non-2xx responses to `StoreError::Api`, carrying the body text
async fn check(response: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), body = %body, "request rejected");
    Err(StoreError::Api {
        status: status.as_u16(),
        body,
    })
}
