//! Remote resource traits
//!
//! One trait per capability so a resource only exposes what its endpoints
//! support: reservations are read-only, health alerts cannot be updated.
//! Create and update take the manager's form types and validate them before
//! anything is sent.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{RecordId, Searchable};

use crate::envelope::{decode_list, decode_one};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

/// Read access to a remote collection
#[async_trait]
pub trait ListResource: Send + Sync + 'static {
    type Record: Searchable + Clone + Send + Sync + 'static;

    /// Resource name used in log fields
    const NAME: &'static str;

    /// Fetch the whole collection; a 404 is an empty collection
    async fn list(&self) -> ClientResult<Vec<Self::Record>>;

    async fn get(&self, id: RecordId) -> ClientResult<Self::Record>;
}

#[async_trait]
pub trait CreateResource: ListResource {
    /// Unvalidated input
    type Form: Send + Sync;
    /// What the backend hands back
    type Created: Send;

    async fn create(&self, form: &Self::Form) -> ClientResult<Self::Created>;
}

#[async_trait]
pub trait UpdateResource: ListResource {
    type Update: Send + Sync;

    async fn update(&self, id: RecordId, update: &Self::Update) -> ClientResult<()>;
}

#[async_trait]
pub trait DeleteResource: ListResource {
    async fn delete(&self, id: RecordId) -> ClientResult<()>;
}

pub(crate) async fn fetch_list<H, T>(
    http: &H,
    resource: &'static str,
    path: &str,
    key: &str,
) -> ClientResult<Vec<T>>
where
    H: HttpClient,
    T: DeserializeOwned,
{
    match http.get::<Value>(path).await {
        Ok(body) => {
            let items: Vec<T> = decode_list(body, key)?;
            tracing::debug!(resource, count = items.len(), "Fetched collection");
            Ok(items)
        }
        Err(ClientError::NotFound(_)) => {
            tracing::debug!(resource, "Collection not found, treating as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

pub(crate) async fn fetch_one<H, T>(http: &H, path: &str, key: &str) -> ClientResult<T>
where
    H: HttpClient,
    T: DeserializeOwned,
{
    decode_one(http.get::<Value>(path).await?, key)
}
