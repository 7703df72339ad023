//! Get trait for fetching single entities.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::DepsDevClient;
use crate::error::Result;

/// Fetch a single entity by key.
///
/// Implementors only describe where the entity lives; the request itself is
/// the shared [`DepsDevClient::fetch`] round trip.
///
/// # Example
///
/// ```ignore
/// use depsdev::{DepsDevClient, Get, Package, PackageKey};
///
/// let client = DepsDevClient::default();
/// let package = Package::get(&client, PackageKey::new("cargo", "serde")).await?;
/// ```
#[async_trait]
pub trait Get: DeserializeOwned + Send + Sized {
    /// The key type for this entity (e.g. [`crate::VersionKey`]).
    type Id: Send + Sync;

    /// Relative path of the entity, with every identifier escaped.
    fn path(id: &Self::Id) -> String;

    /// Fetch the entity by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found, the request fails or the
    /// body does not decode.
    async fn get(client: &DepsDevClient, id: Self::Id) -> Result<Self> {
        client.fetch(&Self::path(&id)).await
    }
}
