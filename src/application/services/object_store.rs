use std::time::Duration;

use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::object::StoredObject};

/// Read-only view of the object store: one prefix listing plus per-object
/// signed download URLs. Implementations are substitutable in tests.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all objects whose key starts with `prefix`. Only a single
    /// listing page is consumed.
    async fn list_objects(&self, prefix: &str) -> Result<Vec<StoredObject>, ApplicationError>;

    /// Mint a signed GET URL for `key`, valid for `expires_in`, with the
    /// response disposition forced to `attachment` so browsers save the
    /// file instead of rendering it inline.
    async fn presign_download(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ApplicationError>;
}
