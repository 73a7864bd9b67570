mod error;
mod s3_object_store;

pub use error::StorageError;
pub use s3_object_store::S3ObjectStore;

use std::sync::Arc;

use crate::{application::services::ObjectStore, domain::config::storage::StorageSecrets};

pub async fn create_object_store(secrets: StorageSecrets) -> Arc<dyn ObjectStore> {
    Arc::new(S3ObjectStore::new(secrets).await)
}
