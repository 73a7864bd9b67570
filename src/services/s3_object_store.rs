use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{
    config::{Credentials, Region},
    presigning::PresigningConfig,
    Client,
};
use chrono::DateTime;

use crate::{
    application::{error::ApplicationError, services::ObjectStore},
    domain::{config::storage::StorageSecrets, models::object::StoredObject},
    services::error::StorageError,
};

pub struct S3ObjectStore {
    client: Client,
    bucket_name: String,
}

impl S3ObjectStore {
    pub async fn new(secrets: StorageSecrets) -> Self {
        let credentials = Credentials::new(
            secrets.access_key_id,
            secrets.secret_access_key,
            secrets.session_token,
            None,
            "Static",
        );

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(secrets.region))
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            client: Client::new(&config),
            bucket_name: secrets.bucket_name,
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_objects(&self, prefix: &str) -> Result<Vec<StoredObject>, ApplicationError> {
        // Single ListObjectsV2 call: continuation tokens are not followed,
        // so anything beyond the first page is truncated.
        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket_name)
            .prefix(prefix)
            .send()
            .await
            .map_err(|e| StorageError::Listing(e.to_string()))?;

        let objects = response
            .contents()
            .iter()
            .filter_map(|entry| {
                let key = entry.key()?.to_string();
                let size = entry.size().unwrap_or(0).max(0) as u64;
                let last_modified = entry
                    .last_modified()
                    .and_then(|ts| DateTime::from_timestamp(ts.secs(), ts.subsec_nanos()))
                    .unwrap_or_default();
                Some(StoredObject {
                    key,
                    size,
                    last_modified,
                })
            })
            .collect();

        Ok(objects)
    }

    async fn presign_download(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ApplicationError> {
        let presign_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::Signing(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .response_content_disposition("attachment")
            .presigned(presign_config)
            .await
            .map_err(|e| StorageError::Signing(e.to_string()))?;

        Ok(presigned.uri().to_string())
    }
}
