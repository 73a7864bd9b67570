use std::{sync::Arc, time::Duration};

use futures::future::try_join_all;
use tracing::info;

use crate::{
    application::{error::ApplicationError, services::ObjectStore},
    domain::models::{download::DownloadLink, object::StoredObject, stats::FileStats},
};

/// Signed download URLs stay valid for one hour; expiry is enforced by the
/// storage provider, not tracked here.
const DOWNLOAD_LINK_TTL: Duration = Duration::from_secs(3600);

/// Everything the portal needs for one user: the aggregate stats plus one
/// download link per real file, in listing order.
#[derive(Debug, Clone)]
pub struct UserFilesReport {
    pub stats: FileStats,
    pub files: Vec<DownloadLink>,
}

/// Lists a user's namespace, folds the stats and mints download links.
/// Stateless between requests; every call hits the store fresh.
#[derive(Clone)]
pub struct UserFileService {
    store: Arc<dyn ObjectStore>,
}

impl UserFileService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// List all objects under `{user_id}/`, drop zero-size folder
    /// placeholders, compute stats over the remainder and sign one download
    /// URL per file. Fails as a whole if the listing or any signing call
    /// fails.
    pub async fn get_user_files(&self, user_id: &str) -> Result<UserFilesReport, ApplicationError> {
        if user_id.is_empty() {
            return Err(ApplicationError::MissingUserId);
        }

        let prefix = format!("{user_id}/");
        info!("Listing files for prefix: {}", prefix);

        let objects = self.store.list_objects(&prefix).await?;

        let valid: Vec<StoredObject> = objects.into_iter().filter(|o| o.size > 0).collect();
        if valid.is_empty() {
            return Ok(UserFilesReport {
                stats: FileStats::default(),
                files: Vec::new(),
            });
        }

        let stats = FileStats::from_objects(&valid);

        // Signing calls are independent; fan out concurrently. try_join_all
        // collects positionally, so completion order cannot reorder files.
        let files = try_join_all(valid.iter().map(|object| {
            let file_name = object.file_name().to_string();
            let key = object.key.clone();
            async move {
                let url = self.store.presign_download(&key, DOWNLOAD_LINK_TTL).await?;
                Ok::<_, ApplicationError>(DownloadLink { file_name, url })
            }
        }))
        .await?;

        info!("Signed {} download links for prefix: {}", files.len(), prefix);

        Ok(UserFilesReport { stats, files })
    }
}
