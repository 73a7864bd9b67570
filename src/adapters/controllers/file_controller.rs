use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    adapters::dto::file_dto::UserFilesResponse,
    application::{error::ApplicationError, services::UserFileService},
};

#[derive(Debug, Deserialize)]
pub struct UserFilesParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

pub struct FileController;

impl FileController {
    /// GET /api/get-user-files?userId=...
    pub async fn get_user_files(
        State(user_files): State<UserFileService>,
        Query(params): Query<UserFilesParams>,
    ) -> Result<Json<UserFilesResponse>, ApplicationError> {
        let user_id = params.user_id.unwrap_or_default();
        let report = user_files.get_user_files(&user_id).await?;
        Ok(Json(UserFilesResponse::from(report)))
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;

    use super::*;
    use crate::{application::services::ObjectStore, domain::models::object::StoredObject};

    struct EmptyStore;

    #[async_trait]
    impl ObjectStore for EmptyStore {
        async fn list_objects(
            &self,
            _prefix: &str,
        ) -> Result<Vec<StoredObject>, ApplicationError> {
            Ok(Vec::new())
        }

        async fn presign_download(
            &self,
            _key: &str,
            _expires_in: Duration,
        ) -> Result<String, ApplicationError> {
            unreachable!("an empty listing must not trigger signing")
        }
    }

    fn state() -> State<UserFileService> {
        State(UserFileService::new(Arc::new(EmptyStore)))
    }

    #[tokio::test]
    async fn missing_user_id_is_a_bad_request() {
        let result =
            FileController::get_user_files(state(), Query(UserFilesParams { user_id: None }))
                .await;

        assert!(matches!(result, Err(ApplicationError::MissingUserId)));
    }

    #[tokio::test]
    async fn empty_user_id_is_a_bad_request() {
        let result = FileController::get_user_files(
            state(),
            Query(UserFilesParams {
                user_id: Some(String::new()),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApplicationError::MissingUserId)));
    }

    #[tokio::test]
    async fn empty_namespace_returns_the_zero_report() {
        let Json(response) = FileController::get_user_files(
            state(),
            Query(UserFilesParams {
                user_id: Some("U1".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.stats.total_count, 0);
        assert_eq!(response.stats.last_modified, None);
        assert!(response.files.is_empty());
    }
}
