use axum::extract::FromRef;

use crate::{application::services::UserFileService, domain::config::app::AppConfig};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: AppConfig,
    pub user_files: UserFileService,
}
