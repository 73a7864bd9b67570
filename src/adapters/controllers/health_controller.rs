use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::domain::config::app::AppConfig;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub bucket: String,
    pub region: String,
}

pub struct HealthController;

impl HealthController {
    /// Liveness probe.
    /// GET /api/health
    pub async fn health_check(State(config): State<AppConfig>) -> Json<HealthResponse> {
        info!("Health check requested");

        Json(HealthResponse {
            status: "healthy".to_string(),
            bucket: config.bucket_name.clone(),
            region: config.region.clone(),
        })
    }
}
