mod adapters;
mod application;
mod domain;
mod services;

use adapters::{
    controllers::{
        file_controller::FileController, health_controller::HealthController,
        portal_controller::PortalController,
    },
    state::AppState,
};
use application::services::UserFileService;
use axum::{routing::get, Router};
use domain::config::{app::AppConfig, storage::StorageSecrets};
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize AWS SDK crypto provider (required for aws-sdk-s3)
    // This must be called before any AWS SDK operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let secrets = StorageSecrets {
        region: std::env::var("AWS_REGION")
            .expect("ERROR: AWS_REGION environment variable must be set"),
        access_key_id: std::env::var("AWS_ACCESS_KEY_ID")
            .expect("ERROR: AWS_ACCESS_KEY_ID environment variable must be set"),
        secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY")
            .expect("ERROR: AWS_SECRET_ACCESS_KEY environment variable must be set"),
        // Present when running with short-lived STS credentials
        session_token: std::env::var("AWS_SESSION_TOKEN").ok(),
        bucket_name: std::env::var("S3_BUCKET_NAME")
            .expect("ERROR: S3_BUCKET_NAME environment variable must be set"),
    };

    let config = AppConfig {
        port: std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16"),
        liff_id: std::env::var("LIFF_ID")
            .expect("ERROR: LIFF_ID environment variable must be set"),
        bucket_name: secrets.bucket_name.clone(),
        region: secrets.region.clone(),
    };

    tracing::info!(
        "Starting file portal for bucket {} in {}",
        config.bucket_name,
        config.region
    );

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    let object_store = services::create_object_store(secrets).await;

    let app_state = AppState {
        config: config.clone(),
        user_files: UserFileService::new(object_store),
    };

    let router = Router::new()
        .route("/", get(PortalController::index))
        .route("/api/get-user-files", get(FileController::get_user_files))
        .route("/api/health", get(HealthController::health_check))
        .layer(cors)
        .with_state(app_state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
