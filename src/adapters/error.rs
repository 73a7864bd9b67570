use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApplicationError::MissingUserId => {
                warn!("Request rejected: userId parameter is missing");
                (StatusCode::BAD_REQUEST, "User ID is required".to_string())
            }
            ApplicationError::StorageError(ref msg) => {
                // The cause stays in the server log; clients get a generic
                // message with no provider internals.
                error!("Storage failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not list files".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
