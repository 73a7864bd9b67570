use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object listing failed: {0}")]
    Listing(String),

    #[error("URL signing failed: {0}")]
    Signing(String),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::Listing(msg) | StorageError::Signing(msg) => {
                ApplicationError::StorageError(format!("Storage error: {}", msg))
            }
        }
    }
}
