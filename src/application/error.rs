#[derive(Debug)]
pub enum ApplicationError {
    MissingUserId,
    StorageError(String),
}
