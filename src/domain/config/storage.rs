/// Credentials and location for the object store. The session token is
/// present when the process runs with short-lived STS credentials.
#[derive(Debug, Clone)]
pub struct StorageSecrets {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub bucket_name: String,
}
