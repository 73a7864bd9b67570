/// Process-level configuration, assembled from the environment once at
/// startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// LIFF app id injected into the portal page so the browser can
    /// initialize the LINE SDK.
    pub liff_id: String,
    pub bucket_name: String,
    pub region: String,
}
