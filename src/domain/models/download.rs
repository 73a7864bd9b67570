/// A file name paired with a time-limited signed download URL. The URL
/// expiry is enforced by the storage provider; nothing here tracks or
/// revokes issued links.
#[derive(Debug, Clone)]
pub struct DownloadLink {
    pub file_name: String,
    pub url: String,
}
