use chrono::{DateTime, Utc};

/// One entry returned by a prefix listing. Owned by the storage provider,
/// read-only here. Zero-size entries are folder placeholders, not files.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

impl StoredObject {
    /// The text after the final `/` in the key. Keys are always prefixed
    /// with `{userId}/`, so a real file never yields an empty name.
    pub fn file_name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }

    /// Lowercased text after the last `.` of the file name. Names with no
    /// dot (or nothing after it) are classified as "unknown".
    pub fn extension(&self) -> String {
        match self.file_name().rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext.to_ascii_lowercase(),
            _ => "unknown".to_string(),
        }
    }
}
