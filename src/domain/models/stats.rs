use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::models::object::StoredObject;

const BYTES_PER_MB: f64 = (1024 * 1024) as f64;

/// Aggregate snapshot over one listing. Recomputed fully on every request,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct FileStats {
    pub total_count: usize,
    pub total_size_mb: f64,
    pub last_modified: Option<DateTime<Utc>>,
    pub file_types: BTreeMap<String, u64>,
}

impl FileStats {
    /// Fold count, size, recency and extension tallies over a set of
    /// objects. Callers pass only real files; zero-size placeholders must
    /// already be filtered out.
    pub fn from_objects(objects: &[StoredObject]) -> Self {
        let total_bytes: u64 = objects.iter().map(|o| o.size).sum();
        let total_size_mb = (total_bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0;

        let last_modified = objects.iter().map(|o| o.last_modified).max();

        let mut file_types = BTreeMap::new();
        for object in objects {
            *file_types.entry(object.extension()).or_insert(0) += 1;
        }

        Self {
            total_count: objects.len(),
            total_size_mb,
            last_modified,
            file_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn object(key: &str, size: u64, modified_secs: i64) -> StoredObject {
        StoredObject {
            key: key.to_string(),
            size,
            last_modified: Utc.timestamp_opt(modified_secs, 0).unwrap(),
        }
    }

    #[test]
    fn default_is_the_zero_value() {
        let stats = FileStats::default();
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.total_size_mb, 0.0);
        assert_eq!(stats.last_modified, None);
        assert!(stats.file_types.is_empty());
    }

    #[test]
    fn one_megabyte_file_counts_as_one() {
        let stats = FileStats::from_objects(&[object("U1/a.pdf", 1_048_576, 100)]);
        assert_eq!(stats.total_count, 1);
        assert_eq!(stats.total_size_mb, 1.0);
        assert_eq!(stats.last_modified, Some(Utc.timestamp_opt(100, 0).unwrap()));
        assert_eq!(stats.file_types.get("pdf"), Some(&1));
    }

    #[test]
    fn size_is_rounded_to_two_decimals() {
        // 1.5 MB exactly
        let stats = FileStats::from_objects(&[object("U1/a.bin", 1_572_864, 0)]);
        assert_eq!(stats.total_size_mb, 1.5);

        // 1234567 bytes = 1.17737... MB -> 1.18
        let stats = FileStats::from_objects(&[object("U1/b.bin", 1_234_567, 0)]);
        assert_eq!(stats.total_size_mb, 1.18);

        // tiny files round down to zero but still count
        let stats = FileStats::from_objects(&[object("U1/c.txt", 3, 0)]);
        assert_eq!(stats.total_size_mb, 0.0);
        assert_eq!(stats.total_count, 1);
    }

    #[test]
    fn size_is_monotonic_in_added_objects() {
        let mut objects = vec![object("U1/a.bin", 700_000, 0)];
        let mut previous = FileStats::from_objects(&objects).total_size_mb;
        for i in 0..5 {
            objects.push(object(&format!("U1/f{i}.bin"), 300_000, 0));
            let current = FileStats::from_objects(&objects).total_size_mb;
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn last_modified_is_the_maximum() {
        let stats = FileStats::from_objects(&[
            object("U1/a.pdf", 10, 300),
            object("U1/b.pdf", 10, 900),
            object("U1/c.pdf", 10, 600),
        ]);
        assert_eq!(stats.last_modified, Some(Utc.timestamp_opt(900, 0).unwrap()));
    }

    #[test]
    fn extensions_are_tallied_with_unknown_fallback() {
        let stats = FileStats::from_objects(&[
            object("U1/a.jpg", 10, 0),
            object("U1/b.jpg", 10, 0),
            object("U1/notes", 10, 0),
        ]);
        assert_eq!(stats.file_types.get("jpg"), Some(&2));
        assert_eq!(stats.file_types.get("unknown"), Some(&1));
        assert_eq!(stats.file_types.len(), 2);
    }

    #[test]
    fn mixed_case_extensions_share_a_bucket() {
        let stats = FileStats::from_objects(&[
            object("U1/a.JPG", 10, 0),
            object("U1/b.jpg", 10, 0),
        ]);
        assert_eq!(stats.file_types.get("jpg"), Some(&2));
    }
}
