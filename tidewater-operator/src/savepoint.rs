//! Latest-savepoint resolution
//!
//! A savepoint directory holds one subdirectory per savepoint. A subdirectory
//! only counts once its `_metadata` marker has been written, and it is
//! addressed by the subdirectory, not the marker.

use std::sync::Arc;

use tracing::{debug, info};

use crate::storage::{
    DEFAULT_FS_PREFIX, ObjectEntry, Result, SchemeConnector, StorageConnector, StorageError,
};

/// Marker file written last into every complete savepoint
pub const METADATA_MARKER: &str = "_metadata";

/// Finds the most recent savepoint under a directory
#[derive(Clone)]
pub struct SavepointResolver {
    connector: Arc<dyn StorageConnector>,
}

impl SavepointResolver {
    pub fn new(connector: Arc<dyn StorageConnector>) -> Self {
        Self { connector }
    }

    /// Resolve the newest savepoint in `dir`
    ///
    /// `dir` is a scheme-qualified URI or a plain local path. The result is
    /// `dir` (without a trailing `/`, and without the `file://` scheme)
    /// joined with the name of the newest savepoint subdirectory.
    ///
    /// # Errors
    /// - `UnsupportedScheme` if no backend handles the URI
    /// - `NoSavepoints` if no subdirectory carries a marker file
    pub async fn resolve_latest(&self, dir: &str) -> Result<String> {
        let mut dir = if dir.contains("://") {
            dir.to_string()
        } else {
            format!("{}{}", DEFAULT_FS_PREFIX, dir)
        };

        let backend = self.connector.connect(&dir).await?;

        if dir.ends_with('/') {
            dir.pop();
        }
        let display_dir = dir.strip_prefix(DEFAULT_FS_PREFIX).unwrap_or(&dir);

        let pattern = format!("*/{}", METADATA_MARKER);
        let entries = backend.glob(&pattern).await?;
        debug!("Found {} savepoint(s) in {}", entries.len(), display_dir);

        let newest = latest_entry(entries)
            .ok_or_else(|| StorageError::NoSavepoints(display_dir.to_string()))?;

        let savepoint = newest
            .name
            .strip_suffix(METADATA_MARKER)
            .unwrap_or(&newest.name)
            .trim_end_matches('/');
        let path = format!("{}/{}", display_dir, savepoint);

        info!("Latest savepoint: {}", path);
        Ok(path)
    }
}

impl Default for SavepointResolver {
    fn default() -> Self {
        Self::new(Arc::new(SchemeConnector))
    }
}

/// Newest entry by modification time; on equal times the later one wins
fn latest_entry(entries: impl IntoIterator<Item = ObjectEntry>) -> Option<ObjectEntry> {
    entries.into_iter().fold(None, |newest, entry| match newest {
        Some(current) if entry.mod_time < current.mod_time => Some(current),
        _ => Some(entry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageBackend;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use std::path::Path;
    use std::time::{Duration, SystemTime};

    fn write_savepoint(root: &Path, name: &str, modified: SystemTime) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        let marker = fs::File::create(dir.join(METADATA_MARKER)).unwrap();
        marker.set_modified(modified).unwrap();
    }

    fn two_savepoints() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let earlier = SystemTime::now() - Duration::from_secs(60);
        write_savepoint(dir.path(), "savepoint-683b3f-59401d30cfc4", earlier);
        write_savepoint(dir.path(), "savepoint-323b3f-59401d30eoe6", SystemTime::now());
        dir
    }

    #[tokio::test]
    async fn test_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let savepoint_dir = format!("{}/savepoints", dir.path().display());

        let err = SavepointResolver::default()
            .resolve_latest(&savepoint_dir)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("no savepoints present in directory: {}", savepoint_dir)
        );
    }

    #[tokio::test]
    async fn test_empty_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().display().to_string();

        let err = SavepointResolver::default()
            .resolve_latest(&path)
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::NoSavepoints(ref p) if *p == path));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let err = SavepointResolver::default()
            .resolve_latest("tmpfs://")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "unknown URL scheme \"tmpfs\"");
    }

    #[tokio::test]
    async fn test_returns_newest_savepoint() {
        let dir = two_savepoints();
        let path = dir.path().display().to_string();

        let latest = SavepointResolver::default()
            .resolve_latest(&path)
            .await
            .unwrap();

        assert_eq!(latest, format!("{}/savepoint-323b3f-59401d30eoe6", path));
    }

    #[tokio::test]
    async fn test_trailing_slash_is_ignored() {
        let dir = two_savepoints();
        let path = dir.path().display().to_string();

        let latest = SavepointResolver::default()
            .resolve_latest(&format!("{}/", path))
            .await
            .unwrap();

        assert_eq!(latest, format!("{}/savepoint-323b3f-59401d30eoe6", path));
    }

    #[tokio::test]
    async fn test_explicit_file_scheme_is_stripped() {
        let dir = two_savepoints();
        let path = dir.path().display().to_string();

        let latest = SavepointResolver::default()
            .resolve_latest(&format!("file://{}", path))
            .await
            .unwrap();

        assert_eq!(latest, format!("{}/savepoint-323b3f-59401d30eoe6", path));
    }

    #[tokio::test]
    async fn test_subdirectory_without_marker_is_ignored() {
        let dir = two_savepoints();
        fs::create_dir_all(dir.path().join("savepoint-in-progress")).unwrap();
        let path = dir.path().display().to_string();

        let latest = SavepointResolver::default()
            .resolve_latest(&path)
            .await
            .unwrap();

        assert!(latest.ends_with("savepoint-323b3f-59401d30eoe6"));
    }

    #[tokio::test]
    async fn test_dot_relative_directory_keeps_given_prefix() {
        let dir = tempfile::tempdir_in(".").unwrap();
        let earlier = SystemTime::now() - Duration::from_secs(60);
        write_savepoint(dir.path(), "savepoint-683b3f-59401d30cfc4", earlier);
        write_savepoint(dir.path(), "savepoint-323b3f-59401d30eoe6", SystemTime::now());
        let name = dir.path().file_name().unwrap().to_string_lossy().to_string();
        let resolver = SavepointResolver::default();

        let expected = format!("./{}/savepoint-323b3f-59401d30eoe6", name);
        assert_eq!(
            resolver.resolve_latest(&format!("./{}", name)).await.unwrap(),
            expected
        );
        assert_eq!(
            resolver.resolve_latest(&format!("./{}/", name)).await.unwrap(),
            expected
        );
        assert_eq!(
            resolver.resolve_latest(&name).await.unwrap(),
            format!("{}/savepoint-323b3f-59401d30eoe6", name)
        );
    }

    struct FixedListing(Vec<ObjectEntry>);

    #[async_trait]
    impl StorageBackend for FixedListing {
        async fn glob(&self, _pattern: &str) -> Result<Vec<ObjectEntry>> {
            Ok(self.0.clone())
        }
    }

    #[async_trait]
    impl StorageConnector for FixedListing {
        async fn connect(&self, uri: &str) -> Result<Box<dyn StorageBackend>> {
            assert!(uri.starts_with("s3://"));
            Ok(Box::new(FixedListing(self.0.clone())))
        }
    }

    #[tokio::test]
    async fn test_object_store_path_keeps_scheme_and_last_tie_wins() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let listing = FixedListing(vec![
            ObjectEntry {
                name: "savepoint-old/_metadata".to_string(),
                mod_time: at - chrono::Duration::minutes(5),
            },
            ObjectEntry {
                name: "savepoint-a/_metadata".to_string(),
                mod_time: at,
            },
            ObjectEntry {
                name: "savepoint-b/_metadata".to_string(),
                mod_time: at,
            },
        ]);

        let latest = SavepointResolver::new(Arc::new(listing))
            .resolve_latest("s3://bucket/flink/savepoints/")
            .await
            .unwrap();

        assert_eq!(latest, "s3://bucket/flink/savepoints/savepoint-b");
    }
}
