//! Local filesystem backend

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{ObjectEntry, Result, StorageBackend, StorageError, glob_options};

/// Lists a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root.to_path_buf()
        };
        Self { root }
    }
}

#[async_trait]
impl StorageBackend for LocalBackend {
    async fn glob(&self, pattern: &str) -> Result<Vec<ObjectEntry>> {
        let root = self.root.clone();
        let pattern = pattern.to_string();

        tokio::task::spawn_blocking(move || glob_dir(&root, &pattern))
            .await
            .map_err(|e| StorageError::Io {
                path: self.root.display().to_string(),
                source: std::io::Error::other(e),
            })?
    }
}

/// `root` without `.` components, the form glob reports matches in
fn normalize_root(root: &Path) -> PathBuf {
    root.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn glob_dir(root: &Path, pattern: &str) -> Result<Vec<ObjectEntry>> {
    let normalized = normalize_root(root);
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let full_pattern = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);

    let mut entries = Vec::new();
    for path in glob::glob_with(&full_pattern, glob_options())? {
        let path = path.map_err(|e| StorageError::Io {
            path: e.path().display().to_string(),
            source: e.into_error(),
        })?;

        let metadata = std::fs::metadata(&path).map_err(|source| StorageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map_err(|source| StorageError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let relative = path
            .strip_prefix(root)
            .or_else(|_| path.strip_prefix(&normalized))
            .map_err(|_| StorageError::Io {
                path: path.display().to_string(),
                source: std::io::Error::other(format!(
                    "match is outside of {}",
                    root.display()
                )),
            })?;
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        entries.push(ObjectEntry {
            name,
            mod_time: DateTime::<Utc>::from(modified),
        });
    }

    Ok(entries)
}
