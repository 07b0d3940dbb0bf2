//! Storage backends for savepoint directories
//!
//! Savepoint directories live on local disk or in an object store. The
//! resolver only needs to list entries matching a pattern together with
//! their modification time, so that is the whole interface.

mod local;
mod bucket;

pub use local::LocalBackend;
pub use bucket::S3Backend;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Scheme assumed for paths given without one
pub const DEFAULT_FS_PREFIX: &str = "file://";

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors raised while connecting to or listing a backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unknown URL scheme \"{0}\"")]
    UnsupportedScheme(String),

    #[error("invalid storage URI: {0}")]
    InvalidUri(String),

    #[error("no savepoints present in directory: {0}")]
    NoSavepoints(String),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("S3 operation failed: {0}")]
    S3(#[from] s3::error::S3Error),

    #[error("storage configuration error: {0}")]
    Config(String),
}

/// An entry returned by a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Path relative to the connected root, `/`-separated
    pub name: String,
    pub mod_time: DateTime<Utc>,
}

/// A connected directory that can be listed
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// List entries whose relative path matches a shell-style pattern
    ///
    /// `*` does not cross `/`. Order is backend-defined.
    async fn glob(&self, pattern: &str) -> Result<Vec<ObjectEntry>>;
}

/// Opens a backend for a scheme-qualified URI
#[async_trait]
pub trait StorageConnector: Send + Sync {
    async fn connect(&self, uri: &str) -> Result<Box<dyn StorageBackend>>;
}

/// Connector that picks the backend from the URI scheme
///
/// - `file://<path>` lists the local filesystem
/// - `s3://<bucket>/<prefix>` lists an S3 bucket
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeConnector;

#[async_trait]
impl StorageConnector for SchemeConnector {
    async fn connect(&self, uri: &str) -> Result<Box<dyn StorageBackend>> {
        let (scheme, location) = uri
            .split_once("://")
            .ok_or_else(|| StorageError::InvalidUri(uri.to_string()))?;

        match scheme {
            "file" => Ok(Box::new(LocalBackend::new(location))),
            "s3" => Ok(Box::new(S3Backend::connect(location)?)),
            other => Err(StorageError::UnsupportedScheme(other.to_string())),
        }
    }
}

fn glob_options() -> glob::MatchOptions {
    glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}
