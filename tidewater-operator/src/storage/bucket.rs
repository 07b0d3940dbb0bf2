//! S3 object store backend

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use s3::creds::Credentials;
use s3::{Bucket, Region};
use tracing::debug;

use super::{ObjectEntry, Result, StorageBackend, StorageError, glob_options};

const DEFAULT_REGION: &str = "us-east-1";

/// Lists objects under a prefix of an S3 bucket
///
/// Region comes from `AWS_REGION`; a custom endpoint (MinIO, R2, ...) from
/// `AWS_ENDPOINT_URL`. Credentials are read from the standard AWS environment.
pub struct S3Backend {
    bucket: Box<Bucket>,
    prefix: String,
}

impl S3Backend {
    /// Connect to `<bucket>/<prefix>`, the part of an `s3://` URI after the scheme
    pub fn connect(location: &str) -> Result<Self> {
        let (bucket_name, prefix) = split_location(location)?;

        let region_name = std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let endpoint = std::env::var("AWS_ENDPOINT_URL").ok();
        let region = match &endpoint {
            Some(endpoint) => Region::Custom {
                region: region_name,
                endpoint: endpoint.clone(),
            },
            None => region_name
                .parse::<Region>()
                .map_err(|e| StorageError::Config(e.to_string()))?,
        };

        let credentials =
            Credentials::default().map_err(|e| StorageError::Config(e.to_string()))?;

        let mut bucket = Bucket::new(&bucket_name, region, credentials)?;
        if endpoint.is_some() {
            bucket = bucket.with_path_style();
        }

        Ok(Self { bucket, prefix })
    }
}

/// Split `bucket/some/prefix/` into the bucket and a `/`-terminated prefix
fn split_location(location: &str) -> Result<(String, String)> {
    let (bucket, prefix) = match location.split_once('/') {
        Some((bucket, prefix)) => (bucket, prefix.trim_matches('/')),
        None => (location, ""),
    };

    if bucket.is_empty() {
        return Err(StorageError::InvalidUri(format!("s3://{}", location)));
    }

    let prefix = if prefix.is_empty() {
        String::new()
    } else {
        format!("{}/", prefix)
    };

    Ok((bucket.to_string(), prefix))
}

#[async_trait]
impl StorageBackend for S3Backend {
    async fn glob(&self, pattern: &str) -> Result<Vec<ObjectEntry>> {
        let pattern = glob::Pattern::new(pattern)?;
        debug!("Listing s3://{}/{}", self.bucket.name(), self.prefix);

        let pages = self.bucket.list(self.prefix.clone(), None).await?;

        let mut entries = Vec::new();
        for object in pages.into_iter().flat_map(|page| page.contents) {
            let Some(name) = object.key.strip_prefix(&self.prefix) else {
                continue;
            };
            if !pattern.matches_with(name, glob_options()) {
                continue;
            }

            let mod_time = DateTime::parse_from_rfc3339(&object.last_modified)
                .map_err(|e| {
                    StorageError::Config(format!(
                        "unparseable modification time for {}: {}",
                        object.key, e
                    ))
                })?
                .with_timezone(&Utc);

            entries.push(ObjectEntry {
                name: name.to_string(),
                mod_time,
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_location() {
        assert_eq!(
            split_location("bucket/flink/savepoints/").unwrap(),
            ("bucket".to_string(), "flink/savepoints/".to_string())
        );
        assert_eq!(
            split_location("bucket").unwrap(),
            ("bucket".to_string(), String::new())
        );
        assert!(split_location("/prefix").is_err());
    }
}
