//! ObjectStorage trait definition
//!
//! This trait is the seam between the upload pipeline and the storage SDK.
//! It covers exactly the three calls the pipeline needs — bucket listing,
//! authoritative location lookup, and single-object upload — and can be
//! faked in tests without any network.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One entry of a list-buckets response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketInfo {
    /// Bucket name
    pub name: String,

    /// Region as reported by the listing (the first approximation only;
    /// the authoritative value comes from a get-bucket-location call)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<jiff::Timestamp>,
}

impl BucketInfo {
    /// Create a new BucketInfo with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            created: None,
        }
    }

    /// Attach the listed location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Result of a successful single-object upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedObject {
    /// Destination object key
    pub key: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Human-readable size
    pub size_human: String,

    /// ETag reported by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl UploadedObject {
    /// Create a new UploadedObject for a transferred file
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size_bytes: size,
            size_human: humansize::format_size(size, humansize::BINARY),
            etag: None,
        }
    }
}

/// Trait for the object-storage operations the upload pipeline uses
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// List the buckets visible to the credentials
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;

    /// Authoritative region lookup for a bucket
    async fn bucket_location(&self, bucket: &str) -> Result<String>;

    /// Upload one local file, streaming its content with the given
    /// content length and content type metadata
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        file: &Path,
        len: u64,
        content_type: &str,
    ) -> Result<UploadedObject>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_info() {
        let info = BucketInfo::new("artifacts").with_location("ap-guangzhou");
        assert_eq!(info.name, "artifacts");
        assert_eq!(info.location.as_deref(), Some("ap-guangzhou"));
        assert!(info.created.is_none());
    }

    #[test]
    fn test_uploaded_object() {
        let object = UploadedObject::new("dist/app.js", 2048);
        assert_eq!(object.key, "dist/app.js");
        assert_eq!(object.size_bytes, 2048);
        assert_eq!(object.size_human, "2 KiB");
        assert!(object.etag.is_none());
    }
}
