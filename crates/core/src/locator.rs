//! Bucket location resolution and endpoint construction
//!
//! COS addresses a bucket through a region-qualified host, so the region
//! has to be resolved before anything can be uploaded. The listing gives a
//! first approximation; a dedicated get-bucket-location call is
//! authoritative.

use crate::error::{Error, Result};
use crate::storage::{BucketInfo, ObjectStorage};

/// Service label inside the endpoint host
pub const SERVICE: &str = "cos";

/// Scan a list-buckets response for the target bucket's reported location
pub fn approximate_location(buckets: &[BucketInfo], name: &str) -> Option<String> {
    buckets
        .iter()
        .find(|b| b.name == name)
        .and_then(|b| b.location.clone())
}

/// Resolve the authoritative region for a bucket
///
/// Lists the buckets visible to the credentials, notes the approximation
/// from the listing, then issues the authoritative location call. Both a
/// transport failure and a bucket the credentials cannot see surface as
/// [`Error::Validation`]; the caller treats that as fatal for the run.
pub async fn resolve_location<S: ObjectStorage + ?Sized>(
    store: &S,
    bucket: &str,
) -> Result<String> {
    let buckets = store
        .list_buckets()
        .await
        .map_err(|e| Error::Validation(format!("listing buckets failed: {e}")))?;

    match approximate_location(&buckets, bucket) {
        Some(hint) => tracing::debug!(bucket, %hint, "bucket found in listing"),
        None => tracing::warn!(bucket, "bucket not present in listing"),
    }

    store.bucket_location(bucket).await.map_err(|e| {
        Error::Validation(format!("location lookup for bucket '{bucket}' failed: {e}"))
    })
}

/// Build the regional endpoint for a bucket
///
/// The region must already be resolved; an empty region is a validation
/// failure, never an empty host segment.
pub fn endpoint(bucket: &str, region: &str, endpoint_suffix: &str) -> Result<String> {
    if region.is_empty() {
        return Err(Error::Validation(format!(
            "no region resolved for bucket '{bucket}'"
        )));
    }

    let endpoint = format!("https://{bucket}.{SERVICE}.{region}{endpoint_suffix}");
    url::Url::parse(&endpoint)?;
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::UploadedObject;
    use async_trait::async_trait;
    use std::path::Path;

    struct ListOnlyStore {
        buckets: Vec<BucketInfo>,
        location: Result<&'static str>,
    }

    #[async_trait]
    impl ObjectStorage for ListOnlyStore {
        async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
            Ok(self.buckets.clone())
        }

        async fn bucket_location(&self, _bucket: &str) -> Result<String> {
            match &self.location {
                Ok(region) => Ok((*region).to_string()),
                Err(_) => Err(Error::Network("NoSuchBucket".into())),
            }
        }

        async fn put_object(
            &self,
            _bucket: &str,
            _key: &str,
            _file: &Path,
            _len: u64,
            _content_type: &str,
        ) -> Result<UploadedObject> {
            unreachable!("locator tests never upload")
        }
    }

    #[test]
    fn test_approximate_location() {
        let buckets = vec![
            BucketInfo::new("other").with_location("ap-beijing"),
            BucketInfo::new("b1").with_location("ap-guangzhou"),
        ];
        assert_eq!(
            approximate_location(&buckets, "b1").as_deref(),
            Some("ap-guangzhou")
        );
        assert!(approximate_location(&buckets, "missing").is_none());
    }

    #[tokio::test]
    async fn test_resolve_location_match() {
        let store = ListOnlyStore {
            buckets: vec![BucketInfo::new("b1").with_location("ap-guangzhou")],
            location: Ok("ap-guangzhou"),
        };
        let region = resolve_location(&store, "b1").await.unwrap();
        assert_eq!(region, "ap-guangzhou");
    }

    #[tokio::test]
    async fn test_resolve_location_no_match_fails_validation() {
        let store = ListOnlyStore {
            buckets: vec![BucketInfo::new("other").with_location("ap-beijing")],
            location: Err(Error::Network("NoSuchBucket".into())),
        };
        let err = resolve_location(&store, "b1").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("b1"));
    }

    #[tokio::test]
    async fn test_resolve_location_listing_failure() {
        struct FailingList;

        #[async_trait]
        impl ObjectStorage for FailingList {
            async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
                Err(Error::Network("connection refused".into()))
            }

            async fn bucket_location(&self, _bucket: &str) -> Result<String> {
                unreachable!("listing already failed")
            }

            async fn put_object(
                &self,
                _bucket: &str,
                _key: &str,
                _file: &Path,
                _len: u64,
                _content_type: &str,
            ) -> Result<UploadedObject> {
                unreachable!()
            }
        }

        let err = resolve_location(&FailingList, "b1").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("b1", "ap-guangzhou", ".myqcloud.com").unwrap(),
            "https://b1.cos.ap-guangzhou.myqcloud.com"
        );
    }

    #[test]
    fn test_endpoint_empty_region() {
        let err = endpoint("b1", "", ".myqcloud.com").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
