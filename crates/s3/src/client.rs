//! COS client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStorage trait from cu-core.
//! COS speaks the S3 API; buckets are addressed virtual-host style, so an
//! object request against the regional service endpoint resolves to
//! `https://{bucket}.cos.{region}{suffix}`.

use std::path::Path;

use async_trait::async_trait;

use cu_core::{BucketInfo, Credentials, Error, ObjectStorage, Result, UploadedObject};

/// Region used for request signing before the bucket region is resolved
const FALLBACK_SIGNING_REGION: &str = "ap-guangzhou";

/// COS client wrapper
pub struct CosClient {
    inner: aws_sdk_s3::Client,
}

impl CosClient {
    /// Create a new COS client from explicit credentials
    ///
    /// With an empty `region` the client talks to the region-agnostic
    /// service endpoint, which is enough for list-buckets and
    /// get-bucket-location; object transfers should use a client built
    /// with the resolved region.
    pub async fn new(
        credentials: &Credentials,
        region: &str,
        endpoint_suffix: &str,
    ) -> Result<Self> {
        let endpoint = service_endpoint(region, endpoint_suffix);
        let signing_region = if region.is_empty() {
            FALLBACK_SIGNING_REGION.to_string()
        } else {
            region.to_string()
        };

        // Build credentials provider
        let sdk_credentials = aws_credential_types::Credentials::new(
            credentials.secret_id.clone(),
            credentials.secret_key.clone(),
            None, // session token
            None, // expiry
            "cu-static-credentials",
        );

        // Build SDK config
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(sdk_credentials)
            .region(aws_config::Region::new(signing_region))
            .endpoint_url(&endpoint)
            .load()
            .await;

        // Virtual-hosted addressing puts the bucket into the host name
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(false)
            .build();

        let client = aws_sdk_s3::Client::from_conf(s3_config);

        Ok(Self { inner: client })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

/// Build the service endpoint URL for a region (or the region-agnostic
/// service host when no region is known yet)
pub fn service_endpoint(region: &str, endpoint_suffix: &str) -> String {
    let service = cu_core::locator::SERVICE;
    if region.is_empty() {
        format!("https://service.{service}{endpoint_suffix}")
    } else {
        format!("https://{service}.{region}{endpoint_suffix}")
    }
}

#[async_trait]
impl ObjectStorage for CosClient {
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let buckets = response
            .buckets()
            .iter()
            .map(|b| {
                let mut info = BucketInfo::new(b.name().unwrap_or_default());
                if let Some(region) = b.bucket_region() {
                    info.location = Some(region.to_string());
                }
                if let Some(creation_date) = b.creation_date() {
                    info.created = jiff::Timestamp::from_second(creation_date.secs()).ok();
                }
                info
            })
            .collect();

        Ok(buckets)
    }

    async fn bucket_location(&self, bucket: &str) -> Result<String> {
        let response = self
            .inner
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(response
            .location_constraint()
            .map(|c| c.as_str().to_string())
            .unwrap_or_default())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        file: &Path,
        len: u64,
        content_type: &str,
    ) -> Result<UploadedObject> {
        tracing::debug!(bucket, key, content_type, "put object");

        // The stream is scoped to this request; the SDK drops the file
        // handle when the request body is consumed or the call fails.
        let body = aws_sdk_s3::primitives::ByteStream::from_path(file)
            .await
            .map_err(|e| Error::General(format!("failed to open {}: {e}", file.display())))?;

        let response = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_length(len as i64)
            .content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let mut object = UploadedObject::new(key, len);
        if let Some(etag) = response.e_tag() {
            object.etag = Some(etag.trim_matches('"').to_string());
        }

        Ok(object)
    }
}
