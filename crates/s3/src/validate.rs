//! Account and bucket validation entry points
//!
//! These are the two calls the configuration surface exposes: prove the
//! credentials can list buckets, and resolve a bucket's authoritative
//! region. Both run against the region-agnostic service endpoint.

use cu_core::{BucketInfo, Credentials, Error, ObjectStorage as _, Result};

use crate::client::CosClient;

/// Validate that the credentials are usable
///
/// Issues a list-buckets call; any failure is reported as
/// [`Error::Credentials`] carrying the underlying message. On success the
/// listing is returned so callers can report what the account can see.
pub async fn validate_account(
    credentials: &Credentials,
    endpoint_suffix: &str,
) -> Result<Vec<BucketInfo>> {
    let client = CosClient::new(credentials, "", endpoint_suffix).await?;
    client
        .list_buckets()
        .await
        .map_err(|e| Error::Credentials(e.to_string()))
}

/// Validate a bucket and resolve its authoritative region
///
/// Listing gives the first approximation of the region; the dedicated
/// get-bucket-location call decides. A bucket the credentials cannot see
/// surfaces as [`Error::Validation`].
pub async fn validate_bucket(
    credentials: &Credentials,
    endpoint_suffix: &str,
    bucket: &str,
) -> Result<String> {
    let probe = CosClient::new(credentials, "", endpoint_suffix).await?;
    cu_core::resolve_location(&probe, bucket).await
}
