//! cu-s3: COS S3-API adapter for the cu artifact publisher
//!
//! This crate provides the implementation of the ObjectStorage trait
//! using the aws-sdk-s3 crate against COS's S3-compatible endpoints. It
//! is the only crate that directly depends on the AWS SDK.

pub mod client;
pub mod validate;

pub use client::CosClient;
pub use validate::{validate_account, validate_bucket};
