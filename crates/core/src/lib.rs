//! cu-core: Core library for the cu artifact publisher
//!
//! This crate provides the upload pipeline for publishing build artifacts
//! to COS, including:
//! - Artifact path expansion (literal paths and glob patterns)
//! - Object key derivation and content-type detection
//! - Bucket location resolution and endpoint construction
//! - The sequential upload run itself
//! - Configuration and account-profile persistence for the CLI layer
//!
//! This crate is designed to be independent of any specific storage SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod account;
pub mod config;
pub mod content_type;
pub mod credentials;
pub mod error;
pub mod expand;
pub mod key;
pub mod locator;
pub mod storage;
pub mod upload;

pub use account::{AccountManager, StoredAccount, DEFAULT_ENDPOINT_SUFFIX};
pub use config::{Config, ConfigManager};
pub use content_type::{content_type, DEFAULT_CONTENT_TYPE};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use expand::{expand, ResolvedFile};
pub use key::object_key;
pub use locator::{approximate_location, endpoint, resolve_location};
pub use storage::{BucketInfo, ObjectStorage, UploadedObject};
pub use upload::{format_elapsed, run, ProgressSink, UploadOutcome, UploadPlan};
