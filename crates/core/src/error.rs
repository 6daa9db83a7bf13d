//! Error types for cu-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for cu-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cu-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No stored account profile
    #[error("No account configured: {0}")]
    AccountNotConfigured(String),

    /// Unusable local artifact path specification
    #[error("Invalid artifact path: {0}")]
    LocalPath(String),

    /// Account (credential) validation failed
    #[error("Account validation failed: {0}")]
    Credentials(String),

    /// Bucket listing or location resolution failed
    #[error("Bucket validation failed: {0}")]
    Validation(String),

    /// A single object transfer failed; the run stops here
    #[error("Upload of object [{key}] failed after {uploaded} successful upload(s): {reason}")]
    Upload {
        key: String,
        uploaded: usize,
        reason: String,
    },

    /// Network error from the storage transport
    #[error("Network error: {0}")]
    Network(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::LocalPath(_) => 2, // UsageError
            Error::Network(_) | Error::Upload { .. } => 3, // NetworkError
            Error::Credentials(_) => 4,                  // AuthError
            Error::Validation(_) | Error::AccountNotConfigured(_) => 5, // NotFound
            _ => 1,                                      // GeneralError
        }
    }
}
