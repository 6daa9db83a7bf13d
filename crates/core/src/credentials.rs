//! Credential pair for the object storage account
//!
//! Credentials are supplied per invocation and never persisted by this crate;
//! the caller-side configuration layer owns any storage of them.

/// An opaque (secret id, secret key) pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account secret id
    pub secret_id: String,

    /// Account secret key
    pub secret_key: String,
}

impl Credentials {
    /// Create a new credential pair
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
        }
    }
}

// The secret key must not leak into logs or error messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"***")
            .finish()
    }
}
