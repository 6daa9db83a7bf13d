//! Account profile management
//!
//! The account profile is the one persisted credential set the CLI falls
//! back to when no explicit flags or environment variables are given. The
//! upload pipeline itself never touches it; credentials always arrive there
//! as an explicit [`crate::Credentials`] value.

use serde::{Deserialize, Serialize};

use crate::config::ConfigManager;
use crate::credentials::Credentials;
use crate::error::{Error, Result};

/// Default endpoint suffix for Tencent Cloud COS
pub const DEFAULT_ENDPOINT_SUFFIX: &str = ".myqcloud.com";

/// A persisted account profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAccount {
    /// Account secret id
    pub secret_id: String,

    /// Account secret key
    pub secret_key: String,

    /// Endpoint suffix appended after the region (default: ".myqcloud.com")
    #[serde(default = "default_endpoint_suffix")]
    pub endpoint_suffix: String,
}

fn default_endpoint_suffix() -> String {
    DEFAULT_ENDPOINT_SUFFIX.to_string()
}

impl StoredAccount {
    /// Create a profile with the default endpoint suffix
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            endpoint_suffix: default_endpoint_suffix(),
        }
    }

    /// Credentials carried by this profile
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.secret_id, &self.secret_key)
    }
}

/// Manager for the stored account profile
pub struct AccountManager {
    config_manager: ConfigManager,
}

impl AccountManager {
    /// Create a new AccountManager with a specific ConfigManager
    pub fn with_config_manager(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    /// Create a new AccountManager using the default config location
    pub fn new() -> Result<Self> {
        let config_manager = ConfigManager::new()?;
        Ok(Self { config_manager })
    }

    /// Get the stored account profile
    pub fn get(&self) -> Result<StoredAccount> {
        let config = self.config_manager.load()?;
        config.account.ok_or_else(|| {
            Error::AccountNotConfigured("run 'cu account set' or pass credentials".into())
        })
    }

    /// Store (or replace) the account profile
    pub fn set(&self, account: StoredAccount) -> Result<()> {
        let mut config = self.config_manager.load()?;
        config.account = Some(account);
        self.config_manager.save(&config)
    }

    /// Remove the stored account profile
    pub fn clear(&self) -> Result<()> {
        let mut config = self.config_manager.load()?;
        if config.account.take().is_none() {
            return Err(Error::AccountNotConfigured("nothing to clear".into()));
        }
        self.config_manager.save(&config)
    }

    /// Check whether an account profile is stored
    pub fn exists(&self) -> Result<bool> {
        let config = self.config_manager.load()?;
        Ok(config.account.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_account_manager() -> (AccountManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_manager = ConfigManager::with_path(config_path);
        let account_manager = AccountManager::with_config_manager(config_manager);
        (account_manager, temp_dir)
    }

    #[test]
    fn test_stored_account_defaults() {
        let account = StoredAccount::new("AKIDexample", "secret");
        assert_eq!(account.endpoint_suffix, DEFAULT_ENDPOINT_SUFFIX);
        assert_eq!(account.credentials().secret_id, "AKIDexample");
    }

    #[test]
    fn test_set_and_get() {
        let (manager, _temp_dir) = temp_account_manager();

        manager.set(StoredAccount::new("AKIDexample", "secret")).unwrap();
        assert!(manager.exists().unwrap());

        let account = manager.get().unwrap();
        assert_eq!(account.secret_id, "AKIDexample");
        assert_eq!(account.secret_key, "secret");
    }

    #[test]
    fn test_set_replaces_existing() {
        let (manager, _temp_dir) = temp_account_manager();

        manager.set(StoredAccount::new("old", "old")).unwrap();
        manager.set(StoredAccount::new("new", "new")).unwrap();

        let account = manager.get().unwrap();
        assert_eq!(account.secret_id, "new");
    }

    #[test]
    fn test_clear() {
        let (manager, _temp_dir) = temp_account_manager();

        manager.set(StoredAccount::new("AKIDexample", "secret")).unwrap();
        manager.clear().unwrap();
        assert!(!manager.exists().unwrap());
    }

    #[test]
    fn test_get_not_configured() {
        let (manager, _temp_dir) = temp_account_manager();

        let result = manager.get();
        assert!(matches!(
            result.unwrap_err(),
            Error::AccountNotConfigured(_)
        ));
    }

    #[test]
    fn test_clear_not_configured() {
        let (manager, _temp_dir) = temp_account_manager();

        let result = manager.clear();
        assert!(matches!(
            result.unwrap_err(),
            Error::AccountNotConfigured(_)
        ));
    }
}
