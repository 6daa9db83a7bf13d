//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations, plus
//! the shared credential-resolution logic (explicit flags and environment
//! variables override the stored account profile).

use clap::{Parser, Subcommand};

use cu_core::{AccountManager, Credentials, Error, StoredAccount, DEFAULT_ENDPOINT_SUFFIX};

use crate::exit_code::ExitCode;
use crate::output::OutputConfig;

mod account;
mod completions;
pub mod upload;
mod validate;

/// cu - COS Artifact Uploader
///
/// Publishes build artifacts to Tencent Cloud COS buckets via the
/// S3-compatible API. The bucket region is resolved automatically before
/// any transfer starts.
#[derive(Parser, Debug)]
#[command(name = "cu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Disable progress spinner
    #[arg(long, global = true, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload build artifacts to a bucket
    Upload(upload::UploadArgs),

    /// Check that the credentials can list buckets
    ValidateAccount(validate::ValidateAccountArgs),

    /// Check a bucket and print its resolved region
    ValidateBucket(validate::ValidateBucketArgs),

    /// Manage the stored account profile
    #[command(subcommand)]
    Account(account::AccountCommands),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Credential arguments shared by the networked commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AuthArgs {
    /// Account secret id (falls back to the stored profile)
    #[arg(long, env = "COS_SECRET_ID")]
    pub secret_id: Option<String>,

    /// Account secret key (falls back to the stored profile)
    #[arg(long, env = "COS_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Endpoint suffix appended after the region (default: ".myqcloud.com")
    #[arg(long, env = "COS_ENDPOINT_SUFFIX")]
    pub endpoint_suffix: Option<String>,
}

impl AuthArgs {
    /// Resolve credentials and endpoint suffix
    ///
    /// Explicit values win; whatever is missing comes from the stored
    /// account profile. Empty fields are rejected before any network call.
    pub fn resolve(&self) -> cu_core::Result<(Credentials, String)> {
        let stored = if self.secret_id.is_some()
            && self.secret_key.is_some()
            && self.endpoint_suffix.is_some()
        {
            None
        } else {
            AccountManager::new()?.get().ok()
        };
        self.resolve_with(stored)
    }

    fn resolve_with(&self, stored: Option<StoredAccount>) -> cu_core::Result<(Credentials, String)> {
        let secret_id = self
            .secret_id
            .clone()
            .or_else(|| stored.as_ref().map(|a| a.secret_id.clone()))
            .ok_or_else(|| {
                Error::AccountNotConfigured(
                    "pass --secret-id/--secret-key or run 'cu account set'".into(),
                )
            })?;

        let secret_key = self
            .secret_key
            .clone()
            .or_else(|| stored.as_ref().map(|a| a.secret_key.clone()))
            .ok_or_else(|| {
                Error::AccountNotConfigured(
                    "pass --secret-id/--secret-key or run 'cu account set'".into(),
                )
            })?;

        let endpoint_suffix = self
            .endpoint_suffix
            .clone()
            .or_else(|| stored.as_ref().map(|a| a.endpoint_suffix.clone()))
            .unwrap_or_else(|| DEFAULT_ENDPOINT_SUFFIX.to_string());

        if secret_id.trim().is_empty() {
            return Err(Error::Config("secret id must not be empty".into()));
        }
        if secret_key.trim().is_empty() {
            return Err(Error::Config("secret key must not be empty".into()));
        }
        if endpoint_suffix.trim().is_empty() {
            return Err(Error::Config("endpoint suffix must not be empty".into()));
        }

        Ok((Credentials::new(secret_id, secret_key), endpoint_suffix))
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        no_progress: cli.no_progress,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Upload(args) => upload::execute(args, output_config).await,
        Commands::ValidateAccount(args) => validate::execute_account(args, output_config).await,
        Commands::ValidateBucket(args) => validate::execute_bucket(args, output_config).await,
        Commands::Account(cmd) => account::execute(cmd, cli.json).await,
        Commands::Completions(args) => completions::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(id: Option<&str>, key: Option<&str>, suffix: Option<&str>) -> AuthArgs {
        AuthArgs {
            secret_id: id.map(String::from),
            secret_key: key.map(String::from),
            endpoint_suffix: suffix.map(String::from),
        }
    }

    #[test]
    fn test_resolve_explicit_flags() {
        let args = auth(Some("AKIDexample"), Some("secret"), Some(".myqcloud.com"));
        let (creds, suffix) = args.resolve_with(None).unwrap();
        assert_eq!(creds.secret_id, "AKIDexample");
        assert_eq!(suffix, ".myqcloud.com");
    }

    #[test]
    fn test_resolve_falls_back_to_profile() {
        let args = auth(None, None, None);
        let stored = StoredAccount::new("stored-id", "stored-key");
        let (creds, suffix) = args.resolve_with(Some(stored)).unwrap();
        assert_eq!(creds.secret_id, "stored-id");
        assert_eq!(creds.secret_key, "stored-key");
        assert_eq!(suffix, DEFAULT_ENDPOINT_SUFFIX);
    }

    #[test]
    fn test_resolve_flags_override_profile() {
        let args = auth(Some("flag-id"), None, None);
        let stored = StoredAccount::new("stored-id", "stored-key");
        let (creds, _) = args.resolve_with(Some(stored)).unwrap();
        assert_eq!(creds.secret_id, "flag-id");
        assert_eq!(creds.secret_key, "stored-key");
    }

    #[test]
    fn test_resolve_missing_credentials() {
        let args = auth(None, None, None);
        let err = args.resolve_with(None).unwrap_err();
        assert!(matches!(err, Error::AccountNotConfigured(_)));
    }

    #[test]
    fn test_resolve_rejects_empty_fields() {
        let args = auth(Some(""), Some("secret"), None);
        let err = args.resolve_with(None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let args = auth(Some("id"), Some("secret"), Some("  "));
        let err = args.resolve_with(None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_cli_parses_upload() {
        let cli = Cli::parse_from([
            "cu", "upload", "artifacts", "--files", "dist/*.js", "--prefix", "rel",
        ]);
        match cli.command {
            Commands::Upload(args) => {
                assert_eq!(args.bucket, "artifacts");
                assert_eq!(args.files, "dist/*.js");
                assert_eq!(args.prefix.as_deref(), Some("rel"));
                assert!(!args.full_path);
            }
            _ => panic!("expected upload command"),
        }
    }
}
