//! Account profile management commands
//!
//! The stored profile plays the role a CI server's global configuration
//! plays: one persisted (secret id, secret key, endpoint suffix) set that
//! the networked commands fall back to.

use clap::Subcommand;
use serde::Serialize;

use cu_core::{AccountManager, Error, StoredAccount};

use crate::exit_code::ExitCode;

/// Account subcommands for the stored credential profile
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Store (or replace) the account profile
    Set(SetArgs),

    /// Show the stored profile (the secret key is never printed)
    Show,

    /// Remove the stored profile
    Clear,
}

/// Arguments for the `account set` command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Account secret id
    pub secret_id: String,

    /// Account secret key
    pub secret_key: String,

    /// Endpoint suffix appended after the region
    #[arg(long, default_value = cu_core::DEFAULT_ENDPOINT_SUFFIX)]
    pub endpoint_suffix: String,
}

/// Profile information for output (without the secret key)
#[derive(Serialize)]
struct AccountInfo {
    secret_id: String,
    endpoint_suffix: String,
}

impl From<&StoredAccount> for AccountInfo {
    fn from(account: &StoredAccount) -> Self {
        Self {
            secret_id: account.secret_id.clone(),
            endpoint_suffix: account.endpoint_suffix.clone(),
        }
    }
}

/// JSON output for account set/clear operations
#[derive(Serialize)]
struct AccountOperationOutput {
    success: bool,
    message: String,
}

/// Execute an account subcommand
pub async fn execute(cmd: AccountCommands, json_output: bool) -> ExitCode {
    let manager = match AccountManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            print_error(&e.to_string(), json_output);
            return ExitCode::GeneralError;
        }
    };

    match cmd {
        AccountCommands::Set(args) => execute_set(args, &manager, json_output),
        AccountCommands::Show => execute_show(&manager, json_output),
        AccountCommands::Clear => execute_clear(&manager, json_output),
    }
}

fn execute_set(args: SetArgs, manager: &AccountManager, json_output: bool) -> ExitCode {
    if args.secret_id.trim().is_empty() {
        print_error("Secret id must not be empty", json_output);
        return ExitCode::UsageError;
    }
    if args.secret_key.trim().is_empty() {
        print_error("Secret key must not be empty", json_output);
        return ExitCode::UsageError;
    }
    if args.endpoint_suffix.trim().is_empty() {
        print_error("Endpoint suffix must not be empty", json_output);
        return ExitCode::UsageError;
    }

    let account = StoredAccount {
        secret_id: args.secret_id,
        secret_key: args.secret_key,
        endpoint_suffix: args.endpoint_suffix,
    };

    match manager.set(account) {
        Ok(()) => {
            if json_output {
                let output = AccountOperationOutput {
                    success: true,
                    message: "Account profile stored".to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!("Account profile stored.");
            }
            ExitCode::Success
        }
        Err(e) => {
            print_error(&e.to_string(), json_output);
            ExitCode::GeneralError
        }
    }
}

fn execute_show(manager: &AccountManager, json_output: bool) -> ExitCode {
    match manager.get() {
        Ok(account) => {
            let info = AccountInfo::from(&account);
            if json_output {
                println!("{}", serde_json::to_string_pretty(&info).unwrap());
            } else {
                println!(
                    "{:<16} (endpoint suffix: {})",
                    info.secret_id, info.endpoint_suffix
                );
            }
            ExitCode::Success
        }
        Err(e @ Error::AccountNotConfigured(_)) => {
            print_error(&e.to_string(), json_output);
            ExitCode::NotFound
        }
        Err(e) => {
            print_error(&e.to_string(), json_output);
            ExitCode::GeneralError
        }
    }
}

fn execute_clear(manager: &AccountManager, json_output: bool) -> ExitCode {
    match manager.clear() {
        Ok(()) => {
            if json_output {
                let output = AccountOperationOutput {
                    success: true,
                    message: "Account profile removed".to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!("Account profile removed.");
            }
            ExitCode::Success
        }
        Err(e @ Error::AccountNotConfigured(_)) => {
            print_error(&e.to_string(), json_output);
            ExitCode::NotFound
        }
        Err(e) => {
            print_error(&e.to_string(), json_output);
            ExitCode::GeneralError
        }
    }
}

fn print_error(message: &str, json_output: bool) {
    if json_output {
        eprintln!("{}", serde_json::json!({ "error": message }));
    } else {
        eprintln!("Error: {message}");
    }
}
