//! validate-account / validate-bucket commands
//!
//! The two validation calls the configuration surface consumes: prove the
//! credentials work, and resolve a bucket's region before the first run.

use clap::Args;
use serde::Serialize;

use super::AuthArgs;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, Spinner};

/// Check that the credentials can list buckets
#[derive(Args, Debug)]
pub struct ValidateAccountArgs {
    #[command(flatten)]
    pub auth: AuthArgs,
}

/// Check a bucket and print its resolved region
#[derive(Args, Debug)]
pub struct ValidateBucketArgs {
    /// Bucket name to validate
    pub bucket: String,

    #[command(flatten)]
    pub auth: AuthArgs,
}

#[derive(Debug, Serialize)]
struct ValidateAccountOutput {
    status: &'static str,
    buckets_visible: usize,
}

#[derive(Debug, Serialize)]
struct ValidateBucketOutput {
    status: &'static str,
    bucket: String,
    region: String,
    endpoint: String,
}

/// Execute the validate-account command
pub async fn execute_account(args: ValidateAccountArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config.clone());

    let (credentials, endpoint_suffix) = match args.auth.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    let spinner = Spinner::new(&output_config, "Validating account...");
    let result = cu_s3::validate_account(&credentials, &endpoint_suffix).await;
    spinner.finish_and_clear();

    match result {
        Ok(buckets) => {
            if formatter.is_json() {
                let output = ValidateAccountOutput {
                    status: "success",
                    buckets_visible: buckets.len(),
                };
                formatter.json(&output);
            } else {
                formatter.success(&format!(
                    "Account verified; {} bucket(s) visible.",
                    buckets.len()
                ));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}

/// Execute the validate-bucket command
pub async fn execute_bucket(args: ValidateBucketArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config.clone());

    if args.bucket.trim().is_empty() {
        formatter.error("Bucket name must not be empty");
        return ExitCode::UsageError;
    }

    let (credentials, endpoint_suffix) = match args.auth.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    let spinner = Spinner::new(&output_config, "Resolving bucket location...");
    let result = cu_s3::validate_bucket(&credentials, &endpoint_suffix, &args.bucket).await;
    spinner.finish_and_clear();

    match result {
        Ok(region) => {
            let endpoint = match cu_core::endpoint(&args.bucket, &region, &endpoint_suffix) {
                Ok(endpoint) => endpoint,
                Err(e) => {
                    formatter.error(&e.to_string());
                    return ExitCode::from_error(&e);
                }
            };

            if formatter.is_json() {
                let output = ValidateBucketOutput {
                    status: "success",
                    bucket: args.bucket.clone(),
                    region,
                    endpoint,
                };
                formatter.json(&output);
            } else {
                formatter.success(&format!(
                    "Bucket '{}' resolved to region {region} ({endpoint}).",
                    args.bucket
                ));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}
