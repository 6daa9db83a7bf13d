//! upload command - Publish build artifacts to a bucket
//!
//! Resolves the bucket's region, builds the regional endpoint, then runs
//! the sequential upload pipeline over the expanded file spec.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use cu_core::{Error, ProgressSink, UploadOutcome, UploadPlan, UploadedObject};
use cu_s3::CosClient;

use super::AuthArgs;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, Spinner};

/// Upload build artifacts to a bucket
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Destination bucket name
    pub bucket: String,

    /// Files to upload: `;`-separated paths or glob patterns, relative to
    /// the workspace directory (e.g. "dist/app.js;build/*.map")
    #[arg(short, long)]
    pub files: String,

    /// Key prefix prepended to every object key (a trailing '/' is added
    /// when missing)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Keep the workspace-relative path in the object key instead of the
    /// basename
    #[arg(long)]
    pub full_path: bool,

    /// Workspace directory the file spec resolves against
    #[arg(short, long, default_value = ".")]
    pub workspace: PathBuf,

    #[command(flatten)]
    pub auth: AuthArgs,
}

#[derive(Debug, Serialize)]
struct UploadOutput {
    status: &'static str,
    bucket: String,
    endpoint: String,
    uploaded: usize,
    total_bytes: u64,
    total_human: String,
    objects: Vec<UploadedObject>,
}

/// Progress sink that forwards pipeline lines to the terminal
struct FormatterSink<'a> {
    formatter: &'a Formatter,
}

impl ProgressSink for FormatterSink<'_> {
    fn line(&self, text: &str) {
        self.formatter.println(text);
    }
}

/// Execute the upload command
pub async fn execute(args: UploadArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config.clone());

    if args.bucket.trim().is_empty() {
        formatter.error("Bucket name must not be empty");
        return ExitCode::UsageError;
    }

    // The file spec comes straight from CI configuration; reject a blank
    // one before doing any network work.
    let file_spec = args.files.trim().to_string();
    if file_spec.is_empty() {
        let err = Error::LocalPath("file spec must not be empty".into());
        formatter.error(&err.to_string());
        return ExitCode::from_error(&err);
    }

    let (credentials, endpoint_suffix) = match args.auth.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    // Resolve the authoritative bucket region before any transfer.
    let spinner = Spinner::new(&output_config, "Resolving bucket location...");
    let region =
        match cu_s3::validate_bucket(&credentials, &endpoint_suffix, &args.bucket).await {
            Ok(region) => {
                spinner.finish_and_clear();
                region
            }
            Err(e) => {
                spinner.finish_and_clear();
                formatter.error(&e.to_string());
                return ExitCode::from_error(&e);
            }
        };

    let endpoint = match cu_core::endpoint(&args.bucket, &region, &endpoint_suffix) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    formatter.println(&format!("Uploading to endpoint: {endpoint}"));

    let client = match CosClient::new(&credentials, &region, &endpoint_suffix).await {
        Ok(client) => client,
        Err(e) => {
            formatter.error(&format!("Failed to create storage client: {e}"));
            return ExitCode::NetworkError;
        }
    };

    let plan = UploadPlan {
        bucket: args.bucket.clone(),
        file_spec,
        key_prefix: normalize_prefix(args.prefix.as_deref()),
        base_dir: args.workspace.clone(),
        use_full_path: args.full_path,
    };

    let sink = FormatterSink {
        formatter: &formatter,
    };

    match cu_core::run(&client, &plan, &sink).await {
        Ok(outcome) => {
            report_success(&formatter, &args.bucket, &endpoint, outcome);
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            if let Error::Upload { uploaded, .. } = &e {
                if *uploaded > 0 {
                    formatter.warning(&format!(
                        "{uploaded} file(s) were uploaded before the failure and remain in the bucket."
                    ));
                }
            }
            ExitCode::from_error(&e)
        }
    }
}

fn report_success(formatter: &Formatter, bucket: &str, endpoint: &str, outcome: UploadOutcome) {
    if formatter.is_json() {
        let output = UploadOutput {
            status: "success",
            bucket: bucket.to_string(),
            endpoint: endpoint.to_string(),
            uploaded: outcome.uploaded,
            total_bytes: outcome.total_bytes,
            total_human: humansize::format_size(outcome.total_bytes, humansize::BINARY),
            objects: outcome.objects,
        };
        formatter.json(&output);
    } else if outcome.uploaded > 0 {
        formatter.success(&format!(
            "Uploaded {} file(s) ({}).",
            outcome.uploaded,
            humansize::format_size(outcome.total_bytes, humansize::BINARY)
        ));
    } else {
        formatter.println("No artifacts matched; nothing to upload.");
    }
}

/// Normalize the key prefix the way the caller contract requires: blank
/// means absent, and a directory-like prefix always carries its trailing
/// slash before it reaches the key builder.
fn normalize_prefix(prefix: Option<&str>) -> Option<String> {
    let prefix = prefix?.trim();
    if prefix.is_empty() {
        return None;
    }
    if prefix.ends_with('/') {
        Some(prefix.to_string())
    } else {
        Some(format!("{prefix}/"))
    }
}
