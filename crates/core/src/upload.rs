//! Sequential upload pipeline
//!
//! Expands the file spec, derives a key and content type per file, and
//! pushes each file through the storage trait one at a time. The first
//! transfer failure stops the run; everything already uploaded stays put
//! and the error carries the successful count for reporting.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::content_type::content_type;
use crate::error::{Error, Result};
use crate::expand::expand;
use crate::key::object_key;
use crate::storage::{ObjectStorage, UploadedObject};

/// Line-oriented listener for human-readable run output
pub trait ProgressSink: Send + Sync {
    /// Emit one progress line
    fn line(&self, text: &str);
}

/// Everything one upload run needs besides credentials and the client
#[derive(Debug, Clone)]
pub struct UploadPlan {
    /// Destination bucket name
    pub bucket: String,

    /// `;`-separated file/glob tokens, relative to `base_dir`
    pub file_spec: String,

    /// Optional key prefix, prepended verbatim (callers normalize the
    /// trailing slash before building the plan)
    pub key_prefix: Option<String>,

    /// Workspace directory the tokens resolve against
    pub base_dir: PathBuf,

    /// Keep the workspace-relative path in the key instead of the basename
    pub use_full_path: bool,
}

/// Result of a completed upload run
#[derive(Debug, Default, Serialize)]
pub struct UploadOutcome {
    /// Number of files uploaded
    pub uploaded: usize,

    /// Total bytes transferred
    pub total_bytes: u64,

    /// Per-object results, in upload order
    pub objects: Vec<UploadedObject>,
}

/// Run the upload pipeline
///
/// Files transfer strictly sequentially in expansion order. An absent
/// workspace directory is a logged no-op, not an error. Tokens that match
/// nothing are skipped. The input stream for each file is scoped to its
/// `put_object` call and released on every exit path by the adapter.
pub async fn run<S: ObjectStorage + ?Sized>(
    store: &S,
    plan: &UploadPlan,
    sink: &dyn ProgressSink,
) -> Result<UploadOutcome> {
    let mut outcome = UploadOutcome::default();

    if !plan.base_dir.is_dir() {
        sink.line(&format!(
            "Working directory {} does not exist, nothing to upload.",
            plan.base_dir.display()
        ));
        return Ok(outcome);
    }

    let files = expand(&plan.base_dir, &plan.file_spec)?;

    for file in &files {
        let key = object_key(
            &file.path,
            &plan.base_dir,
            plan.use_full_path,
            plan.key_prefix.as_deref(),
        );
        let mime = content_type(&file.file_name);

        let start = Instant::now();
        let object = store
            .put_object(&plan.bucket, &key, &file.path, file.len, &mime)
            .await
            .map_err(|e| Error::Upload {
                key: key.clone(),
                uploaded: outcome.uploaded,
                reason: e.to_string(),
            })?;

        sink.line(&format!(
            "Uploaded object [{key}] in {}",
            format_elapsed(start.elapsed())
        ));

        outcome.uploaded += 1;
        outcome.total_bytes += file.len;
        outcome.objects.push(object);
    }

    Ok(outcome)
}

/// Format an elapsed duration as `HH:MM:SS.mmm`
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let (secs, millis) = (millis / 1000, millis % 1000);
    let (mins, secs) = (secs / 60, secs % 60);
    let (hours, mins) = (mins / 60, mins % 60);
    format!("{hours:02}:{mins:02}:{secs:02}.{millis:03}")
}
