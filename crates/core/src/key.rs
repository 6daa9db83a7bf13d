//! Object key derivation
//!
//! The destination key is either the file's basename or its path relative
//! to the workspace directory, with an optional caller-supplied prefix.

use std::path::Path;

/// Build the destination object key for a file
///
/// With `use_full_path` the key keeps the workspace-relative path (always
/// `/`-separated); otherwise only the basename is used. A non-empty prefix
/// is prepended verbatim — callers wanting a directory-like prefix must
/// pass the trailing slash themselves.
pub fn object_key(
    file: &Path,
    base_dir: &Path,
    use_full_path: bool,
    prefix: Option<&str>,
) -> String {
    let key = if use_full_path {
        file.strip_prefix(base_dir)
            .unwrap_or(file)
            .to_string_lossy()
            .replace('\\', "/")
    } else {
        file.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    match prefix {
        Some(p) if !p.is_empty() => format!("{p}{key}"),
        _ => key,
    }
}
