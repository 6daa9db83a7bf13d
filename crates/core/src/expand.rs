//! Artifact path expansion
//!
//! A file spec is a `;`-separated list of tokens relative to the workspace
//! directory. Each token is tried as a literal file first and falls back to
//! glob matching, so `dist/app.js;build/*.map` mixes both forms freely.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Separator between tokens in a file spec
pub const SPEC_SEPARATOR: char = ';';

/// A local file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Path to the file (workspace-relative tokens resolve under the base dir)
    pub path: PathBuf,

    /// Size in bytes
    pub len: u64,

    /// Final path component
    pub file_name: String,
}

impl ResolvedFile {
    fn from_path(path: PathBuf) -> Result<Self> {
        let len = std::fs::metadata(&path)?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            path,
            len,
            file_name,
        })
    }
}

/// Expand a file spec against a workspace directory
///
/// Tokens expand in order and each glob's own match order is preserved, so
/// the result is deterministic for a given tree. Blank tokens are skipped.
/// Directories never match. A missing workspace directory expands to
/// nothing; optional artifacts are a normal case, not an error.
pub fn expand(base_dir: &Path, file_spec: &str) -> Result<Vec<ResolvedFile>> {
    if !base_dir.is_dir() {
        tracing::warn!(
            base = %base_dir.display(),
            "workspace directory does not exist, nothing to expand"
        );
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for token in file_spec.split(SPEC_SEPARATOR) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        // A literal file match wins over pattern interpretation.
        let literal = base_dir.join(token);
        if literal.is_file() {
            files.push(ResolvedFile::from_path(literal)?);
            continue;
        }

        let matched = expand_pattern(base_dir, token)?;
        if matched.is_empty() {
            tracing::debug!(token, "no files matched");
        }
        files.extend(matched);
    }

    Ok(files)
}

/// Expand one glob token rooted at the workspace directory
fn expand_pattern(base_dir: &Path, token: &str) -> Result<Vec<ResolvedFile>> {
    let pattern = base_dir.join(token);
    let pattern = pattern.to_string_lossy();

    let entries = glob::glob(&pattern)
        .map_err(|e| Error::LocalPath(format!("bad pattern '{token}': {e}")))?;

    let mut matched = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => matched.push(ResolvedFile::from_path(path)?),
            Ok(_) => {} // directories are not uploaded
            Err(e) => {
                tracing::debug!(token, error = %e, "skipping unreadable match");
            }
        }
    }

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&path, format!("content of {file}")).unwrap();
        }
        dir
    }

    #[test]
    fn test_literal_file() {
        let dir = workspace(&["a.txt"]);
        let files = expand(dir.path(), "a.txt").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "a.txt");
        assert!(files[0].len > 0);
    }

    #[test]
    fn test_glob_pattern() {
        let dir = workspace(&["dist/a.js", "dist/b.js", "dist/c.css"]);
        let files = expand(dir.path(), "dist/*.js").unwrap();
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.js", "b.js"]);
    }

    #[test]
    fn test_token_order_preserved() {
        let dir = workspace(&["z.txt", "a.log"]);
        let files = expand(dir.path(), "z.txt;*.log").unwrap();
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["z.txt", "a.log"]);
    }

    #[test]
    fn test_blank_token_is_skipped() {
        let dir = workspace(&["a.txt", "b.txt"]);
        let files = expand(dir.path(), "a.txt;;b.txt").unwrap();
        assert_eq!(files.len(), 2);

        // Trailing separator behaves the same way.
        let files = expand(dir.path(), "a.txt; ;b.txt;").unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_directories_excluded() {
        let dir = workspace(&["sub/a.txt"]);
        let files = expand(dir.path(), "*").unwrap();
        assert!(files.is_empty());

        let files = expand(dir.path(), "sub").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_zero_match_token_yields_nothing() {
        let dir = workspace(&["a.txt"]);
        let files = expand(dir.path(), "a.txt;missing*.log").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "a.txt");
    }

    #[test]
    fn test_missing_base_dir() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        let files = expand(&gone, "a.txt;*.log").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_blank_spec() {
        let dir = workspace(&["a.txt"]);
        let files = expand(dir.path(), "  ").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_every_result_is_a_file() {
        let dir = workspace(&["a.txt", "sub/b.txt", "sub/deep/c.txt"]);
        let files = expand(dir.path(), "*.txt;sub/*.txt;sub/deep/*.txt").unwrap();
        assert_eq!(files.len(), 3);
        for file in &files {
            assert!(file.path.is_file());
        }
    }
}
