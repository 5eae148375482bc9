//! `@path` file references: extraction, resolution and reading.

use crate::utils::path::{absolutize, clean_path};
use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

static FILE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([A-Za-z0-9_./\\-]+)").expect("valid file reference regex"));

/// Why a referenced file could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileReadErrorKind {
    NotFound,
    PermissionDenied,
    IsDirectory,
    /// Metadata lookup failed for another reason
    Access,
    /// Reading the contents failed after a successful lookup
    Read,
}

impl FileReadErrorKind {
    fn describe(&self) -> &'static str {
        match self {
            FileReadErrorKind::NotFound => "file not found:",
            FileReadErrorKind::PermissionDenied => "permission denied reading file:",
            FileReadErrorKind::IsDirectory => "path is a directory, not a file:",
            FileReadErrorKind::Access => "cannot access file:",
            FileReadErrorKind::Read => "error reading file:",
        }
    }
}

#[derive(Error, Debug)]
#[error("{} {}", .kind.describe(), .path.display())]
pub struct FileReadError {
    pub path: PathBuf,
    pub kind: FileReadErrorKind,
    #[source]
    pub source: Option<io::Error>,
}

impl FileReadError {
    fn new(path: &Path, kind: FileReadErrorKind, source: Option<io::Error>) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            source,
        }
    }
}

/// A resolved path and the outcome of reading it.
#[derive(Debug)]
pub struct FileContent {
    pub path: PathBuf,
    pub content: std::result::Result<Vec<u8>, FileReadError>,
}

impl FileContent {
    pub fn is_readable(&self) -> bool {
        self.content.is_ok()
    }
}

/// Find every `@path` token in `text`, deduplicated in first-seen order.
///
/// The grammar is permissive: the domain of an email address matches too.
pub fn extract_references(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    FILE_REFERENCE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .filter(|reference| seen.insert(reference.clone()))
        .collect()
}

/// Resolve references to clean absolute paths.
///
/// Backslashes are treated as separators. Relative references are joined
/// onto `working_dir`.
pub fn resolve_paths(references: &[String], working_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let base = absolutize(working_dir)?;

    Ok(references
        .iter()
        .map(|reference| {
            let normalized = PathBuf::from(reference.replace('\\', "/"));
            if normalized.is_absolute() {
                clean_path(normalized)
            } else {
                clean_path(base.join(clean_path(normalized)))
            }
        })
        .collect())
}

/// Read every path concurrently. Results keep the input order and a failure
/// never stops the other reads.
pub async fn read_all(paths: &[PathBuf]) -> Vec<FileContent> {
    join_all(paths.iter().map(|path| async move {
        let content = read_one(path).await;
        if let Err(e) = &content {
            tracing::warn!(path = %path.display(), error = %e, "referenced file is unreadable");
        }
        FileContent {
            path: path.clone(),
            content,
        }
    }))
    .await
}

async fn read_one(path: &Path) -> std::result::Result<Vec<u8>, FileReadError> {
    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        let kind = match e.kind() {
            io::ErrorKind::NotFound => FileReadErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => FileReadErrorKind::PermissionDenied,
            _ => FileReadErrorKind::Access,
        };
        FileReadError::new(path, kind, Some(e))
    })?;

    if metadata.is_dir() {
        return Err(FileReadError::new(path, FileReadErrorKind::IsDirectory, None));
    }

    tokio::fs::read(path).await.map_err(|e| {
        let kind = match e.kind() {
            io::ErrorKind::PermissionDenied => FileReadErrorKind::PermissionDenied,
            _ => FileReadErrorKind::Read,
        };
        FileReadError::new(path, kind, Some(e))
    })
}
