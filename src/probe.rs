//! Filesystem probing primitives shared by discovery and assembly.
//!
//! Every operation is a plain read; the probe never creates or mutates
//! anything. Directory listings are sorted by name so that discovery output is
//! reproducible regardless of the platform's directory iteration order.

use std::fs;
use std::path::{Path, PathBuf};

/// Returns `true` when `path` exists on disk.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Returns `true` when `path` exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Resolve symlinks and relative segments, yielding `None` for missing targets.
///
/// Callers drop the candidate on `None` rather than surface an error; a path
/// that cannot be resolved is simply not an asset.
pub fn canonical(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path).ok()
}

/// List the entries of a single directory, sorted by name.
///
/// An unreadable or missing directory lists as empty.
pub fn list_directory(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    paths
}

/// Expand a single-level glob pattern with a trailing wildcard.
///
/// `"/assets/css/*"` lists every entry of `/assets/css`, while
/// `"/assets/css/app*"` keeps only the entries whose name starts with `app`.
/// The expansion never recurses into subdirectories. A pattern without a
/// wildcard names a literal path and resolves to itself when it exists.
pub fn list(pattern: &str) -> Vec<PathBuf> {
    let Some((prefix, _)) = pattern.split_once('*') else {
        let path = PathBuf::from(pattern);
        if path.exists() {
            return vec![path];
        }
        return Vec::new();
    };

    let (dir, name_prefix) = match prefix.rsplit_once('/') {
        Some((dir, name)) => (dir.to_string(), name.to_string()),
        None => (String::from("."), prefix.to_string()),
    };
    let dir = if dir.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(dir)
    };

    list_directory(&dir)
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(name_prefix.as_str()))
        })
        .collect()
}
