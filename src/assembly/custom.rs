//! Injection of caller-supplied assets after the discovered entries.

use std::path::PathBuf;

use log::debug;

use crate::assembly::filters::is_remote_reference;
use crate::probe;

/// A caller-supplied asset entry, either a literal path or a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomAsset {
    /// A single path, appended only when it exists on disk.
    Exact(PathBuf),
    /// A single-level wildcard pattern, expanded to every match.
    Glob(String),
}

impl CustomAsset {
    /// Classify a raw entry by the presence of a wildcard segment.
    pub fn parse(raw: &str) -> Self {
        if raw.contains('*') {
            Self::Glob(raw.to_string())
        } else {
            Self::Exact(PathBuf::from(raw))
        }
    }

    /// Resolve the entry to the concrete paths it contributes.
    pub fn resolve(&self) -> Vec<PathBuf> {
        match self {
            Self::Exact(path) => {
                if probe::exists(path) {
                    vec![path.clone()]
                } else {
                    Vec::new()
                }
            }
            Self::Glob(pattern) => probe::list(pattern),
        }
    }
}

/// Append caller-supplied entries after all discovered assets.
///
/// Custom entries carry the lowest load priority; callers relying on a
/// particular override order must pre-sort their own list. Remote references
/// have no on-disk file behind them and are skipped outright.
pub fn append_custom_assets(list: &mut Vec<PathBuf>, entries: &[String]) {
    for raw in entries {
        if is_remote_reference(raw) {
            debug!("skipping remote asset reference {raw}");
            continue;
        }
        list.extend(CustomAsset::parse(raw).resolve());
    }
}
