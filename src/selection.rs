//! Candidate selection for a package's representative stylesheet or script.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::probe;

/// Filename excluded from candidate selection by default.
///
/// An `index.js` is almost always a CommonJS entry stub rather than a
/// browser-ready distributable.
pub const DEFAULT_EXCLUDED_FILENAME: &str = "index.js";

/// Set of bare filenames that must never be selected as a candidate.
///
/// Exclusions match the filename only, never the directory, and are checked
/// at selection time for stylesheets and scripts alike.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        let mut names = BTreeSet::new();
        names.insert(DEFAULT_EXCLUDED_FILENAME.to_string());
        Self { names }
    }
}

impl ExclusionSet {
    /// Build the default set extended with caller-supplied filenames.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in extra {
            set.names.insert(name.into());
        }
        set
    }

    /// Returns `true` when the bare filename is excluded from selection.
    pub fn contains(&self, filename: &str) -> bool {
        self.names.contains(filename)
    }
}

/// Pick the best-matching file with the given extension inside `dir`.
///
/// Candidates are the directory entries whose filename ends with `extension`
/// and is not excluded. Among those, the strictly shortest filename wins;
/// minified distributables tend to carry shorter names than their source or
/// sourcemap siblings. Ties keep the first candidate in sorted listing order.
pub fn select_best_candidate(
    dir: &Path,
    extension: &str,
    exclusions: &ExclusionSet,
) -> Option<PathBuf> {
    let mut best: Option<(usize, PathBuf)> = None;

    for path in probe::list_directory(dir) {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !name.ends_with(extension) || exclusions.contains(name) {
            continue;
        }
        if best.as_ref().is_none_or(|(shortest, _)| name.len() < *shortest) {
            best = Some((name.len(), path));
        }
    }

    best.map(|(_, path)| path)
}
