//! Data structures shared across discovery, assembly and emission.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::selection::ExclusionSet;

/// Mutable accumulator threaded through the recursive dependency walk.
///
/// One context is created per top-level invocation and owns every piece of
/// state the walk mutates: the three asset lists, the exclusion set and the
/// cycle guard. Nothing here is shared across invocations.
#[derive(Debug)]
pub struct DiscoveryContext {
    /// Directory under which each dependency name resolves to an install.
    pub modules_root: PathBuf,
    /// Stylesheets in raw discovery order (dependents before dependencies).
    pub stylesheets: Vec<PathBuf>,
    /// Scripts in raw discovery order.
    pub scripts: Vec<PathBuf>,
    /// Font files harvested alongside stylesheet hits.
    pub fonts: Vec<PathBuf>,
    /// Bare filenames that must never be selected as candidates.
    pub exclusions: ExclusionSet,
    in_progress: BTreeSet<PathBuf>,
}

impl DiscoveryContext {
    /// Create an empty context rooted at the given modules directory.
    pub fn new(modules_root: impl Into<PathBuf>, exclusions: ExclusionSet) -> Self {
        Self {
            modules_root: modules_root.into(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            fonts: Vec::new(),
            exclusions,
            in_progress: BTreeSet::new(),
        }
    }

    /// Mark a package as being walked; returns `false` when it already is.
    ///
    /// A package that is already on the recursion stack means the installed
    /// graph contains a dependency cycle, which the walker cuts instead of
    /// recursing without bound.
    pub fn enter_package(&mut self, canonical_root: &Path) -> bool {
        self.in_progress.insert(canonical_root.to_path_buf())
    }

    /// Remove a package from the recursion stack once its walk completed.
    pub fn leave_package(&mut self, canonical_root: &Path) {
        self.in_progress.remove(canonical_root);
    }

    /// Split the context into its accumulated asset lists.
    pub fn into_lists(self) -> (Vec<PathBuf>, Vec<PathBuf>, Vec<PathBuf>) {
        (self.stylesheets, self.scripts, self.fonts)
    }
}

/// Finalized, canonical, deduplicated asset lists ready for emission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BundleSources {
    /// Stylesheets in load order (dependencies before dependents).
    pub stylesheets: Vec<PathBuf>,
    /// Scripts in load order, after priority overrides and custom injection.
    pub scripts: Vec<PathBuf>,
    /// Unique font files referenced by the discovered stylesheets.
    pub fonts: Vec<PathBuf>,
}
