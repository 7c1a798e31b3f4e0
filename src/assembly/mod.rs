//! Post-walk reshaping of raw discovery output into final load order.
//!
//! The walker accumulates assets dependents-first; this module reverses that
//! into dependencies-first load order, applies script priority overrides,
//! injects caller-supplied assets and finally canonicalizes and deduplicates
//! every list. The steps run in exactly that order because each one depends on
//! the positions established by the previous.

mod custom;
mod filters;
mod priority;

pub use custom::{CustomAsset, append_custom_assets};
pub use filters::is_remote_reference;
pub use priority::apply_priority_rules;

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::BundlerConfig;
use crate::models::{BundleSources, DiscoveryContext};
use crate::probe;

/// Reshape raw discovery output into the final ordered, deduplicated lists.
///
/// The stylesheet and script lists are reversed so that dependencies load
/// before their dependents, scripts get their priority overrides, custom
/// entries are appended with the lowest load priority, and every list is
/// canonicalized and deduplicated at first occurrence. The font list only
/// passes through the last two steps.
pub fn finalize(ctx: DiscoveryContext, config: &BundlerConfig) -> BundleSources {
    let (mut stylesheets, mut scripts, fonts) = ctx.into_lists();

    stylesheets.reverse();
    scripts.reverse();

    apply_priority_rules(&mut scripts, &config.priority_scripts);

    append_custom_assets(&mut stylesheets, &config.custom_stylesheets);
    append_custom_assets(&mut scripts, &config.custom_scripts);

    BundleSources {
        stylesheets: canonical_unique(stylesheets),
        scripts: canonical_unique(scripts),
        fonts: canonical_unique(fonts),
    }
}

/// Map paths through canonicalization, dropping failures and duplicates.
///
/// First occurrence wins, preserving the load order established by the
/// reversal and injection steps.
fn canonical_unique(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = BTreeSet::new();
    paths
        .into_iter()
        .filter_map(|path| probe::canonical(&path))
        .filter(|path| seen.insert(path.clone()))
        .collect()
}
