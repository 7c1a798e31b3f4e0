//! Load-order overrides for scripts that must lead the bundle.

use std::path::{Path, PathBuf};

use log::debug;

/// Move every script matching one of the suffix rules to the front.
///
/// Rules are matched against the path with separators normalised to forward
/// slashes. Each match is moved individually, so when several scripts match
/// the same rule, the last one processed ends up first. This compensates for
/// packages whose manifests omit a foundational library from their dependency
/// mappings.
pub fn apply_priority_rules(scripts: &mut Vec<PathBuf>, rules: &[String]) {
    for rule in rules {
        let matched: Vec<PathBuf> = scripts
            .iter()
            .filter(|path| matches_suffix(path, rule))
            .cloned()
            .collect();

        for path in matched {
            if let Some(position) = scripts.iter().position(|entry| entry == &path) {
                let script = scripts.remove(position);
                debug!(
                    "promoting {} to the front of the script order",
                    script.display()
                );
                scripts.insert(0, script);
            }
        }
    }
}

fn matches_suffix(path: &Path, rule: &str) -> bool {
    path.to_string_lossy().replace('\\', "/").ends_with(rule)
}
