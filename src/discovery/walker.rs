//! Depth-first traversal of the declared dependency graph.

use std::path::Path;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::discovery::folders::probe_package;
use crate::discovery::manifest::{PACKAGE_MANIFEST_FILE, PackageManifest};
use crate::models::DiscoveryContext;
use crate::probe;

/// Walk a manifest's declared dependency tree, accumulating assets into `ctx`.
///
/// Does nothing unless the manifest file exists and the context's modules root
/// is a directory. Dependencies are visited depth-first in document order,
/// production dependencies before peer dependencies. Each dependency's own
/// assets are recorded before its manifest is walked, so the raw lists read
/// dependents before their dependencies; the assembler's reversal turns that
/// into load order. Missing or unparsable manifests and unresolvable installs
/// terminate their branch silently.
pub fn walk_manifest(ctx: &mut DiscoveryContext, manifest_path: &Path) {
    if !probe::exists(manifest_path) || !probe::is_directory(&ctx.modules_root) {
        return;
    }

    let Some(manifest) = PackageManifest::load(manifest_path) else {
        debug!("skipping unparsable manifest at {}", manifest_path.display());
        return;
    };

    walk_dependency_map(ctx, &manifest.dependencies);
    walk_dependency_map(ctx, &manifest.peer_dependencies);
}

fn walk_dependency_map(ctx: &mut DiscoveryContext, dependencies: &Map<String, Value>) {
    for name in dependencies.keys() {
        let install = ctx.modules_root.join(name);
        let Some(package_root) = probe::canonical(&install) else {
            debug!(
                "dependency {name} is not installed under {}",
                ctx.modules_root.display()
            );
            continue;
        };

        probe_package(ctx, &package_root);

        if ctx.enter_package(&package_root) {
            walk_manifest(ctx, &package_root.join(PACKAGE_MANIFEST_FILE));
            ctx.leave_package(&package_root);
        } else {
            warn!(
                "dependency cycle detected at {}; not recursing again",
                package_root.display()
            );
        }
    }
}
