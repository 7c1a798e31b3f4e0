//! Ordered folder probing that locates a package's distributable assets.

use std::path::Path;

use log::debug;

use crate::models::DiscoveryContext;
use crate::probe;
use crate::selection::select_best_candidate;

/// One attempt to locate assets within a conventional package subfolder.
struct ProbeStep {
    /// Subfolder tried relative to the package root; `None` is the root itself.
    subdir: Option<&'static str>,
    /// Search the step directory before its `css/` and `js/` subfolders.
    root_first: bool,
}

/// Conventional locations tried in order until one yields any asset.
///
/// `dist/umd` covers packages publishing UMD builds into a nested folder
/// (popper.js), `dist` and `lib` the common build-output conventions; the
/// package root is the last resort, searched root-first.
const PROBE_STEPS: &[ProbeStep] = &[
    ProbeStep { subdir: Some("dist/umd"), root_first: false },
    ProbeStep { subdir: Some("dist"), root_first: false },
    ProbeStep { subdir: Some("lib"), root_first: false },
    ProbeStep { subdir: None, root_first: true },
];

/// Locate the best stylesheet, script and font assets for one installed
/// package.
///
/// Probing short-circuits: once a step finds an asset of either kind, later
/// steps are never tried.
pub fn probe_package(ctx: &mut DiscoveryContext, package_root: &Path) {
    for step in PROBE_STEPS {
        let dir = match step.subdir {
            Some(subdir) => package_root.join(subdir),
            None => package_root.to_path_buf(),
        };

        if probe_step(ctx, &dir, step.root_first) > 0 {
            debug!(
                "assets for {} found under {}",
                package_root.display(),
                dir.display()
            );
            return;
        }
    }
}

/// Search one probing step, returning how many assets it contributed.
///
/// A `css/` subfolder is searched for stylesheets and, on a stylesheet hit,
/// the sibling `fonts/` directory is harvested wholesale. A `js/` subfolder
/// is searched for scripts independently of the stylesheet outcome. When the
/// subfolders yield nothing at all, the step directory itself is searched
/// last, unless the root-first variant already did.
fn probe_step(ctx: &mut DiscoveryContext, dir: &Path, root_first: bool) -> usize {
    if !probe::is_directory(dir) {
        return 0;
    }

    if root_first {
        let found = search_directory(ctx, dir);
        if found > 0 {
            return found;
        }
    }

    let mut found = 0;

    let css_dir = dir.join("css");
    if probe::is_directory(&css_dir) {
        let css_found = search_directory(ctx, &css_dir);
        if css_found > 0 {
            harvest_fonts(ctx, &dir.join("fonts"));
        }
        found += css_found;
    }

    let js_dir = dir.join("js");
    if probe::is_directory(&js_dir) {
        found += search_directory(ctx, &js_dir);
    }

    if !root_first && found == 0 {
        found = search_directory(ctx, dir);
    }

    found
}

/// Search a single directory for the best stylesheet and script candidates.
///
/// Minified artifacts win over their plain siblings: `.min.css` is tried
/// before `.css` and `.min.js` before `.js`.
fn search_directory(ctx: &mut DiscoveryContext, dir: &Path) -> usize {
    let mut found = 0;

    let stylesheet = select_best_candidate(dir, ".min.css", &ctx.exclusions)
        .or_else(|| select_best_candidate(dir, ".css", &ctx.exclusions));
    if let Some(stylesheet) = stylesheet {
        ctx.stylesheets.push(stylesheet);
        found += 1;
    }

    let script = select_best_candidate(dir, ".min.js", &ctx.exclusions)
        .or_else(|| select_best_candidate(dir, ".js", &ctx.exclusions));
    if let Some(script) = script {
        ctx.scripts.push(script);
        found += 1;
    }

    found
}

/// Append every file under a package's `fonts/` directory.
///
/// Fonts only ride along with a stylesheet hit in the same probing step; a
/// fonts directory without a matching stylesheet is never harvested.
fn harvest_fonts(ctx: &mut DiscoveryContext, fonts_dir: &Path) {
    if !probe::is_directory(fonts_dir) {
        return;
    }

    for path in probe::list_directory(fonts_dir) {
        if path.is_file() {
            ctx.fonts.push(path);
        }
    }
}
