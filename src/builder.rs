//! High-level orchestrator running discovery once and emitting bundles.

use std::path::{Path, PathBuf};

use crate::assembly;
use crate::bundle::{self, EmissionError, Minifier};
use crate::config::BundlerConfig;
use crate::discovery::walk_manifest;
use crate::models::{BundleSources, DiscoveryContext};
use crate::selection::ExclusionSet;

/// Discovers, orders and bundles the assets of one manifest's dependency tree.
///
/// A bundler is created by running the full discovery walk once; the resolved
/// lists can then be queried or emitted any number of times. Discovery is
/// best-effort and never fails; an empty project simply yields empty lists.
#[derive(Debug)]
pub struct AssetBundler {
    sources: BundleSources,
}

impl AssetBundler {
    /// Run the full discovery and assembly for the given configuration.
    pub fn discover(config: &BundlerConfig) -> Self {
        let exclusions = ExclusionSet::with_extra(config.excluded_filenames.iter().cloned());
        let mut ctx = DiscoveryContext::new(config.modules_root.clone(), exclusions);
        walk_manifest(&mut ctx, &config.manifest_path);

        Self {
            sources: assembly::finalize(ctx, config),
        }
    }

    /// Final stylesheet load order.
    pub fn stylesheets(&self) -> &[PathBuf] {
        &self.sources.stylesheets
    }

    /// Final script load order.
    pub fn scripts(&self) -> &[PathBuf] {
        &self.sources.scripts
    }

    /// Unique font files harvested during discovery.
    pub fn fonts(&self) -> &[PathBuf] {
        &self.sources.fonts
    }

    /// Bundle all stylesheets into `output_dir/relative_name`.
    ///
    /// Returns the relative name unchanged so callers can embed it directly in
    /// generated markup.
    pub fn emit_stylesheet_bundle<M: Minifier>(
        &self,
        minifier: &mut M,
        output_dir: &Path,
        relative_name: &str,
    ) -> Result<String, EmissionError> {
        bundle::emit_bundle(
            minifier,
            &self.sources.stylesheets,
            &output_dir.join(relative_name),
        )?;
        Ok(relative_name.to_string())
    }

    /// Bundle all scripts into `output_dir/relative_name`.
    pub fn emit_script_bundle<M: Minifier>(
        &self,
        minifier: &mut M,
        output_dir: &Path,
        relative_name: &str,
    ) -> Result<String, EmissionError> {
        bundle::emit_bundle(
            minifier,
            &self.sources.scripts,
            &output_dir.join(relative_name),
        )?;
        Ok(relative_name.to_string())
    }

    /// Copy every harvested font into `target_dir`, named by base filename.
    pub fn emit_fonts(&self, target_dir: &Path) -> Result<(), EmissionError> {
        bundle::emit_fonts(&self.sources.fonts, target_dir)
    }

    /// Consume the bundler, yielding the finalized source lists.
    pub fn into_sources(self) -> BundleSources {
        self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{BUNDLE_MANIFEST_FILE, Concatenator, load_bundle_manifest};
    use std::fs;
    use tempfile::tempdir;

    /// Lay out an installed package with a manifest and `dist/` assets.
    fn install_package(modules_root: &Path, name: &str, manifest: &str, assets: &[&str]) {
        let package = modules_root.join(name);
        fs::create_dir_all(package.join("dist")).unwrap();
        fs::write(package.join("package.json"), manifest).unwrap();
        for asset in assets {
            fs::write(package.join("dist").join(asset), format!("// {asset}")).unwrap();
        }
    }

    fn write_root_manifest(dir: &Path, manifest: &str) -> PathBuf {
        let path = dir.join("package.json");
        fs::write(&path, manifest).unwrap();
        path
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn discovery_is_deterministic_for_a_fixed_tree() {
        let dir = tempdir().unwrap();
        let modules_root = dir.path().join("node_modules");
        install_package(
            &modules_root,
            "widgets",
            r#"{"dependencies": {"base": "1"}}"#,
            &["widgets.min.css", "widgets.min.js"],
        );
        install_package(&modules_root, "base", "{}", &["base.min.css", "base.min.js"]);

        let manifest = write_root_manifest(dir.path(), r#"{"dependencies": {"widgets": "1"}}"#);
        let config = BundlerConfig {
            manifest_path: manifest,
            modules_root,
            ..BundlerConfig::default()
        };

        let first = AssetBundler::discover(&config).into_sources();
        let second = AssetBundler::discover(&config).into_sources();
        assert_eq!(first, second);
        assert_eq!(first.stylesheets.len(), 2);
        assert_eq!(first.scripts.len(), 2);
    }

    #[test]
    fn dependency_chain_loads_deepest_first() {
        let dir = tempdir().unwrap();
        let modules_root = dir.path().join("node_modules");
        install_package(
            &modules_root,
            "pkg_a",
            r#"{"dependencies": {"pkg_b": "1"}}"#,
            &["a.min.js"],
        );
        install_package(
            &modules_root,
            "pkg_b",
            r#"{"dependencies": {"pkg_c": "1"}}"#,
            &["b.min.js"],
        );
        install_package(&modules_root, "pkg_c", "{}", &["c.min.js"]);

        let manifest = write_root_manifest(dir.path(), r#"{"dependencies": {"pkg_a": "1"}}"#);
        let config = BundlerConfig {
            manifest_path: manifest,
            modules_root,
            ..BundlerConfig::default()
        };

        let bundler = AssetBundler::discover(&config);
        assert_eq!(names(bundler.scripts()), vec![
            "c.min.js",
            "b.min.js",
            "a.min.js"
        ]);
    }

    #[test]
    fn priority_suffix_match_leads_the_final_order() {
        let dir = tempdir().unwrap();
        let modules_root = dir.path().join("node_modules");
        install_package(
            &modules_root,
            "plugin",
            r#"{"dependencies": {"jquery": "1"}}"#,
            &["plugin.min.js"],
        );
        install_package(&modules_root, "jquery", "{}", &["jquery.min.js"]);
        install_package(&modules_root, "analytics", "{}", &["analytics.min.js"]);

        // jquery is walked before analytics, so reversal alone would bury it
        // in the middle of the list.
        let manifest = write_root_manifest(
            dir.path(),
            r#"{"dependencies": {"plugin": "1", "analytics": "1"}}"#,
        );
        let config = BundlerConfig {
            manifest_path: manifest,
            modules_root,
            ..BundlerConfig::default()
        };

        let bundler = AssetBundler::discover(&config);
        assert_eq!(names(bundler.scripts()), vec![
            "jquery.min.js",
            "analytics.min.js",
            "plugin.min.js"
        ]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_installs_deduplicate_to_one_entry() {
        let dir = tempdir().unwrap();
        let modules_root = dir.path().join("node_modules");
        install_package(&modules_root, "real", "{}", &["shared.min.js"]);
        std::os::unix::fs::symlink(modules_root.join("real"), modules_root.join("alias"))
            .unwrap();

        let manifest = write_root_manifest(
            dir.path(),
            r#"{"dependencies": {"real": "1", "alias": "1"}}"#,
        );
        let config = BundlerConfig {
            manifest_path: manifest,
            modules_root,
            ..BundlerConfig::default()
        };

        let bundler = AssetBundler::discover(&config);
        assert_eq!(names(bundler.scripts()), vec!["shared.min.js"]);
    }

    #[test]
    fn custom_duplicates_collapse_to_the_discovered_entry() {
        let dir = tempdir().unwrap();
        let modules_root = dir.path().join("node_modules");
        install_package(&modules_root, "widgets", "{}", &["widgets.min.js"]);

        let discovered = modules_root.join("widgets/dist/widgets.min.js");
        let manifest = write_root_manifest(dir.path(), r#"{"dependencies": {"widgets": "1"}}"#);
        let config = BundlerConfig {
            manifest_path: manifest,
            modules_root,
            custom_scripts: vec![discovered.display().to_string()],
            ..BundlerConfig::default()
        };

        let bundler = AssetBundler::discover(&config);
        assert_eq!(names(bundler.scripts()), vec!["widgets.min.js"]);
    }

    #[test]
    fn emitted_sidecar_matches_the_minifier_input() {
        let dir = tempdir().unwrap();
        let modules_root = dir.path().join("node_modules");
        install_package(
            &modules_root,
            "widgets",
            r#"{"dependencies": {"base": "1"}}"#,
            &["widgets.min.js"],
        );
        install_package(&modules_root, "base", "{}", &["base.min.js"]);

        let manifest = write_root_manifest(dir.path(), r#"{"dependencies": {"widgets": "1"}}"#);
        let config = BundlerConfig {
            manifest_path: manifest,
            modules_root,
            ..BundlerConfig::default()
        };

        let bundler = AssetBundler::discover(&config);
        let output_dir = dir.path().join("public");
        let mut concat = Concatenator::new();
        let relative = bundler
            .emit_script_bundle(&mut concat, &output_dir, "app.min.js")
            .unwrap();
        assert_eq!(relative, "app.min.js");

        let recorded = load_bundle_manifest(&output_dir.join(BUNDLE_MANIFEST_FILE)).unwrap();
        let expected: Vec<String> = bundler
            .scripts()
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(recorded, expected);

        let bundled = fs::read_to_string(output_dir.join("app.min.js")).unwrap();
        assert!(bundled.contains("base.min.js"));
        assert!(bundled.contains("widgets.min.js"));
    }

    #[test]
    fn empty_project_discovers_and_emits_nothing() {
        let dir = tempdir().unwrap();
        let config = BundlerConfig {
            manifest_path: dir.path().join("package.json"),
            modules_root: dir.path().join("node_modules"),
            ..BundlerConfig::default()
        };

        let bundler = AssetBundler::discover(&config);
        assert!(bundler.stylesheets().is_empty());
        assert!(bundler.scripts().is_empty());
        assert!(bundler.fonts().is_empty());
    }

    #[test]
    fn fonts_flow_from_discovery_to_installation() {
        let dir = tempdir().unwrap();
        let modules_root = dir.path().join("node_modules");
        let package = modules_root.join("icons");
        fs::create_dir_all(package.join("dist/css")).unwrap();
        fs::create_dir_all(package.join("dist/fonts")).unwrap();
        fs::write(package.join("package.json"), "{}").unwrap();
        fs::write(package.join("dist/css/icons.min.css"), "css").unwrap();
        fs::write(package.join("dist/fonts/icons.woff2"), "font").unwrap();

        let manifest = write_root_manifest(dir.path(), r#"{"dependencies": {"icons": "1"}}"#);
        let config = BundlerConfig {
            manifest_path: manifest,
            modules_root,
            ..BundlerConfig::default()
        };

        let bundler = AssetBundler::discover(&config);
        let target = dir.path().join("public/fonts");
        bundler.emit_fonts(&target).unwrap();

        assert_eq!(fs::read_to_string(target.join("icons.woff2")).unwrap(), "font");
    }
}
