//! Caller-facing configuration describing one bundling invocation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "bundler.config.json";

/// Script path suffix promoted to the front of the load order by default.
///
/// Several widely-used packages (Bootstrap 3.x among them) omit jQuery from
/// their dependency mappings even though their scripts must load after it.
pub const DEFAULT_PRIORITY_SCRIPT: &str = "/jquery.min.js";

/// Options controlling discovery, assembly and emission for one invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BundlerConfig {
    /// Path to the manifest whose dependency tree should be bundled.
    pub manifest_path: PathBuf,
    /// Directory under which each dependency name resolves to an install.
    pub modules_root: PathBuf,
    /// Extra stylesheet paths or single-level glob patterns to append.
    pub custom_stylesheets: Vec<String>,
    /// Extra script paths or single-level glob patterns to append.
    pub custom_scripts: Vec<String>,
    /// Bare filenames excluded from candidate selection.
    pub excluded_filenames: Vec<String>,
    /// Script path suffixes promoted to the front of the final load order.
    pub priority_scripts: Vec<String>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("package.json"),
            modules_root: PathBuf::from("node_modules"),
            custom_stylesheets: Vec::new(),
            custom_scripts: Vec::new(),
            excluded_filenames: Vec::new(),
            priority_scripts: vec![DEFAULT_PRIORITY_SCRIPT.to_string()],
        }
    }
}

impl BundlerConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating
    /// with sensible assumptions.
    pub fn discover(project_dir: &Path) -> Self {
        Self::from_path(&project_dir.join(DEFAULT_CONFIG_FILE)).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}
