//! Parsing of the per-package dependency manifest.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Manifest file name looked up inside every installed package.
pub const PACKAGE_MANIFEST_FILE: &str = "package.json";

/// Dependency-declaration document consumed per package.
///
/// Only the dependency names matter; version specifiers are carried as raw
/// values and never interpreted or compared. Mappings iterate in document
/// order.
#[derive(Debug, Default, Deserialize)]
pub struct PackageManifest {
    /// Production dependency mapping of name to version specifier.
    #[serde(default)]
    pub dependencies: Map<String, Value>,
    /// Peer dependency mapping of name to version specifier.
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: Map<String, Value>,
}

impl PackageManifest {
    /// Read a manifest from disk, yielding `None` when missing or unparsable.
    pub fn load(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}
