//! The sidecar manifest recording exactly which sources fed one bundle.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::EmissionError;

/// Sidecar file name written next to every emitted bundle.
pub const BUNDLE_MANIFEST_FILE: &str = ".bundle.json";

/// Write the ordered source list for one bundle into `output_dir`.
///
/// The manifest is a pretty-printed JSON array of the canonical source paths
/// with separators left unescaped. It exists purely for traceability; nothing
/// in the crate reads it back during resolution.
pub fn write_bundle_manifest(
    output_dir: &Path,
    sources: &[PathBuf],
) -> Result<(), EmissionError> {
    let entries: Vec<String> = sources
        .iter()
        .map(|path| path.to_string_lossy().replace('\\', "/"))
        .collect();

    let manifest_path = output_dir.join(BUNDLE_MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&entries).map_err(|err| EmissionError::Io {
        path: manifest_path.clone(),
        source: std::io::Error::other(err),
    })?;

    fs::write(&manifest_path, json).map_err(|err| EmissionError::Io {
        path: manifest_path,
        source: err,
    })
}

/// Read a sidecar manifest back as the list of source paths it records.
pub fn load_bundle_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("bundle manifest not found at {}", path.display()))?;
    let sources: Vec<String> =
        serde_json::from_str(&content).context("failed to parse bundle manifest JSON")?;
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn manifest_round_trips_the_source_list() {
        let dir = tempdir().unwrap();
        let sources = vec![
            PathBuf::from("/modules/jquery/dist/jquery.min.js"),
            PathBuf::from("/modules/bootstrap/dist/js/bootstrap.min.js"),
        ];

        write_bundle_manifest(dir.path(), &sources).unwrap();

        let loaded = load_bundle_manifest(&dir.path().join(BUNDLE_MANIFEST_FILE)).unwrap();
        assert_eq!(loaded, vec![
            "/modules/jquery/dist/jquery.min.js".to_string(),
            "/modules/bootstrap/dist/js/bootstrap.min.js".to_string(),
        ]);
    }

    #[test]
    fn manifest_leaves_path_separators_unescaped() {
        let dir = tempdir().unwrap();
        write_bundle_manifest(dir.path(), &[PathBuf::from("/a/b.css")]).unwrap();

        let raw = fs::read_to_string(dir.path().join(BUNDLE_MANIFEST_FILE)).unwrap();
        assert!(raw.contains("/a/b.css"));
        assert!(!raw.contains("\\/"));
    }

    #[test]
    fn loading_a_missing_manifest_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_bundle_manifest(&dir.path().join(BUNDLE_MANIFEST_FILE)).is_err());
    }
}
