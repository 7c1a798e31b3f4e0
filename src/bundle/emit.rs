//! Feeding ordered sources through a minifier into one output bundle.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::EmissionError;
use super::manifest::write_bundle_manifest;
use super::minify::Minifier;

/// Bundle `sources` into `output_path` through the provided minifier.
///
/// Each source's raw content is fed to the minifier in list order, the output
/// directory is created, the sidecar manifest is written beside the output and
/// the minifier finally produces the combined file. Writes are not
/// transactional; a failure part-way through leaves partial output behind for
/// an idempotent retry.
pub fn emit_bundle<M: Minifier>(
    minifier: &mut M,
    sources: &[PathBuf],
    output_path: &Path,
) -> Result<(), EmissionError> {
    for source in sources {
        let content = fs::read_to_string(source).map_err(|err| EmissionError::Io {
            path: source.clone(),
            source: err,
        })?;
        minifier.add(&content);
    }

    let output_dir = output_path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(output_dir).map_err(|err| EmissionError::Io {
        path: output_dir.to_path_buf(),
        source: err,
    })?;

    write_bundle_manifest(output_dir, sources)?;

    debug!(
        "bundling {} sources into {}",
        sources.len(),
        output_path.display()
    );
    minifier
        .minify(output_path)
        .map_err(|err| EmissionError::Minify {
            path: output_path.to_path_buf(),
            source: err,
        })
}
