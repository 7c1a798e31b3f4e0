//! Emission of minified bundles, sidecar manifests and font copies.

mod emit;
mod fonts;
mod manifest;
mod minify;

pub use emit::emit_bundle;
pub use fonts::emit_fonts;
pub use manifest::{BUNDLE_MANIFEST_FILE, load_bundle_manifest, write_bundle_manifest};
pub use minify::{Concatenator, Minifier};

use std::path::PathBuf;

/// Errors surfaced by bundle emission and font installation.
///
/// Discovery never fails; only the write side of the crate does. Emission is
/// idempotent, so a failed bundle may be retried from the same inputs.
#[derive(Debug)]
pub enum EmissionError {
    /// Reading a source or writing an output failed.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// The injected minifying capability failed to produce the output.
    Minify {
        /// Output path the minifier was asked to write.
        path: PathBuf,
        /// Error reported by the minifier.
        source: std::io::Error,
    },
}

impl std::fmt::Display for EmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "i/o failure at {}: {}", path.display(), source)
            }
            Self::Minify { path, source } => {
                write!(f, "minifier failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for EmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::Minify { source, .. } => Some(source),
        }
    }
}
