//! Seam for the injected minifying capability.

use std::fs;
use std::io;
use std::path::Path;

/// Minifying capability fed one source at a time before writing the result.
///
/// One fresh value is expected per bundle kind per invocation. Implementations
/// are free to minify incrementally in [`add`](Minifier::add) or all at once
/// in [`minify`](Minifier::minify).
pub trait Minifier {
    /// Accumulate one source's raw text.
    fn add(&mut self, source: &str);

    /// Write the combined, minified result to `output_path`.
    fn minify(&mut self, output_path: &Path) -> io::Result<()>;
}

/// Pass-through [`Minifier`] joining sources verbatim.
///
/// Useful in tests and for callers that defer real minification to a later
/// build stage.
#[derive(Debug, Default)]
pub struct Concatenator {
    parts: Vec<String>,
}

impl Concatenator {
    /// Create an empty concatenator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Minifier for Concatenator {
    fn add(&mut self, source: &str) {
        self.parts.push(source.to_string());
    }

    fn minify(&mut self, output_path: &Path) -> io::Result<()> {
        fs::write(output_path, self.parts.join("\n"))
    }
}
