//! Recursive asset discovery over an installed dependency tree.
//!
//! The walker drives everything: it parses each package's manifest, resolves
//! every declared dependency to its installed directory and hands that
//! directory to the folder search, which in turn asks the candidate selector
//! for the best stylesheet and script artifacts. Discovery is best-effort
//! throughout; a branch that cannot be resolved is skipped, never an error.

mod folders;
mod manifest;
mod walker;

pub use folders::probe_package;
pub use manifest::{PACKAGE_MANIFEST_FILE, PackageManifest};
pub use walker::walk_manifest;
