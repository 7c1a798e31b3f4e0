//! Flat installation of harvested font files into a target directory.

use std::fs;
use std::path::{Path, PathBuf};

use same_file::is_same_file;

use super::EmissionError;

/// Copy every resolved font into `target_dir`, named by base filename.
///
/// Existing files of the same name are overwritten silently; a destination
/// that already is the same file (a hard link or symlink back to the source)
/// is left untouched.
pub fn emit_fonts(fonts: &[PathBuf], target_dir: &Path) -> Result<(), EmissionError> {
    fs::create_dir_all(target_dir).map_err(|err| EmissionError::Io {
        path: target_dir.to_path_buf(),
        source: err,
    })?;

    for font in fonts {
        let Some(name) = font.file_name() else {
            continue;
        };
        install_font(font, &target_dir.join(name)).map_err(|err| EmissionError::Io {
            path: font.clone(),
            source: err,
        })?;
    }

    Ok(())
}

fn install_font(source: &Path, destination: &Path) -> std::io::Result<()> {
    if destination.exists() {
        if is_same_file(source, destination)? {
            return Ok(());
        }
        fs::remove_file(destination)?;
    }

    fs::copy(source, destination).map(|_| ())
}
