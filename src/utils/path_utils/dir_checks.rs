use super::expansion::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// Checks if a directory is readable.
///
/// # Errors
///
/// Returns an error if the directory does not exist or cannot be listed.
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let expanded_path = expand_tilde(Path::new(dir))?;

    if expanded_path.is_dir() && fs::read_dir(&expanded_path).is_ok() {
        Ok(expanded_path)
    } else {
        Err(format!("The directory '{dir}' is not readable."))
    }
}
