use super::expansion::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// Checks if a file is readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let expanded_path = expand_tilde(Path::new(file))?;

    if expanded_path.is_file() && fs::metadata(&expanded_path).is_ok() {
        Ok(expanded_path)
    } else {
        Err(format!("The file '{file}' is not readable."))
    }
}

/// Read a single secret-style value from a file, trimming surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds only whitespace.
pub fn read_trimmed_value(path: &Path) -> Result<String, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Unable to read '{}': {e}", path.display()))?;
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("The file '{}' is empty.", path.display()));
    }
    Ok(value.to_string())
}
