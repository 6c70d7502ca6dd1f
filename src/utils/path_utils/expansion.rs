use home::home_dir;
use std::path::{Path, PathBuf};

// Expand a leading `~` to the user's home directory.
pub(super) fn expand_tilde(path: &Path) -> Result<PathBuf, String> {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir()
            .map(|home| home.join(rest))
            .ok_or_else(|| "Home directory could not be determined.".to_string()),
        Err(_) => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        let path = Path::new("www/assets");
        assert_eq!(expand_tilde(path).unwrap(), PathBuf::from("www/assets"));
    }

    #[test]
    fn tilde_is_rooted_at_home() {
        if let Some(home) = home_dir() {
            let expanded = expand_tilde(Path::new("~/keys/id")).unwrap();
            assert_eq!(expanded, home.join("keys/id"));
        }
    }
}
