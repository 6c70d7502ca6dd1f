use std::path::{Component, Path};

use walkdir::WalkDir;

use super::content_type::content_type_for;
use crate::errors::{DeployError, Result};
use crate::interfaces::ObjectStore;
use crate::utils::log_utils::Logger;

/// Upload every non-directory entry below `root` to `bucket`.
///
/// Keys are the entry's path relative to `root` joined with `/`. Returns the
/// number of files uploaded; the walk stops at the first read or upload error.
pub fn upload_tree<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    root: &Path,
    logger: &Logger,
) -> Result<usize> {
    if !root.is_dir() {
        return Err(DeployError::Io {
            path: root.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "upload root is not a directory",
            ),
        });
    }

    let mut uploaded = 0;
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| DeployError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        // Links are not followed, so a linked directory has nothing to upload
        if entry.path_is_symlink() && path.is_dir() {
            logger.warn(&format!(
                "Skipping symlinked directory {}",
                path.display()
            ));
            continue;
        }

        let key = object_key(root, path)?;
        let content_type = content_type_for(path);

        store.put_object(bucket, &key, path, &content_type)?;
        uploaded += 1;
        logger.info(&format!(
            "Uploaded {} to {bucket} with Content-Type: {content_type}",
            path.display()
        ));
    }

    logger.normal(&format!("Uploaded {uploaded} file(s) to bucket: {bucket}"));
    Ok(uploaded)
}

/// Storage key for `path`: its components below `root` joined with `/`.
///
/// # Errors
///
/// Returns an error if `path` is not below `root` or a component is not UTF-8.
pub fn object_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        DeployError::InvalidPath(format!(
            "{} is not below {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| DeployError::InvalidPath(relative.display().to_string()))?;
            parts.push(part);
        }
    }

    if parts.is_empty() {
        return Err(DeployError::InvalidPath(format!(
            "{} has no name relative to {}",
            path.display(),
            root.display()
        )));
    }
    Ok(parts.join("/"))
}
