use std::path::PathBuf;

use crate::build::{BuildConfig, run_build};
use crate::errors::Result;
use crate::interfaces::{CommandRunner, ObjectStore};
use crate::sync::{clear_bucket, upload_tree};
use crate::utils::log_utils::Logger;

/// Everything one deployment needs, resolved up front
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub bucket: String,
    /// Build output uploaded after the bucket is cleared
    pub source_root: PathBuf,
    pub build: BuildConfig,
    pub skip_build: bool,
}

/// What a successful deployment changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub deleted: usize,
    pub uploaded: usize,
}

/// Build the bundle, clear the bucket, then upload the build output.
///
/// Stops at the first error. A failure after the clear leaves the bucket
/// partially or completely empty; nothing is rolled back.
pub fn deploy<C, S>(
    config: &DeployConfig,
    runner: &C,
    store: &S,
    logger: &Logger,
) -> Result<DeployReport>
where
    C: CommandRunner + ?Sized,
    S: ObjectStore + ?Sized,
{
    if config.skip_build {
        logger.info("Skipping build");
    } else {
        run_build(runner, &config.build, logger)?;
    }

    let deleted = clear_bucket(store, &config.bucket, logger)?;
    let uploaded = upload_tree(store, &config.bucket, &config.source_root, logger)?;

    logger.normal(&format!(
        "Deployed {} to {}: {deleted} removed, {uploaded} uploaded",
        config.source_root.display(),
        config.bucket
    ));
    Ok(DeployReport { deleted, uploaded })
}
