use std::collections::HashMap;
use std::path::Path;

use mockall::automock;

use crate::errors::Result;
use crate::infra::BucketSpec;

/// One page of an object listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    pub keys: Vec<String>,
    /// Cursor for the next page; `None` on the final page
    pub next_token: Option<String>,
}

/// Interface for launching build steps to facilitate testing
#[automock]
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        dir: &Path,
        env: &HashMap<String, String>,
    ) -> Result<()>;
}

/// The object operations a deployment needs from an S3-compatible store
#[automock]
pub trait ObjectStore {
    fn list_objects(&self, bucket: &str, continuation_token: Option<String>) -> Result<ListPage>;
    fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
    /// Upload the file at `path` under `key` with public-read visibility
    fn put_object(&self, bucket: &str, key: &str, path: &Path, content_type: &str) -> Result<()>;
}

/// Bucket-level settings applied by `provision`
#[automock]
pub trait BucketProvisioner {
    /// Create the bucket; a bucket already owned by the caller counts as success
    fn create_bucket(&self, spec: &BucketSpec) -> Result<()>;
    fn put_ownership_controls(&self, spec: &BucketSpec) -> Result<()>;
    fn put_public_access_block(&self, spec: &BucketSpec) -> Result<()>;
    fn put_cors(&self, spec: &BucketSpec) -> Result<()>;
    fn put_acl(&self, spec: &BucketSpec) -> Result<()>;
    fn put_policy(&self, spec: &BucketSpec) -> Result<()>;
}

/// Default implementation of CommandRunner that spawns real processes
pub struct DefaultCommandRunner;

impl CommandRunner for DefaultCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        dir: &Path,
        env: &HashMap<String, String>,
    ) -> Result<()> {
        crate::utils::cmd_utils::exec_cmd_in(program, args, dir, env)
    }
}
