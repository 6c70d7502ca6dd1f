use std::path::Path;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

use crate::errors::{DeployError, Result};
use crate::interfaces::{ListPage, ObjectStore};
use crate::storage::models::S3StorageClient;

impl ObjectStore for S3StorageClient {
    fn list_objects(&self, bucket: &str, continuation_token: Option<String>) -> Result<ListPage> {
        let output = self
            .runtime
            .block_on(async {
                self.client
                    .list_objects_v2()
                    .bucket(bucket)
                    .set_continuation_token(continuation_token)
                    .send()
                    .await
            })
            .map_err(|e| DeployError::List {
                bucket: bucket.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(page_from_output(&output))
    }

    fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.runtime
            .block_on(async {
                self.client
                    .delete_object()
                    .bucket(bucket)
                    .key(key)
                    .send()
                    .await
            })
            .map_err(|e| DeployError::Delete {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }

    fn put_object(&self, bucket: &str, key: &str, path: &Path, content_type: &str) -> Result<()> {
        self.logger.debug(&format!(
            "PUT s3://{bucket}/{key} ({content_type}) from {}",
            path.display()
        ));

        self.runtime.block_on(async {
            // Streams from disk rather than loading the file into memory
            let body = ByteStream::from_path(path)
                .await
                .map_err(|e| DeployError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::other(e),
                })?;

            self.client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(body)
                .content_type(content_type)
                .acl(ObjectCannedAcl::PublicRead)
                .send()
                .await
                .map_err(|e| DeployError::Upload {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

            Ok(())
        })
    }
}

/// Keys and continuation token of one listing response. A token is only
/// reported while the listing is truncated.
pub(crate) fn page_from_output(output: &ListObjectsV2Output) -> ListPage {
    let keys = output
        .contents()
        .iter()
        .filter_map(|object| object.key().map(str::to_string))
        .collect();

    let next_token = if output.is_truncated().unwrap_or(false) {
        output.next_continuation_token().map(str::to_string)
    } else {
        None
    };

    ListPage { keys, next_token }
}
