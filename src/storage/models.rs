use std::fmt;

use aws_sdk_s3::Client;

use crate::utils::log_utils::Logger;

/// Explicit connection settings; anything left `None` falls back to the
/// ambient AWS configuration chain.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    pub region: Option<String>,
    /// Endpoint for S3-compatible stores such as MinIO or R2
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
    pub credentials: Option<StaticCredentials>,
}

/// Access key pair read from files
#[derive(Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field(
                "access_key_id",
                &format!(
                    "{}****",
                    self.access_key_id.chars().take(4).collect::<String>()
                ),
            )
            .field("secret_access_key", &"****")
            .finish()
    }
}

/// Blocking client for an S3-compatible object store
pub struct S3StorageClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) logger: Logger,
}
