use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};

use crate::errors::{DeployError, Result};
use crate::storage::models::{S3StorageClient, StorageConfig};
use crate::utils::log_utils::Logger;

impl S3StorageClient {
    /// Create a client from explicit settings layered over the ambient AWS config
    pub fn new(config: &StorageConfig, logger: Logger) -> Result<Self> {
        // Reused for every blocking call this client makes
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| DeployError::Runtime(format!("Failed to create runtime: {e}")))?;

        logger.debug("Creating S3-compatible client with these parameters:");
        logger.debug(&format!(
            "Region: {}",
            config.region.as_deref().unwrap_or("(ambient)")
        ));
        logger.debug(&format!(
            "Endpoint: {}",
            config.endpoint_url.as_deref().unwrap_or("(default)")
        ));
        logger.debug(&format!("Force path style: {}", config.force_path_style));
        logger.debug(&format!("Static credentials: {:?}", config.credentials));

        let sdk_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &config.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(creds) = &config.credentials {
                loader = loader.credentials_provider(Credentials::new(
                    creds.access_key_id.clone(),
                    creds.secret_access_key.clone(),
                    None,
                    None,
                    "BundleDeployStaticCredentials",
                ));
            }
            loader.load().await
        });

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint.clone());
        }
        if config.force_path_style {
            builder = builder.force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            runtime,
            logger,
        })
    }

    /// Region the client resolved, if any
    #[must_use]
    pub fn region(&self) -> Option<String> {
        self.client.config().region().map(ToString::to_string)
    }
}
