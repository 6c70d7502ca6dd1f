use crate::deploy::{DeployConfig, DeployReport, deploy};
use crate::errors::{DeployError, Result};
use crate::infra::{BucketSpec, provision};
use crate::interfaces::DefaultCommandRunner;
use crate::storage::S3StorageClient;
use crate::utils::log_utils::Logger;
use crate::{Args, args::Command};

/// Run the command selected on the command line
pub fn run_app(args: &Args) -> Result<()> {
    let logger = Logger::new(args.verbose);

    match args.command {
        Command::Upload | Command::UploadProd => {
            let config = deploy_config(args)?;
            let store = S3StorageClient::new(&storage_config(args)?, logger)?;
            let DeployReport { deleted, uploaded } =
                deploy(&config, &DefaultCommandRunner, &store, &logger)?;
            logger.debug(&format!("deleted={deleted} uploaded={uploaded}"));
        }
        Command::Plan { stack } => {
            let spec = BucketSpec::for_target(&args.bucket_prefix, stack);
            let rendered = serde_json::to_string_pretty(&spec.to_plan())
                .map_err(|e| DeployError::Config(format!("Failed to render plan: {e}")))?;
            println!("{rendered}");
        }
        Command::Provision { stack } => {
            let spec = BucketSpec::for_target(&args.bucket_prefix, stack);
            let client = S3StorageClient::new(&storage_config(args)?, logger)?;
            provision(&client, &spec, &logger)?;
        }
    }

    Ok(())
}

/// Resolve the deployment settings for the selected environment
pub fn deploy_config(args: &Args) -> Result<DeployConfig> {
    Ok(DeployConfig {
        bucket: args.bucket_name(),
        source_root: args.source_root(),
        build: args.build_config().map_err(DeployError::Config)?,
        skip_build: args.skip_build,
    })
}

fn storage_config(args: &Args) -> Result<crate::storage::StorageConfig> {
    args.storage_config().map_err(DeployError::Config)
}
