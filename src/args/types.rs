use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::validators::{check_bucket_name, check_env_pair, validate};
use crate::build::BuildConfig;
use crate::infra::DEFAULT_BUCKET_PREFIX;
use crate::storage::{StaticCredentials, StorageConfig};
use crate::utils::path_utils::{check_readable_dir, check_readable_file, read_trimmed_value};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory the build steps run in
    #[arg(
        long,
        value_name = "PATH",
        env = "BUNDLE_DEPLOY_WORK_DIR",
        default_value = ".",
        value_parser = check_readable_dir,
        global = true
    )]
    pub work_dir: PathBuf,

    /// Build output to publish, relative to the work dir
    #[arg(long, value_name = "PATH", default_value = "www", global = true)]
    pub source_dir: PathBuf,

    /// Bucket names are <prefix>-dev and <prefix>-prod
    #[arg(long, default_value = DEFAULT_BUCKET_PREFIX, value_parser = check_bucket_name, global = true)]
    pub bucket_prefix: String,

    /// Extra environment for the build steps. Can be used multiple times.
    #[arg(long = "build-env", value_name = "KEY=VALUE", value_parser = check_env_pair, global = true)]
    pub build_env: Vec<String>,

    /// Publish the existing build output without running npm
    #[arg(long, global = true)]
    pub skip_build: bool,

    /// Storage region, otherwise taken from the AWS profile
    #[arg(long, env = "AWS_REGION", global = true)]
    pub region: Option<String>,

    /// Endpoint of an S3-compatible store
    #[arg(long, value_name = "URL", global = true)]
    pub endpoint_url: Option<String>,

    /// Address buckets as <endpoint>/<bucket> instead of by virtual host
    #[arg(long, global = true)]
    pub force_path_style: bool,

    /// File holding the access key id; requires --secret-key-file
    #[arg(long, value_name = "FILE", value_parser = check_readable_file, requires = "secret_key_file", global = true)]
    pub access_key_id_file: Option<PathBuf>,

    /// File holding the secret access key; requires --access-key-id-file
    #[arg(long, value_name = "FILE", value_parser = check_readable_file, requires = "access_key_id_file", global = true)]
    pub secret_key_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Build, clear and re-upload the dev bucket
    Upload,
    /// Build, clear and re-upload the prod bucket
    #[command(alias = "uploadprod")]
    UploadProd,
    /// Print the bucket provisioning description as JSON
    Plan {
        #[arg(long, value_enum, default_value_t = Target::Dev)]
        stack: Target,
    },
    /// Create the bucket and apply its public-read, CORS and policy settings
    Provision {
        #[arg(long, value_enum, default_value_t = Target::Dev)]
        stack: Target,
    },
}

impl Command {
    /// Environment the command acts on
    #[must_use]
    pub fn target(self) -> Target {
        match self {
            Command::Upload => Target::Dev,
            Command::UploadProd => Target::Prod,
            Command::Plan { stack } | Command::Provision { stack } => stack,
        }
    }
}

/// Deployment environment
#[derive(Clone, ValueEnum, Debug, Copy, PartialEq, Eq)]
pub enum Target {
    Dev,
    Prod,
}

impl Target {
    #[must_use]
    pub fn stack_name(self) -> &'static str {
        match self {
            Target::Dev => "dev",
            Target::Prod => "prod",
        }
    }
}

impl Args {
    /// Validate combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns an error message describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }

    /// Bucket the command targets
    #[must_use]
    pub fn bucket_name(&self) -> String {
        format!("{}-{}", self.bucket_prefix, self.command.target().stack_name())
    }

    /// Directory whose contents are uploaded
    #[must_use]
    pub fn source_root(&self) -> PathBuf {
        self.work_dir.join(&self.source_dir)
    }

    /// npm build settings with `--build-env` applied
    ///
    /// # Errors
    ///
    /// Returns an error if a `--build-env` entry is malformed.
    pub fn build_config(&self) -> Result<BuildConfig, String> {
        BuildConfig::npm(self.work_dir.clone()).with_env_overrides(&self.build_env)
    }

    /// Storage settings, reading static credentials when both files are given
    ///
    /// # Errors
    ///
    /// Returns an error if a credential file cannot be read.
    pub fn storage_config(&self) -> Result<StorageConfig, String> {
        // clap's `requires` keeps the two files paired
        let credentials = match (&self.access_key_id_file, &self.secret_key_file) {
            (Some(id_file), Some(secret_file)) => Some(StaticCredentials {
                access_key_id: read_trimmed_value(id_file)?,
                secret_access_key: read_trimmed_value(secret_file)?,
            }),
            _ => None,
        };

        Ok(StorageConfig {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            force_path_style: self.force_path_style,
            credentials,
        })
    }
}
