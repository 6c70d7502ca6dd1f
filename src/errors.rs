use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Build step '{step}' exited with {status}")]
    BuildFailed { step: String, status: ExitStatus },

    #[error("Failed to execute '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list objects in bucket '{bucket}': {message}")]
    List { bucket: String, message: String },

    #[error("Failed to delete '{key}' from bucket '{bucket}': {message}")]
    Delete {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to upload '{key}' to bucket '{bucket}': {message}")]
    Upload {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Provisioning step '{step}' failed for bucket '{bucket}': {message}")]
    Provision {
        bucket: String,
        step: String,
        message: String,
    },

    #[error("Failed to walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, DeployError>;
