pub mod bucket;
pub mod client;
pub mod models;
pub mod objects;

pub use models::{S3StorageClient, StaticCredentials, StorageConfig};
