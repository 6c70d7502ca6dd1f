//! Bucket synchronisation: clear every remote object, then upload a local tree.

pub mod clear;
pub mod content_type;
pub mod upload;

pub use clear::clear_bucket;
pub use content_type::{DEFAULT_CONTENT_TYPE, content_type_for};
pub use upload::{object_key, upload_tree};
