//! Provisioning of the public-read bucket the bundle is served from.

mod bucket_spec;
mod provision;

pub use bucket_spec::{BucketSpec, CorsRule, DEFAULT_BUCKET_PREFIX, PublicAccess};
pub use provision::provision;
