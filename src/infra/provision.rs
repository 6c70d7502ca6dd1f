use crate::errors::Result;
use crate::interfaces::BucketProvisioner;
use crate::utils::log_utils::Logger;

use super::BucketSpec;

/// Create the bucket and apply its ownership, public access, CORS, ACL and
/// policy settings, in that order. Ownership controls must precede the ACL.
pub fn provision<P: BucketProvisioner + ?Sized>(
    provisioner: &P,
    spec: &BucketSpec,
    logger: &Logger,
) -> Result<()> {
    logger.normal(&format!(
        "Provisioning bucket {} for stack {}",
        spec.bucket, spec.stack
    ));

    provisioner.create_bucket(spec)?;
    logger.info("bucket exists");
    provisioner.put_ownership_controls(spec)?;
    logger.info(&format!("object ownership: {}", spec.object_ownership));
    provisioner.put_public_access_block(spec)?;
    logger.info("public access block applied");
    provisioner.put_cors(spec)?;
    logger.info(&format!("{} CORS rule(s) applied", spec.cors_rules.len()));
    provisioner.put_acl(spec)?;
    logger.info(&format!("bucket ACL: {}", spec.acl));
    provisioner.put_policy(spec)?;
    logger.info("read-only bucket policy applied");

    logger.normal(&format!("Bucket {} is ready", spec.bucket));
    Ok(())
}
