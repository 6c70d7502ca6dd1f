use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{
    BucketCannedAcl, BucketLocationConstraint, CorsConfiguration, CorsRule,
    CreateBucketConfiguration, ObjectOwnership, OwnershipControls, OwnershipControlsRule,
    PublicAccessBlockConfiguration,
};

use crate::errors::{DeployError, Result};
use crate::infra::BucketSpec;
use crate::interfaces::BucketProvisioner;
use crate::storage::models::S3StorageClient;

fn step_error<E: std::error::Error>(spec: &BucketSpec, step: &str, e: E) -> DeployError {
    DeployError::Provision {
        bucket: spec.bucket.clone(),
        step: step.to_string(),
        message: DisplayErrorContext(e).to_string(),
    }
}

impl BucketProvisioner for S3StorageClient {
    fn create_bucket(&self, spec: &BucketSpec) -> Result<()> {
        let region = self.region();
        self.runtime.block_on(async {
            let exists = self
                .client
                .head_bucket()
                .bucket(&spec.bucket)
                .send()
                .await
                .is_ok();
            if exists {
                self.logger
                    .debug(&format!("Bucket '{}' already exists", spec.bucket));
                return Ok(());
            }

            let mut request = self.client.create_bucket().bucket(&spec.bucket);
            // us-east-1 rejects an explicit location constraint
            if let Some(region) = region.filter(|r| r != "us-east-1") {
                request = request.create_bucket_configuration(
                    CreateBucketConfiguration::builder()
                        .location_constraint(BucketLocationConstraint::from(region.as_str()))
                        .build(),
                );
            }

            match request.send().await {
                Ok(_) => {
                    self.logger
                        .info(&format!("Created bucket '{}'", spec.bucket));
                    Ok(())
                }
                Err(e)
                    if e.as_service_error()
                        .is_some_and(|se| se.is_bucket_already_owned_by_you()) =>
                {
                    Ok(())
                }
                Err(e) => Err(step_error(spec, "create bucket", e)),
            }
        })
    }

    fn put_ownership_controls(&self, spec: &BucketSpec) -> Result<()> {
        let rule = OwnershipControlsRule::builder()
            .object_ownership(ObjectOwnership::from(spec.object_ownership.as_str()))
            .build()
            .map_err(|e| step_error(spec, "ownership controls", e))?;
        let controls = OwnershipControls::builder()
            .rules(rule)
            .build()
            .map_err(|e| step_error(spec, "ownership controls", e))?;

        self.runtime
            .block_on(async {
                self.client
                    .put_bucket_ownership_controls()
                    .bucket(&spec.bucket)
                    .ownership_controls(controls)
                    .send()
                    .await
            })
            .map_err(|e| step_error(spec, "ownership controls", e))?;
        Ok(())
    }

    fn put_public_access_block(&self, spec: &BucketSpec) -> Result<()> {
        let flags = spec.public_access;
        let config = PublicAccessBlockConfiguration::builder()
            .block_public_acls(flags.block_public_acls)
            .block_public_policy(flags.block_public_policy)
            .ignore_public_acls(flags.ignore_public_acls)
            .restrict_public_buckets(flags.restrict_public_buckets)
            .build();

        self.runtime
            .block_on(async {
                self.client
                    .put_public_access_block()
                    .bucket(&spec.bucket)
                    .public_access_block_configuration(config)
                    .send()
                    .await
            })
            .map_err(|e| step_error(spec, "public access block", e))?;
        Ok(())
    }

    fn put_cors(&self, spec: &BucketSpec) -> Result<()> {
        let mut rules = Vec::with_capacity(spec.cors_rules.len());
        for rule in &spec.cors_rules {
            let built = CorsRule::builder()
                .set_allowed_origins(Some(rule.allowed_origins.clone()))
                .set_allowed_methods(Some(rule.allowed_methods.clone()))
                .set_allowed_headers(Some(rule.allowed_headers.clone()))
                .max_age_seconds(rule.max_age_seconds)
                .build()
                .map_err(|e| step_error(spec, "cors", e))?;
            rules.push(built);
        }
        let config = CorsConfiguration::builder()
            .set_cors_rules(Some(rules))
            .build()
            .map_err(|e| step_error(spec, "cors", e))?;

        self.runtime
            .block_on(async {
                self.client
                    .put_bucket_cors()
                    .bucket(&spec.bucket)
                    .cors_configuration(config)
                    .send()
                    .await
            })
            .map_err(|e| step_error(spec, "cors", e))?;
        Ok(())
    }

    fn put_acl(&self, spec: &BucketSpec) -> Result<()> {
        self.runtime
            .block_on(async {
                self.client
                    .put_bucket_acl()
                    .bucket(&spec.bucket)
                    .acl(BucketCannedAcl::from(spec.acl.as_str()))
                    .send()
                    .await
            })
            .map_err(|e| step_error(spec, "acl", e))?;
        Ok(())
    }

    fn put_policy(&self, spec: &BucketSpec) -> Result<()> {
        let policy = spec.policy_document().to_string();
        self.logger.debug(&format!("Bucket policy: {policy}"));

        self.runtime
            .block_on(async {
                self.client
                    .put_bucket_policy()
                    .bucket(&spec.bucket)
                    .policy(policy)
                    .send()
                    .await
            })
            .map_err(|e| step_error(spec, "policy", e))?;
        Ok(())
    }
}
