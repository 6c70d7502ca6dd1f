use bundle_deploy::args::Target;
use bundle_deploy::errors::DeployError;
use bundle_deploy::infra::{BucketSpec, DEFAULT_BUCKET_PREFIX, provision};
use bundle_deploy::interfaces::MockBucketProvisioner;
use bundle_deploy::utils::log_utils::Logger;

fn accepting() -> MockBucketProvisioner {
    let mut provisioner = MockBucketProvisioner::new();
    provisioner.expect_create_bucket().times(1).returning(|_| Ok(()));
    provisioner
        .expect_put_ownership_controls()
        .withf(|spec| spec.object_ownership == "BucketOwnerPreferred")
        .times(1)
        .returning(|_| Ok(()));
    provisioner
        .expect_put_public_access_block()
        .withf(|spec| !spec.public_access.block_public_policy)
        .times(1)
        .returning(|_| Ok(()));
    provisioner
        .expect_put_cors()
        .withf(|spec| spec.cors_rules.len() == 1)
        .times(1)
        .returning(|_| Ok(()));
    provisioner
        .expect_put_acl()
        .withf(|spec| spec.acl == "public-read")
        .times(1)
        .returning(|_| Ok(()));
    provisioner.expect_put_policy().times(1).returning(|_| Ok(()));
    provisioner
}

#[test]
fn prod_stack_is_provisioned() {
    let spec = BucketSpec::for_target(DEFAULT_BUCKET_PREFIX, Target::Prod);
    provision(&accepting(), &spec, &Logger::new(1)).unwrap();
}

#[test]
fn create_failure_is_fatal() {
    let spec = BucketSpec::for_target(DEFAULT_BUCKET_PREFIX, Target::Dev);
    let mut provisioner = MockBucketProvisioner::new();
    provisioner.expect_create_bucket().returning(|spec| {
        Err(DeployError::Provision {
            bucket: spec.bucket.clone(),
            step: "create bucket".into(),
            message: "BucketAlreadyExists".into(),
        })
    });
    provisioner.expect_put_ownership_controls().never();

    let err = provision(&provisioner, &spec, &Logger::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Provisioning step 'create bucket' failed for bucket \
         'common-web-components-bucket-dev': BucketAlreadyExists"
    );
}

#[test]
fn plan_serialises_every_setting() {
    let plan = BucketSpec::for_target(DEFAULT_BUCKET_PREFIX, Target::Dev).to_plan();
    let rendered = serde_json::to_string_pretty(&plan).unwrap();
    for needle in [
        "\"bucket\": \"common-web-components-bucket-dev\"",
        "\"objectOwnership\": \"BucketOwnerPreferred\"",
        "\"acl\": \"public-read\"",
        "\"allowedMethods\"",
        "\"PublicReadGetObject\"",
    ] {
        assert!(rendered.contains(needle), "missing {needle} in {rendered}");
    }
}
