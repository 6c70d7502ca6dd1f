use std::path::PathBuf;

use bundle_deploy::args::{Args, Command, Target};
use bundle_deploy::infra::BucketSpec;
use bundle_deploy::start::deploy_config;
use clap::Parser;

fn parse(argv: &[&str]) -> Args {
    let mut full = vec!["bundle-deploy"];
    full.extend_from_slice(argv);
    Args::try_parse_from(full).unwrap()
}

#[test]
fn upload_targets_dev_bucket() {
    let args = parse(&["upload"]);
    assert_eq!(args.command, Command::Upload);
    assert_eq!(args.bucket_name(), "common-web-components-bucket-dev");
    assert_eq!(args.source_root(), PathBuf::from(".").join("www"));
    assert!(args.validate().is_ok());
}

#[test]
fn upload_prod_targets_prod_bucket() {
    let args = parse(&["upload-prod"]);
    assert_eq!(args.command.target(), Target::Prod);
    assert_eq!(args.bucket_name(), "common-web-components-bucket-prod");

    let legacy = parse(&["uploadprod"]);
    assert_eq!(legacy.command, Command::UploadProd);
}

#[test]
fn build_env_overrides_defaults() {
    let args = parse(&["upload", "--build-env", "PWD=/srv/app", "--build-env", "CI=1"]);
    let config = deploy_config(&args).unwrap();
    assert_eq!(config.build.env["PWD"], "/srv/app");
    assert_eq!(config.build.env["CI"], "1");
    assert_eq!(config.bucket, "common-web-components-bucket-dev");
}

#[test]
fn malformed_build_env_is_rejected() {
    let argv = ["bundle-deploy", "upload", "--build-env", "NODE_ENV"];
    assert!(Args::try_parse_from(argv).is_err());
}

#[test]
fn invalid_bucket_prefix_is_rejected() {
    let argv = ["bundle-deploy", "upload", "--bucket-prefix", "Not_A_Bucket"];
    assert!(Args::try_parse_from(argv).is_err());
}

#[test]
fn overlong_prefix_fails_validation() {
    let prefix = "a".repeat(60);
    let args = parse(&["upload-prod", "--bucket-prefix", &prefix]);
    assert!(args.validate().is_err());
}

#[test]
fn credential_files_must_be_paired() {
    let dir = tempfile::tempdir().unwrap();
    let id = dir.path().join("key_id");
    std::fs::write(&id, "AKIAEXAMPLE\n").unwrap();
    let id = id.to_str().unwrap();

    let argv = ["bundle-deploy", "upload", "--access-key-id-file", id];
    let err = Args::try_parse_from(argv).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn credential_files_are_read_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let id = dir.path().join("key_id");
    let secret = dir.path().join("secret");
    std::fs::write(&id, "AKIAEXAMPLE\n").unwrap();
    std::fs::write(&secret, "s3cr3t\n").unwrap();

    let args = parse(&[
        "upload",
        "--access-key-id-file",
        id.to_str().unwrap(),
        "--secret-key-file",
        secret.to_str().unwrap(),
        "--endpoint-url",
        "http://localhost:9000",
        "--force-path-style",
    ]);
    let storage = args.storage_config().unwrap();
    let creds = storage.credentials.unwrap();
    assert_eq!(creds.access_key_id, "AKIAEXAMPLE");
    assert_eq!(creds.secret_access_key, "s3cr3t");
    assert_eq!(storage.endpoint_url.as_deref(), Some("http://localhost:9000"));
    assert!(storage.force_path_style);
}

#[test]
fn skip_build_requires_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let args = parse(&[
        "upload",
        "--skip-build",
        "--work-dir",
        dir.path().to_str().unwrap(),
    ]);
    assert!(args.validate().is_err());

    std::fs::create_dir(dir.path().join("www")).unwrap();
    assert!(args.validate().is_ok());
}

#[test]
fn plan_uses_requested_stack() {
    let args = parse(&["plan", "--stack", "prod", "--bucket-prefix", "site-assets"]);
    let Command::Plan { stack } = args.command else {
        panic!("expected plan command");
    };
    let spec = BucketSpec::for_target(&args.bucket_prefix, stack);
    assert_eq!(spec.bucket, "site-assets-prod");
    assert_eq!(
        spec.policy_document()["Statement"][0]["Resource"][0],
        "arn:aws:s3:::site-assets-prod/*"
    );
}

#[test]
fn verbosity_counts() {
    let args = parse(&["-vv", "upload"]);
    assert_eq!(args.verbose, 2);
}
