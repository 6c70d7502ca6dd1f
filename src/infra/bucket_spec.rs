use serde::Serialize;
use serde_json::{Value, json};

use crate::args::Target;

pub const DEFAULT_BUCKET_PREFIX: &str = "common-web-components-bucket";

/// Declarative description of the bucket that serves the component bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSpec {
    pub bucket: String,
    pub stack: String,
    pub object_ownership: String,
    pub public_access: PublicAccess,
    pub cors_rules: Vec<CorsRule>,
    pub acl: String,
}

/// Public access block flags; all `false` leaves the bucket publicly readable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccess {
    pub block_public_acls: bool,
    pub block_public_policy: bool,
    pub ignore_public_acls: bool,
    pub restrict_public_buckets: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsRule {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age_seconds: i32,
}

impl BucketSpec {
    /// The public-read, CORS-enabled bucket for `target`, named `<prefix>-<stack>`.
    #[must_use]
    pub fn for_target(prefix: &str, target: Target) -> Self {
        let stack = target.stack_name().to_string();
        Self {
            bucket: format!("{prefix}-{stack}"),
            stack,
            object_ownership: "BucketOwnerPreferred".to_string(),
            public_access: PublicAccess {
                block_public_acls: false,
                block_public_policy: false,
                ignore_public_acls: false,
                restrict_public_buckets: false,
            },
            cors_rules: vec![CorsRule {
                allowed_origins: vec!["*".to_string()],
                allowed_methods: vec!["GET".to_string(), "HEAD".to_string()],
                allowed_headers: vec!["*".to_string()],
                max_age_seconds: 3000,
            }],
            acl: "public-read".to_string(),
        }
    }

    /// Read-only policy granting anonymous `s3:GetObject` on every key.
    #[must_use]
    pub fn policy_document(&self) -> Value {
        json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Sid": "PublicReadGetObject",
                "Effect": "Allow",
                "Principal": "*",
                "Action": ["s3:GetObject"],
                "Resource": [format!("arn:aws:s3:::{}/*", self.bucket)],
            }]
        })
    }

    /// Full description including the rendered policy, as printed by `plan`.
    #[must_use]
    pub fn to_plan(&self) -> Value {
        let mut plan = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(ref mut map) = plan {
            map.insert("policy".to_string(), self.policy_document());
        }
        plan
    }
}
