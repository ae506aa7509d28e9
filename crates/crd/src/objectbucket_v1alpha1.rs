//! `objectbucket.io/v1alpha1` resources served by the Rook bucket provisioner

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ObjectReference;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `ObjectBucketClaimSpec` defines the desired state of an `ObjectBucketClaim`
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "ObjectBucketClaim",
    group = "objectbucket.io",
    version = "v1alpha1",
    plural = "objectbucketclaims",
    shortname = "obc"
)]
#[kube(namespaced, status = "ObjectBucketClaimStatus")]
pub struct ObjectBucketClaimSpec {
    /// `StorageClass` names the `StorageClass` object representing the desired provisioner and parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
    /// `BucketName` (not recommended) the name of the bucket.  Caution!
    /// In-store bucket names may collide across namespaces.  If you define
    /// the name yourself, try to make it as unique as possible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    /// `GenerateBucketName` (recommended) a prefix for a bucket name to be
    /// followed by a hyphen and 5 random characters. Protects against
    /// in-store name collisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_bucket_name: Option<String>,
    /// `AdditionalConfig` gives providers a location to set
    /// proprietary config values (tenant, namespace, etc)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_config: Option<BTreeMap<String, String>>,
    /// `ObjectBucketName` is the name of the object bucket resource. This is the authoritative
    /// determination for binding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_bucket_name: Option<String>,
}

/// `ObjectBucketClaimStatus` defines the observed state of `ObjectBucketClaim`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectBucketClaimStatus {
    /// Phase of the claim (`Pending`, `Bound`, `Released`, `Failed`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

/// `ObjectBucketSpec` defines the desired state of `ObjectBucket`.
/// Fields defined here should be normal among all providers.
/// Authentication must be of a type defined in this package to
/// pass type checks in reconciler
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "ObjectBucket",
    group = "objectbucket.io",
    version = "v1alpha1",
    plural = "objectbuckets",
    shortname = "ob"
)]
#[kube(status = "ObjectBucketStatus")]
pub struct ObjectBucketSpec {
    /// `StorageClassName` is the name of the storage class the bucket was provisioned from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
    /// `ReclaimPolicy` is the policy applied to the bucket when the claim is deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reclaim_policy: Option<String>,
    /// `ClaimRef` references the `ObjectBucketClaim` bound to this bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_ref: Option<ObjectReference>,
    /// Endpoint of the provisioned bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    /// Authentication used to access the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    /// `AdditionalState` gives providers a location to set proprietary state values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_state: Option<BTreeMap<String, String>>,
}

/// Endpoint of an object bucket
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Host of the object store serving the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_host: Option<String>,
    /// Port of the object store serving the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_port: Option<i32>,
    /// Name of the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    /// Region of the object store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Sub-region of the object store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    /// Provider specific endpoint configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_config: Option<BTreeMap<String, String>>,
}

/// Authentication of an object bucket
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    /// S3 style access keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_keys: Option<AccessKeys>,
}

/// S3 style access key pair
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeys {
    /// Access key ID
    #[serde(rename = "accessKeyId", skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Secret access key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
}

/// `ObjectBucketStatus` defines the observed state of `ObjectBucket`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectBucketStatus {
    /// Phase of the bucket (`Bound`, `Released`, `Failed`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}
