//! `CephObjectStore` and `CephObjectStoreUser` resources

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{ResourceRequirements, SecretKeySelector};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{
    Annotations, Condition, KeyManagementServiceSpec, KeyRotationSpec, Labels, Placement,
    PoolSpec, ProbeSpec,
};

/// `ObjectStoreSpec` represent the spec of a pool
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephObjectStore",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephobjectstores",
    shortname = "cephos"
)]
#[kube(namespaced, status = "ObjectStoreStatus")]
pub struct CephObjectStoreSpec {
    /// The metadata pool settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_pool: Option<PoolSpec>,
    /// The data pool settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pool: Option<PoolSpec>,
    /// The pool information when configuring RADOS namespaces in existing pools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_pools: Option<ObjectSharedPoolsSpec>,
    /// Preserve pools on object store deletion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_pools_on_delete: Option<bool>,
    /// The rgw pod info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<GatewaySpec>,
    /// The multisite info
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneSpec>,
    /// The RGW health probes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<ObjectHealthCheckSpec>,
    /// Security represents security settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<ObjectStoreSecuritySpec>,
    /// The list of allowed namespaces in addition to the object store namespace
    /// where ceph object store users may be created. Specify "*" to allow all
    /// namespaces, otherwise list individual namespaces that are to be allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_users_in_namespaces: Option<Vec<String>>,
    /// Hosting settings for the object store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting: Option<ObjectStoreHostingSpec>,
}

/// `ObjectSharedPoolsSpec` represents object store pool info when configuring RADOS namespaces in existing pools.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSharedPoolsSpec {
    /// The metadata pool used for creating RADOS namespaces in the object store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_pool_name: Option<String>,
    /// The data pool used for creating RADOS namespaces in the object store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pool_name: Option<String>,
    /// Whether the RADOS namespaces should be preserved on deletion of the object store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_rados_namespace_data_on_delete: Option<bool>,
    /// `PoolPlacements` control which Pools are associated with a particular RGW bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_placements: Option<Vec<PoolPlacementSpec>>,
}

/// `PoolPlacementSpec` represents a pool placement target for RGW buckets
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolPlacementSpec {
    /// Pool placement name. Name can be arbitrary. Placement with name "default" will be used as default.
    pub name: String,
    /// Sets given placement as default. Only one placement in the list can be marked as default.
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// The metadata pool used to store `ObjectStore` bucket index.
    pub metadata_pool_name: String,
    /// The data pool used to store `ObjectStore` objects data.
    pub data_pool_name: String,
    /// The data pool used to store `ObjectStore` data that cannot use erasure coding (ex: multi-part uploads).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_non_ec_pool_name: Option<String>,
}

/// `GatewaySpec` represents the specification of Ceph Object Store Gateway
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GatewaySpec {
    /// The port the rgw service will be listening on (http)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// The port the rgw service will be listening on (https)
    #[schemars(range(min = 0, max = 65535))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_port: Option<i32>,
    /// The number of pods in the rgw replicaset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<i32>,
    /// The name of the secret that stores the ssl certificate for secure rgw connections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate_ref: Option<String>,
    /// The name of the secret that stores custom ca-bundle with root and intermediate certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_bundle_ref: Option<String>,
    /// The affinity to place the rgw pods (default is to place on any available node)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// `DisableMultisiteSyncTraffic`, when true, prevents this object store's gateways from
    /// transmitting multisite replication data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_multisite_sync_traffic: Option<bool>,
    /// The annotations-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    /// The labels-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// The resource requirements for the rgw pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// `PriorityClassName` sets priority classes on the rgw pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,
    /// `ExternalRgwEndpoints` points to external RGW endpoint(s). Multiple endpoints can be given, but
    /// for stability of `ObjectBucketClaims`, we highly recommend that users give only a single external
    /// RGW endpoint that is a load balancer that sends requests to the multiple RGWs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_rgw_endpoints: Option<Vec<EndpointAddress>>,
    /// The configuration related to add/set on each rgw service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<RgwServiceSpec>,
    /// Whether host networking is enabled for the rgw daemon. If not set, the network settings from
    /// the cluster CR will be applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_network: Option<bool>,
    /// Whether rgw dashboard is enabled for the rgw daemon. If not set, the rgw dashboard will be enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_enabled: Option<bool>,
    /// `RgwConfig` sets Ceph RGW config values for the gateway clients that serve this object store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgw_config: Option<BTreeMap<String, String>>,
    /// `RgwCommandFlags` sets Ceph RGW config values for the gateway clients that serve this object store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgw_command_flags: Option<BTreeMap<String, String>>,
}

/// `EndpointAddress` is a tuple that describes a single IP address or host name.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointAddress {
    /// The IP of this endpoint. As a legacy behavior, this supports being given a DNS-addressable hostname as well.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// The DNS-addressable Hostname of this endpoint. This field will be preferred over IP if both are given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

/// `RgwServiceSpec` represent the spec for RGW service
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RgwServiceSpec {
    /// The annotations-related configuration to add/set on each rgw service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

/// `ZoneSpec` represents a Ceph Object Store Gateway Zone specification
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSpec {
    /// `RGW` Zone the Object Store is in
    pub name: String,
}

/// `ObjectHealthCheckSpec` represents the health check of an object store
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectHealthCheckSpec {
    /// `ProbeSpec` is a wrapper around Probe so it can be enabled or disabled for a Ceph daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<ProbeSpec>,
    /// `ProbeSpec` is a wrapper around Probe so it can be enabled or disabled for a Ceph daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_probe: Option<ProbeSpec>,
}

/// `ObjectStoreSecuritySpec` is spec to define security features like encryption
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStoreSecuritySpec {
    /// `KeyManagementService` is the main Key Management option
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms: Option<KeyManagementServiceSpec>,
    /// The settings for supporting AWS-SSE:S3 with RGW
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<KeyManagementServiceSpec>,
    /// `KeyRotation` defines options for Key Rotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_rotation: Option<KeyRotationSpec>,
}

/// `ObjectStoreHostingSpec` represents the hosting settings for the object store
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStoreHostingSpec {
    /// A single hostname to use for the object store endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertise_endpoint: Option<ObjectEndpointSpec>,
    /// A list of DNS host names on which object store gateways will accept client S3 connections.
    #[serde(rename = "dnsNames", skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,
}

/// `ObjectEndpointSpec` represents an object store endpoint
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectEndpointSpec {
    /// `DnsName` is the DNS name (in RFC-1123 format) of the endpoint.
    #[serde(rename = "dnsName")]
    pub dns_name: String,
    /// Port is the port on which S3 connections can be made for this endpoint.
    #[schemars(range(min = 1, max = 65535))]
    pub port: i32,
    /// `UseTls` defines whether the endpoint uses TLS (HTTPS) or not (HTTP).
    #[serde(rename = "useTls")]
    pub use_tls: bool,
}

/// `ObjectStoreStatus` represents the status of a Ceph Object Store resource
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStoreStatus {
    /// Phase of the object store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Human readable message about the object store state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoints the object store is reachable on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<ObjectEndpoints>,
    /// Info holds additional details such as the endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// Conditions reported by the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

/// `ObjectEndpoints` lists the insecure and secure endpoints of an object store
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectEndpoints {
    /// HTTP endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<Vec<String>>,
    /// HTTPS endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<Vec<String>>,
}

/// `ObjectStoreUserSpec` represent the spec of an Objectstoreuser
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephObjectStoreUser",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephobjectstoreusers",
    shortname = "rcou"
)]
#[kube(shortname = "objectuser")]
#[kube(namespaced, status = "ObjectStoreUserStatus")]
pub struct CephObjectStoreUserSpec {
    /// The store the user will be created in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    /// The display name for the ceph users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Additional admin-level capabilities for the Ceph object store user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ObjectUserCapSpec>,
    /// `ObjectUserQuotaSpec` can be used to set quotas for the object store user to limit their usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotas: Option<ObjectUserQuotaSpec>,
    /// The namespace where the parent `CephCluster` and `CephObjectStore` are found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_namespace: Option<String>,
    /// Allows specifying credentials for the user. If not provided, the operator
    /// will generate them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<ObjectUserKey>>,
    /// The op-mask of the user. Limits the operations the user may perform (read, write, delete, *).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_mask: Option<String>,
}

/// Additional admin-level capabilities for the Ceph object store user
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct ObjectUserCapSpec {
    /// Admin capabilities to read/write Ceph object store users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Admin capabilities to read/write Ceph object store users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,
    /// Admin capabilities to read/write Ceph object store buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Admin capabilities to read/write Ceph object store buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buckets: Option<String>,
    /// Admin capabilities to read/write Ceph object store metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Admin capabilities to read/write Ceph object store usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Admin capabilities to read/write Ceph object store zones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Admin capabilities to read/write roles for user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<String>,
    /// Admin capabilities to read/write information about the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Add capabilities for user to send request to RGW Cache API header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amz_cache: Option<String>,
    /// Add capabilities for user to change bucket index logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bilog: Option<String>,
    /// Add capabilities for user to change metadata logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdlog: Option<String>,
    /// Add capabilities for user to change data logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datalog: Option<String>,
    /// Add capabilities for user to change user policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_policy: Option<String>,
    /// Add capabilities for user to change oidc provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_provider: Option<String>,
    /// Add capabilities for user to set rate limiter for user and bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit: Option<String>,
}

/// `ObjectUserQuotaSpec` can be used to set quotas for the object store user to limit their usage.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectUserQuotaSpec {
    /// Maximum bucket limit for the ceph user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_buckets: Option<i64>,
    /// Maximum size limit of all objects across all the user's buckets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Quantity>,
    /// Maximum number of objects across all the user's buckets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_objects: Option<i64>,
}

/// `ObjectUserKey` references the secret keys holding a set of S3 credentials
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectUserKey {
    /// Secret key selector for the `access_key` (commonly referred to as `AWS_ACCESS_KEY_ID`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_ref: Option<SecretKeySelector>,
    /// Secret key selector for the `secret_key` (commonly referred to as `AWS_SECRET_ACCESS_KEY`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key_ref: Option<SecretKeySelector>,
}

/// `ObjectStoreUserStatus` represents the status Ceph Object Store Gateway User
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStoreUserStatus {
    /// Phase of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Info holds additional details such as the secret name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// Keys currently issued to the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<SecretReference>>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

/// `SecretReference` represents a Secret Reference
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    /// name is unique within a namespace to reference a secret resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// namespace defines the space within which the secret name must be unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// The resource version of the referenced secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    /// The uid of the referenced secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}
