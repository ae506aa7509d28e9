//! Sub-schemas shared by several `ceph.rook.io/v1` resources

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{
    NodeAffinity, PodAffinity, PodAntiAffinity, Probe, Toleration, TopologySpreadConstraint,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Annotations applied to the pods of a daemon
pub type Annotations = BTreeMap<String, String>;

/// Labels applied to the pods of a daemon
pub type Labels = BTreeMap<String, String>;

/// `Placement` is the placement for an object
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// `NodeAffinity` is a group of node affinity scheduling rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_affinity: Option<NodeAffinity>,
    /// `PodAffinity` is a group of inter pod affinity scheduling rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_affinity: Option<PodAffinity>,
    /// `PodAntiAffinity` is a group of inter pod anti affinity scheduling rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity: Option<PodAntiAffinity>,
    /// The pod this Toleration is attached to tolerates any taint that matches
    /// the triple <key,value,effect> using the matching operator <operator>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
    /// `TopologySpreadConstraints` specifies how to spread matching pods among the given topology
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_spread_constraints: Option<Vec<TopologySpreadConstraint>>,
}

/// Placement settings keyed by daemon type (`all`, `mon`, `osd`, `mgr`, ...)
pub type PlacementSpec = BTreeMap<String, Placement>;

/// Condition represents a status condition on any Rook-Ceph Custom Resource.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of the condition
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// Status of the condition, one of True, False, Unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Machine readable reason for the last transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human readable details about the last transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Last time the condition was probed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_heartbeat_time: Option<Time>,
    /// Last time the condition transitioned from one status to another
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<Time>,
}

/// Status represents the status of an object
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// Current phase of the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Conditions reported by the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

/// `HealthCheckSpec` represents the health check of an object store bucket
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckSpec {
    /// Disable the health check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Interval is the internal in second or minute for the health check to run like 60s for 60 seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Timeout of the health check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

/// `ProbeSpec` is a wrapper around Probe so it can be enabled or disabled for a Ceph daemon
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProbeSpec {
    /// Disabled determines whether probe is disable or not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Probe describes a health check to be performed against a container to determine whether it is
    /// alive or ready to receive traffic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<Probe>,
}

/// `MirrorHealthCheckSpec` represents the health specification of a Ceph Storage Pool mirror
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirrorHealthCheckSpec {
    /// `HealthCheckSpec` represents the health check of an object store bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<HealthCheckSpec>,
}

/// `ReplicatedSpec` represents the spec for replication in a pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplicatedSpec {
    /// Size - Number of copies per object in a replicated storage pool, including the object itself (required for replicated pool type)
    pub size: u32,
    /// `TargetSizeRatio` gives a hint (%) to Ceph in terms of expected consumption of the total cluster capacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_size_ratio: Option<f64>,
    /// `RequireSafeReplicaSize` if false allows you to set replica 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_safe_replica_size: Option<bool>,
    /// `ReplicasPerFailureDomain` the number of replica in the specified failure domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas_per_failure_domain: Option<u32>,
    /// `SubFailureDomain` the name of the sub-failure domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_failure_domain: Option<String>,
    /// `HybridStorage` represents hybrid storage tier settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hybrid_storage: Option<HybridStorageSpec>,
}

/// `HybridStorageSpec` represents the settings for hybrid storage pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HybridStorageSpec {
    /// `PrimaryDeviceClass` represents high performance tier (for example SSD or NVME) for Primary OSD
    pub primary_device_class: String,
    /// `SecondaryDeviceClass` represents low performance tier (for example HDDs) for remaining OSDs
    pub secondary_device_class: String,
}

/// `ErasureCodedSpec` represents the spec for erasure code in a pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErasureCodedSpec {
    /// Number of coding chunks per object in an erasure coded storage pool (required for erasure-coded pool type).
    /// This is the number of OSDs that can be lost simultaneously before data cannot be recovered.
    pub coding_chunks: u32,
    /// Number of data chunks per object in an erasure coded storage pool (required for erasure-coded pool type).
    /// The number of chunks required to recover an object when any single OSD is lost is the same
    /// as dataChunks so be aware that the larger the number of data chunks, the higher the cost of recovery.
    pub data_chunks: u32,
    /// The algorithm for erasure coding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

/// `SnapshotScheduleSpec` represents the snapshot scheduling settings of a mirrored pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotScheduleSpec {
    /// Path is the path to snapshot, only valid for `CephFS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Interval represent the periodicity of the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// `StartTime` indicates when to start the snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

/// `MirroringPeerSpec` represents the specification of a mirror peer
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirroringPeerSpec {
    /// `SecretNames` represents the Kubernetes Secret names to add rbd-mirror or cephfs-mirror peers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_names: Option<Vec<String>>,
}

/// `MirroringSpec` represents the setting for a mirrored pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirroringSpec {
    /// Enabled whether this pool is mirrored or not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Mode is the mirroring mode: pool, image or init-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// `SnapshotSchedules` is the scheduling of snapshot for mirrored images/pools
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_schedules: Option<Vec<SnapshotScheduleSpec>>,
    /// Peers represents the peers spec
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<MirroringPeerSpec>,
}

/// `QuotaSpec` represents the spec for quotas in a pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSpec {
    /// `MaxBytes` represents the quota in bytes
    /// Deprecated in favor of `MaxSize`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
    /// `MaxSize` represents the quota in bytes as a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<String>,
    /// `MaxObjects` represents the quota in objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_objects: Option<u64>,
}

/// `PoolSpec` represents the spec of ceph pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolSpec {
    /// The failure domain: osd/host/(region or zone if available) - technically also any type in the crush map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_domain: Option<String>,
    /// The root of the crush hierarchy utilized by the pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crush_root: Option<String>,
    /// The device class the OSD should set to for use in the pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<String>,
    /// Allow rook operator to change the pool CRUSH tunables once the pool is created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_crush_updates: Option<bool>,
    /// `DEPRECATED`: use Parameters instead, e.g., Parameters["compression_mode"] = "force"
    /// The inline compression mode in Bluestore OSD to set to (options are: none, passive, aggressive, force)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_mode: Option<String>,
    /// The replication settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicated: Option<ReplicatedSpec>,
    /// The erasure code settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erasure_coded: Option<ErasureCodedSpec>,
    /// Parameters is a list of properties to enable on a given pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
    /// `EnableRBDStats` is used to enable gathering of statistics for all RBD images in the pool
    #[serde(rename = "enableRBDStats", skip_serializing_if = "Option::is_none")]
    pub enable_rbd_stats: Option<bool>,
    /// The mirroring settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirroring: Option<MirroringSpec>,
    /// The mirroring statusCheck
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_check: Option<MirrorHealthCheckSpec>,
    /// The quota settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotas: Option<QuotaSpec>,
    /// The application name to set on the pool. Only expected to be set for rgw pools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

/// `NamedPoolSpec` represents the named ceph pool spec
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamedPoolSpec {
    /// Name of the pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `PoolSpec` represents the spec of ceph pool
    #[serde(flatten)]
    pub pool: PoolSpec,
}

/// `KeyManagementServiceSpec` represent various details of the KMS server
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyManagementServiceSpec {
    /// `ConnectionDetails` contains the KMS connection details (address, port etc)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_details: Option<BTreeMap<String, String>>,
    /// `TokenSecretName` is the kubernetes secret containing the KMS token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_secret_name: Option<String>,
}

/// `KeyRotationSpec` represents the settings for Key Rotation.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyRotationSpec {
    /// Enabled represents whether the key rotation is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Schedule represents the cron schedule for key rotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_pool_flattens_pool_fields() {
        let pool: NamedPoolSpec = serde_json::from_value(serde_json::json!({
            "name": "replicated",
            "failureDomain": "host",
            "replicated": { "size": 3 },
            "enableRBDStats": true,
        }))
        .unwrap();

        assert_eq!(pool.name.as_deref(), Some("replicated"));
        assert_eq!(pool.pool.failure_domain.as_deref(), Some("host"));
        assert_eq!(pool.pool.replicated.as_ref().map(|r| r.size), Some(3));
        assert_eq!(pool.pool.enable_rbd_stats, Some(true));
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let value = serde_json::to_value(PoolSpec {
            failure_domain: Some("osd".into()),
            ..PoolSpec::default()
        })
        .unwrap();

        assert_eq!(value, serde_json::json!({ "failureDomain": "osd" }));
    }
}
