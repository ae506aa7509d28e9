//! `CephFilesystem`, `CephFilesystemSubVolumeGroup` and `CephFilesystemMirror` resources

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ResourceRequirements;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{
    Annotations, Condition, Labels, MirrorHealthCheckSpec, MirroringPeerSpec, NamedPoolSpec,
    Placement, PoolSpec, ProbeSpec, SnapshotScheduleSpec, Status,
};

/// `FilesystemSpec` represents the spec of a file system
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephFilesystem",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephfilesystems",
    shortname = "cephfs"
)]
#[kube(namespaced, status = "CephFilesystemStatus")]
pub struct CephFilesystemSpec {
    /// The metadata pool settings
    pub metadata_pool: PoolSpec,
    /// The data pool settings, with optional predefined pool name.
    pub data_pools: Vec<NamedPoolSpec>,
    /// Preserve pool names as specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_pool_names: Option<bool>,
    /// Preserve pools on filesystem deletion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_pools_on_delete: Option<bool>,
    /// Preserve the fs in the cluster on `CephFilesystem` CR deletion. Setting this to true automatically implies `PreservePoolsOnDelete` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_filesystem_on_delete: Option<bool>,
    /// The mds pod info
    pub metadata_server: MetadataServerSpec,
    /// The mirroring settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirroring: Option<FsMirroringSpec>,
    /// The mirroring statusCheck
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_check: Option<MirrorHealthCheckSpec>,
}

/// `MetadataServerSpec` represents the specification of a Ceph Metadata Server
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataServerSpec {
    /// The number of metadata servers that are active. The remaining servers in the cluster will be in standby mode.
    #[schemars(range(min = 1, max = 50))]
    pub active_count: i32,
    /// Whether each active MDS instance will have an active standby with a warm metadata cache for faster failover.
    /// If false, standbys will still be available, but will not have a warm metadata cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_standby: Option<bool>,
    /// The affinity to place the mds pods (default is to place on all available node) with a daemonset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// The annotations-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    /// The labels-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// The resource requirements for the mds pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// `PriorityClassName` sets priority classes on components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,
    /// `ProbeSpec` is a wrapper around Probe so it can be enabled or disabled for a Ceph daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<ProbeSpec>,
    /// `ProbeSpec` is a wrapper around Probe so it can be enabled or disabled for a Ceph daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_probe: Option<ProbeSpec>,
}

/// `FsMirroringSpec` represents the setting for a mirrored filesystem
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FsMirroringSpec {
    /// Enabled whether this filesystem is mirrored or not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Peers represents the peers spec
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<MirroringPeerSpec>,
    /// `SnapshotSchedules` is the scheduling of snapshot for mirrored filesystems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_schedules: Option<Vec<SnapshotScheduleSpec>>,
    /// Retention is the retention policy for a snapshot schedule
    /// One path has exactly one retention policy.
    /// A policy can however contain multiple count-time period pairs in order to specify complex retention policies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_retention: Option<Vec<SnapshotScheduleRetentionSpec>>,
}

/// `SnapshotScheduleRetentionSpec` is a retention policy
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotScheduleRetentionSpec {
    /// Path is the path to snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Duration represents the retention duration for a snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// `CephFilesystemStatus` represents the status of a Ceph Filesystem
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephFilesystemStatus {
    /// Phase of the filesystem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Use only info and put mirroringStatus in it?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Conditions reported by the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

/// `CephFilesystemSubVolumeGroupSpec` represents the specification of a Ceph Filesystem `SubVolumeGroup`
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephFilesystemSubVolumeGroup",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephfilesystemsubvolumegroups",
    shortname = "cephfssvg"
)]
#[kube(namespaced, status = "CephFilesystemSubVolumeGroupStatus")]
pub struct CephFilesystemSubVolumeGroupSpec {
    /// The name of the subvolume group. If not set, the default is the name of the subvolumeGroup CR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `FilesystemName` is the name of Ceph Filesystem `SubVolumeGroup` volume name. Typically it's the name of
    /// the `CephFilesystem` CR. If not coming from the `CephFilesystem` CR, it can be retrieved from the
    /// list of Ceph Filesystem volumes with `ceph fs volume ls`.
    pub filesystem_name: String,
    /// Pinning configuration of `CephFilesystemSubVolumeGroup`,
    /// reference <https://docs.ceph.com/en/latest/cephfs/fs-volumes/#pinning-subvolumes-and-subvolume-groups>
    /// only one out of (export, distributed, random) can be set at a time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinning: Option<CephFilesystemSubVolumeGroupSpecPinning>,
    /// Quota size of the Ceph Filesystem subvolume group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<Quantity>,
    /// The data pool name for the Ceph Filesystem subvolume group layout, if the default `CephFS` pool is not desired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pool_name: Option<String>,
}

/// `CephFilesystemSubVolumeGroupSpecPinning` represents the pinning configuration of `SubVolumeGroup`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephFilesystemSubVolumeGroupSpecPinning {
    /// Export pins the subvolume group to an MDS rank
    #[schemars(range(min = -1, max = 256))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<i32>,
    /// Distributed enables ephemeral distributed pinning across MDS ranks
    #[schemars(range(min = 0, max = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributed: Option<i32>,
    /// Random enables ephemeral random pinning with the given probability
    #[schemars(range(min = 0.0, max = 1.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random: Option<f64>,
}

/// `CephFilesystemSubVolumeGroupStatus` represents the Status of Ceph Filesystem `SubVolumeGroup`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephFilesystemSubVolumeGroupStatus {
    /// Phase of the subvolume group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Info holds additional details such as the cluster id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

/// `FilesystemMirroringSpec` is the filesystem mirroring specification
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephFilesystemMirror",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephfilesystemmirrors"
)]
#[kube(namespaced, status = "Status")]
pub struct CephFilesystemMirrorSpec {
    /// The affinity to place the cephfs-mirror pods (default is to place on any available node)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// The annotations-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    /// The labels-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// The resource requirements for the cephfs-mirror pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// `PriorityClassName` sets priority class on the cephfs-mirror pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,
}
