//! `CephBlockPool` and `CephBlockPoolRadosNamespace` resources

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Condition, PoolSpec, SnapshotScheduleSpec};

/// `NamedBlockPoolSpec` allows a block pool to be created with a non-default name.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephBlockPool",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephblockpools",
    shortname = "cephbp"
)]
#[kube(namespaced, status = "CephBlockPoolStatus")]
pub struct CephBlockPoolSpec {
    /// The desired name of the pool if different from the `CephBlockPool` CR name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `PoolSpec` represents the spec of ceph pool
    #[serde(flatten)]
    pub pool: PoolSpec,
}

/// `CephBlockPoolStatus` represents the mirroring status of Ceph Storage Pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephBlockPoolStatus {
    /// Phase of the pool (`Progressing`, `Ready`, `Failure`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Mirroring status reported by `rbd mirror pool status`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirroring_status: Option<MirroringStatusSpec>,
    /// Mirroring information reported by `rbd mirror pool info`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirroring_info: Option<MirroringInfoSpec>,
    /// Snapshot schedules reported by `rbd mirror snapshot schedule ls`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_schedule_status: Option<SnapshotScheduleStatusSpec>,
    /// Info holds additional details such as the pool id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Conditions reported by the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

/// `MirroringStatusSpec` is the status of the pool mirroring
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirroringStatusSpec {
    /// Summary is the mirroring status summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<MirroringStatusSummary>,
    /// `LastChecked` is the last time time the status was checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,
    /// `LastChanged` is the last time time the status last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<String>,
    /// Details contains potential status errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// `MirroringStatusSummary` is the summary output of the command
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct MirroringStatusSummary {
    /// Health is the mirroring health
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    /// `DaemonHealth` is the health of the mirroring daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_health: Option<String>,
    /// `ImageHealth` is the health of the mirrored image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_health: Option<String>,
    /// States is the various state for all mirrored images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<BTreeMap<String, i64>>,
}

/// `MirroringInfoSpec` is the status of the pool mirroring
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirroringInfoSpec {
    /// Mode is the mirroring mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// `SiteName` is the current site name
    #[serde(rename = "site_name", skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Peers are the list of peer sites connected to that cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<PeersSpec>>,
    /// `LastChecked` is the last time time the status was checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,
    /// `LastChanged` is the last time time the status last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<String>,
    /// Details contains potential status errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// `PeersSpec` contains peer details
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct PeersSpec {
    /// UUID is the peer UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Direction is the peer mirroring direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// `SiteName` is the current site name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// `MirrorUUID` is the mirror UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror_uuid: Option<String>,
    /// `ClientName` is the `CephX` user used to connect to the peer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

/// `SnapshotScheduleStatusSpec` is the status of the snapshot schedule
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotScheduleStatusSpec {
    /// `SnapshotSchedules` is the list of snapshots scheduled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_schedules: Option<Vec<SnapshotSchedulesSpec>>,
    /// `LastChecked` is the last time time the status was checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,
    /// `LastChanged` is the last time time the status last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<String>,
    /// Details contains potential status errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// `SnapshotSchedulesSpec` is the list of snapshot scheduled for images in a pool
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct SnapshotSchedulesSpec {
    /// Pool is the pool name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    /// Namespace is the RADOS namespace the image is part of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Image is the mirrored image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Items is the list schedules times for a given snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SnapshotScheduleSpec>>,
}

/// `CephBlockPoolRadosNamespaceSpec` represents the specification of a `CephBlockPool` Rados Namespace
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephBlockPoolRadosNamespace",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephblockpoolradosnamespaces",
    shortname = "cephbprns"
)]
#[kube(namespaced, status = "CephBlockPoolRadosNamespaceStatus")]
pub struct CephBlockPoolRadosNamespaceSpec {
    /// The name of the `CephBlockPoolRadosNamespaceSpec` namespace. If not set, the default is the name of the CR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `BlockPoolName` is the name of Ceph `BlockPool`. Typically it's the name of the `CephBlockPool` CR.
    pub block_pool_name: String,
    /// Mirroring configuration of `CephBlockPoolRadosNamespace`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirroring: Option<RadosNamespaceMirroring>,
}

/// `RadosNamespaceMirroring` represents the mirroring configuration of `CephBlockPoolRadosNamespace`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RadosNamespaceMirroring {
    /// `RemoteNamespace` is the name of the `CephBlockPoolRadosNamespace` on the secondary cluster `CephBlockPool`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_namespace: Option<String>,
    /// Mode is the mirroring mode; either pool or image
    pub mode: String,
    /// `SnapshotSchedules` is the scheduling of snapshot for mirrored images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_schedules: Option<Vec<SnapshotScheduleSpec>>,
}

/// `CephBlockPoolRadosNamespaceStatus` represents the Status of Ceph `BlockPool` Rados Namespace
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephBlockPoolRadosNamespaceStatus {
    /// Phase of the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Info holds additional details such as the cluster id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// Mirroring status of the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirroring_status: Option<MirroringStatusSpec>,
    /// Mirroring information of the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirroring_info: Option<MirroringInfoSpec>,
    /// Snapshot schedules of the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_schedule_status: Option<SnapshotScheduleStatusSpec>,
}
