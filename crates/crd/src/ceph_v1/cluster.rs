//! `CephCluster` resource

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{
    EndpointAddress, PersistentVolumeClaim, ResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{
    Condition, HealthCheckSpec, KeyManagementServiceSpec, KeyRotationSpec, Placement,
    PlacementSpec, ProbeSpec,
};

/// `ClusterSpec` represents the specification of Ceph Cluster
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephCluster",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephclusters",
    shortname = "ceph"
)]
#[kube(namespaced, status = "ClusterStatus")]
pub struct CephClusterSpec {
    /// The version information that instructs Rook to orchestrate a particular version of Ceph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceph_version: Option<CephVersionSpec>,
    /// A spec for available storage in the cluster and how it should be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageScopeSpec>,
    /// The annotations-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, BTreeMap<String, String>>>,
    /// The labels-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, BTreeMap<String, String>>>,
    /// The placement-related configuration to pass to kubernetes (affinity, node selector, tolerations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<PlacementSpec>,
    /// Network related configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkSpec>,
    /// Resources set resource requests and limits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<BTreeMap<String, ResourceRequirements>>,
    /// `PriorityClassNames` sets priority classes on components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_names: Option<BTreeMap<String, String>>,
    /// The path on the host where config and data can be persisted
    #[schemars(regex(pattern = r"^/(\S+)"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir_host_path: Option<String>,
    /// `SkipUpgradeChecks` defines if an upgrade should be forced even if one of the check fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_upgrade_checks: Option<bool>,
    /// `ContinueUpgradeAfterChecksEvenIfNotHealthy` defines if an upgrade should continue even if PGs are not clean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_upgrade_after_checks_even_if_not_healthy: Option<bool>,
    /// `WaitTimeoutForHealthyOSDInMinutes` defines the time the operator would wait before an OSD can be stopped for upgrade or restart.
    #[serde(
        rename = "waitTimeoutForHealthyOSDInMinutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub wait_timeout_for_healthy_osd_in_minutes: Option<i64>,
    /// `UpgradeOSDRequiresHealthyPGs` defines if OSD upgrade requires PGs are clean.
    #[serde(
        rename = "upgradeOSDRequiresHealthyPGs",
        skip_serializing_if = "Option::is_none"
    )]
    pub upgrade_osd_requires_healthy_pgs: Option<bool>,
    /// A spec for configuring disruption management.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disruption_management: Option<DisruptionManagementSpec>,
    /// A spec for mon related options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mon: Option<MonSpec>,
    /// A spec for the crash controller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crash_collector: Option<CrashCollectorSpec>,
    /// Dashboard settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardSpec>,
    /// Prometheus based Monitoring settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<MonitoringSpec>,
    /// Whether the Ceph Cluster is running external to this Kubernetes cluster
    /// mon, mgr, osd, mds, and discover daemons will not be created for external clusters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalSpec>,
    /// A spec for mgr related options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mgr: Option<MgrSpec>,
    /// Remove the OSD that is out and safe to remove only if this option is true
    #[serde(
        rename = "removeOSDsIfOutAndSafeToRemove",
        skip_serializing_if = "Option::is_none"
    )]
    pub remove_osds_if_out_and_safe_to_remove: Option<bool>,
    /// Indicates user intent when deleting a cluster; blocks orchestration and should not be set if cluster
    /// deletion is not imminent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_policy: Option<CleanupPolicySpec>,
    /// Internal daemon healthchecks and liveness probe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<CephClusterHealthCheckSpec>,
    /// Security represents security settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<ClusterSecuritySpec>,
    /// Logging represents loggings settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_collector: Option<LogCollectorSpec>,
    /// CSI Driver Options applied per cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csi: Option<CsiDriverSpec>,
    /// Ceph Config options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceph_config: Option<BTreeMap<String, BTreeMap<String, String>>>,
}

/// `CephVersionSpec` represents the settings for the Ceph version that Rook is orchestrating.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephVersionSpec {
    /// Image is the container image used to launch the ceph daemons, such as quay.io/ceph/ceph:<tag>
    /// The full list of images can be found at <https://quay.io/repository/ceph/ceph?tab=tags>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Whether to allow unsupported versions (do not set to true in production)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unsupported: Option<bool>,
    /// `ImagePullPolicy` describes a policy for if/when to pull a container image
    /// One of Always, Never, `IfNotPresent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
}

/// `StorageScopeSpec` defines scope or boundaries of storage that the cluster will use for its underlying storage.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageScopeSpec {
    /// Use all nodes in the cluster for storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_all_nodes: Option<bool>,
    /// Whether to consume all the storage devices found on a machine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_all_devices: Option<bool>,
    /// A regular expression to allow more fine-grained selection of devices on nodes across the cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_filter: Option<String>,
    /// A regular expression to allow more fine-grained selection of devices with path names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_path_filter: Option<String>,
    /// List of devices to use as storage devices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,
    /// Per-OSD configuration settings, such as `osdsPerDevice` or `deviceClass`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,
    /// Nodes contains the nodes that will be used for storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<Node>>,
    /// `StorageClassDeviceSets` is a list of device sets backed by PVCs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class_device_sets: Option<Vec<StorageClassDeviceSet>>,
    /// Whether to always schedule OSDs on a node even if the node is not currently scheduleable or ready
    #[serde(
        rename = "onlyApplyOSDPlacement",
        skip_serializing_if = "Option::is_none"
    )]
    pub only_apply_osd_placement: Option<bool>,
    /// `FlappingRestartIntervalHours` defines the time for which the OSD pods, that failed with zero exit code, will sleep before restarting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flapping_restart_interval_hours: Option<i64>,
    /// `FullRatio` is the ratio at which the cluster is considered full and ceph will stop accepting writes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_ratio: Option<f64>,
    /// `NearFullRatio` is the ratio at which the cluster is considered nearly full and will raise a ceph health warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near_full_ratio: Option<f64>,
    /// `BackfillFullRatio` is the ratio at which the cluster is too full for backfill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfill_full_ratio: Option<f64>,
    /// Whether to allow updating the device class after the OSD is initially provisioned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_device_class_update: Option<bool>,
    /// Whether Rook will resize the OSD CRUSH weight when the OSD PVC size is increased.
    #[serde(
        rename = "allowOsdCrushWeightUpdate",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_osd_crush_weight_update: Option<bool>,
    /// OSD store configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<OsdStore>,
}

/// `Device` represents a disk to use in the cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Name of the device, for example `sdb`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full path of the device, for example `/dev/disk/by-id/...`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullpath: Option<String>,
    /// Per-device configuration settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,
}

/// `Node` is a storage nodes
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Name of the node as reported by the `kubernetes.io/hostname` label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `ResourceRequirements` describes the compute resource requirements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// Per-node configuration settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,
    /// Whether to consume all the storage devices found on the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_all_devices: Option<bool>,
    /// A regular expression to allow more fine-grained selection of devices on the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_filter: Option<String>,
    /// A regular expression to allow more fine-grained selection of devices with path names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_path_filter: Option<String>,
    /// List of devices to use as storage devices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,
}

/// `StorageClassDeviceSet` is a storage class device set
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageClassDeviceSet {
    /// Name is a unique identifier for the set
    pub name: String,
    /// Count is the number of devices in this set
    #[schemars(range(min = 1))]
    pub count: i32,
    /// Provider-specific device configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,
    /// `Placement` is the placement for an object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// `Placement` for the OSD prepare job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepare_placement: Option<Placement>,
    /// `ResourceRequirements` describes the compute resource requirements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// Portable represents OSD portability across the hosts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portable: Option<bool>,
    /// `TuneSlowDeviceClass` Tune the OSD when running on a slow Device Class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tune_device_class: Option<bool>,
    /// `TuneFastDeviceClass` Tune the OSD when running on a fast Device Class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tune_fast_device_class: Option<bool>,
    /// Scheduler name for OSD pod placement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler_name: Option<String>,
    /// Whether to encrypt the deviceSet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    /// `VolumeClaimTemplates` is a list of PVC templates for the underlying storage devices
    pub volume_claim_templates: Vec<PersistentVolumeClaim>,
}

/// `OsdStore` is the backend storage type used for creating the OSDs
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OsdStore {
    /// Type of backend storage to be used while creating OSDs. If empty, then bluestore will be used
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// `UpdateStore` updates the backend store for existing OSDs. It destroys each OSD one at a time,
    /// cleans up the backing disk and prepares same OSD on that disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_store: Option<String>,
}

/// `NetworkSpec` for Ceph includes backward compatibility code
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    /// Provider is what provides network connectivity to the cluster e.g. "host" or "multus".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Selectors define NetworkAttachmentDefinitions to be used for Ceph public and/or cluster networks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selectors: Option<BTreeMap<String, String>>,
    /// `AddressRanges` specify a list of CIDRs that Rook will apply to Ceph's 'public_network' and/or 'cluster_network' configurations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_ranges: Option<AddressRangesSpec>,
    /// Settings for network connections such as compression and encryption across the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<ConnectionsSpec>,
    /// `HostNetwork` to enable host network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_network: Option<bool>,
    /// `IPFamily` is the single stack IPv6 or IPv4 protocol
    #[serde(rename = "ipFamily", skip_serializing_if = "Option::is_none")]
    pub ip_family: Option<String>,
    /// `DualStack` determines whether Ceph daemons should listen on both IPv4 and IPv6
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual_stack: Option<bool>,
    /// Enable multiClusterService to export the Services between peer clusters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_cluster_service: Option<MultiClusterServiceSpec>,
}

/// `AddressRangesSpec` lists the CIDRs used for Ceph networks
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRangesSpec {
    /// Public defines a list of CIDRs to use for Ceph public network communication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<Vec<String>>,
    /// Cluster defines a list of CIDRs to use for Ceph cluster network communication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Vec<String>>,
}

/// `ConnectionsSpec` represents the settings for network connections
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsSpec {
    /// Encryption settings for the network connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<EnabledSpec>,
    /// Compression settings for the network connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<EnabledSpec>,
    /// Whether to require msgr2 (port 3300) even if compression or encryption are not enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_msgr2: Option<bool>,
}

/// Toggle for an optional network feature
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnabledSpec {
    /// Whether the feature is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// `MultiClusterServiceSpec` configures services exported between clusters
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultiClusterServiceSpec {
    /// Enable multiClusterService to export the mon and OSD services to peer cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `ClusterID` uniquely identifies a cluster. It is used as a prefix to nslookup exported services.
    #[serde(rename = "clusterID", skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
}

/// `DisruptionManagementSpec` configures management of daemon disruptions
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisruptionManagementSpec {
    /// This enables management of poddisruptionbudgets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_pod_budgets: Option<bool>,
    /// `OSDMaintenanceTimeout` sets how many additional minutes the DOWN/OUT interval is for drained failure domains
    #[serde(
        rename = "osdMaintenanceTimeout",
        skip_serializing_if = "Option::is_none"
    )]
    pub osd_maintenance_timeout: Option<i64>,
    /// `PGHealthCheckTimeout` is the time (in minutes) that the operator will wait for the placement groups to become healthy
    #[serde(
        rename = "pgHealthCheckTimeout",
        skip_serializing_if = "Option::is_none"
    )]
    pub pg_health_check_timeout: Option<i64>,
    /// `PgHealthyRegex` is the regular expression that is used to determine which PG states should be considered healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg_healthy_regex: Option<String>,
}

/// `MonSpec` represents the specification of the monitor
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonSpec {
    /// Count is the number of Ceph monitors
    #[schemars(range(min = 0, max = 9))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// `AllowMultiplePerNode` determines if we can run multiple monitors on the same node (not recommended)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multiple_per_node: Option<bool>,
    /// `FailureDomainLabel` is the label used to determine the failure domain of the mons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_domain_label: Option<String>,
    /// Zones are specified when we want to provide zonal awareness to mons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<MonZoneSpec>>,
    /// `StretchCluster` is the stretch cluster specification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stretch_cluster: Option<StretchClusterSpec>,
    /// `VolumeClaimTemplate` is the PVC definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<PersistentVolumeClaim>,
    /// `ExternalMonIDs` - optional list of monitor IDs which are deployed externally and not managed by Rook.
    #[serde(rename = "externalMonIDs", skip_serializing_if = "Option::is_none")]
    pub external_mon_ids: Option<Vec<String>>,
}

/// `MonZoneSpec` represents the specification of a zone in a Ceph Cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonZoneSpec {
    /// Name is the name of the zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Arbiter determines if the zone contains the arbiter used for stretch cluster mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arbiter: Option<bool>,
    /// `VolumeClaimTemplate` is the PVC template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<PersistentVolumeClaim>,
}

/// `StretchClusterSpec` represents the specification of a stretched Ceph Cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StretchClusterSpec {
    /// `FailureDomainLabel` the failure domain name (e,g: zone)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_domain_label: Option<String>,
    /// `SubFailureDomain` is the failure domain within a zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_failure_domain: Option<String>,
    /// Zones is the list of zones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<MonZoneSpec>>,
}

/// `CrashCollectorSpec` represents options to configure the crash controller
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrashCollectorSpec {
    /// Disable determines whether we should enable the crash collector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,
    /// `DaysToRetain` represents the number of days to retain crash until they get pruned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_retain: Option<u32>,
}

/// `DashboardSpec` represents the settings for the Ceph dashboard
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSpec {
    /// Enabled determines whether to enable the dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `URLPrefix` is a prefix for all URLs to use the dashboard with a reverse proxy
    #[serde(rename = "urlPrefix", skip_serializing_if = "Option::is_none")]
    pub url_prefix: Option<String>,
    /// Port is the dashboard webserver port
    #[schemars(range(min = 0, max = 65535))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// SSL determines whether SSL should be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    /// Endpoint for the Prometheus host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prometheus_endpoint: Option<String>,
    /// Whether to verify the ssl endpoint for prometheus. Set to false for a self-signed cert.
    #[serde(
        rename = "prometheusEndpointSSLVerify",
        skip_serializing_if = "Option::is_none"
    )]
    pub prometheus_endpoint_ssl_verify: Option<bool>,
}

/// `MonitoringSpec` represents the settings for Prometheus based Ceph monitoring
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSpec {
    /// Enabled determines whether to create the prometheus rules for the ceph cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether to disable the metrics reported by Ceph. If false, the prometheus mgr module and Ceph exporter are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_disabled: Option<bool>,
    /// `ExternalMgrEndpoints` points to an existing Ceph prometheus exporter endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_mgr_endpoints: Option<Vec<EndpointAddress>>,
    /// `ExternalMgrPrometheusPort` Prometheus exporter port
    #[schemars(range(min = 0, max = 65535))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_mgr_prometheus_port: Option<u16>,
    /// Port is the prometheus server port
    #[schemars(range(min = 0, max = 65535))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Interval determines prometheus scrape interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

/// `ExternalSpec` represents the options supported by an external cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSpec {
    /// Enable determines whether external mode is enabled or not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
}

/// `MgrSpec` represents options to configure a ceph mgr
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MgrSpec {
    /// Count is the number of manager daemons to run
    #[schemars(range(min = 0, max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// `AllowMultiplePerNode` allows to run multiple managers on the same node (not recommended)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multiple_per_node: Option<bool>,
    /// Modules is the list of ceph manager modules to enable/disable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
}

/// Module represents mgr modules that the user wants to enable or disable
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Name is the name of the ceph manager module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Enabled determines whether a module should be enabled or not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Settings to further configure the module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ModuleSettings>,
}

/// `ModuleSettings` is the settings for the module
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSettings {
    /// `BalancerMode` sets the `balancer` module with different modes like `upmap`, `crush-compact` etc
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balancer_mode: Option<String>,
}

/// `CleanupPolicySpec` represents a Ceph Cluster cleanup policy
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanupPolicySpec {
    /// Confirmation represents the cleanup confirmation
    #[schemars(regex(pattern = r"^$|^yes-really-destroy-data$"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
    /// `SanitizeDisks` represents way we sanitize disks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitize_disks: Option<SanitizeDisksSpec>,
    /// `AllowUninstallWithVolumes` defines whether we can proceed with the uninstall if they are RBD images still present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_uninstall_with_volumes: Option<bool>,
    /// `WipeDevicesFromOtherClusters` wipes the OSD disks belonging to other clusters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wipe_devices_from_other_clusters: Option<bool>,
}

/// `SanitizeDisksSpec` represents a disk sanitizing specification
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SanitizeDisksSpec {
    /// Method is the method we use to sanitize disks (`quick` or `complete`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// `DataSource` is the data source to use to sanitize the disk with (`zero` or `random`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    /// Iteration is the number of pass to apply the sanitizing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<i32>,
}

/// `CephClusterHealthCheckSpec` represent the healthcheck for Ceph daemons
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephClusterHealthCheckSpec {
    /// `DaemonHealth` is the health check for a given daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_health: Option<DaemonHealthSpec>,
    /// `LivenessProbe` allows changing the livenessProbe configuration for a given daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<BTreeMap<String, ProbeSpec>>,
    /// `StartupProbe` allows changing the startupProbe configuration for a given daemon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_probe: Option<BTreeMap<String, ProbeSpec>>,
}

/// `DaemonHealthSpec` is a daemon health check
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DaemonHealthSpec {
    /// Status represents the health check settings for the Ceph health
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HealthCheckSpec>,
    /// Monitor represents the health check settings for the Ceph monitor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mon: Option<HealthCheckSpec>,
    /// `ObjectStorageDaemon` represents the health check settings for the Ceph OSDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osd: Option<HealthCheckSpec>,
}

/// `ClusterSecuritySpec` is the CephCluster security spec to include various security items such as kms
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSecuritySpec {
    /// `KeyManagementService` is the main Key Management option
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms: Option<KeyManagementServiceSpec>,
    /// `KeyRotation` defines options for Key Rotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_rotation: Option<KeyRotationSpec>,
}

/// `LogCollectorSpec` is the logging spec
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogCollectorSpec {
    /// Enabled represents whether the log collector is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Periodicity is the periodicity of the log rotation.
    #[schemars(regex(pattern = r"^$|^(hourly|daily|weekly|monthly|1h|24h|1d)$"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<String>,
    /// `MaxLogSize` is the maximum size of the log per ceph daemons. Must be at least 1M.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_log_size: Option<Quantity>,
}

/// `CsiDriverSpec` defines CSI Driver settings applied per cluster.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiDriverSpec {
    /// `ReadAffinity` defines the read affinity settings for CSI driver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_affinity: Option<ReadAffinitySpec>,
    /// `CephFS` defines CSI Driver settings for `CephFS` driver.
    #[serde(rename = "cephfs", skip_serializing_if = "Option::is_none")]
    pub ceph_fs: Option<CsiCephFsSpec>,
}

/// `ReadAffinitySpec` defines the read affinity settings for CSI driver.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadAffinitySpec {
    /// Enables read affinity for CSI driver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `CrushLocationLabels` defines which node labels to use as CRUSH location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crush_location_labels: Option<Vec<String>>,
}

/// `CsiCephFsSpec` defines the settings for CSI `CephFS` driver.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiCephFsSpec {
    /// `KernelMountOptions` defines the mount options for kernel mounter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_mount_options: Option<String>,
    /// `FuseMountOptions` defines the mount options for ceph fuse mounter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuse_mount_options: Option<String>,
}

/// `ClusterStatus` represents the status of a Ceph cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    /// Deprecated: use `phase` instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Phase of the cluster (`Progressing`, `Ready`, `Updating`, `Failure`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Human readable message about the cluster state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Conditions reported by the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    /// `CephStatus` is the details health of a Ceph Cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceph: Option<CephStatus>,
    /// `CephStorage` represents flavors of Ceph Cluster Storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<CephStorage>,
    /// `ClusterVersion` represents the version of a Ceph Cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ClusterVersion>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

/// `CephStatus` is the details health of a Ceph Cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephStatus {
    /// Overall Ceph health (`HEALTH_OK`, `HEALTH_WARN`, `HEALTH_ERR`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    /// Health check details keyed by check name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, CephHealthMessage>>,
    /// When the health was last checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,
    /// When the health last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<String>,
    /// Health before the last change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_health: Option<String>,
    /// Capacity represents the capacity of the cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,
    /// The cluster FSID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fsid: Option<String>,
}

/// `CephHealthMessage` represents the health message of a Ceph Cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephHealthMessage {
    /// Severity of the health check
    pub severity: String,
    /// Summary of the health check
    pub message: String,
}

/// Capacity is the capacity information of a Ceph Cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    /// Total raw bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_total: Option<u64>,
    /// Used raw bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_used: Option<u64>,
    /// Available raw bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_available: Option<u64>,
    /// When the capacity was last refreshed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// `CephStorage` represents flavors of Ceph Cluster Storage
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephStorage {
    /// Device classes present in the cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_classes: Option<Vec<DeviceClasses>>,
    /// OSD store information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osd: Option<OsdStatus>,
}

/// `DeviceClasses` represents device classes of a Ceph Cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceClasses {
    /// Name of the device class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `OsdStatus` represents OSD status of the ceph Cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OsdStatus {
    /// `StoreType` is a mapping between the OSD backend stores and number of OSDs using these stores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_type: Option<BTreeMap<String, i64>>,
}

/// `ClusterVersion` represents the version of a Ceph Cluster
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterVersion {
    /// Ceph image running in the cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ceph version running in the cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
