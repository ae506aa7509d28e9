//! `CephNFS` resource

use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, EmptyDirVolumeSource, HostPathVolumeSource,
    PersistentVolumeClaimVolumeSource, ProjectedVolumeSource, ResourceRequirements,
    SecretVolumeSource,
};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Annotations, Labels, Placement, ProbeSpec, Status};

/// `NFSGaneshaSpec` represents the spec of an nfs ganesha server
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephNFS",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephnfses",
    shortname = "nfs"
)]
#[kube(namespaced, status = "Status")]
pub struct CephNfsSpec {
    /// RADOS is the Ganesha RADOS specification
    #[serde(rename = "rados", skip_serializing_if = "Option::is_none")]
    pub rados: Option<GaneshaRadosSpec>,
    /// Server is the Ganesha Server specification
    pub server: GaneshaServerSpec,
    /// Security allows specifying security configurations for the NFS cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<NfsSecuritySpec>,
}

/// `GaneshaRADOSSpec` represents the specification of a Ganesha RADOS object
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GaneshaRadosSpec {
    /// The Ceph pool used store the shared configuration for NFS-Ganesha daemons.
    /// This setting is deprecated, as it is internally required to be ".nfs".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    /// The namespace inside the Ceph pool (set by 'pool') where shared NFS-Ganesha config is stored.
    /// This setting is deprecated as it is internally set to the name of the `CephNFS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// `GaneshaServerSpec` represents the specification of a Ganesha Server
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GaneshaServerSpec {
    /// The number of active Ganesha servers
    pub active: i32,
    /// The affinity to place the ganesha pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// The annotations-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    /// The labels-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// Resources set resource requests and limits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// `PriorityClassName` sets the priority class on the pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,
    /// `LogLevel` set logging level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Whether host networking is enabled for the Ganesha server. If not set, the network settings from the cluster CR will be applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_network: Option<bool>,
    /// A liveness-probe to verify that Ganesha server has valid run-time state.
    /// If `LivenessProbe.Disabled` is false and `LivenessProbe.Probe` is nil uses default probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<ProbeSpec>,
}

/// `NFSSecuritySpec` represents security configurations for an NFS server pod
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NfsSecuritySpec {
    /// `SSSD` enables integration with System Security Services Daemon (SSSD).
    #[serde(rename = "sssd", skip_serializing_if = "Option::is_none")]
    pub sssd: Option<SssdSpec>,
    /// Kerberos configures NFS-Ganesha to secure NFS client connections with Kerberos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos: Option<KerberosSpec>,
}

/// `SSSDSpec` represents configuration for System Security Services Daemon (SSSD).
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SssdSpec {
    /// Sidecar tells Rook to run SSSD in a sidecar alongside the NFS-Ganesha server in each NFS pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidecar: Option<SssdSidecar>,
}

/// `SSSDSidecar` represents configuration when SSSD is run in a sidecar.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SssdSidecar {
    /// Image defines the container image that should be used for the SSSD sidecar.
    #[schemars(length(min = 1))]
    pub image: String,
    /// `SSSDConfigFile` defines where the SSSD configuration should be sourced from.
    #[serde(rename = "sssdConfigFile", skip_serializing_if = "Option::is_none")]
    pub sssd_config_file: Option<SssdSidecarConfigFile>,
    /// Resources allow specifying resource requests/limits on the SSSD sidecar container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// `DebugLevel` sets the debug level for SSSD. If unset or set to 0, Rook does nothing.
    #[schemars(range(min = 0, max = 10))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_level: Option<i32>,
}

/// `SSSDSidecarConfigFile` represents the source(s) from which the SSSD configuration should come.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SssdSidecarConfigFile {
    /// `VolumeSource` accepts a pared down version of the standard Kubernetes `VolumeSource` for the
    /// SSSD configuration file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_source: Option<ConfigFileVolumeSource>,
}

/// `KerberosSpec` represents configuration for Kerberos.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KerberosSpec {
    /// `PrincipalName` corresponds directly to NFS-Ganesha's `NFS_KRB5:PrincipalName` config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_name: Option<String>,
    /// `DomainName` should be set to the Kerberos Realm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// `ConfigFiles` defines where the Kerberos configuration should be sourced from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_files: Option<KerberosConfigFiles>,
    /// `KeytabFile` defines where the Kerberos keytab should be sourced from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keytab_file: Option<KerberosKeytabFile>,
}

/// `KerberosConfigFiles` represents the source(s) from which Kerberos configuration should come.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KerberosConfigFiles {
    /// `VolumeSource` accepts a pared down version of the standard Kubernetes `VolumeSource` for
    /// Kerberos configuration files like what is normally used to configure Volumes for a Pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_source: Option<ConfigFileVolumeSource>,
}

/// `KerberosKeytabFile` represents the source(s) from which the Kerberos keytab file should come.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KerberosKeytabFile {
    /// `VolumeSource` accepts a pared down version of the standard Kubernetes `VolumeSource` for the
    /// Kerberos keytab file like what is normally used to configure Volumes for a Pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_source: Option<ConfigFileVolumeSource>,
}

/// `ConfigFileVolumeSource` is a pared-down version of the Kubernetes `VolumeSource`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFileVolumeSource {
    /// `hostPath` represents a pre-existing file or directory on the host machine that is directly exposed to the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_path: Option<HostPathVolumeSource>,
    /// `emptyDir` represents a temporary directory that shares a pod's lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_dir: Option<EmptyDirVolumeSource>,
    /// secret represents a secret that should populate this volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretVolumeSource>,
    /// `persistentVolumeClaimVolumeSource` represents a reference to a `PersistentVolumeClaim` in the same namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimVolumeSource>,
    /// configMap represents a configMap that should populate this volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMapVolumeSource>,
    /// projected items for all in one resources secrets, configmaps, and downward API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected: Option<ProjectedVolumeSource>,
}
