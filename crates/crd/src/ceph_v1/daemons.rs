//! Standalone daemon and credential resources: `CephClient`, `CephRBDMirror` and `CephCOSIDriver`

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ResourceRequirements;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Annotations, Labels, MirroringPeerSpec, Placement, Status};

/// `ClientSpec` represents the specification of a Ceph Client
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephClient",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephclients"
)]
#[kube(namespaced, status = "CephClientStatus")]
pub struct CephClientSpec {
    /// Name of the Ceph client, overriding the name of the CR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Capabilities granted to the client, keyed by daemon type (`mon`, `osd`, `mgr`, `mds`)
    pub caps: BTreeMap<String, String>,
    /// `SecretName` is the name of the secret created for this ceph client.
    /// If not specified, the default name is "rook-ceph-client-" as a prefix to the CR name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

/// `CephClientStatus` represents the Status of Ceph Client
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CephClientStatus {
    /// Phase of the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Info holds additional details such as the secret name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

/// `RBDMirroringSpec` represents the specification of an RBD mirror daemon
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephRBDMirror",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephrbdmirrors"
)]
#[kube(namespaced, status = "Status")]
pub struct CephRbdMirrorSpec {
    /// Count represents the number of rbd mirror instance to run
    #[schemars(range(min = 1))]
    pub count: i32,
    /// Peers represents the peers spec
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<MirroringPeerSpec>,
    /// The affinity to place the rgw pods (default is to place on any available node)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// The annotations-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    /// The labels-related configuration to add/set on each Pod related object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    /// The resource requirements for the rbd mirror pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// `PriorityClassName` sets priority class on the rbd mirror pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,
}

/// `CephCOSIDriverSpec` represents the specification of a Ceph COSI Driver
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephCOSIDriver",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephcosidrivers",
    shortname = "cephcosi"
)]
#[kube(namespaced)]
pub struct CephCosiDriverSpec {
    /// Image is the container image to run the Ceph COSI driver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// `ObjectProvisionerImage` is the container image to run the COSI driver sidecar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_provisioner_image: Option<String>,
    /// `DeploymentStrategy` is the strategy to use to deploy the COSI driver.
    #[schemars(regex(pattern = r"^(Never|Auto|Always)$"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_strategy: Option<String>,
    /// Placement is the placement strategy to use for the COSI driver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// Resources is the resource requirements for the COSI driver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
}
