//! Object store multisite resources: `CephObjectRealm`, `CephObjectZoneGroup` and `CephObjectZone`

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{PoolSpec, Status};
use super::object_store::ObjectSharedPoolsSpec;

/// `ObjectRealmSpec` represent the spec of an `ObjectRealm`
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephObjectRealm",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephobjectrealms"
)]
#[kube(namespaced, status = "Status")]
pub struct CephObjectRealmSpec {
    /// `PullSpec` represents the pulling specification of a Ceph Object Storage Gateway Realm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull: Option<PullSpec>,
    /// Set this realm as the default in Ceph. Only one realm should be default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_realm: Option<bool>,
}

/// `PullSpec` represents the pulling specification of a Ceph Object Storage Gateway Realm
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PullSpec {
    /// Endpoint of a gateway in the master zone of the realm to pull from
    #[schemars(regex(pattern = r"^https*://"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// `ObjectZoneGroupSpec` represent the spec of an `ObjectZoneGroup`
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephObjectZoneGroup",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephobjectzonegroups"
)]
#[kube(namespaced, status = "Status")]
pub struct CephObjectZoneGroupSpec {
    /// The display name for the ceph users
    pub realm: String,
}

/// `ObjectZoneSpec` represent the spec of an `ObjectZone`
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephObjectZone",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephobjectzones"
)]
#[kube(namespaced, status = "Status")]
pub struct CephObjectZoneSpec {
    /// The display name for the ceph users
    pub zone_group: String,
    /// The metadata pool settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_pool: Option<PoolSpec>,
    /// The data pool settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pool: Option<PoolSpec>,
    /// The pool information when configuring RADOS namespaces in existing pools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_pools: Option<ObjectSharedPoolsSpec>,
    /// If this zone cannot be accessed from other peer Ceph clusters via the `ClusterIP` Service
    /// endpoint created by Rook, you must set this to the externally reachable endpoint(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoints: Option<Vec<String>>,
    /// Preserve pools on object zone deletion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_pools_on_delete: Option<bool>,
}
