// Copyright 2026 Rook Provider Maintainers
// SPDX-License-Identifier: Apache-2.0

//! Typed bindings for the Rook Ceph custom resource definitions

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;

pub mod ceph_v1;
pub mod objectbucket_v1alpha1;

pub use ceph_v1::{
    CephBlockPool, CephBlockPoolRadosNamespace, CephBucketNotification, CephBucketTopic,
    CephCOSIDriver, CephClient, CephCluster, CephFilesystem, CephFilesystemMirror,
    CephFilesystemSubVolumeGroup, CephNFS, CephObjectRealm, CephObjectStore, CephObjectStoreUser,
    CephObjectZone, CephObjectZoneGroup, CephRBDMirror,
};
pub use objectbucket_v1alpha1::{ObjectBucket, ObjectBucketClaim};

/// Returns the definitions of every resource in this crate
#[must_use]
pub fn all_crds() -> Vec<CustomResourceDefinition> {
    vec![
        CephBlockPool::crd(),
        CephBlockPoolRadosNamespace::crd(),
        CephBucketNotification::crd(),
        CephBucketTopic::crd(),
        CephCOSIDriver::crd(),
        CephClient::crd(),
        CephCluster::crd(),
        CephFilesystem::crd(),
        CephFilesystemMirror::crd(),
        CephFilesystemSubVolumeGroup::crd(),
        CephNFS::crd(),
        CephObjectRealm::crd(),
        CephObjectStore::crd(),
        CephObjectStoreUser::crd(),
        CephObjectZone::crd(),
        CephObjectZoneGroup::crd(),
        CephRBDMirror::crd(),
        ObjectBucket::crd(),
        ObjectBucketClaim::crd(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crd_names_are_plural_dot_group() {
        for crd in all_crds() {
            let expected = format!("{}.{}", crd.spec.names.plural, crd.spec.group);
            assert_eq!(crd.metadata.name.as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn only_object_bucket_is_cluster_scoped() {
        let cluster_scoped: Vec<_> = all_crds()
            .into_iter()
            .filter(|crd| crd.spec.scope == "Cluster")
            .map(|crd| crd.spec.names.kind)
            .collect();

        assert_eq!(cluster_scoped, vec!["ObjectBucket".to_string()]);
    }

    #[test]
    fn cluster_schema_carries_field_docs() {
        let crd = CephCluster::crd();
        let schema = crd.spec.versions[0]
            .schema
            .as_ref()
            .and_then(|s| s.open_api_v3_schema.as_ref())
            .unwrap();
        let spec = &schema.properties.as_ref().unwrap()["spec"];
        let data_dir = &spec.properties.as_ref().unwrap()["dataDirHostPath"];

        assert_eq!(data_dir.type_.as_deref(), Some("string"));
        assert_eq!(
            data_dir.description.as_deref(),
            Some("The path on the host where config and data can be persisted")
        );
    }

    #[test]
    fn cluster_manifest_deserializes() {
        let cluster: CephCluster = serde_yaml::from_str(
            r"
apiVersion: ceph.rook.io/v1
kind: CephCluster
metadata:
  name: rook-ceph
  namespace: rook-ceph
spec:
  cephVersion:
    image: quay.io/ceph/ceph:v19.2.0
  dataDirHostPath: /var/lib/rook
  mon:
    count: 3
    allowMultiplePerNode: false
  storage:
    useAllNodes: true
    useAllDevices: true
  waitTimeoutForHealthyOSDInMinutes: 10
",
        )
        .unwrap();

        assert_eq!(cluster.spec.mon.as_ref().and_then(|m| m.count), Some(3));
        assert_eq!(cluster.spec.wait_timeout_for_healthy_osd_in_minutes, Some(10));
        assert_eq!(
            cluster.spec.ceph_version.and_then(|v| v.image).as_deref(),
            Some("quay.io/ceph/ceph:v19.2.0")
        );
    }
}
