//! Data sources exposing the Rook custom resources

use std::fmt::Debug;

use async_trait::async_trait;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{CustomResourceExt, Resource};
use rook_crd::{
    CephBlockPool, CephBlockPoolRadosNamespace, CephBucketNotification, CephBucketTopic,
    CephCOSIDriver, CephClient, CephCluster, CephFilesystem, CephFilesystemMirror,
    CephFilesystemSubVolumeGroup, CephNFS, CephObjectRealm, CephObjectStore, CephObjectStoreUser,
    CephObjectZone, CephObjectZoneGroup, CephRBDMirror, ObjectBucket, ObjectBucketClaim,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Diagnostics;
use crate::provider::ProviderData;
use crate::schema::{self, Attribute, AttributeType, Schema, SchemaMode};

mod manifest;
mod object;

pub use manifest::ManifestDataSource;
pub use object::ObjectDataSource;

/// Result of a data source read
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReadResponse {
    /// State shaped by the data source schema, absent when the read failed
    pub state: Option<Value>,
    /// Problems found while reading
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    /// Response carrying only diagnostics
    #[must_use]
    pub fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }

    /// Failed response ending with an error built from `summary` and `detail`
    #[must_use]
    pub fn error(mut diagnostics: Diagnostics, summary: &str, detail: impl ToString) -> Self {
        diagnostics.add_error(summary, detail.to_string());
        Self::failed(diagnostics)
    }
}

/// A read-only view of one kind of resource
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Full type name under the given provider prefix
    fn type_name(&self, provider_type_name: &str) -> String;

    /// Attribute schema of the data source
    fn schema(&self) -> Schema;

    /// Reads state for `config`
    async fn read(&self, data: &ProviderData, config: Value) -> ReadResponse;
}

/// Custom resource types usable as data sources
pub trait CrdResource:
    Resource<DynamicType = ()>
    + CustomResourceExt
    + DeserializeOwned
    + Serialize
    + Debug
    + Send
    + Sync
    + 'static
{
}

impl<K> CrdResource for K where
    K: Resource<DynamicType = ()>
        + CustomResourceExt
        + DeserializeOwned
        + Serialize
        + Debug
        + Send
        + Sync
        + 'static
{
}

/// Identifier of an object: `namespace/name`, or `name` when cluster scoped
#[must_use]
pub fn resource_id(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(namespace) => format!("{namespace}/{name}"),
        None => name.to_string(),
    }
}

/// Whether resources of the CRD live in a namespace
fn is_namespaced(crd: &CustomResourceDefinition) -> bool {
    crd.spec.scope == "Namespaced"
}

/// Description of the resource, taken from the spec docs when present
fn resource_description<K: CrdResource>(crd: &CustomResourceDefinition, verb: &str) -> String {
    let summary = schema::crd_property(crd, "spec")
        .and_then(|(props, _)| props.description.clone())
        .map(|d| format!(" {d}"))
        .unwrap_or_default();

    format!(
        "{verb} a {} ({}).{summary}",
        K::kind(&()),
        K::api_version(&())
    )
}

/// Builds the `spec` or `status` block of a CRD as an attribute
fn resource_attribute(
    crd: &CustomResourceDefinition,
    name: &str,
    mode: SchemaMode,
) -> Option<Attribute> {
    let (props, _) = schema::crd_property(crd, name)?;
    let attribute_type = AttributeType::Object {
        attributes: schema::from_crd_props(props, mode),
    };

    let has_required = props.required.as_ref().is_some_and(|r| !r.is_empty());
    let attribute = match mode {
        SchemaMode::Computed => Attribute::computed(attribute_type),
        SchemaMode::Config if has_required => Attribute::required(attribute_type),
        SchemaMode::Config => Attribute::optional(attribute_type),
    };

    let attribute = attribute.with_json_name(name);
    Some(match &props.description {
        Some(description) => attribute.with_description(description.clone()),
        None => attribute,
    })
}

macro_rules! data_sources {
    ($($kind:ty),* $(,)?) => {
        vec![$(
            Box::new(ObjectDataSource::<$kind>::new()) as Box<dyn DataSource>,
            Box::new(ManifestDataSource::<$kind>::new()) as Box<dyn DataSource>,
        )*]
    };
}

/// Every data source: one object and one manifest variant per resource
#[must_use]
pub fn all() -> Vec<Box<dyn DataSource>> {
    data_sources![
        CephBlockPool,
        CephBlockPoolRadosNamespace,
        CephBucketNotification,
        CephBucketTopic,
        CephCOSIDriver,
        CephClient,
        CephCluster,
        CephFilesystem,
        CephFilesystemMirror,
        CephFilesystemSubVolumeGroup,
        CephNFS,
        CephObjectRealm,
        CephObjectStore,
        CephObjectStoreUser,
        CephObjectZone,
        CephObjectZoneGroup,
        CephRBDMirror,
        ObjectBucket,
        ObjectBucketClaim,
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn ids() {
        assert_eq!(resource_id("my-cluster", Some("rook-ceph")), "rook-ceph/my-cluster");
        assert_eq!(resource_id("bucket-1", None), "bucket-1");
    }

    #[test]
    fn every_resource_has_two_uniquely_named_data_sources() {
        let names: BTreeSet<_> = all().iter().map(|ds| ds.type_name("k8s")).collect();

        assert_eq!(names.len(), rook_crd::all_crds().len() * 2);
        assert!(names.contains("k8s_ceph_rook_io_ceph_cluster_v1"));
        assert!(names.contains("k8s_ceph_rook_io_ceph_cluster_v1_manifest"));
        assert!(names.contains("k8s_objectbucket_io_object_bucket_v1alpha1"));
    }

    #[test]
    fn every_schema_serializes() {
        for ds in all() {
            let schema = serde_json::to_value(ds.schema()).unwrap();
            assert_eq!(schema["attributes"]["id"]["type"], "string", "{}", ds.type_name("k8s"));
        }
    }
}
