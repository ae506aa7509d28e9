use std::collections::BTreeMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use super::{
    CrdResource, DataSource, ReadResponse, is_namespaced, resource_attribute,
    resource_description, resource_id,
};
use crate::provider::ProviderData;
use crate::schema::{self, Attribute, AttributeType, Schema, SchemaMode};
use crate::{Diagnostics, naming, state};

/// Renders a manifest of kind `K` from configuration, without contacting the cluster
pub struct ManifestDataSource<K> {
    schema: Schema,
    namespaced: bool,
    _kind: PhantomData<fn() -> K>,
}

impl<K: CrdResource> ManifestDataSource<K> {
    /// Builds the data source and its schema from the CRD of `K`
    #[must_use]
    pub fn new() -> Self {
        let crd = K::crd();
        let namespaced = is_namespaced(&crd);

        let mut attributes = BTreeMap::from([
            ("id".to_string(), schema::id_attribute()),
            (
                "metadata".to_string(),
                schema::manifest_metadata_attribute(namespaced),
            ),
            (
                "yaml".to_string(),
                Attribute::computed(AttributeType::String)
                    .with_description("The generated manifest in YAML format."),
            ),
        ]);
        if let Some(spec) = resource_attribute(&crd, "spec", SchemaMode::Config) {
            attributes.insert("spec".to_string(), spec);
        }

        Self {
            schema: Schema {
                description: resource_description::<K>(&crd, "Renders"),
                attributes,
            },
            namespaced,
            _kind: PhantomData,
        }
    }
}

impl<K: CrdResource> Default for ManifestDataSource<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K: CrdResource> DataSource for ManifestDataSource<K> {
    fn type_name(&self, provider_type_name: &str) -> String {
        naming::manifest_type_name(
            provider_type_name,
            &K::group(&()),
            &K::kind(&()),
            &K::version(&()),
        )
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    #[instrument(skip(self, _data, config), fields(kind = %K::kind(&())))]
    async fn read(&self, _data: &ProviderData, config: Value) -> ReadResponse {
        let mut diagnostics = Diagnostics::new();
        let mut manifest = state::from_config(&self.schema.attributes, &config, &mut diagnostics);
        if diagnostics.has_error() {
            return ReadResponse::failed(diagnostics);
        }

        let Some(fields) = manifest.as_object_mut() else {
            return ReadResponse::error(
                diagnostics,
                "Unable to decode manifest",
                "configuration is not an object",
            );
        };
        fields.insert("apiVersion".to_string(), json!(K::api_version(&())));
        fields.insert("kind".to_string(), json!(K::kind(&())));
        fields.entry("spec").or_insert_with(|| json!({}));

        let metadata = &manifest["metadata"];
        let name = metadata["name"].as_str().unwrap_or_default();
        let namespace = metadata["namespace"].as_str().filter(|_| self.namespaced);
        let id = resource_id(name, namespace);

        let typed = match serde_json::from_value::<K>(manifest) {
            Ok(typed) => typed,
            Err(err) => return ReadResponse::error(diagnostics, "Unable to decode manifest", err),
        };

        debug!(%id, "rendering manifest");
        let yaml = match serde_yaml::to_string(&typed) {
            Ok(yaml) => yaml,
            Err(err) => return ReadResponse::error(diagnostics, "Unable to render YAML", err),
        };
        let rendered = match serde_json::to_value(&typed) {
            Ok(rendered) => rendered,
            Err(err) => return ReadResponse::error(diagnostics, "Unable to render YAML", err),
        };

        let mut state = state::object_to_state(&self.schema.attributes, &rendered);
        state["id"] = Value::String(id);
        state["yaml"] = Value::String(yaml);

        ReadResponse {
            state: Some(state),
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use rook_crd::{CephClient, CephCluster, ObjectBucket};

    use super::*;
    use crate::ProviderConfig;

    fn data() -> ProviderData {
        ProviderData::new(ProviderConfig::default())
    }

    #[tokio::test]
    async fn renders_yaml_with_type_information() {
        let ds = ManifestDataSource::<CephCluster>::new();
        let config = json!({
            "metadata": {
                "name": "my-cluster",
                "namespace": "rook-ceph",
                "labels": { "app.kubernetes.io/part-of": "rook" }
            },
            "spec": {
                "data_dir_host_path": "/var/lib/rook",
                "mon": { "count": 3 }
            }
        });

        let response = ds.read(&data(), config).await;
        assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);

        let state = response.state.unwrap();
        assert_eq!(state["id"], "rook-ceph/my-cluster");
        assert_eq!(state["spec"]["mon"]["count"], 3);
        assert_eq!(state["metadata"]["labels"]["app.kubernetes.io/part-of"], "rook");

        let yaml: serde_yaml::Value = serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap();
        assert_eq!(yaml["apiVersion"], "ceph.rook.io/v1");
        assert_eq!(yaml["kind"], "CephCluster");
        assert_eq!(yaml["metadata"]["namespace"], "rook-ceph");
        assert_eq!(yaml["spec"]["dataDirHostPath"], "/var/lib/rook");
    }

    #[tokio::test]
    async fn cluster_scoped_manifests_have_bare_ids() {
        let ds = ManifestDataSource::<ObjectBucket>::new();
        let config = json!({
            "metadata": { "name": "obc-rook-ceph-bucket" },
            "spec": { "storage_class_name": "rook-ceph-bucket" }
        });

        let state = ds.read(&data(), config).await.state.unwrap();
        assert_eq!(state["id"], "obc-rook-ceph-bucket");
    }

    #[tokio::test]
    async fn invalid_metadata_is_reported_before_rendering() {
        let ds = ManifestDataSource::<CephCluster>::new();
        let config = json!({
            "metadata": { "name": "My_Cluster", "namespace": "rook-ceph", "yaml": "x" },
            "spec": {}
        });

        let response = ds.read(&data(), config).await;
        assert!(response.state.is_none());

        let paths: Vec<_> = response
            .diagnostics
            .iter()
            .filter_map(|d| d.attribute.clone())
            .collect();
        assert_eq!(paths, vec!["metadata.yaml", "metadata.name"]);
    }

    #[tokio::test]
    async fn missing_required_spec_fields_are_reported() {
        let ds = ManifestDataSource::<CephClient>::new();
        let config = json!({ "metadata": { "name": "glance", "namespace": "rook-ceph" } });

        let response = ds.read(&data(), config).await;
        let diag = response.diagnostics.iter().next().unwrap();

        assert_eq!(diag.summary, "Missing required attribute");
        assert_eq!(diag.attribute.as_deref(), Some("spec"));
    }

    #[tokio::test]
    async fn computed_yaml_cannot_be_configured() {
        let ds = ManifestDataSource::<ObjectBucket>::new();
        let config = json!({ "metadata": { "name": "b" }, "yaml": "kind: Pod" });

        let response = ds.read(&data(), config).await;
        assert!(response.diagnostics.has_error());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            "Value for unconfigurable attribute"
        );
    }
}
