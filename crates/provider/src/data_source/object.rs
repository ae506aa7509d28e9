use std::collections::BTreeMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use kube::Api;
use kube::api::DynamicObject;
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use super::{
    CrdResource, DataSource, ReadResponse, is_namespaced, resource_attribute,
    resource_description, resource_id,
};
use crate::provider::ProviderData;
use crate::schema::{self, Schema, SchemaMode};
use crate::{Diagnostics, naming, state};

/// Reads one live object of kind `K` from the cluster
pub struct ObjectDataSource<K> {
    schema: Schema,
    namespaced: bool,
    _kind: PhantomData<fn() -> K>,
}

impl<K: CrdResource> ObjectDataSource<K> {
    /// Builds the data source and its schema from the CRD of `K`
    #[must_use]
    pub fn new() -> Self {
        let crd = K::crd();
        let namespaced = is_namespaced(&crd);

        let mut attributes = BTreeMap::from([
            ("id".to_string(), schema::id_attribute()),
            (
                "metadata".to_string(),
                schema::object_metadata_attribute(namespaced),
            ),
        ]);
        for block in ["spec", "status"] {
            if let Some(attribute) = resource_attribute(&crd, block, SchemaMode::Computed) {
                attributes.insert(block.to_string(), attribute);
            }
        }

        Self {
            schema: Schema {
                description: resource_description::<K>(&crd, "Reads"),
                attributes,
            },
            namespaced,
            _kind: PhantomData,
        }
    }
}

impl<K: CrdResource> Default for ObjectDataSource<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K: CrdResource> DataSource for ObjectDataSource<K> {
    fn type_name(&self, provider_type_name: &str) -> String {
        naming::object_type_name(
            provider_type_name,
            &K::group(&()),
            &K::kind(&()),
            &K::version(&()),
        )
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    #[instrument(skip(self, data, config), fields(kind = %K::kind(&())))]
    async fn read(&self, data: &ProviderData, config: Value) -> ReadResponse {
        let mut diagnostics = Diagnostics::new();
        let input = state::from_config(&self.schema.attributes, &config, &mut diagnostics);
        if diagnostics.has_error() {
            return ReadResponse::failed(diagnostics);
        }

        let metadata = &input["metadata"];
        let name = metadata["name"].as_str().unwrap_or_default();
        let namespace = metadata["namespace"].as_str().filter(|_| self.namespaced);
        let id = resource_id(name, namespace);

        let client = match data.client().await {
            Ok(client) => client,
            Err(err) => {
                warn!(%id, error = %err, "kubernetes client unavailable");
                diagnostics.extend(err.into());
                return ReadResponse::failed(diagnostics);
            }
        };

        let resource = K::api_resource();
        let api: Api<DynamicObject> = match namespace {
            Some(namespace) => Api::namespaced_with(client, namespace, &resource),
            None => Api::all_with(client, &resource),
        };

        debug!(%id, "getting resource");
        let object = match api.get(name).await {
            Ok(object) => object,
            Err(err) => {
                warn!(%id, error = %err, "unable to get resource");
                return ReadResponse::error(diagnostics, "Unable to GET resource", err);
            }
        };

        let mut raw = match serde_json::to_value(&object) {
            Ok(raw) => raw,
            Err(err) => return ReadResponse::error(diagnostics, "Unable to decode resource", err),
        };
        if let Some(fields) = raw.as_object_mut() {
            fields.insert("apiVersion".to_string(), json!(K::api_version(&())));
            fields.insert("kind".to_string(), json!(K::kind(&())));
        }

        let typed = match serde_json::from_value::<K>(raw)
            .and_then(|typed| serde_json::to_value(&typed))
        {
            Ok(typed) => typed,
            Err(err) => {
                warn!(%id, error = %err, "unable to decode resource");
                return ReadResponse::error(diagnostics, "Unable to decode resource", err);
            }
        };

        let mut state = state::object_to_state(&self.schema.attributes, &typed);
        state["id"] = Value::String(id);

        ReadResponse {
            state: Some(state),
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use rook_crd::{CephCluster, ObjectBucket};

    use super::*;
    use crate::schema::AttributeType;

    #[test]
    fn schema_blocks() {
        let ds = ObjectDataSource::<CephCluster>::new();
        let schema = ds.schema();

        assert!(schema.description.starts_with("Reads a CephCluster (ceph.rook.io/v1)."));
        assert!(schema.attributes["id"].is_computed_only());
        assert!(schema.attributes["metadata"].required);
        assert!(schema.attributes["spec"].is_computed_only());
        assert!(schema.attributes["status"].is_computed_only());

        let AttributeType::Object { attributes: spec } = &schema.attributes["spec"].attribute_type
        else {
            panic!("spec is not an object");
        };
        assert!(spec["data_dir_host_path"].is_computed_only());
    }

    #[test]
    fn cluster_scoped_metadata_has_no_namespace() {
        let ds = ObjectDataSource::<ObjectBucket>::new();
        let schema = ds.schema();
        let AttributeType::Object { attributes } = &schema.attributes["metadata"].attribute_type
        else {
            panic!("metadata is not an object");
        };

        assert!(!attributes.contains_key("namespace"));
        assert_eq!(ds.type_name("k8s"), "k8s_objectbucket_io_object_bucket_v1alpha1");
    }
}
