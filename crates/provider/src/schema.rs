//! Attribute metadata describing the shape of a data source.
//!
//! Resource attributes are derived from the structural OpenAPI schema embedded in the
//! CRD, so the typed bindings and the declared attributes always agree. Metadata blocks
//! are declared by hand since CRD schemas leave `metadata` untyped.

use std::collections::BTreeMap;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};
use serde::Serialize;

use crate::naming::to_snake_case;
use crate::validators::Validator;

/// Value type of an attribute
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    /// UTF-8 string
    String,
    /// Signed 64 bit integer
    Int64,
    /// Floating point number
    Number,
    /// Boolean
    Bool,
    /// Kubernetes `IntOrString`, surfaced as a string
    IntOrString,
    /// Untyped value passed through as-is
    Dynamic,
    /// Ordered list of elements
    List {
        /// Element type
        element: Box<AttributeType>,
    },
    /// String keyed map
    Map {
        /// Element type
        element: Box<AttributeType>,
    },
    /// Nested object with a fixed set of attributes
    Object {
        /// Nested attributes keyed by attribute name
        attributes: BTreeMap<String, Attribute>,
    },
}

impl AttributeType {
    /// List of `element`
    #[must_use]
    pub fn list(element: AttributeType) -> Self {
        Self::List {
            element: Box::new(element),
        }
    }

    /// Map of `element`
    #[must_use]
    pub fn map(element: AttributeType) -> Self {
        Self::Map {
            element: Box::new(element),
        }
    }

    /// Human readable type name, used in diagnostics
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int64 => "integer",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::IntOrString => "integer or string",
            Self::Dynamic => "dynamic",
            Self::List { .. } => "list",
            Self::Map { .. } => "map",
            Self::Object { .. } => "object",
        }
    }
}

/// A single attribute of a data source schema
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    /// Value type
    #[serde(flatten)]
    pub attribute_type: AttributeType,
    /// Description copied from the CRD field docs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Must be set in configuration
    pub required: bool,
    /// May be set in configuration
    pub optional: bool,
    /// Set by the data source
    pub computed: bool,
    /// Name of the field in the Kubernetes object
    #[serde(skip)]
    pub json_name: String,
    /// Checks run against configured values
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    fn new(attribute_type: AttributeType, required: bool, optional: bool, computed: bool) -> Self {
        Self {
            attribute_type,
            description: None,
            required,
            optional,
            computed,
            json_name: String::new(),
            validators: Vec::new(),
        }
    }

    /// Attribute that must be configured
    #[must_use]
    pub fn required(attribute_type: AttributeType) -> Self {
        Self::new(attribute_type, true, false, false)
    }

    /// Attribute that may be configured
    #[must_use]
    pub fn optional(attribute_type: AttributeType) -> Self {
        Self::new(attribute_type, false, true, false)
    }

    /// Attribute set by the data source only
    #[must_use]
    pub fn computed(attribute_type: AttributeType) -> Self {
        Self::new(attribute_type, false, false, true)
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the Kubernetes field name
    #[must_use]
    pub fn with_json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = json_name.into();
        self
    }

    /// Adds a validator
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Whether configuration may not set this attribute
    #[must_use]
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.required && !self.optional
    }
}

/// Schema of one data source
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schema {
    /// Description of the data source
    pub description: String,
    /// Top level attributes keyed by attribute name
    pub attributes: BTreeMap<String, Attribute>,
}

/// How CRD fields are exposed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaMode {
    /// Fields are configured by the user; `required` follows the CRD
    Config,
    /// Fields are read from the cluster
    Computed,
}

/// Root OpenAPI schema of the storage version of a CRD
#[must_use]
pub fn crd_root_props(crd: &CustomResourceDefinition) -> Option<&JSONSchemaProps> {
    crd.spec
        .versions
        .iter()
        .find(|v| v.storage)
        .or_else(|| crd.spec.versions.first())
        .and_then(|v| v.schema.as_ref())
        .and_then(|s| s.open_api_v3_schema.as_ref())
}

/// Named top level property (`spec`, `status`) of the CRD root schema
#[must_use]
pub fn crd_property<'a>(
    crd: &'a CustomResourceDefinition,
    name: &str,
) -> Option<(&'a JSONSchemaProps, bool)> {
    let root = crd_root_props(crd)?;
    let props = root.properties.as_ref()?.get(name)?;
    let required = root
        .required
        .as_ref()
        .is_some_and(|r| r.iter().any(|n| n == name));
    Some((props, required))
}

/// Converts one OpenAPI schema node into an attribute type
#[must_use]
pub fn attribute_type(props: &JSONSchemaProps, mode: SchemaMode) -> AttributeType {
    if props.x_kubernetes_int_or_string == Some(true) {
        return AttributeType::IntOrString;
    }

    match props.type_.as_deref() {
        Some("string") => AttributeType::String,
        Some("integer") => AttributeType::Int64,
        Some("number") => AttributeType::Number,
        Some("boolean") => AttributeType::Bool,
        Some("array") => AttributeType::list(match &props.items {
            Some(JSONSchemaPropsOrArray::Schema(items)) => attribute_type(items, mode),
            Some(JSONSchemaPropsOrArray::Schemas(items)) => items
                .first()
                .map_or(AttributeType::Dynamic, |i| attribute_type(i, mode)),
            None => AttributeType::Dynamic,
        }),
        Some("object") => object_type(props, mode),
        _ => {
            let alternative = props
                .any_of
                .iter()
                .chain(props.one_of.iter())
                .flatten()
                .find(|alt| alt.type_.is_some() || alt.x_kubernetes_int_or_string == Some(true));

            match alternative {
                Some(alt) => attribute_type(alt, mode),
                None if props.properties.as_ref().is_some_and(|p| !p.is_empty()) => {
                    object_type(props, mode)
                }
                None => AttributeType::Dynamic,
            }
        }
    }
}

fn object_type(props: &JSONSchemaProps, mode: SchemaMode) -> AttributeType {
    if props.properties.as_ref().is_some_and(|p| !p.is_empty()) {
        return AttributeType::Object {
            attributes: from_crd_props(props, mode),
        };
    }

    match &props.additional_properties {
        Some(JSONSchemaPropsOrBool::Schema(element)) => {
            AttributeType::map(attribute_type(element, mode))
        }
        _ => AttributeType::Dynamic,
    }
}

/// Converts the properties of an object schema node into attributes
#[must_use]
pub fn from_crd_props(
    props: &JSONSchemaProps,
    mode: SchemaMode,
) -> BTreeMap<String, Attribute> {
    let mut out = BTreeMap::new();
    let Some(properties) = &props.properties else {
        return out;
    };

    for (json_name, child) in properties {
        let required = props
            .required
            .as_ref()
            .is_some_and(|r| r.contains(json_name));
        out.entry(to_snake_case(json_name))
            .or_insert_with(|| attribute(child, json_name, required, mode));
    }

    out
}

/// Converts a named schema node into an attribute
#[must_use]
pub fn attribute(
    props: &JSONSchemaProps,
    json_name: &str,
    required: bool,
    mode: SchemaMode,
) -> Attribute {
    let attribute_type = attribute_type(props, mode);
    let mut attr = match mode {
        SchemaMode::Computed => Attribute::computed(attribute_type),
        SchemaMode::Config if required => Attribute::required(attribute_type),
        SchemaMode::Config => Attribute::optional(attribute_type),
    }
    .with_json_name(json_name);
    attr.description.clone_from(&props.description);
    attr
}

fn string_map() -> AttributeType {
    AttributeType::map(AttributeType::String)
}

/// The `id` attribute shared by every data source
#[must_use]
pub fn id_attribute() -> Attribute {
    Attribute::computed(AttributeType::String)
        .with_description("Contains the value `metadata.namespace/metadata.name` or `metadata.name` for cluster scoped resources.")
}

/// The `metadata` block of an object data source: name and namespace select the object,
/// everything else is read back from it.
#[must_use]
pub fn object_metadata_attribute(namespaced: bool) -> Attribute {
    let mut attributes = BTreeMap::from([
        (
            "name".to_string(),
            Attribute::required(AttributeType::String)
                .with_json_name("name")
                .with_description("Unique identifier for this object.")
                .with_validator(Validator::DnsSubdomainName),
        ),
        (
            "labels".to_string(),
            Attribute::computed(string_map())
                .with_json_name("labels")
                .with_description("Map of string keys and values that can be used to organize and categorize (scope and select) objects."),
        ),
        (
            "annotations".to_string(),
            Attribute::computed(string_map())
                .with_json_name("annotations")
                .with_description("Unstructured key value map stored with a resource that may be set by external tools to store and retrieve arbitrary metadata."),
        ),
        (
            "uid".to_string(),
            Attribute::computed(AttributeType::String)
                .with_json_name("uid")
                .with_description("UID is the unique in time and space value for this object."),
        ),
        (
            "resource_version".to_string(),
            Attribute::computed(AttributeType::String)
                .with_json_name("resourceVersion")
                .with_description("An opaque value that represents the internal version of this object."),
        ),
        (
            "generation".to_string(),
            Attribute::computed(AttributeType::Int64)
                .with_json_name("generation")
                .with_description("A sequence number representing a specific generation of the desired state."),
        ),
        (
            "creation_timestamp".to_string(),
            Attribute::computed(AttributeType::String)
                .with_json_name("creationTimestamp")
                .with_description("Time at which this object was created, in RFC 3339 form."),
        ),
    ]);

    if namespaced {
        attributes.insert(
            "namespace".to_string(),
            Attribute::required(AttributeType::String)
                .with_json_name("namespace")
                .with_description("Namespace that contains the object.")
                .with_validator(Validator::DnsLabelName),
        );
    }

    Attribute::required(AttributeType::Object { attributes })
        .with_json_name("metadata")
        .with_description("Data that helps uniquely identify this object.")
}

/// The `metadata` block of a manifest data source
#[must_use]
pub fn manifest_metadata_attribute(namespaced: bool) -> Attribute {
    let mut attributes = BTreeMap::from([
        (
            "name".to_string(),
            Attribute::required(AttributeType::String)
                .with_json_name("name")
                .with_description("Unique identifier for this object.")
                .with_validator(Validator::DnsSubdomainName),
        ),
        (
            "labels".to_string(),
            Attribute::optional(string_map())
                .with_json_name("labels")
                .with_description("Map of string keys and values that can be used to organize and categorize (scope and select) objects.")
                .with_validator(Validator::LabelKeys)
                .with_validator(Validator::LabelValues),
        ),
        (
            "annotations".to_string(),
            Attribute::optional(string_map())
                .with_json_name("annotations")
                .with_description("Unstructured key value map stored with a resource that may be set by external tools to store and retrieve arbitrary metadata.")
                .with_validator(Validator::AnnotationKeys)
                .with_validator(Validator::AnnotationsSize),
        ),
    ]);

    if namespaced {
        attributes.insert(
            "namespace".to_string(),
            Attribute::required(AttributeType::String)
                .with_json_name("namespace")
                .with_description("Namespace that contains the object.")
                .with_validator(Validator::DnsLabelName),
        );
    }

    Attribute::required(AttributeType::Object { attributes })
        .with_json_name("metadata")
        .with_description("Data that helps uniquely identify this object.")
}

#[cfg(test)]
mod tests {
    use kube::CustomResourceExt;
    use rook_crd::{CephBlockPool, CephCluster};
    use serde_json::json;

    use super::*;

    fn props(value: serde_json::Value) -> JSONSchemaProps {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn scalar_and_container_types() {
        let node = props(json!({
            "type": "object",
            "required": ["count"],
            "properties": {
                "count": { "type": "integer", "description": "Number of monitors" },
                "ratio": { "type": "number" },
                "image": { "type": "string" },
                "port": { "x-kubernetes-int-or-string": true },
                "zones": { "type": "array", "items": { "type": "string" } },
                "config": { "type": "object", "additionalProperties": { "type": "string" } },
                "raw": { "type": "object", "x-kubernetes-preserve-unknown-fields": true }
            }
        }));

        let attrs = from_crd_props(&node, SchemaMode::Config);

        assert_eq!(attrs["count"].attribute_type, AttributeType::Int64);
        assert!(attrs["count"].required);
        assert_eq!(attrs["count"].description.as_deref(), Some("Number of monitors"));
        assert_eq!(attrs["ratio"].attribute_type, AttributeType::Number);
        assert!(attrs["image"].optional);
        assert_eq!(attrs["port"].attribute_type, AttributeType::IntOrString);
        assert_eq!(attrs["zones"].attribute_type, AttributeType::list(AttributeType::String));
        assert_eq!(attrs["config"].attribute_type, AttributeType::map(AttributeType::String));
        assert_eq!(attrs["raw"].attribute_type, AttributeType::Dynamic);
    }

    #[test]
    fn computed_mode_marks_everything_computed() {
        let node = props(json!({
            "type": "object",
            "required": ["name"],
            "properties": { "name": { "type": "string" } }
        }));

        let attrs = from_crd_props(&node, SchemaMode::Computed);
        assert!(attrs["name"].is_computed_only());
    }

    #[test]
    fn untyped_alternatives_pick_the_first_typed_branch() {
        let node = props(json!({
            "anyOf": [{ "required": ["a"] }, { "type": "boolean" }]
        }));

        assert_eq!(attribute_type(&node, SchemaMode::Config), AttributeType::Bool);
    }

    #[test]
    fn cluster_spec_uses_snake_case_names() {
        let crd = CephCluster::crd();
        let (spec, _) = crd_property(&crd, "spec").unwrap();
        let attrs = from_crd_props(spec, SchemaMode::Config);

        let data_dir = &attrs["data_dir_host_path"];
        assert_eq!(data_dir.json_name, "dataDirHostPath");
        assert_eq!(data_dir.attribute_type, AttributeType::String);

        let AttributeType::Object { attributes: mon } = &attrs["mon"].attribute_type else {
            panic!("mon is not an object");
        };
        assert_eq!(mon["count"].attribute_type, AttributeType::Int64);
        assert!(attrs.contains_key("wait_timeout_for_healthy_osd_in_minutes"));
    }

    #[test]
    fn flattened_pool_fields_are_top_level_spec_attributes() {
        let crd = CephBlockPool::crd();
        let (spec, _) = crd_property(&crd, "spec").unwrap();
        let attrs = from_crd_props(spec, SchemaMode::Config);

        assert!(attrs.contains_key("failure_domain"));
        assert!(attrs.contains_key("replicated"));
        assert_eq!(attrs["enable_rbd_stats"].json_name, "enableRBDStats");
    }

    #[test]
    fn metadata_blocks_follow_scope() {
        let AttributeType::Object { attributes } = manifest_metadata_attribute(false).attribute_type
        else {
            panic!("metadata is not an object");
        };
        assert!(!attributes.contains_key("namespace"));

        let AttributeType::Object { attributes } = object_metadata_attribute(true).attribute_type
        else {
            panic!("metadata is not an object");
        };
        assert!(attributes["namespace"].required);
        assert!(attributes["uid"].is_computed_only());
    }
}
