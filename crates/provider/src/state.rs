//! Schema-directed mapping between Kubernetes JSON and data source state.
//!
//! Kubernetes objects use the upstream camelCase field names, state uses the
//! snake_case attribute names declared by [`crate::schema`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::Diagnostics;
use crate::schema::{Attribute, AttributeType};

/// Converts a Kubernetes JSON object into state shaped by `attributes`.
///
/// Every declared attribute is emitted, missing fields become `null`.
#[must_use]
pub fn object_to_state(attributes: &BTreeMap<String, Attribute>, value: &Value) -> Value {
    let Some(object) = value.as_object() else {
        return Value::Null;
    };

    let state = attributes
        .iter()
        .map(|(name, attr)| {
            let field = object.get(field_name(name, attr)).unwrap_or(&Value::Null);
            (name.clone(), to_state(&attr.attribute_type, field))
        })
        .collect();

    Value::Object(state)
}

/// Converts one Kubernetes JSON value into state of type `attribute_type`
#[must_use]
pub fn to_state(attribute_type: &AttributeType, value: &Value) -> Value {
    if value.is_null() {
        return Value::Null;
    }

    match attribute_type {
        AttributeType::Object { attributes } => object_to_state(attributes, value),
        AttributeType::Map { element } => match value.as_object() {
            Some(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), to_state(element, v)))
                    .collect(),
            ),
            None => Value::Null,
        },
        AttributeType::List { element } => match value.as_array() {
            Some(items) => Value::Array(items.iter().map(|v| to_state(element, v)).collect()),
            None => Value::Null,
        },
        AttributeType::IntOrString => match value {
            Value::Number(n) => Value::String(n.to_string()),
            other => other.clone(),
        },
        _ => value.clone(),
    }
}

/// Converts state-shaped configuration into a Kubernetes JSON object.
///
/// Problems are reported into `diagnostics` at dotted attribute paths; the
/// returned value contains whatever could be converted.
pub fn from_config(
    attributes: &BTreeMap<String, Attribute>,
    config: &Value,
    diagnostics: &mut Diagnostics,
) -> Value {
    object_from_config(attributes, config, "", diagnostics)
}

fn object_from_config(
    attributes: &BTreeMap<String, Attribute>,
    value: &Value,
    path: &str,
    diagnostics: &mut Diagnostics,
) -> Value {
    let empty = Map::new();
    let object = match value {
        Value::Object(object) => object,
        Value::Null => &empty,
        other => {
            mismatch(path, "object", other, diagnostics);
            return Value::Null;
        }
    };

    for key in object.keys().filter(|k| !attributes.contains_key(*k)) {
        diagnostics.add_attribute_error(
            join(path, key),
            "Unsupported attribute",
            format!("An attribute named {key:?} is not expected here."),
        );
    }

    let mut out = Map::new();
    for (name, attr) in attributes {
        let attr_path = join(path, name);
        let configured = object.get(name).filter(|v| !v.is_null());

        let Some(configured) = configured else {
            if attr.required {
                diagnostics.add_attribute_error(
                    attr_path,
                    "Missing required attribute",
                    format!("The attribute {name:?} is required, but no definition was found."),
                );
            }
            continue;
        };

        if attr.is_computed_only() {
            diagnostics.add_attribute_error(
                attr_path,
                "Value for unconfigurable attribute",
                format!("Can't configure a value for {name:?}: its value will be decided automatically."),
            );
            continue;
        }

        for validator in &attr.validators {
            validator.validate(&attr_path, configured, diagnostics);
        }

        let converted = value_from_config(&attr.attribute_type, configured, &attr_path, diagnostics);
        if !converted.is_null() {
            out.insert(field_name(name, attr).to_string(), converted);
        }
    }

    Value::Object(out)
}

fn value_from_config(
    attribute_type: &AttributeType,
    value: &Value,
    path: &str,
    diagnostics: &mut Diagnostics,
) -> Value {
    let accepted = match attribute_type {
        AttributeType::String => value.is_string(),
        AttributeType::Int64 => value.is_i64() || value.is_u64(),
        AttributeType::Number => value.is_number(),
        AttributeType::Bool => value.is_boolean(),
        AttributeType::Dynamic => true,
        AttributeType::IntOrString => {
            return match value {
                Value::Number(n) if n.is_i64() || n.is_u64() => value.clone(),
                // canonical decimals only, so "007" and "+2" stay strings
                Value::String(s) => s
                    .parse::<i64>()
                    .ok()
                    .filter(|n| n.to_string() == *s)
                    .map_or_else(|| value.clone(), Value::from),
                other => {
                    mismatch(path, attribute_type.type_name(), other, diagnostics);
                    Value::Null
                }
            };
        }
        AttributeType::List { element } => {
            let Some(items) = value.as_array() else {
                mismatch(path, attribute_type.type_name(), value, diagnostics);
                return Value::Null;
            };
            return Value::Array(
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(i, v)| value_from_config(element, v, &format!("{path}[{i}]"), diagnostics))
                    .collect(),
            );
        }
        AttributeType::Map { element } => {
            let Some(map) = value.as_object() else {
                mismatch(path, attribute_type.type_name(), value, diagnostics);
                return Value::Null;
            };
            return Value::Object(
                map.iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| {
                        let converted = value_from_config(element, v, &join(path, k), diagnostics);
                        (k.clone(), converted)
                    })
                    .collect(),
            );
        }
        AttributeType::Object { attributes } => {
            return object_from_config(attributes, value, path, diagnostics);
        }
    };

    if accepted {
        value.clone()
    } else {
        mismatch(path, attribute_type.type_name(), value, diagnostics);
        Value::Null
    }
}

fn field_name<'a>(name: &'a str, attr: &'a Attribute) -> &'a str {
    if attr.json_name.is_empty() {
        name
    } else {
        &attr.json_name
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn mismatch(path: &str, expected: &str, got: &Value, diagnostics: &mut Diagnostics) {
    diagnostics.add_attribute_error(
        path,
        "Incorrect attribute type",
        format!("expected {expected}, got {}", json_type(got)),
    );
}

#[cfg(test)]
mod tests {
    use kube::CustomResourceExt;
    use rook_crd::CephCluster;
    use serde_json::json;

    use super::*;
    use crate::schema::{SchemaMode, crd_property, from_crd_props};

    fn cluster_spec() -> BTreeMap<String, Attribute> {
        let crd = CephCluster::crd();
        let (spec, _) = crd_property(&crd, "spec").unwrap();
        from_crd_props(spec, SchemaMode::Config)
    }

    fn sample() -> BTreeMap<String, Attribute> {
        BTreeMap::from([
            (
                "target_port".to_string(),
                Attribute::optional(AttributeType::IntOrString).with_json_name("targetPort"),
            ),
            (
                "node_labels".to_string(),
                Attribute::optional(AttributeType::map(AttributeType::String))
                    .with_json_name("nodeLabels"),
            ),
            (
                "count".to_string(),
                Attribute::required(AttributeType::Int64).with_json_name("count"),
            ),
            (
                "phase".to_string(),
                Attribute::computed(AttributeType::String).with_json_name("phase"),
            ),
        ])
    }

    #[test]
    fn state_uses_attribute_names_and_fills_nulls() {
        let value = json!({
            "targetPort": 8080,
            "nodeLabels": { "topology.kubernetes.io/zone": "a" },
            "count": 3
        });

        let state = object_to_state(&sample(), &value);

        assert_eq!(
            state,
            json!({
                "target_port": "8080",
                "node_labels": { "topology.kubernetes.io/zone": "a" },
                "count": 3,
                "phase": null
            })
        );
    }

    #[test]
    fn config_maps_back_to_json_names() {
        let mut diags = Diagnostics::new();
        let config = json!({
            "target_port": "http",
            "node_labels": { "rack": "r1", "empty": null },
            "count": 3,
            "phase": null
        });

        let value = from_config(&sample(), &config, &mut diags);

        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(
            value,
            json!({ "targetPort": "http", "nodeLabels": { "rack": "r1" }, "count": 3 })
        );
    }

    #[test]
    fn numeric_strings_become_integers_for_int_or_string() {
        let mut diags = Diagnostics::new();
        let value = from_config(&sample(), &json!({ "target_port": "9283", "count": 1 }), &mut diags);

        assert_eq!(value["targetPort"], json!(9283));
    }

    #[test]
    fn non_canonical_numbers_stay_strings_for_int_or_string() {
        for port in ["007", "+2", " 80", "-0"] {
            let mut diags = Diagnostics::new();
            let value =
                from_config(&sample(), &json!({ "target_port": port, "count": 1 }), &mut diags);

            assert!(diags.is_empty(), "{diags:?}");
            assert_eq!(value["targetPort"], json!(port));
        }

        let mut diags = Diagnostics::new();
        let value = from_config(&sample(), &json!({ "target_port": "-1", "count": 1 }), &mut diags);
        assert_eq!(value["targetPort"], json!(-1));
    }

    #[test]
    fn config_problems_are_reported_with_paths() {
        let mut diags = Diagnostics::new();
        let config = json!({ "phase": "Ready", "colour": "blue" });

        from_config(&sample(), &config, &mut diags);

        let found: Vec<_> = diags
            .iter()
            .map(|d| (d.attribute.clone().unwrap_or_default(), d.summary.clone()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("colour".to_string(), "Unsupported attribute".to_string()),
                ("count".to_string(), "Missing required attribute".to_string()),
                ("phase".to_string(), "Value for unconfigurable attribute".to_string()),
            ]
        );
    }

    #[test]
    fn nested_type_mismatch_points_at_the_list_element() {
        let mut diags = Diagnostics::new();
        let config = json!({
            "storage": { "nodes": [{ "name": "node-a" }, { "name": 5 }] },
            "mon": { "count": "three" }
        });

        from_config(&cluster_spec(), &config, &mut diags);

        let paths: Vec<_> = diags.iter().filter_map(|d| d.attribute.clone()).collect();
        assert_eq!(paths, vec!["mon.count", "storage.nodes[1].name"]);
        assert!(diags.iter().all(|d| d.summary == "Incorrect attribute type"));
    }

    #[test]
    fn cluster_spec_round_trips_through_state() {
        let spec = json!({
            "dataDirHostPath": "/var/lib/rook",
            "mon": { "count": 3, "allowMultiplePerNode": false },
            "storage": { "useAllNodes": true, "config": { "osdsPerDevice": "1" } }
        });
        let attrs = cluster_spec();

        let state = object_to_state(&attrs, &spec);
        assert_eq!(state["data_dir_host_path"], json!("/var/lib/rook"));
        assert_eq!(state["storage"]["config"], json!({ "osdsPerDevice": "1" }));
        assert_eq!(state["network"], Value::Null);

        let mut diags = Diagnostics::new();
        assert_eq!(from_config(&attrs, &state, &mut diags), spec);
        assert!(!diags.has_error());
    }
}
