//! Checks applied to configured metadata values

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::Diagnostics;

const DNS_SUBDOMAIN_MAX: usize = 253;
const DNS_LABEL_MAX: usize = 63;
const QUALIFIED_NAME_MAX: usize = 63;
const LABEL_VALUE_MAX: usize = 63;
const ANNOTATIONS_MAX_BYTES: usize = 256 * 1024;

#[allow(clippy::unwrap_used)]
static DNS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap());

#[allow(clippy::unwrap_used)]
static DNS_SUBDOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .unwrap()
});

#[allow(clippy::unwrap_used)]
static QUALIFIED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").unwrap()
});

#[allow(clippy::unwrap_used)]
static LABEL_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$").unwrap()
});

/// Validation applied to a configured attribute value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// RFC 1123 subdomain, used for object names
    DnsSubdomainName,
    /// RFC 1123 label, used for namespaces
    DnsLabelName,
    /// Every key of a map is a qualified label key
    LabelKeys,
    /// Every value of a map is a valid label value
    LabelValues,
    /// Every key of a map is a qualified annotation key
    AnnotationKeys,
    /// Total size of keys and values stays under the annotation limit
    AnnotationsSize,
}

impl Validator {
    /// Runs the check against `value`, reporting problems at `path`
    pub fn validate(self, path: &str, value: &Value, diagnostics: &mut Diagnostics) {
        match self {
            Self::DnsSubdomainName => {
                if let Some(s) = value.as_str() {
                    report(path, dns_subdomain(s), diagnostics);
                }
            }
            Self::DnsLabelName => {
                if let Some(s) = value.as_str() {
                    report(path, dns_label(s), diagnostics);
                }
            }
            Self::LabelKeys | Self::AnnotationKeys => {
                for key in value.as_object().into_iter().flat_map(|m| m.keys()) {
                    report(&format!("{path}.{key}"), qualified_name(key), diagnostics);
                }
            }
            Self::LabelValues => {
                for (key, v) in value.as_object().into_iter().flatten() {
                    if let Some(s) = v.as_str() {
                        report(&format!("{path}.{key}"), label_value(s), diagnostics);
                    }
                }
            }
            Self::AnnotationsSize => {
                let size: usize = value
                    .as_object()
                    .into_iter()
                    .flatten()
                    .map(|(k, v)| k.len() + v.as_str().map_or(0, str::len))
                    .sum();
                if size > ANNOTATIONS_MAX_BYTES {
                    report(
                        path,
                        Err(format!(
                            "total size of annotations must be {ANNOTATIONS_MAX_BYTES} bytes or less, got {size}"
                        )),
                        diagnostics,
                    );
                }
            }
        }
    }
}

fn report(path: &str, result: Result<(), String>, diagnostics: &mut Diagnostics) {
    if let Err(detail) = result {
        diagnostics.add_attribute_error(path, "Invalid attribute value", detail);
    }
}

/// Checks `value` is an RFC 1123 subdomain
pub fn dns_subdomain(value: &str) -> Result<(), String> {
    if value.len() > DNS_SUBDOMAIN_MAX {
        return Err(format!(
            "{value:?} must be no more than {DNS_SUBDOMAIN_MAX} characters"
        ));
    }
    if !DNS_SUBDOMAIN.is_match(value) {
        return Err(format!(
            "{value:?} must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character"
        ));
    }
    Ok(())
}

/// Checks `value` is an RFC 1123 label
pub fn dns_label(value: &str) -> Result<(), String> {
    if value.len() > DNS_LABEL_MAX {
        return Err(format!(
            "{value:?} must be no more than {DNS_LABEL_MAX} characters"
        ));
    }
    if !DNS_LABEL.is_match(value) {
        return Err(format!(
            "{value:?} must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character"
        ));
    }
    Ok(())
}

/// Checks `value` is a qualified name with an optional DNS subdomain prefix
pub fn qualified_name(value: &str) -> Result<(), String> {
    let (prefix, name) = match value.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, value),
    };

    if let Some(prefix) = prefix {
        if prefix.is_empty() {
            return Err(format!("{value:?}: prefix part must be non-empty"));
        }
        dns_subdomain(prefix).map_err(|e| format!("{value:?}: prefix part {e}"))?;
    }

    if name.is_empty() {
        return Err(format!("{value:?}: name part must be non-empty"));
    }
    if name.len() > QUALIFIED_NAME_MAX {
        return Err(format!(
            "{value:?}: name part must be no more than {QUALIFIED_NAME_MAX} characters"
        ));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Err(format!(
            "{value:?}: name part must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character"
        ));
    }
    Ok(())
}

/// Checks `value` is a valid label value
pub fn label_value(value: &str) -> Result<(), String> {
    if value.len() > LABEL_VALUE_MAX {
        return Err(format!(
            "{value:?} must be no more than {LABEL_VALUE_MAX} characters"
        ));
    }
    if !LABEL_VALUE.is_match(value) {
        return Err(format!(
            "{value:?} must be empty or consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn names_and_namespaces() {
        assert!(dns_subdomain("rook-ceph").is_ok());
        assert!(dns_subdomain("my-cluster.example").is_ok());
        assert!(dns_subdomain("Rook").is_err());
        assert!(dns_subdomain("-rook").is_err());
        assert!(dns_subdomain(&"a".repeat(254)).is_err());

        assert!(dns_label("rook-ceph").is_ok());
        assert!(dns_label("rook.ceph").is_err());
        assert!(dns_label(&"a".repeat(64)).is_err());
    }

    #[test]
    fn qualified_names() {
        assert!(qualified_name("app").is_ok());
        assert!(qualified_name("app.kubernetes.io/name").is_ok());
        assert!(qualified_name("rook.io/Managed_By").is_ok());
        assert!(qualified_name("/name").is_err());
        assert!(qualified_name("example.com/").is_err());
        assert!(qualified_name("Example.com/name").is_err());
        assert!(qualified_name("_app").is_err());
    }

    #[test]
    fn label_values() {
        assert!(label_value("").is_ok());
        assert!(label_value("rook-ceph_1.2").is_ok());
        assert!(label_value("rook-").is_err());
        assert!(label_value(&"v".repeat(64)).is_err());
    }

    #[test]
    fn map_validators_report_each_bad_entry() {
        let mut diags = Diagnostics::new();
        let labels = json!({ "app": "rook", "bad key": "x", "tier": "-bad" });

        Validator::LabelKeys.validate("metadata.labels", &labels, &mut diags);
        Validator::LabelValues.validate("metadata.labels", &labels, &mut diags);

        let paths: Vec<_> = diags.iter().filter_map(|d| d.attribute.clone()).collect();
        assert_eq!(paths, vec!["metadata.labels.bad key", "metadata.labels.tier"]);
    }

    #[test]
    fn annotation_size_limit() {
        let mut diags = Diagnostics::new();
        let annotations = json!({ "big": "x".repeat(ANNOTATIONS_MAX_BYTES) });

        Validator::AnnotationsSize.validate("metadata.annotations", &annotations, &mut diags);
        assert!(diags.has_error());
    }
}
