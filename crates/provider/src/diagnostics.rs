use std::fmt;

use serde::Serialize;

use crate::Error;

/// Severity of a diagnostic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The operation failed
    Error,
    /// The operation succeeded but something deserves attention
    Warning,
}

/// A single problem reported back to the caller of a data source operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity of the problem
    pub severity: Severity,
    /// Short summary
    pub summary: String,
    /// Detailed explanation, usually the underlying error message
    pub detail: String,
    /// Dotted path of the attribute the problem relates to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{severity}: {}", self.summary)?;
        if let Some(attribute) = &self.attribute {
            write!(f, " (at {attribute})")?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered collection of diagnostics produced by one operation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Creates an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error not tied to a specific attribute
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.0.push(Diagnostic {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        });
    }

    /// Adds an error located at `attribute`
    pub fn add_attribute_error(
        &mut self,
        attribute: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.0.push(Diagnostic {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: Some(attribute.into()),
        });
    }

    /// Adds a warning not tied to a specific attribute
    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.0.push(Diagnostic {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        });
    }

    /// Moves every diagnostic of `other` into `self`
    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    /// Whether any error has been recorded
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of diagnostics
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the diagnostics in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Error> for Diagnostics {
    fn from(err: Error) -> Self {
        let summary = match &err {
            Error::KubeError(_) => "Kubernetes API error",
            Error::KubeconfigError(_) | Error::InferConfigError(_) | Error::ClientError(_) => {
                "Unable to configure Kubernetes client"
            }
            Error::SerializationError(_) | Error::YamlError(_) => "Serialization error",
            Error::UnknownDataSource(_) => "Unknown data source",
        };
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_error(summary, err.to_string());
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_alone_are_not_errors() {
        let mut diags = Diagnostics::new();
        diags.add_warning("Deprecated attribute", "rados is deprecated");
        assert!(!diags.has_error());

        diags.add_attribute_error("metadata.name", "Missing required attribute", "");
        assert!(diags.has_error());
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn display_includes_attribute_and_detail() {
        let mut diags = Diagnostics::new();
        diags.add_attribute_error("spec.mon.count", "Incorrect attribute type", "expected integer");

        let rendered = diags.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            rendered,
            vec!["error: Incorrect attribute type (at spec.mon.count): expected integer"]
        );
    }

    #[test]
    fn errors_convert_into_a_single_diagnostic() {
        let diags = Diagnostics::from(Error::UnknownDataSource("k8s_foo".into()));
        let diag = diags.iter().next().unwrap();

        assert_eq!(diag.summary, "Unknown data source");
        assert_eq!(diag.detail, "Unknown data source type: k8s_foo");
    }

    #[test]
    fn client_build_errors_are_configuration_errors() {
        let err = Error::ClientError(kube::Error::LinesCodecMaxLineLengthExceeded);
        let diags = Diagnostics::from(err);

        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Unable to configure Kubernetes client");
        assert!(diag.detail.starts_with("Client Error: "), "{}", diag.detail);
    }
}
