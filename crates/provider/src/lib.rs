// Copyright 2026 Rook Provider Maintainers
// SPDX-License-Identifier: Apache-2.0

//! Data sources over the Rook Ceph custom resources

/// Generic Error for data source operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Kubernetes internal error
    #[error("Kube Error: {0}")]
    KubeError(#[from] kube::Error),

    /// Kubeconfig could not be loaded
    #[error("Kubeconfig Error: {0}")]
    KubeconfigError(#[from] kube::config::KubeconfigError),

    /// Client could not be built from a loaded configuration
    #[error("Client Error: {0}")]
    ClientError(#[source] kube::Error),

    /// Client configuration could not be inferred from the environment
    #[error("Infer Config Error: {0}")]
    InferConfigError(#[from] kube::config::InferConfigError),

    /// `serde` errors
    #[error("Serialization Error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// YAML rendering errors
    #[error("YAML Error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The requested data source type is not registered
    #[error("Unknown data source type: {0}")]
    UnknownDataSource(String),
}

/// Generic result type to be used by the data sources
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub mod config;
pub mod data_source;
mod diagnostics;
pub mod naming;
pub mod provider;
pub mod schema;
pub mod state;
pub mod telemetry;
pub mod validators;

pub use crate::config::ProviderConfig;
pub use crate::diagnostics::*;
pub use crate::provider::{Provider, ProviderData};
