//! Registry of data sources and the state shared between them

use std::collections::BTreeMap;

use kube::Client;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

use crate::data_source::{self, DataSource, ReadResponse};
use crate::schema::Schema;
use crate::{Diagnostics, Error, ProviderConfig, Result};

/// State handed to every data source read
pub struct ProviderData {
    config: ProviderConfig,
    client: OnceCell<Client>,
}

impl ProviderData {
    /// Client is built from `config` on first use
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config: config.normalized(),
            client: OnceCell::new(),
        }
    }

    /// Uses an already built client
    #[must_use]
    pub fn with_client(config: ProviderConfig, client: Client) -> Self {
        Self {
            config: config.normalized(),
            client: OnceCell::new_with(Some(client)),
        }
    }

    /// Provider configuration
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Kubernetes client, built once
    ///
    /// # Errors
    /// Will return `Err` if the client cannot be configured
    pub async fn client(&self) -> Result<Client> {
        self.client
            .get_or_try_init(|| self.config.client())
            .await
            .cloned()
    }
}

/// Owns every data source, keyed by full type name
pub struct Provider {
    data: ProviderData,
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl Provider {
    /// Registers every data source under the configured type name prefix
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self::from_data(ProviderData::new(config))
    }

    /// Like [`Provider::new`] with an already built client
    #[must_use]
    pub fn with_client(config: ProviderConfig, client: Client) -> Self {
        Self::from_data(ProviderData::with_client(config, client))
    }

    fn from_data(data: ProviderData) -> Self {
        let prefix = data.config().type_name.clone();
        let data_sources = data_source::all()
            .into_iter()
            .map(|ds| (ds.type_name(&prefix), ds))
            .collect();

        Self { data, data_sources }
    }

    /// Type names of every registered data source, sorted
    pub fn data_source_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }

    /// Schema of one data source
    ///
    /// # Errors
    /// Will return `Err` if no data source is registered under `type_name`
    pub fn schema(&self, type_name: &str) -> Result<Schema> {
        self.data_source(type_name).map(|ds| ds.schema())
    }

    /// Reads one data source
    #[instrument(skip(self, config))]
    pub async fn read_data_source(&self, type_name: &str, config: Value) -> ReadResponse {
        let ds = match self.data_source(type_name) {
            Ok(ds) => ds,
            Err(err) => return ReadResponse::failed(Diagnostics::from(err)),
        };

        let response = ds.read(&self.data, config).await;
        info!(
            errors = response.diagnostics.has_error(),
            diagnostics = response.diagnostics.len(),
            "data source read"
        );
        response
    }

    fn data_source(&self, type_name: &str) -> Result<&dyn DataSource> {
        self.data_sources
            .get(type_name)
            .map(|ds| &**ds)
            .ok_or_else(|| Error::UnknownDataSource(type_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn names_use_the_configured_prefix() {
        let provider = Provider::new(ProviderConfig {
            type_name: "rook".to_string(),
            ..ProviderConfig::default()
        });

        let names: Vec<_> = provider.data_source_names().collect();
        assert_eq!(names.len(), 38);
        assert!(names.iter().all(|n| n.starts_with("rook_")));
        assert!(names.contains(&"rook_ceph_rook_io_ceph_block_pool_v1_manifest"));
    }

    #[test]
    fn unknown_schema_is_an_error() {
        let provider = Provider::new(ProviderConfig::default());
        assert!(matches!(
            provider.schema("k8s_ceph_rook_io_ceph_nothing_v1"),
            Err(Error::UnknownDataSource(_))
        ));
    }

    #[tokio::test]
    async fn unknown_read_is_a_diagnostic() {
        let provider = Provider::new(ProviderConfig::default());
        let response = provider.read_data_source("k8s_nothing", json!({})).await;

        assert!(response.state.is_none());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            "Unknown data source"
        );
    }
}
